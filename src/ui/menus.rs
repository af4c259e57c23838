use super::logo::Logo;
use super::{band, region_rect, render_centered};
use crate::consts;
use crate::game::{FrontPage, GameMode, Menu, Snapshot};
use crate::util::EnumExt;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Widget,
};

/// A clickable, labelled rectangle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Button<'a> {
    label: &'a str,
    hovered: bool,
    selected: bool,
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = consts::BUTTON_STYLE;
        if self.selected {
            style = style.patch(consts::MENU_SELECTION_STYLE);
        }
        if self.hovered {
            style = style.patch(consts::HOVER_STYLE);
        }
        buf.set_style(area, style);
        let label = if self.selected {
            format!("» {} «", self.label)
        } else {
            self.label.to_owned()
        };
        let label_area = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: 1,
            ..area
        }
        .intersection(area);
        Line::styled(label, style)
            .centered()
            .render(label_area, buf);
    }
}

fn key_hint<'a>(spans: impl IntoIterator<Item = (&'a str, bool)>) -> Line<'a> {
    Line::from_iter(spans.into_iter().map(|(text, is_key)| {
        if is_key {
            Span::styled(text, consts::KEY_STYLE)
        } else {
            Span::raw(text)
        }
    }))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct FrontPageScreen<'a>(pub(super) &'a FrontPage);

impl Widget for FrontPageScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(band(area, 120, Logo::HEIGHT));
        Logo.render(logo_area, buf);
        render_centered(Line::from("Hunt. Grow. Survive.").italic(), area, 260, buf);
        Button {
            label: "START GAME",
            hovered: self.0.start_hovered(),
            selected: false,
        }
        .render(region_rect(area, consts::START_BUTTON), buf);
        Button {
            label: "EXIT GAME",
            hovered: self.0.exit_hovered(),
            selected: false,
        }
        .render(region_rect(area, consts::EXIT_BUTTON), buf);
        render_centered(
            key_hint([
                ("or use ", false),
                ("ENTER", true),
                (" / ", false),
                ("ESC", true),
                (" keys", false),
            ]),
            area,
            560,
            buf,
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct MenuScreen<'a>(pub(super) &'a Menu);

impl Widget for MenuScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_centered(Line::from("SELECT GAME MODE").bold(), area, 80, buf);
        render_centered(
            Line::from(self.0.highlighted().description()),
            area,
            160,
            buf,
        );
        for mode in GameMode::iter() {
            Button {
                label: mode.label(),
                hovered: self.0.hovered(mode),
                selected: self.0.highlighted() == mode,
            }
            .render(region_rect(area, Menu::button(mode)), buf);
        }
        render_centered(
            Line::from("Click on a mode to start playing").dim(),
            area,
            560,
            buf,
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct GameOverScreen<'a>(pub(super) &'a Snapshot<'a>);

impl Widget for GameOverScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.0;
        render_centered(
            Line::styled("GAME OVER", consts::GAME_OVER_STYLE),
            area,
            160,
            buf,
        );
        render_centered(
            Line::from(format!("Final Score: {}", snap.score)),
            area,
            240,
            buf,
        );
        let detail = match (snap.mode, snap.time_left) {
            (GameMode::TimeAttack, Some(left)) => Some(format!(
                "Time: {:.1} seconds",
                consts::TIME_ATTACK_DURATION - left.max(0.0)
            )),
            (GameMode::Challenge, _) => Some(String::from("Challenge Mode Completed!")),
            _ => None,
        };
        if let Some(detail) = detail {
            render_centered(Line::from(detail), area, 280, buf);
        }
        render_centered(
            key_hint([
                ("Press ", false),
                ("ENTER", true),
                (" or ", false),
                ("SPACE", true),
                (" to return to menu", false),
            ]),
            area,
            400,
            buf,
        );
    }
}
