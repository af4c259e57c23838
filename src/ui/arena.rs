use super::{band, mode_style, render_centered, Canvas};
use crate::consts;
use crate::game::{Countdown, Direction, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct CountdownScreen<'a>(pub(super) &'a Countdown);

impl Widget for CountdownScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let countdown = self.0;
        let mode = countdown.mode();
        render_centered(
            Line::styled(mode.banner(), mode_style(mode)),
            area,
            160,
            buf,
        );
        render_centered(Line::from("Get Ready!"), area, 240, buf);
        let remaining = countdown.remaining();
        let count = if remaining > 0.0 {
            remaining.ceil().to_string()
        } else {
            String::from("GO!")
        };
        render_centered(Line::from(count).bold(), area, 300, buf);
    }
}

/// The game screen: a navigation bar with the score and timers above the
/// arena
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct PlayScreen<'a>(pub(super) &'a Snapshot<'a>);

impl PlayScreen<'_> {
    fn render_nav_bar(&self, area: Rect, buf: &mut Buffer) {
        let snap = self.0;
        let nav_rows = u16::try_from(snap.arena.nav_bar / snap.arena.grid).unwrap_or_default();
        buf.set_style(band(area, 0, nav_rows), consts::NAV_BAR_STYLE);
        let info = band(area, snap.arena.grid, 1);
        Line::from(format!(" Score: {}", snap.score)).render(info, buf);
        Line::styled(snap.mode.label(), mode_style(snap.mode))
            .centered()
            .render(info, buf);
        let timer = if let Some(left) = snap.time_left {
            Some(format!("Time: {:.1} ", left.max(0.0)))
        } else {
            snap.next_wall.map(|t| format!("Next Wall: {t:.1}s "))
        };
        if let Some(timer) = timer {
            Line::from(timer).right_aligned().render(info, buf);
        }
        render_centered(
            Line::from_iter([
                Span::styled("P", consts::KEY_STYLE),
                Span::raw(": Pause | "),
                Span::styled("Q", consts::KEY_STYLE),
                Span::raw(": Menu | "),
                Span::styled("ESC", consts::KEY_STYLE),
                Span::raw(": Quit Game"),
            ]),
            area,
            snap.arena.grid * 2,
            buf,
        );
    }

    fn render_arena(&self, area: Rect, buf: &mut Buffer) {
        let snap = self.0;
        let grid = snap.arena.grid;
        let mut canvas = Canvas { area, grid, buf };
        canvas.draw_cell(snap.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        if let Some(golden) = snap.golden {
            canvas.draw_cell(
                golden,
                consts::GOLDEN_FRUIT_SYMBOL,
                consts::GOLDEN_FRUIT_STYLE,
            );
        }
        if let Some(wall) = snap.wall {
            for p in wall.cells(grid) {
                canvas.draw_cell(p, consts::PHANTOM_WALL_SYMBOL, consts::PHANTOM_WALL_STYLE);
            }
            if wall.countdown > 0 {
                canvas.draw_cell(
                    wall.midpoint(),
                    &format!("{:<2}", wall.countdown),
                    consts::PHANTOM_WALL_STYLE.bold(),
                );
            }
        }
        let style = mode_style(snap.mode);
        if let Some((&head, body)) = snap.snake.split_first() {
            for &p in body {
                canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, style);
            }
            let head_symbol = match snap.heading {
                Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
                Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
                Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
                Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
            };
            canvas.draw_cell(head, head_symbol, style);
        }
    }
}

impl Widget for PlayScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_arena(area, buf);
        self.render_nav_bar(area, buf);
        if self.0.paused {
            let popup = center_rect(area, Size::new(24, 4));
            Clear.render(popup, buf);
            let block = Block::bordered().title(Line::from(" PAUSED ").centered());
            let inner = block.inner(popup);
            block.render(popup, buf);
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("P", consts::KEY_STYLE),
                Span::raw(" to resume"),
            ])
            .centered()
            .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::game::geometry::Point;
    use crate::game::phantom::PhantomWall;
    use crate::game::FrameTime;
    use crate::input::FrameInput;
    use crate::ui::tests::{row, session_in, text_at, DISPLAY};
    use pretty_assertions::assert_eq;

    #[test]
    fn countdown() {
        let session = session_in(&[Command::Enter, Command::Up, Command::Enter], 0.5);
        let mut buf = Buffer::empty(DISPLAY);
        (&session.snapshot()).render(DISPLAY, &mut buf);
        assert_eq!(row(&buf, 8).trim(), "INFINITE PLAY");
        assert_eq!(row(&buf, 12).trim(), "Get Ready!");
        assert_eq!(row(&buf, 15).trim(), "3");
    }

    #[test]
    fn classic_play() {
        let session = session_in(&[Command::Enter, Command::Enter], 3.5);
        let mut snap = session.snapshot();
        snap.food = Point::new(100, 200);
        let mut buf = Buffer::empty(DISPLAY);
        (&snap).render(DISPLAY, &mut buf);
        let info = row(&buf, 1);
        assert!(info.starts_with(" Score: 0 "));
        assert_eq!(info.trim_start_matches(" Score: 0").trim(), "Classic Mode");
        assert_eq!(row(&buf, 2).trim(), "P: Pause | Q: Menu | ESC: Quit Game");
        assert_eq!(text_at(&buf, 10, 10, 4), "()  ");
        assert_eq!(row(&buf, 17).trim(), "██▶▶");
        assert_eq!(buf[(38, 17)].fg, consts::CLASSIC_STYLE.fg.unwrap_or_default());
    }

    #[test]
    fn time_attack_timer() {
        let session = session_in(&[Command::Enter, Command::Down, Command::Enter], 3.5);
        let snap = session.snapshot();
        let mut buf = Buffer::empty(DISPLAY);
        (&snap).render(DISPLAY, &mut buf);
        assert!(row(&buf, 1).ends_with("Time: 60.0 "));
    }

    #[test]
    fn challenge_wall() {
        let session = session_in(&[Command::Enter, Command::Up, Command::Up, Command::Enter], 3.5);
        let mut snap = session.snapshot();
        assert_eq!(snap.next_wall, Some(5.0));
        let mut buf = Buffer::empty(DISPLAY);
        (&snap).render(DISPLAY, &mut buf);
        assert!(row(&buf, 1).ends_with("Next Wall: 5.0s "));

        let wall = PhantomWall {
            start: Point::new(100, 200),
            end: Point::new(100, 260),
            timer: 2.5,
            countdown: 3,
        };
        snap.wall = Some(&wall);
        snap.next_wall = None;
        snap.food = Point::new(620, 500);
        snap.golden = Some(Point::new(600, 500));
        let mut buf = Buffer::empty(DISPLAY);
        (&snap).render(DISPLAY, &mut buf);
        assert!(row(&buf, 1).trim_end().ends_with("Challenge Mode"));
        assert_eq!(text_at(&buf, 10, 10, 2), "░░");
        assert_eq!(text_at(&buf, 10, 11, 2), "3 ");
        assert_eq!(text_at(&buf, 10, 12, 2), "░░");
        assert_eq!(text_at(&buf, 10, 13, 2), "░░");
        assert_eq!(text_at(&buf, 10, 14, 2), "  ");
        assert_eq!(text_at(&buf, 60, 25, 4), "<>()");
    }

    #[test]
    fn paused() {
        let mut session = session_in(&[Command::Enter, Command::Enter], 3.5);
        let mut input = FrameInput::default();
        input.press(Command::P);
        assert_eq!(session.frame(&input, FrameTime::default()), None);
        let snap = session.snapshot();
        assert!(snap.paused);
        let mut buf = Buffer::empty(DISPLAY);
        (&snap).render(DISPLAY, &mut buf);
        assert!(row(&buf, 13).contains(" PAUSED "));
        assert_eq!(text_at(&buf, 28, 14, 1), "│");
        assert!(row(&buf, 14).contains("Press P to resume"));
        assert_eq!(text_at(&buf, 51, 16, 1), "┘");
    }
}
