//! Terminal rendering of a [`Snapshot`].
//!
//! The game works in screen pixels.  On the terminal, each grid cell becomes
//! [`consts::CELL_COLUMNS`] columns by one row, so a pixel `(x, y)` lands in
//! column `x / 10` and row `y / 20` of the display area.
mod arena;
mod logo;
mod menus;
use self::arena::{CountdownScreen, PlayScreen};
use self::menus::{FrontPageScreen, GameOverScreen, MenuScreen};
use crate::consts;
use crate::game::geometry::{Point, Region};
use crate::game::{GameMode, Snapshot, State};
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};

/// Horizontal pixels per terminal column
const COLUMN_PIXELS: i32 = 10;

/// Vertical pixels per terminal row
const ROW_PIXELS: i32 = 20;

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        match self.state {
            State::FrontPage(ref page) => FrontPageScreen(page).render(display, buf),
            State::Menu(ref menu) => MenuScreen(menu).render(display, buf),
            State::Countdown(ref countdown) => CountdownScreen(countdown).render(display, buf),
            State::Play(_) => PlayScreen(self).render(display, buf),
            State::GameOver(_) => GameOverScreen(self).render(display, buf),
        }
    }
}

/// Map a terminal cell to the pixel at its center, relative to the display
/// area.  Returns `None` for cells outside the display.
pub(crate) fn pixel_at(display: Rect, column: u16, row: u16) -> Option<Point> {
    if !display.contains(Position::new(column, row)) {
        return None;
    }
    let x = i32::from(column - display.x) * COLUMN_PIXELS + COLUMN_PIXELS / 2;
    let y = i32::from(row - display.y) * ROW_PIXELS + ROW_PIXELS / 2;
    Some(Point::new(x, y))
}

/// The terminal cells whose centers lie inside `region`, so that drawing a
/// button over this area matches what [`pixel_at()`] reports as clicks on it
fn region_rect(display: Rect, region: Region) -> Rect {
    let first_col = (region.x - COLUMN_PIXELS / 2 + COLUMN_PIXELS - 1).div_euclid(COLUMN_PIXELS);
    let last_col = (region.x + region.width - 1 - COLUMN_PIXELS / 2).div_euclid(COLUMN_PIXELS);
    let first_row = (region.y - ROW_PIXELS / 2 + ROW_PIXELS - 1).div_euclid(ROW_PIXELS);
    let last_row = (region.y + region.height - 1 - ROW_PIXELS / 2).div_euclid(ROW_PIXELS);
    let rect = Rect {
        x: display.x.saturating_add(to_u16(first_col)),
        y: display.y.saturating_add(to_u16(first_row)),
        width: to_u16(last_col - first_col + 1),
        height: to_u16(last_row - first_row + 1),
    };
    rect.intersection(display)
}

fn to_u16(n: i32) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}

/// The full-width strip of `height` display rows starting at pixel height
/// `y`
fn band(display: Rect, y: i32, height: u16) -> Rect {
    Rect {
        y: display.y.saturating_add(to_u16(y / ROW_PIXELS)),
        height,
        ..display
    }
    .intersection(display)
}

fn render_centered(line: Line<'_>, display: Rect, y: i32, buf: &mut Buffer) {
    line.centered().render(band(display, y, 1), buf);
}

fn mode_style(mode: GameMode) -> Style {
    match mode {
        GameMode::Classic => consts::CLASSIC_STYLE,
        GameMode::TimeAttack => consts::TIME_ATTACK_STYLE,
        GameMode::Challenge | GameMode::Infinite => consts::CHALLENGE_STYLE,
    }
}

/// Draws glyphs on grid cells given in pixel coordinates
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: i32,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, p: Point, symbol: &str, style: Style) {
        let Ok(col) = u16::try_from(p.x / self.grid) else {
            return;
        };
        let Ok(row) = u16::try_from(p.y / self.grid) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        let Some(x0) = col
            .checked_mul(consts::CELL_COLUMNS)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        for (x, ch) in (x0..).zip(symbol.chars()) {
            if !self.area.contains(Position::new(x, y)) {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
