use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Offset, Rect},
    text::Text,
    widgets::Widget,
};

/// The "SNAKESCAPE" title shown on the front page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const SNAKE_WIDTH: u16 = 36;
    const SCAPE_WIDTH: u16 = 37;
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const WIDTH: u16 = Self::SNAKE_WIDTH + Self::SCAPE_WIDTH;
}

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____   _   _     _     _  __ _____ ",
    r"/ ___| | \ | |   / \   | |/ /| ____|",
    r"\___ \ |  \| |  / _ \  | ' / |  _|  ",
    r" ___) || |\  | / ___ \ | . \ | |___ ",
    r"|____/ |_| \_|/_/   \_\|_|\_\|_____|",
];

#[rustfmt::skip]
static SCAPE: &[&str] = &[
     " ____    ____     _     ____   _____ ",
    r"/ ___|  / ___|   / \   |  _ \ | ____|",
    r"\___ \ | |      / _ \  | |_) ||  _|  ",
    r" ___) || |___  / ___ \ |  __/ | |___ ",
    r"|____/  \____|/_/   \_\|_|    |_____|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snake_area = Rect {
            width: Self::SNAKE_WIDTH,
            ..area
        }
        .intersection(area);
        Text::from_iter(SNAKE.iter().copied())
            .style(consts::CLASSIC_STYLE)
            .render(snake_area, buf);
        let scape_area = area
            .offset(Offset {
                x: Self::SNAKE_WIDTH.into(),
                y: 0,
            })
            .intersection(area);
        Text::from_iter(SCAPE.iter().copied())
            .style(consts::FOOD_STYLE)
            .render(scape_area, buf);
    }
}
