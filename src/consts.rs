//! Assorted constants & hard-coded configuration
use crate::game::geometry::{Arena, Region};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// The playing field, in pixels: an 800×600 screen divided into 20-pixel
/// cells, with the top 80 pixels reserved for the navigation bar
pub(crate) const ARENA: Arena = Arena {
    width: 800,
    height: 600,
    grid: 20,
    nav_bar: 80,
};

/// Maximum number of segments the snake can ever have
pub(crate) const SNAKE_MAX_LENGTH: usize = 100;

/// Number of segments in a freshly-reset snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 2;

/// Milliseconds between snake steps at the start of a run
pub(crate) const BASE_SPEED: u32 = 100;

/// Eating food never speeds the snake up past this many milliseconds per
/// step
pub(crate) const FOOD_SPEED_FLOOR: u32 = 40;

/// Eating golden fruit never speeds the snake up past this many milliseconds
/// per step
pub(crate) const GOLDEN_SPEED_FLOOR: u32 = 30;

/// Milliseconds shaved off the step interval by a golden fruit
pub(crate) const GOLDEN_SPEEDUP: u32 = 10;

/// Segments gained by eating a golden fruit
pub(crate) const GOLDEN_GROWTH: usize = 3;

/// Probability that a golden fruit accompanies each food spawn in Challenge
/// mode
pub(crate) const GOLDEN_FRUIT_PROBABILITY: f64 = 0.2;

/// Seconds on the clock at the start of a Time Attack run
pub(crate) const TIME_ATTACK_DURATION: f32 = 60.0;

/// Seconds between the expiry of one phantom wall and the next one appearing
pub(crate) const PHANTOM_WALL_INTERVAL: f32 = 5.0;

/// Seconds a phantom wall stays up
pub(crate) const PHANTOM_WALL_DURATION: f32 = 3.0;

/// Value of the phantom wall's on-screen countdown when it appears
pub(crate) const PHANTOM_WALL_COUNTDOWN: u8 = 3;

/// Phantom wall length in cells is `4 + snake_len / 3`, capped at this
pub(crate) const PHANTOM_WALL_MAX_CELLS: usize = 12;

/// Length of the pre-game countdown in seconds
pub(crate) const COUNTDOWN_DURATION: f32 = 3.0;

/// Frames per second when the configuration doesn't say otherwise
pub(crate) const DEFAULT_FRAME_RATE: u32 = 60;

/// Terminal columns used to draw one grid cell
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: one row per grid cell and [`CELL_COLUMNS`] columns per
/// grid cell.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 30,
};

/// START GAME button on the front page
pub(crate) const START_BUTTON: Region = Region::new(210, 480, 180, 45);

/// EXIT GAME button on the front page
pub(crate) const EXIT_BUTTON: Region = Region::new(410, 480, 180, 45);

/// Glyphs for the snake's head, by direction of travel
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: &str = "▲▲";
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: &str = "▼▼";
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: &str = "▶▶";
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: &str = "◀◀";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for the golden fruit
pub(crate) const GOLDEN_FRUIT_SYMBOL: &str = "<>";

/// Glyph for the cells covered by a phantom wall
pub(crate) const PHANTOM_WALL_SYMBOL: &str = "░░";

/// Style for the snake in Classic mode
pub(crate) const CLASSIC_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the snake in Time Attack mode
pub(crate) const TIME_ATTACK_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the snake in Challenge & Infinite modes
pub(crate) const CHALLENGE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for the golden fruit
pub(crate) const GOLDEN_FRUIT_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Style for phantom walls
pub(crate) const PHANTOM_WALL_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the navigation bar at the top of the game screen
pub(crate) const NAV_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for clickable buttons
pub(crate) const BUTTON_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for a button under the mouse pointer
pub(crate) const HOVER_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
