use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use enum_map::Enum;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    P,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::SHIFT, KeyCode::Char('W' | 'K')) => Some(Command::Up),
            (KeyModifiers::SHIFT, KeyCode::Char('S' | 'J')) => Some(Command::Down),
            (KeyModifiers::SHIFT, KeyCode::Char('A' | 'H')) => Some(Command::Left),
            (KeyModifiers::SHIFT, KeyCode::Char('D' | 'L')) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (KeyModifiers::NONE, KeyCode::Char('p')) | (KeyModifiers::SHIFT, KeyCode::Char('P')) => {
                Some(Command::P)
            }
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::SHIFT, KeyCode::Char('Q')) => {
                Some(Command::Q)
            }
            _ => None,
        }
    }
}
