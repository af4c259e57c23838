use crate::command::Command;
use crate::config::FrameRate;
use crate::game::{FrameTime, Outcome, Session};
use crate::input::FrameInput;
use crate::ui::pixel_at;
use crate::util::get_display_area;
use crossterm::event::{poll, read, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::info;
use rand::Rng;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives a [`Session`] at a fixed frame rate, feeding it the terminal
/// events that arrive during each frame
#[derive(Debug)]
pub(crate) struct App<R> {
    session: Session<R>,
    frame_period: Duration,
    input: FrameInput,

    /// Where the game was drawn on the last frame, for mapping mouse events
    /// to pixels
    display: Rect,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(session: Session<R>, frame_rate: FrameRate) -> App<R> {
        App {
            session,
            frame_period: frame_rate.period(),
            input: FrameInput::default(),
            display: Rect::default(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let start = Instant::now();
        let mut last_frame = start;
        loop {
            terminal.draw(|frame| {
                self.display = get_display_area(frame.area());
                frame.render_widget(&self.session.snapshot(), frame.area());
            })?;
            if !self.gather_input(last_frame + self.frame_period)? {
                info!("Interrupted");
                return Ok(());
            }
            let now = Instant::now();
            let time = FrameTime {
                delta: now.duration_since(last_frame).as_secs_f32(),
                now: now.duration_since(start).as_secs_f64(),
            };
            last_frame = now;
            if self.session.frame(&self.input, time) == Some(Outcome::Quit) {
                return Ok(());
            }
            self.input.next_frame();
        }
    }

    /// Collect terminal events into `self.input` until `deadline`.  Returns
    /// `false` if the user interrupted the program.
    fn gather_input(&mut self, deadline: Instant) -> io::Result<bool> {
        loop {
            if !poll(deadline.saturating_duration_since(Instant::now()))? {
                return Ok(true);
            }
            match read()? {
                Event::Key(ev) => match Command::from_key_event(ev) {
                    Some(Command::Quit) => return Ok(false),
                    Some(cmd) if ev.kind == KeyEventKind::Press => self.input.press(cmd),
                    Some(cmd) if ev.kind == KeyEventKind::Repeat => self.input.hold(cmd),
                    _ => (),
                },
                Event::Mouse(ev) => {
                    let p = pixel_at(self.display, ev.column, ev.row);
                    match ev.kind {
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                            self.input.move_pointer(p);
                        }
                        MouseEventKind::Up(MouseButton::Left) => self.input.click(p),
                        _ => (),
                    }
                }
                _ => (),
            }
        }
    }
}
