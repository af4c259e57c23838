mod clock;
mod direction;
mod food;
pub(crate) mod geometry;
mod mode;
pub(crate) mod phantom;
mod sim;
mod snake;
mod snapshot;
mod state;
pub(crate) use self::clock::FrameTime;
pub(crate) use self::direction::Direction;
pub(crate) use self::mode::GameMode;
pub(crate) use self::snapshot::Snapshot;
pub(crate) use self::state::{Countdown, FrontPage, Menu, State};
use self::sim::Simulation;
use self::state::{Phase, Transition};
use crate::consts;
use crate::input::FrameInput;
use log::info;
use rand::Rng;

/// What the application loop should do after a frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Quit,
}

/// The whole game: the current screen plus the run it plays out on
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    sim: Simulation<R>,
    state: State,
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(rng: R) -> Session<R> {
        Session {
            sim: Simulation::new(consts::ARENA, rng),
            state: State::default(),
        }
    }

    /// Run one frame: handle this frame's input, then, unless that changed
    /// the screen, advance the current screen by `time`
    pub(crate) fn frame(&mut self, input: &FrameInput, time: FrameTime) -> Option<Outcome> {
        let transition = match self.state.handle_input(&mut self.sim, input) {
            Some(t) => t,
            None => self.state.update(&mut self.sim, time)?,
        };
        match transition {
            Transition::To(state) => {
                info!("Switching from {} to {}", self.state.name(), state.name());
                self.state = state;
                None
            }
            Transition::Quit => {
                info!("Quitting from {}", self.state.name());
                Some(Outcome::Quit)
            }
        }
    }
}

impl<R> Session<R> {
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(&self.sim, self.state)
    }
}
