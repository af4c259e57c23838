use super::direction::Direction;
use super::geometry::{Arena, Point};
use super::mode::GameMode;
use super::phantom::PhantomWall;
use super::sim::Simulation;
use super::state::State;

/// A read-only view of everything the renderer needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) state: State,
    pub(crate) arena: Arena,
    pub(crate) mode: GameMode,

    /// Snake segments, head first
    pub(crate) snake: &'a [Point],
    /// Direction of the snake's last step
    pub(crate) heading: Direction,
    pub(crate) food: Point,
    pub(crate) golden: Option<Point>,
    pub(crate) wall: Option<&'a PhantomWall>,

    /// Seconds until the next phantom wall, in modes that have them
    pub(crate) next_wall: Option<f32>,
    pub(crate) time_left: Option<f32>,
    pub(crate) paused: bool,
    pub(crate) score: usize,
}

impl<'a> Snapshot<'a> {
    pub(super) fn capture<R>(sim: &'a Simulation<R>, state: State) -> Snapshot<'a> {
        let hazards = sim.mode.rules().hazards;
        Snapshot {
            state,
            arena: sim.arena,
            mode: sim.mode,
            snake: sim.snake.segments(),
            heading: sim.snake.moved(),
            food: sim.fruits.food,
            golden: sim.fruits.golden.filter(|_| hazards),
            wall: sim.walls.wall.as_ref().filter(|_| hazards),
            next_wall: sim.walls.time_to_next().filter(|_| hazards),
            time_left: sim.time_left,
            paused: sim.paused,
            score: sim.score(),
        }
    }
}
