use super::clock::{FrameTime, StepClock};
use super::direction::Direction;
use super::food::Fruits;
use super::geometry::Arena;
use super::mode::{Boundary, GameMode};
use super::phantom::WallSchedule;
use super::snake::Snake;
use crate::consts;
use log::debug;
use rand::Rng;

/// Everything that makes up a single run of the game: the snake, what it can
/// eat, what can kill it, and the timers that govern them
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Simulation<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) arena: Arena,
    pub(super) mode: GameMode,
    pub(super) snake: Snake,
    pub(super) fruits: Fruits,
    pub(super) walls: WallSchedule,

    /// Milliseconds between steps
    pub(super) speed: u32,

    /// Seconds remaining in a timed run
    pub(super) time_left: Option<f32>,

    pub(super) paused: bool,

    /// `false` once the snake has crashed or time has run out
    pub(super) running: bool,

    pub(super) clock: StepClock,
}

impl<R: Rng> Simulation<R> {
    pub(crate) fn new(arena: Arena, mut rng: R) -> Simulation<R> {
        let mode = GameMode::default();
        let fruits = Fruits::new(arena, mode.rules().hazards, &mut rng);
        Simulation {
            rng,
            arena,
            mode,
            snake: Snake::new(arena.spawn_point(), Direction::East, arena.grid),
            fruits,
            walls: WallSchedule::default(),
            speed: consts::BASE_SPEED,
            time_left: mode.rules().time_limit,
            paused: false,
            running: true,
            clock: StepClock::default(),
        }
    }

    /// Start a fresh run in the given mode
    pub(crate) fn reset(&mut self, mode: GameMode) {
        let rules = mode.rules();
        self.mode = mode;
        self.snake = Snake::new(self.arena.spawn_point(), Direction::East, self.arena.grid);
        self.fruits.respawn(self.arena, rules.hazards, &mut self.rng);
        self.walls = WallSchedule::default();
        self.speed = consts::BASE_SPEED;
        self.time_left = rules.time_limit;
        self.paused = false;
        self.running = true;
    }

    /// Advance the run's timers by one frame and, if a step is due, move the
    /// snake
    pub(crate) fn update(&mut self, time: FrameTime) {
        let rules = self.mode.rules();
        if !self.paused {
            if let Some(left) = self.time_left.as_mut() {
                *left -= time.delta;
                if *left <= 0.0 {
                    debug!("Out of time");
                    self.running = false;
                }
            }
            if rules.hazards {
                self.walls.update(
                    time.delta,
                    self.arena,
                    self.snake.head(),
                    self.fruits.food,
                    self.snake.len(),
                );
            }
        }
        if self.clock.due(time.now, self.speed) && !self.paused {
            self.step();
        }
    }

    /// Move the snake one cell and resolve whatever it runs into
    pub(crate) fn step(&mut self) {
        let rules = self.mode.rules();
        let grid = self.arena.grid;
        let mut head = self.snake.next_head(grid);
        let mut crashed = false;
        match rules.boundary {
            Boundary::Wrap => head = self.arena.wrap(head),
            Boundary::Lethal => crashed |= !self.arena.contains(head),
        }
        if rules.hazards && self.walls.blocks(head, grid) {
            crashed = true;
        }
        if rules.self_collision_lethal(self.snake.len()) && self.snake.overlaps_body(head) {
            crashed = true;
        }
        if crashed {
            debug!("Snake crashed at {head:?}");
            self.running = false;
            if !rules.endless {
                return;
            }
        }
        self.snake.advance_to(head);
        if head == self.fruits.food {
            debug!("Ate food at {head:?}");
            self.snake.grow(1);
            self.fruits.respawn(self.arena, rules.hazards, &mut self.rng);
            if self.speed > consts::FOOD_SPEED_FLOOR {
                self.speed = self
                    .speed
                    .saturating_sub(rules.food_speedup)
                    .max(consts::FOOD_SPEED_FLOOR);
            }
        }
        if rules.hazards && self.fruits.take_golden(head) {
            debug!("Ate golden fruit at {head:?}");
            // All or nothing: no growth once three more segments won't fit
            if self.snake.len() + consts::GOLDEN_GROWTH < consts::SNAKE_MAX_LENGTH {
                self.snake.grow(consts::GOLDEN_GROWTH);
            }
            if self.speed > consts::GOLDEN_SPEED_FLOOR {
                self.speed = self
                    .speed
                    .saturating_sub(consts::GOLDEN_SPEEDUP)
                    .max(consts::GOLDEN_SPEED_FLOOR);
            }
        }
    }
}

impl<R> Simulation<R> {
    pub(crate) fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Request a change of heading; ignored while paused
    pub(crate) fn turn(&mut self, direction: Direction) {
        if !self.paused {
            let _ = self.snake.turn(direction);
        }
    }

    /// Whether the run is over and should give way to the game-over screen
    pub(crate) fn ended(&self) -> bool {
        !self.running && !self.mode.rules().endless
    }

    pub(crate) fn mode(&self) -> GameMode {
        self.mode
    }

    pub(crate) fn score(&self) -> usize {
        self.snake.len().saturating_sub(consts::INITIAL_SNAKE_LENGTH)
    }
}
