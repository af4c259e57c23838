//! Phantom walls: short-lived obstacles that appear in Challenge mode across
//! the snake's path to its food
use super::geometry::{Arena, Point};
use crate::consts;
use log::debug;

/// An active phantom wall
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PhantomWall {
    pub(crate) start: Point,
    pub(crate) end: Point,

    /// Seconds until the wall disappears
    pub(crate) timer: f32,

    /// Whole seconds remaining, for display; counts down from
    /// [`PHANTOM_WALL_COUNTDOWN`][consts::PHANTOM_WALL_COUNTDOWN]
    pub(crate) countdown: u8,
}

impl PhantomWall {
    /// Build a wall perpendicular to the line from `head` to `food`, centered
    /// a third of the way along it, with a length that grows with
    /// `snake_len`.  Returns `None` if the head is less than one cell from
    /// the food.
    ///
    /// `4 + snake_len / 3` cells (at most 12) is the wall's full end-to-end
    /// length, split evenly on either side of the midpoint.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn generate(
        arena: Arena,
        head: Point,
        food: Point,
        snake_len: usize,
    ) -> Option<PhantomWall> {
        let grid = arena.grid as f32;
        let dx = (food.x - head.x) as f32;
        let dy = (food.y - head.y) as f32;
        let distance = dx.hypot(dy);
        if distance < grid {
            return None;
        }
        let (ndx, ndy) = (dx / distance, dy / distance);
        let mid_x = ((head.x as f32 + dx * 0.33) / grid).round() * grid;
        let mid_y = ((head.y as f32 + dy * 0.33) / grid).round() * grid;
        let (perp_x, perp_y) = (-ndy, ndx);
        let cells = (4 + snake_len / 3).min(consts::PHANTOM_WALL_MAX_CELLS) as f32;
        let half = cells * grid / 2.0;
        let start = Point::new(
            (mid_x + perp_x * half) as i32,
            (mid_y + perp_y * half) as i32,
        );
        let end = Point::new(
            (mid_x - perp_x * half) as i32,
            (mid_y - perp_y * half) as i32,
        );
        Some(PhantomWall {
            start: arena.clamp(start),
            end: arena.clamp(end),
            timer: consts::PHANTOM_WALL_DURATION,
            countdown: consts::PHANTOM_WALL_COUNTDOWN,
        })
    }

    /// Run down the wall's timer by `dt` seconds.  Returns `false` once the
    /// wall has expired.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn tick(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        let whole = self.timer.ceil() as i32;
        if let Ok(n) = u8::try_from(whole) {
            if n <= consts::PHANTOM_WALL_COUNTDOWN {
                self.countdown = n;
            }
        }
        self.timer > 0.0
    }

    /// Test whether `p` lies in the wall's corridor.
    ///
    /// The corridor runs along the wall's longer axis between the endpoints.
    /// At each position along that axis, the wall's coordinate on the other
    /// axis is linearly interpolated between the endpoints, and `p` is inside
    /// if it is within one grid cell of it.  The bounding box is extended by
    /// one cell on the thin axis so that the cells the wall is drawn in are
    /// covered.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn contains(&self, p: Point, grid: i32) -> bool {
        let (start, end) = (self.start, self.end);
        let min_x = start.x.min(end.x);
        let max_x = start.x.max(end.x);
        let min_y = start.y.min(end.y);
        let max_y = start.y.max(end.y);
        let cell = grid as f32;
        if max_y - min_y >= max_x - min_x {
            if (min_x..=max_x + grid).contains(&p.x) && (min_y..=max_y).contains(&p.y) {
                let t = interpolation(p.y - start.y, end.y - start.y);
                let x = start.x as f32 + t * (end.x - start.x) as f32;
                let px = p.x as f32;
                return x - cell <= px && px <= x + cell;
            }
        } else if (min_y..=max_y + grid).contains(&p.y) && (min_x..=max_x).contains(&p.x) {
            let t = interpolation(p.x - start.x, end.x - start.x);
            let y = start.y as f32 + t * (end.y - start.y) as f32;
            let py = p.y as f32;
            return y - cell <= py && py <= y + cell;
        }
        false
    }

    /// The grid cells the wall is drawn across, from `start` to `end`
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn cells(&self, grid: i32) -> impl Iterator<Item = Point> {
        let (start, end) = (self.start, self.end);
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let steps = (dx.abs().max(dy.abs()) / grid).max(1);
        let snap = move |v: f32| ((v / grid as f32).round() as i32) * grid;
        (0..=steps).map(move |i| {
            let t = i as f32 / steps as f32;
            Point::new(
                snap(start.x as f32 + t * dx as f32),
                snap(start.y as f32 + t * dy as f32),
            )
        })
    }

    /// The point halfway between the endpoints
    pub(crate) fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2,
            (self.start.y + self.end.y) / 2,
        )
    }
}

/// Fraction of the way along an axis of length `span` that an offset of
/// `offset` lies.  A zero-length span yields 0.
#[allow(clippy::cast_precision_loss)]
fn interpolation(offset: i32, span: i32) -> f32 {
    let t = offset as f32 / span as f32;
    if t.is_nan() {
        0.0
    } else {
        t
    }
}

/// Schedules phantom walls: after [`PHANTOM_WALL_INTERVAL`] seconds without
/// a wall, a new one is generated; each wall lasts
/// [`PHANTOM_WALL_DURATION`] seconds.
///
/// [`PHANTOM_WALL_INTERVAL`]: consts::PHANTOM_WALL_INTERVAL
/// [`PHANTOM_WALL_DURATION`]: consts::PHANTOM_WALL_DURATION
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct WallSchedule {
    pub(crate) wall: Option<PhantomWall>,

    /// Seconds since the last wall expired (or since the run began)
    pub(crate) elapsed: f32,
}

impl WallSchedule {
    /// Advance by `dt` seconds.  `head`, `food`, and `snake_len` describe
    /// the board in case a new wall is due.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        arena: Arena,
        head: Point,
        food: Point,
        snake_len: usize,
    ) {
        if let Some(wall) = self.wall.as_mut() {
            if !wall.tick(dt) {
                debug!("Phantom wall expired");
                self.wall = None;
            }
        } else {
            self.elapsed += dt;
            if self.elapsed >= consts::PHANTOM_WALL_INTERVAL {
                self.wall = PhantomWall::generate(arena, head, food, snake_len);
                match self.wall {
                    Some(w) => debug!("Phantom wall raised from {:?} to {:?}", w.start, w.end),
                    None => debug!("Food too close to head; skipping phantom wall"),
                }
                self.elapsed = 0.0;
            }
        }
    }

    /// Seconds until the next wall is due, or `None` if one is up
    pub(crate) fn time_to_next(&self) -> Option<f32> {
        self.wall
            .is_none()
            .then(|| (consts::PHANTOM_WALL_INTERVAL - self.elapsed).max(0.0))
    }

    /// Whether `p` is inside the active wall, if any
    pub(crate) fn blocks(&self, p: Point, grid: i32) -> bool {
        self.wall.is_some_and(|w| w.contains(p, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARENA;
    use rstest::rstest;

    fn wall(start: Point, end: Point) -> PhantomWall {
        PhantomWall {
            start,
            end,
            timer: consts::PHANTOM_WALL_DURATION,
            countdown: consts::PHANTOM_WALL_COUNTDOWN,
        }
    }

    #[rstest]
    #[case(Point::new(105, 150), true)]
    #[case(Point::new(100, 100), true)]
    #[case(Point::new(120, 200), true)]
    #[case(Point::new(140, 150), false)]
    #[case(Point::new(80, 150), false)]
    #[case(Point::new(100, 220), false)]
    #[case(Point::new(100, 80), false)]
    fn vertical_wall_corridor(#[case] p: Point, #[case] hit: bool) {
        let w = wall(Point::new(100, 100), Point::new(100, 200));
        assert_eq!(w.contains(p, 20), hit);
    }

    #[rstest]
    #[case(Point::new(150, 105), true)]
    #[case(Point::new(160, 120), true)]
    #[case(Point::new(150, 140), false)]
    #[case(Point::new(220, 100), false)]
    fn horizontal_wall_corridor(#[case] p: Point, #[case] hit: bool) {
        let w = wall(Point::new(100, 100), Point::new(200, 100));
        assert_eq!(w.contains(p, 20), hit);
    }

    #[rstest]
    #[case(Point::new(150, 150), true)]
    #[case(Point::new(160, 140), true)]
    #[case(Point::new(180, 140), false)]
    #[case(Point::new(100, 180), false)]
    fn diagonal_wall_corridor(#[case] p: Point, #[case] hit: bool) {
        // Equal extent on both axes, so treated as vertical: x is
        // interpolated from y
        let w = wall(Point::new(100, 100), Point::new(200, 200));
        assert_eq!(w.contains(p, 20), hit);
    }

    #[test]
    fn point_wall() {
        let w = wall(Point::new(100, 100), Point::new(100, 100));
        assert!(w.contains(Point::new(100, 100), 20));
        assert!(w.contains(Point::new(120, 100), 20));
        assert!(!w.contains(Point::new(100, 120), 20));
    }

    #[test]
    fn generate_horizontal_approach() {
        // Food straight to the east; the wall runs north-south
        let w = PhantomWall::generate(ARENA, Point::new(200, 300), Point::new(500, 300), 2)
            .unwrap();
        // Midpoint: 200 + 300 * 0.33 = 299 -> 300; 4 cells long
        assert_eq!(w.start, Point::new(300, 340));
        assert_eq!(w.end, Point::new(300, 260));
        assert_eq!(w.countdown, 3);
        assert!(w.timer > 2.99);
    }

    #[test]
    fn generate_long_snake_is_capped_and_clamped() {
        // Food straight below the head near the left edge; the wall runs
        // east-west and its western end is clamped to the screen edge
        let w = PhantomWall::generate(ARENA, Point::new(20, 100), Point::new(20, 400), 90)
            .unwrap();
        // Midpoint: y = 100 + 300 * 0.33 = 199 -> 200; 12 cells long
        assert_eq!(w.start, Point::new(0, 200));
        assert_eq!(w.end, Point::new(140, 200));
    }

    #[rstest]
    #[case(Point::new(200, 300))]
    #[case(Point::new(210, 300))]
    fn generate_too_close(#[case] food: Point) {
        assert_eq!(
            PhantomWall::generate(ARENA, Point::new(200, 300), food, 10),
            None
        );
    }

    #[test]
    fn generated_endpoints_stay_in_bounds() {
        for (head, food) in [
            (Point::new(0, 80), Point::new(780, 580)),
            (Point::new(780, 80), Point::new(0, 580)),
            (Point::new(400, 80), Point::new(400, 580)),
            (Point::new(0, 340), Point::new(780, 340)),
        ] {
            let w = PhantomWall::generate(ARENA, head, food, 100).unwrap();
            assert!(ARENA.contains(w.start), "{w:?}");
            assert!(ARENA.contains(w.end), "{w:?}");
        }
    }

    #[test]
    fn countdown_ticks_down_and_expires() {
        let mut w = wall(Point::new(100, 100), Point::new(100, 200));
        assert!(w.tick(0.5));
        assert_eq!(w.countdown, 3);
        assert!(w.tick(1.0));
        assert_eq!(w.countdown, 2);
        assert!(w.tick(1.0));
        assert_eq!(w.countdown, 1);
        assert!(!w.tick(0.75));
        assert_eq!(w.countdown, 0);
    }

    #[test]
    fn schedule_cycle() {
        let mut sched = WallSchedule::default();
        let head = Point::new(200, 300);
        let food = Point::new(500, 300);
        for _ in 0..4 {
            sched.update(1.0, ARENA, head, food, 2);
        }
        assert_eq!(sched.wall, None);
        assert_eq!(sched.time_to_next(), Some(1.0));
        sched.update(1.0, ARENA, head, food, 2);
        assert!(sched.wall.is_some());
        assert_eq!(sched.time_to_next(), None);
        assert!(sched.blocks(Point::new(300, 300), 20));
        sched.update(2.0, ARENA, head, food, 2);
        assert!(sched.wall.is_some());
        sched.update(1.0, ARENA, head, food, 2);
        assert_eq!(sched.wall, None);
        assert!(!sched.blocks(Point::new(300, 300), 20));
        assert_eq!(sched.time_to_next(), Some(consts::PHANTOM_WALL_INTERVAL));
    }

    #[test]
    fn schedule_skips_when_food_is_adjacent() {
        let mut sched = WallSchedule::default();
        let head = Point::new(200, 300);
        sched.update(5.0, ARENA, head, head, 2);
        assert_eq!(sched.wall, None);
        assert_eq!(sched.time_to_next(), Some(consts::PHANTOM_WALL_INTERVAL));
    }

    #[test]
    fn cells_cover_vertical_wall() {
        let w = wall(Point::new(100, 100), Point::new(100, 160));
        assert_eq!(
            w.cells(20).collect::<Vec<_>>(),
            [
                Point::new(100, 100),
                Point::new(100, 120),
                Point::new(100, 140),
                Point::new(100, 160)
            ]
        );
        assert_eq!(w.midpoint(), Point::new(100, 130));
    }
}
