use super::direction::Direction;
use super::geometry::Point;
use crate::consts;

/// The player's snake: its segments and where it is headed
///
/// The body lives in a fixed-capacity array with the head at index 0; only
/// the first `len` entries are part of the snake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) body: [Point; consts::SNAKE_MAX_LENGTH],
    pub(super) len: usize,

    /// The direction the snake will move in on its next step
    pub(super) direction: Direction,

    /// The direction of the snake's most recent step, i.e., pointing from
    /// the second segment to the head
    pub(super) moved: Direction,
}

impl Snake {
    /// Create a snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// segments with its head at `head`, facing `direction`, and its body
    /// trailing straight behind it.
    pub(crate) fn new(head: Point, direction: Direction, grid: i32) -> Snake {
        let mut body = [head; consts::SNAKE_MAX_LENGTH];
        let behind = direction.reverse();
        let mut pos = head;
        for slot in body.iter_mut().take(consts::INITIAL_SNAKE_LENGTH) {
            *slot = pos;
            pos = pos.offset(behind, grid, 1);
        }
        Snake {
            body,
            len: consts::INITIAL_SNAKE_LENGTH,
            direction,
            moved: direction,
        }
    }

    pub(crate) fn head(&self) -> Point {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The snake's segments, head first
    pub(crate) fn segments(&self) -> &[Point] {
        &self.body[..self.len]
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction of the most recent step, which is where the head is
    /// facing on screen
    pub(crate) fn moved(&self) -> Direction {
        self.moved
    }

    /// Ask the snake to face `direction` on its next step.  A request to
    /// double back onto the second segment is ignored.  Returns whether the
    /// heading was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if self.len > 1 && direction == self.moved.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Where the head would end up after one step on a grid with cells of
    /// size `grid`, before any boundary handling
    pub(crate) fn next_head(&self, grid: i32) -> Point {
        self.head().offset(self.direction, grid, 1)
    }

    /// Whether `p` coincides with any segment behind the head
    pub(crate) fn overlaps_body(&self, p: Point) -> bool {
        self.segments().iter().skip(1).any(|&seg| seg == p)
    }

    /// Shift every segment one slot towards the tail and put the head at
    /// `head`
    pub(crate) fn advance_to(&mut self, head: Point) {
        self.body.copy_within(0..self.len - 1, 1);
        self.body[0] = head;
        self.moved = self.direction;
    }

    /// Add up to `segments` segments at the tail, stacked on the current tail
    /// cell so that they unfold as the snake moves.  Growth beyond
    /// [`SNAKE_MAX_LENGTH`][consts::SNAKE_MAX_LENGTH] is dropped.
    pub(crate) fn grow(&mut self, segments: usize) {
        let tail = self.body[self.len - 1];
        let new_len = (self.len + segments).min(consts::SNAKE_MAX_LENGTH);
        self.body[self.len..new_len].fill(tail);
        self.len = new_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake() -> Snake {
        Snake::new(Point::new(400, 340), Direction::East, 20)
    }

    #[test]
    fn new_snake() {
        let s = snake();
        assert_eq!(s.segments(), [Point::new(400, 340), Point::new(380, 340)]);
        assert_eq!(s.direction(), Direction::East);
    }

    #[rstest]
    #[case(Direction::North, true)]
    #[case(Direction::South, true)]
    #[case(Direction::East, true)]
    #[case(Direction::West, false)]
    fn turn_from_east(#[case] d: Direction, #[case] accepted: bool) {
        let mut s = snake();
        assert_eq!(s.turn(d), accepted);
        let expected = if accepted { d } else { Direction::East };
        assert_eq!(s.direction(), expected);
    }

    #[test]
    fn two_turns_between_steps_cannot_reverse() {
        let mut s = snake();
        assert!(s.turn(Direction::North));
        // Still moving east as far as the body is concerned
        assert!(!s.turn(Direction::West));
        assert_eq!(s.direction(), Direction::North);
        s.advance_to(s.next_head(20));
        assert!(s.turn(Direction::West));
    }

    #[test]
    fn moved_lags_behind_turn() {
        let mut s = snake();
        assert!(s.turn(Direction::North));
        assert_eq!(s.direction(), Direction::North);
        assert_eq!(s.moved(), Direction::East);
        s.advance_to(s.next_head(20));
        assert_eq!(s.moved(), Direction::North);
    }

    #[test]
    fn advance_shifts_body() {
        let mut s = snake();
        s.advance_to(s.next_head(20));
        assert_eq!(s.segments(), [Point::new(420, 340), Point::new(400, 340)]);
    }

    #[test]
    fn grow_unfolds_from_tail() {
        let mut s = snake();
        s.grow(3);
        assert_eq!(s.len(), 5);
        for _ in 0..3 {
            s.advance_to(s.next_head(20));
        }
        assert_eq!(
            s.segments(),
            [
                Point::new(460, 340),
                Point::new(440, 340),
                Point::new(420, 340),
                Point::new(400, 340),
                Point::new(380, 340),
            ]
        );
    }

    #[test]
    fn growth_is_capped() {
        let mut s = snake();
        for _ in 0..200 {
            s.grow(1);
            assert!(s.len() <= consts::SNAKE_MAX_LENGTH);
        }
        assert_eq!(s.len(), consts::SNAKE_MAX_LENGTH);
        s.grow(3);
        assert_eq!(s.len(), consts::SNAKE_MAX_LENGTH);
    }

    #[test]
    fn overlaps_body_ignores_head() {
        let s = snake();
        assert!(!s.overlaps_body(Point::new(400, 340)));
        assert!(s.overlaps_body(Point::new(380, 340)));
        assert!(!s.overlaps_body(Point::new(360, 340)));
    }
}
