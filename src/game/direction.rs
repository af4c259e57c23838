#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the `(dx, dy)` movement of one step in this direction on a
    /// grid with cells of size `grid`.  Screen coordinates grow downwards.
    pub(crate) fn delta(self, grid: i32) -> (i32, i32) {
        match self {
            Direction::North => (0, -grid),
            Direction::East => (grid, 0),
            Direction::South => (0, grid),
            Direction::West => (-grid, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
