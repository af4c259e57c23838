use super::direction::Direction;
use rand::Rng;

/// A location on the screen, in pixels.  Positions occupied by game objects
/// are multiples of the grid cell size; intermediate values computed while
/// moving may lie outside the screen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Return the point `cells` grid cells away from `self` in `direction`
    pub(crate) fn offset(self, direction: Direction, grid: i32, cells: i32) -> Point {
        let (dx, dy) = direction.delta(grid);
        Point {
            x: self.x + dx * cells,
            y: self.y + dy * cells,
        }
    }
}

/// The dimensions of the screen and of the region reserved for the
/// navigation bar.  The playable area is `[0, width) × [nav_bar, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Arena {
    pub(crate) width: i32,
    pub(crate) height: i32,
    /// Size of one square grid cell
    pub(crate) grid: i32,
    /// Height of the navigation bar along the top of the screen
    pub(crate) nav_bar: i32,
}

impl Arena {
    /// Number of grid cells in one row of the screen
    pub(crate) fn columns(self) -> i32 {
        self.width / self.grid
    }

    /// Number of grid cells in one column of the screen, counting the ones
    /// behind the navigation bar
    pub(crate) fn rows(self) -> i32 {
        self.height / self.grid
    }

    /// Where the snake's head is placed at the start of a run: the
    /// horizontal center of the screen and the vertical center of the
    /// playable area
    pub(crate) fn spawn_point(self) -> Point {
        Point {
            x: (self.columns() / 2) * self.grid,
            y: ((self.height - self.nav_bar) / self.grid / 2 + self.nav_bar / self.grid) * self.grid,
        }
    }

    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (self.nav_bar..self.height).contains(&p.y)
    }

    /// Bring a point that has stepped off one edge of the playable area back
    /// in through the opposite edge
    pub(crate) fn wrap(self, mut p: Point) -> Point {
        if p.x < 0 {
            p.x = self.width - self.grid;
        }
        if p.x >= self.width {
            p.x = 0;
        }
        if p.y < self.nav_bar {
            p.y = self.height - self.grid;
        }
        if p.y >= self.height {
            p.y = self.nav_bar;
        }
        p
    }

    /// Move a point lying outside the playable area to the nearest edge
    /// cell on each axis
    pub(crate) fn clamp(self, mut p: Point) -> Point {
        if p.x < 0 {
            p.x = 0;
        }
        if p.x >= self.width {
            p.x = self.width - self.grid;
        }
        if p.y < self.nav_bar {
            p.y = self.nav_bar;
        }
        if p.y >= self.height {
            p.y = self.height - self.grid;
        }
        p
    }

    /// Pick a uniformly random grid cell in the playable area.  Cells are
    /// drawn from the whole screen and redrawn while they fall behind the
    /// navigation bar.
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        loop {
            let p = Point {
                x: rng.random_range(0..self.columns()) * self.grid,
                y: rng.random_range(0..self.rows()) * self.grid,
            };
            if p.y >= self.nav_bar {
                return p;
            }
        }
    }
}

/// A rectangular clickable region of the screen, in pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Region {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Region {
    pub(crate) const fn new(x: i32, y: i32, width: i32, height: i32) -> Region {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn contains(self, p: Point) -> bool {
        (self.x..self.x + self.width).contains(&p.x)
            && (self.y..self.y + self.height).contains(&p.y)
    }
}
