use super::geometry::{Arena, Point};
use crate::consts;
use rand::Rng;

/// The things on the board for the snake to eat
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Fruits {
    /// The ordinary food, which is always present
    pub(crate) food: Point,

    /// The golden fruit, if one is currently on the board
    pub(crate) golden: Option<Point>,
}

impl Fruits {
    pub(crate) fn new<R: Rng>(arena: Arena, golden_fruit: bool, rng: &mut R) -> Fruits {
        let mut fruits = Fruits {
            food: Point::default(),
            golden: None,
        };
        fruits.respawn(arena, golden_fruit, rng);
        fruits
    }

    /// Move the food to a fresh random cell.  If `golden_fruit` is true, a
    /// golden fruit may also be placed, replacing any existing one;
    /// otherwise, any golden fruit is removed.
    pub(crate) fn respawn<R: Rng>(&mut self, arena: Arena, golden_fruit: bool, rng: &mut R) {
        self.food = arena.random_cell(rng);
        self.golden = (golden_fruit && rng.random_bool(consts::GOLDEN_FRUIT_PROBABILITY))
            .then(|| arena.random_cell(rng));
    }

    /// Remove the golden fruit if it is at `p`.  Returns whether it was.
    pub(crate) fn take_golden(&mut self, p: Point) -> bool {
        if self.golden == Some(p) {
            self.golden = None;
            true
        } else {
            false
        }
    }
}
