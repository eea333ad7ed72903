use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// One side of a grid. Grids are never zero-sized.
pub type Dimension = NonZero<Coord>;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Steps off the top or left edge wrap around to huge coordinates, which every lookup treats as out of bounds.
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    // row-major, matching the layout of the cell array
    pub(crate) fn as_flat(&self, width: Dimension) -> usize {
        self.1 * width.get() + self.0
    }

    pub(crate) fn from_flat(flat: usize, width: Dimension) -> Self {
        Self(flat % width.get(), flat / width.get())
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
