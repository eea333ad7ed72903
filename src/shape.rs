use std::fmt::Debug;
use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A set of directions defining which cells count as neighbors on a [`Grid`](crate::Grid).
///
/// [`KingStep`] (all eight surrounding cells) and [`RookStep`] (the four orthogonal cells) are built-in implementations.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Debug {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers check bounds on lookup.
    fn attempt_from(&self, location: Location) -> Location;
}

/// The eight directions a chess king may move: orthogonal and diagonal.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KingStep {
    /// `(0, -1)`
    Up,
    /// `(1, -1)`
    UpRight,
    /// `(1, 0)`
    Right,
    /// `(1, 1)`
    DownRight,
    /// `(0, 1)`
    Down,
    /// `(-1, 1)`
    DownLeft,
    /// `(-1, 0)`
    Left,
    /// `(-1, -1)`
    UpLeft,
}

impl Step for KingStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::UpRight => location.offset_by((1, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
            Self::Down => location.offset_by((0, 1)),
            Self::DownLeft => location.offset_by((-1, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::UpLeft => location.offset_by((-1, -1)),
        }
    }
}

/// The four orthogonal directions a chess rook may move.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum RookStep {
    /// `(0, -1)`
    Up,
    /// `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
}

impl Step for RookStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all neighborhoods.
pub trait Neighborhood: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)>;
}

impl<Sh> Neighborhood for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)> {
        Self::VARIANTS.iter().map(move |dir| (*dir, dir.attempt_from(location)))
    }
}
