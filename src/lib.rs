#![warn(missing_docs)]

//! # `advent25`
//!
//! Interval merging and grid erosion, the two algorithms shared by several Advent of Code 2025 puzzles.
//!
//! ## Range sets
//! Build a [`RangeSet`] from any number of possibly overlapping, touching or unsorted [`Interval`]s.
//! The set keeps the minimal sorted cover of their union and answers membership, counting and summing queries against it.
//! Bounds are `i64`; counts and sums are accumulated in 128 bits so they never wrap.
//!
//! ## Grid erosion
//! Parse a [`Grid`] from text rows with [`Grid::from_text`], marking occupied cells with a single character.
//! Each cell sees its neighbors as given by a [`Step`](shape::Step) implementation, by default the eight surrounding cells ([`KingStep`](shape::KingStep)).
//!
//! [`Grid::erode`] repeatedly removes occupied cells with fewer than some threshold of occupied neighbors, the way a k-core is peeled from a graph.
//! Removal proceeds in waves: removing a cell can only make its neighbors removable, so only those neighbors are revisited.
//! The whole fixpoint costs time linear in the size of the grid.
//!
//! ## Timing
//! [`timing::timed`] wraps a block in a tracing span and reports how long it took, for callers printing per-part timings.

pub use cell::Cell;
pub use erosion::ErosionConfig;
pub use grid::{Grid, GridError};
pub use interval::{Interval, IntervalParseError};
pub use location::{Dimension, Location};
pub use range_set::{RangeSet, RangeSetError};

pub(crate) mod cell;
pub(crate) mod erosion;
pub(crate) mod grid;
pub(crate) mod interval;
pub(crate) mod location;
pub(crate) mod range_set;
pub mod shape;
pub mod timing;
