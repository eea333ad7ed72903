use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::shape::{KingStep, Neighborhood};

/// Reasons a grid may fail to parse.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum GridError {
    /// There were no rows, or every row was empty.
    #[error("grid has no cells")]
    Empty,
    /// A row was not as wide as the first row. Rows are never padded.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    DimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// A rectangular occupancy grid whose cells see their neighbors as specified by `Sh`.
///
/// Build one from text with [`Grid::from_text`], or with [`Grid::with_neighborhood`] for neighborhoods other than [`KingStep`].
#[derive(Clone, Debug)]
pub struct Grid<Sh = KingStep>
where
    Sh: Neighborhood,
{
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) marker: char,
    pub(crate) neighborhood: PhantomData<Sh>,
}

impl Grid {
    /// Parse `rows` into a grid of eight-connected cells.
    /// Every `char` equal to `marker` is occupied; anything else is empty.
    pub fn from_text<I>(rows: I, marker: char) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_neighborhood(rows, marker)
    }
}

impl<Sh> Grid<Sh>
where
    Sh: Neighborhood,
{
    /// Parse `rows` as in [`Grid::from_text`], with neighbors determined by `Sh`.
    ///
    /// Fails with [`GridError::Empty`] if there is nothing to parse and [`GridError::DimensionMismatch`] if the rows are ragged.
    pub fn with_neighborhood<I>(rows: I, marker: char) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows = rows.into_iter()
            .map(|row| row.as_ref().chars().collect_vec())
            .collect_vec();

        // an empty first row next to non-empty ones is ragged, not empty
        if rows.iter().all(Vec::is_empty) {
            return Err(GridError::Empty);
        }

        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows.iter().map(Vec::len).find_position(|len| *len != width) {
            return Err(GridError::DimensionMismatch { row, expected: width, found });
        }

        let (Some(width_dim), Some(height_dim)) = (NonZero::new(width), NonZero::new(rows.len())) else {
            return Err(GridError::Empty);
        };

        Ok(Self {
            cells: Array2::from_shape_fn((height_dim.get(), width_dim.get()), |(y, x)| Cell::parse(rows[y][x], marker)),
            dims: (width_dim, height_dim),
            marker,
            neighborhood: PhantomData,
        })
    }

    /// The `(width, height)` of this grid.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The cell at `location`, or [`None`] if it lies outside the grid.
    pub fn cell_at(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    pub(crate) fn is_occupied(&self, location: Location) -> bool {
        self.cell_at(location).is_some_and(|cell| cell.is_occupied())
    }

    /// Count occupied cells on the whole grid.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Count the occupied neighbors of `location`.
    ///
    /// Neighbors outside the grid are absent, never occupied. A `location` outside the grid has no neighbors.
    pub fn neighbor_count_at(&self, location: Location) -> usize {
        if self.cell_at(location).is_none() {
            return 0;
        }

        Sh::neighbors_of(location)
            .filter(|(_, neighbor)| self.is_occupied(*neighbor))
            .count()
    }

    /// Count occupied cells with fewer than `threshold` occupied neighbors, without modifying the grid.
    pub fn static_accessible_count(&self, threshold: usize) -> usize {
        self.cells.indexed_iter()
            .filter(|(index, cell)| cell.is_occupied() && self.neighbor_count_at(Location::from(*index)) < threshold)
            .count()
    }
}

impl<Sh: Neighborhood> Display for Grid<Sh> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.display(self.marker));
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
