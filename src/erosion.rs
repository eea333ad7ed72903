use std::mem;

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::Location;
use crate::shape::Neighborhood;

/// How a grid is parsed and eroded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ErosionConfig {
    /// The character marking an occupied cell.
    pub marker: char,
    /// A cell is removable once it has fewer than this many occupied neighbors.
    pub threshold: usize,
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            marker: '@',
            threshold: 4,
        }
    }
}

impl<Sh> Grid<Sh>
where
    Sh: Neighborhood,
{
    /// Repeatedly remove occupied cells with fewer than `threshold` occupied neighbors until none remain, returning how many were removed.
    ///
    /// See [`Self::erode_waves`].
    pub fn erode(&mut self, threshold: usize) -> usize {
        self.erode_waves(threshold).iter().sum()
    }

    /// Erode this grid in place, returning the number of cells removed in each wave.
    ///
    /// # Algorithm
    /// Every occupied cell starts with its occupied neighbor count.
    /// The first wave holds every cell already below `threshold`.
    /// Removing a cell decrements the count of each occupied neighbor; a neighbor whose count lands exactly on `threshold - 1` has just become removable and joins the next wave.
    /// Later decrements move it further below `threshold - 1`, so no cell is queued twice and the total work is linear in the size of the grid.
    ///
    /// The result does not depend on the order of cells within a wave: a cell only ever leaves the grid, so removability is monotone.
    pub fn erode_waves(&mut self, threshold: usize) -> Vec<usize> {
        let mut waves = Vec::new();
        // no count is below zero
        let Some(just_removable) = threshold.checked_sub(1) else {
            return waves;
        };

        let width = self.dims.0;
        // indexed by Location::as_flat
        let mut counts = vec![0; self.cells.len()];
        let mut wave = Vec::new();

        for (index, cell) in self.cells.indexed_iter() {
            if !cell.is_occupied() {
                continue;
            }

            let location = Location::from(index);
            let count = self.neighbor_count_at(location);
            counts[location.as_flat(width)] = count;
            if count < threshold {
                wave.push(location.as_flat(width));
            }
        }

        while !wave.is_empty() {
            let mut next_wave = Vec::new();
            let mut removed = 0;

            for flat in mem::take(&mut wave) {
                let location = Location::from_flat(flat, width);
                // already removed by an earlier entry
                if !self.is_occupied(location) {
                    continue;
                }

                self.cells[location.as_index()] = Cell::Empty;
                removed += 1;

                for (_, neighbor) in Sh::neighbors_of(location) {
                    if !self.is_occupied(neighbor) {
                        continue;
                    }

                    let count = &mut counts[neighbor.as_flat(width)];
                    *count -= 1;
                    if *count == just_removable {
                        next_wave.push(neighbor.as_flat(width));
                    }
                }
            }

            trace!(wave = waves.len(), removed, queued = next_wave.len(), "erosion wave");
            waves.push(removed);
            wave = next_wave;
        }

        debug!(
            removed = waves.iter().sum::<usize>(),
            waves = waves.len(),
            remaining = self.occupied_count(),
            "eroded grid"
        );

        waves
    }
}
