use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::interval::Interval;

/// Reasons a [`RangeSet`] or [`Interval`] may fail to build.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum RangeSetError {
    /// No intervals were given, so there is nothing to merge.
    #[error("cannot build a range set from no intervals")]
    Empty,
    /// An interval would start after it ends.
    #[error("interval {start}-{end} starts after it ends")]
    Inverted {
        /// The requested lower bound.
        start: i64,
        /// The requested upper bound.
        end: i64,
    },
}

/// The minimal sorted cover of a collection of [`Interval`]s.
///
/// Consecutive intervals in the cover neither overlap nor touch: `[1, 5]` and `[6, 10]` merge into `[1, 10]`.
/// The original intervals are kept alongside for queries that must consider them one by one (see [`Self::contains_raw`]).
///
/// Two range sets are equal when their covers are equal, regardless of the intervals they were built from.
#[derive(Clone, Debug)]
pub struct RangeSet {
    merged: Vec<Interval>,
    raw: Vec<Interval>,
}

impl RangeSet {
    /// Merge `intervals` by sorting on their starts and sweeping once from left to right.
    ///
    /// Fails with [`RangeSetError::Empty`] if `intervals` is empty.
    pub fn build<I>(intervals: I) -> Result<Self, RangeSetError>
    where
        I: IntoIterator<Item = Interval>,
    {
        let raw = intervals.into_iter().collect_vec();

        let mut sorted = raw.iter().copied().sorted_by_key(Interval::start);
        let Some(mut current) = sorted.next() else {
            return Err(RangeSetError::Empty);
        };

        let mut merged = Vec::with_capacity(raw.len());
        for interval in sorted {
            if current.absorbs(&interval) {
                current.end = current.end.max(interval.end);
            } else {
                merged.push(current);
                current = interval;
            }
        }
        merged.push(current);

        debug!(raw = raw.len(), merged = merged.len(), "built range set");
        Ok(Self { merged, raw })
    }

    /// Validate each `(start, end)` pair as an [`Interval`], then [`build`](Self::build).
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, RangeSetError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let intervals = pairs.into_iter()
            .map(|(start, end)| Interval::new(start, end))
            .collect::<Result<Vec<_>, _>>()?;

        Self::build(intervals)
    }

    /// The merged cover, sorted ascending.
    pub fn intervals(&self) -> &[Interval] {
        &self.merged
    }

    /// The intervals this set was built from, in their original order.
    pub fn raw_intervals(&self) -> &[Interval] {
        &self.raw
    }

    /// The smallest interval containing the whole set.
    pub fn bounds(&self) -> Interval {
        // merged is never empty
        Interval {
            start: self.merged[0].start,
            end: self.merged[self.merged.len() - 1].end,
        }
    }

    /// Whether any interval of the cover contains `value`.
    pub fn contains(&self, value: i64) -> bool {
        let candidate = self.merged.partition_point(|interval| interval.end < value);
        self.merged.get(candidate).is_some_and(|interval| interval.contains(value))
    }

    /// Whether any of the original intervals contains `value`, checking each in turn.
    ///
    /// Always agrees with [`Self::contains`].
    pub fn contains_raw(&self, value: i64) -> bool {
        self.raw.iter().any(|interval| interval.contains(value))
    }

    /// Count the `values` contained in the cover.
    pub fn count_within<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().filter(|value| self.contains(*value)).count()
    }

    /// Count the `values` contained in any original interval.
    pub fn count_within_raw<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().filter(|value| self.contains_raw(*value)).count()
    }

    /// Sum the `values` contained in the cover. Repeated values are summed once per occurrence.
    ///
    /// The values are sorted once and swept alongside the cover, so the cost is linear in the number of values and intervals beyond the sort.
    pub fn sum_within<I>(&self, values: I) -> i128
    where
        I: IntoIterator<Item = i64>,
    {
        let mut cursor = self.merged.iter().peekable();
        let mut total = 0;

        for value in values.into_iter().sorted_unstable() {
            while cursor.next_if(|interval| value > interval.end).is_some() {}

            // every remaining value is past the last interval
            let Some(interval) = cursor.peek() else {
                break;
            };

            if interval.contains(value) {
                total += i128::from(value);
            }
        }

        total
    }

    /// The number of integers covered by the union of all original intervals.
    pub fn total_covered(&self) -> u128 {
        self.merged.iter().map(Interval::size).sum()
    }
}

impl PartialEq for RangeSet {
    fn eq(&self, other: &Self) -> bool {
        self.merged == other.merged
    }
}

impl Eq for RangeSet {}
