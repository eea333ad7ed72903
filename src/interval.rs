use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use crate::range_set::RangeSetError;

/// Reasons the text form `<start>-<end>` of an [`Interval`] may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IntervalParseError {
    /// No `-` between the two bounds.
    #[error("expected `<start>-<end>`, got `{0}`")]
    MissingSeparator(String),
    /// A bound is not an integer.
    #[error("bad bound `{0}`: {1}")]
    BadBound(String, #[source] ParseIntError),
    /// Both bounds parsed but do not form an interval.
    #[error(transparent)]
    Invalid(#[from] RangeSetError),
}

/// A closed range `[start, end]` of integers. `start <= end` always holds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Interval {
    pub(crate) start: i64,
    pub(crate) end: i64,
}

impl Interval {
    /// Construct the interval `[start, end]`, failing with [`RangeSetError::Inverted`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, RangeSetError> {
        if start > end {
            return Err(RangeSetError::Inverted { start, end });
        }

        Ok(Self { start, end })
    }

    /// The lowest integer in this interval.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The highest integer in this interval.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Whether `value` lies within `[start, end]`.
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// The number of integers in this interval. Never zero.
    pub fn size(&self) -> u128 {
        (i128::from(self.end) - i128::from(self.start) + 1) as u128
    }

    /// Whether `next`, which starts no earlier than `self`, overlaps or touches `self`.
    pub(crate) fn absorbs(&self, next: &Interval) -> bool {
        // nothing lies past i64::MAX, so an interval ending there absorbs everything after it
        self.end.checked_add(1).map_or(true, |after| next.start <= after)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // skip the first char so a negative start is not mistaken for the separator
        let separator = s.char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(index, _)| index)
            .ok_or_else(|| IntervalParseError::MissingSeparator(s.to_string()))?;

        let bound = |text: &str| text.trim()
            .parse::<i64>()
            .map_err(|e| IntervalParseError::BadBound(text.to_string(), e));

        Ok(Self::new(bound(&s[..separator])?, bound(&s[separator + 1..])?)?)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(value: Interval) -> Self {
        value.start..=value.end
    }
}
