//! Gift shop: ids made of one digit pattern repeated, summed over the ranges they fall in.

use std::collections::BTreeSet;

use advent25::timing::timed;
use advent25::{Interval, RangeSet};
use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::debug;

use super::Answers;

fn parse(input: &str) -> Result<RangeSet> {
    let intervals: Vec<Interval> = input.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Interval>().with_context(|| format!("bad range `{token}`")))
        .try_collect()?;

    Ok(RangeSet::build(intervals)?)
}

fn digits(n: i64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// `pattern` written `times` times in a row, where `shift` is ten to the number of digits in `pattern`.
fn repeated(pattern: i64, times: u32, shift: i64) -> Option<i64> {
    (0..times).try_fold(0_i64, |acc, _| acc.checked_mul(shift)?.checked_add(pattern))
}

/// Every id within `bounds` consisting of a pattern repeated a number of times accepted by `times`.
///
/// Patterns never start with 0.
fn pattern_ids(bounds: Interval, times: impl Fn(u32) -> bool) -> BTreeSet<i64> {
    let mut ids = BTreeSet::new();

    for length in 2..=digits(bounds.end()) {
        for repeats in (2..=length).filter(|repeats| length % repeats == 0 && times(*repeats)) {
            let shift = 10_i64.pow(length / repeats);
            // leading digits of the range start, so patterns below it are skipped
            let head = 10_i64.pow(length - length / repeats);
            let first = (bounds.start() / head).max(shift / 10);
            for pattern in first..shift {
                match repeated(pattern, repeats, shift) {
                    Some(id) if id <= bounds.end() => {
                        if id >= bounds.start() {
                            ids.insert(id);
                        }
                    }
                    _ => break,
                }
            }
        }
    }

    debug!(candidates = ids.len(), "generated pattern ids");
    ids
}

fn twice_repeated_sum(ranges: &RangeSet) -> i128 {
    ranges.sum_within(pattern_ids(ranges.bounds(), |repeats| repeats == 2))
}

fn any_repeated_sum(ranges: &RangeSet) -> i128 {
    ranges.sum_within(pattern_ids(ranges.bounds(), |_| true))
}

pub(super) fn solve(input: &str) -> Result<Answers> {
    let ranges = parse(input)?;

    Ok(Answers::new(
        timed("part 1", || twice_repeated_sum(&ranges)),
        timed("part 2", || any_repeated_sum(&ranges)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124
";

    #[test]
    fn example() {
        let ranges = parse(EXAMPLE).unwrap();
        assert_eq!(twice_repeated_sum(&ranges), 1227775554);
        assert_eq!(any_repeated_sum(&ranges), 4174379265);
    }

    #[test]
    fn patterns_in_small_range() {
        let bounds = Interval::new(95, 1012).unwrap();
        assert_eq!(pattern_ids(bounds, |repeats| repeats == 2).into_iter().collect_vec(), vec![99, 1010]);
        assert_eq!(pattern_ids(bounds, |_| true).into_iter().collect_vec(), vec![99, 111, 222, 333, 444, 555, 666, 777, 888, 999, 1010]);
    }

    #[test]
    fn repeat_without_overflow() {
        assert_eq!(repeated(12, 3, 100), Some(121212));
        assert_eq!(repeated(999_999_999, 3, 1_000_000_000), None);
    }

    #[test]
    fn reject_empty_input() {
        assert!(parse(" \n").is_err());
        assert!(parse("5-3").is_err());
    }
}
