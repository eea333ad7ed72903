//! Cafeteria: fresh ingredient id ranges, then the ids actually in stock.

use advent25::timing::timed;
use advent25::{Interval, RangeSet};
use anyhow::{Context, Result};
use itertools::Itertools;

use super::Answers;

struct Inventory {
    fresh: RangeSet,
    available: Vec<i64>,
}

fn parse(input: &str) -> Result<Inventory> {
    let lines = input.lines().map(str::trim).collect_vec();
    let blank = lines.iter()
        .position(|line| line.is_empty())
        .context("expected a blank line between the fresh ranges and the available ids")?;

    let fresh: Vec<Interval> = lines[..blank].iter()
        .map(|line| line.parse::<Interval>().with_context(|| format!("bad range `{line}`")))
        .try_collect()?;

    let available: Vec<i64> = lines[blank + 1..].iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<i64>().with_context(|| format!("bad id `{line}`")))
        .try_collect()?;

    Ok(Inventory {
        fresh: RangeSet::build(fresh).context("no fresh ranges")?,
        available,
    })
}

pub(super) fn solve(input: &str) -> Result<Answers> {
    let inventory = parse(input)?;

    Ok(Answers::new(
        timed("part 1", || inventory.fresh.count_within_raw(inventory.available.iter().copied())),
        timed("part 2", || inventory.fresh.total_covered()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    #[test]
    fn example() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1.value, "3");
        assert_eq!(answers.part2.value, "14");
    }

    #[test]
    fn missing_separator() {
        let error = parse("3-5\n10-14\n").err().unwrap();
        assert!(error.to_string().contains("blank line"));
    }

    #[test]
    fn inverted_range() {
        let error = parse("5-3\n\n4\n").err().unwrap();
        assert_eq!(format!("{error:#}"), "bad range `5-3`: interval 5-3 starts after it ends");
    }
}
