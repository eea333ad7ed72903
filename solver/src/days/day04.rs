//! Printing department: paper rolls a forklift can reach, once and then repeatedly.

use advent25::timing::timed;
use advent25::{ErosionConfig, Grid};
use anyhow::{bail, Context, Result};
use itertools::Itertools;

use super::Answers;

/// Rows are kept whole, trailing spaces included. Only blank lines after the grid are dropped.
fn parse(input: &str, config: &ErosionConfig) -> Result<Grid> {
    let rows = input.lines().collect_vec();
    let used = rows.iter().rposition(|row| !row.trim().is_empty()).map_or(0, |last| last + 1);

    if let Some(blank) = rows[..used].iter().position(|row| row.trim().is_empty()) {
        bail!("malformed grid: blank line {} inside the grid", blank + 1);
    }

    Grid::from_text(&rows[..used], config.marker).context("malformed grid")
}

pub(super) fn solve(input: &str, config: &ErosionConfig) -> Result<Answers> {
    let mut grid = parse(input, config)?;

    let part1 = timed("part 1", || grid.static_accessible_count(config.threshold));
    let part2 = timed("part 2", || grid.erode(config.threshold));
    Ok(Answers::new(part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn example() {
        let answers = solve(EXAMPLE, &ErosionConfig::default()).unwrap();
        assert_eq!(answers.part1.value, "13");
        assert_eq!(answers.part2.value, "43");
    }

    #[test]
    fn custom_marker() {
        let config = ErosionConfig { marker: '#', threshold: 4 };
        let answers = solve(&EXAMPLE.replace('@', "#"), &config).unwrap();
        assert_eq!(answers.part2.value, "43");
    }

    #[test]
    fn interior_blank_line_fails() {
        let error = solve("@@@\n\n@@@\n", &ErosionConfig::default()).err().unwrap();
        assert_eq!(error.to_string(), "malformed grid: blank line 2 inside the grid");
    }

    #[test]
    fn keep_trailing_spaces() {
        let grid = parse("@@ \n@@ \n\n\n", &ErosionConfig::default()).unwrap();
        assert_eq!(grid.dims().0.get(), 3);
        assert_eq!(grid.dims().1.get(), 2);
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn ragged_rows_fail() {
        let error = solve("@@@\n@@\n", &ErosionConfig::default()).err().unwrap();
        assert_eq!(format!("{error:#}"), "malformed grid: row 1 is 2 cells wide, expected 3");
    }
}
