use std::fmt::Display;
use std::ops::RangeInclusive;

use advent25::timing::Timed;
use advent25::ErosionConfig;
use anyhow::{bail, Result};

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;

/// Days with a solution.
pub(crate) const AVAILABLE: RangeInclusive<u8> = 1..=6;

/// Both answers of a day, rendered for printing, with the time each part took.
pub(crate) struct Answers {
    pub(crate) part1: Timed<String>,
    pub(crate) part2: Timed<String>,
}

impl Answers {
    fn new(part1: Timed<impl Display>, part2: Timed<impl Display>) -> Self {
        Self {
            part1: part1.map(|answer| answer.to_string()),
            part2: part2.map(|answer| answer.to_string()),
        }
    }
}

pub(crate) fn run(day: u8, input: &str, config: &ErosionConfig) -> Result<Answers> {
    match day {
        1 => day01::solve(input),
        2 => day02::solve(input),
        3 => day03::solve(input),
        4 => day04::solve(input, config),
        5 => day05::solve(input),
        6 => day06::solve(input),
        _ => bail!("no solution for day {day}"),
    }
}

/// Non-blank lines, trimmed, numbered from 1 for error messages.
fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line))
}
