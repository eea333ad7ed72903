//! Secret entrance: a dial of 100 positions starting at 50, turned left and right.

use std::str::FromStr;

use advent25::timing::timed;
use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;

use super::{numbered_lines, Answers};

const POSITIONS: i64 = 100;
const START: i64 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Rotation {
    Left(i64),
    Right(i64),
}

impl Rotation {
    fn delta(self) -> i64 {
        match self {
            Self::Left(distance) => -distance,
            Self::Right(distance) => distance,
        }
    }

    /// How many clicks of this rotation, starting from `dial`, land on 0.
    fn zero_clicks(self, dial: i64) -> i64 {
        let (distance, to_zero) = match self {
            Self::Left(distance) => (distance, if dial == 0 { POSITIONS } else { dial }),
            Self::Right(distance) => (distance, POSITIONS - dial),
        };

        if distance < to_zero {
            0
        } else {
            1 + (distance - to_zero) / POSITIONS
        }
    }
}

impl FromStr for Rotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let direction = chars.next().ok_or_else(|| anyhow!("empty rotation"))?;
        let distance = i64::from(chars.as_str().parse::<u32>().with_context(|| format!("bad distance in `{s}`"))?);

        match direction {
            'L' => Ok(Self::Left(distance)),
            'R' => Ok(Self::Right(distance)),
            _ => bail!("invalid direction `{direction}`"),
        }
    }
}

fn parse(input: &str) -> Result<Vec<Rotation>> {
    numbered_lines(input)
        .map(|(number, line)| line.parse::<Rotation>().with_context(|| format!("line {number}: `{line}`")))
        .try_collect()
}

fn dial_positions(rotations: &[Rotation]) -> impl Iterator<Item = i64> + '_ {
    rotations.iter().scan(START, |dial, rotation| {
        *dial = (*dial + rotation.delta()).rem_euclid(POSITIONS);
        Some(*dial)
    })
}

/// Rotations which leave the dial at 0.
fn zero_landings(rotations: &[Rotation]) -> usize {
    dial_positions(rotations).filter(|dial| *dial == 0).count()
}

/// Clicks at 0 during or at the end of any rotation.
fn zero_clicks(rotations: &[Rotation]) -> i64 {
    std::iter::once(START)
        .chain(dial_positions(rotations))
        .zip(rotations)
        .map(|(dial, rotation)| rotation.zero_clicks(dial))
        .sum()
}

pub(super) fn solve(input: &str) -> Result<Answers> {
    let rotations = parse(input)?;

    Ok(Answers::new(
        timed("part 1", || zero_landings(&rotations)),
        timed("part 2", || zero_clicks(&rotations)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    #[test]
    fn example() {
        let rotations = parse(EXAMPLE).unwrap();
        assert_eq!(zero_landings(&rotations), 3);
        assert_eq!(zero_clicks(&rotations), 6);
    }

    #[test]
    fn full_turns_pass_zero_each_time() {
        assert_eq!(Rotation::Right(1000).zero_clicks(50), 10);
        assert_eq!(Rotation::Left(100).zero_clicks(0), 1);
        assert_eq!(Rotation::Left(99).zero_clicks(0), 0);
    }

    #[test]
    fn reject_bad_rotation() {
        assert!(parse("L5\nX3").is_err());
        assert!(parse("R-3").is_err());
    }
}
