//! Lobby: the largest joltage each bank of single-digit batteries can produce with k batteries turned on.

use advent25::timing::timed;
use anyhow::{Context, Result};
use itertools::Itertools;

use super::{numbered_lines, Answers};

fn parse(input: &str) -> Result<Vec<Vec<u8>>> {
    numbered_lines(input)
        .map(|(number, line)| {
            line.chars()
                .map(|c| c.to_digit(10).map(|digit| digit as u8))
                .collect::<Option<Vec<_>>>()
                .with_context(|| format!("line {number}: `{line}` is not all digits"))
        })
        .try_collect()
}

/// The largest number formed by keeping `k` digits of `bank` in order, or [`None`] if `bank` has fewer than `k`.
///
/// A digit is dropped whenever a larger one follows it and there are still digits to spare.
fn largest_joltage(bank: &[u8], k: usize) -> Option<u64> {
    let mut to_drop = bank.len().checked_sub(k)?;
    let mut kept = Vec::with_capacity(bank.len());

    for &digit in bank {
        while to_drop > 0 && kept.last().is_some_and(|&top| top < digit) {
            kept.pop();
            to_drop -= 1;
        }
        kept.push(digit);
    }

    Some(kept[..k].iter().fold(0, |acc, &digit| acc * 10 + u64::from(digit)))
}

fn total_joltage(banks: &[Vec<u8>], k: usize) -> u64 {
    banks.iter().filter_map(|bank| largest_joltage(bank, k)).sum()
}

pub(super) fn solve(input: &str) -> Result<Answers> {
    let banks = parse(input)?;

    Ok(Answers::new(
        timed("part 1", || total_joltage(&banks, 2)),
        timed("part 2", || total_joltage(&banks, 12)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn example() {
        let banks = parse(EXAMPLE).unwrap();
        assert_eq!(total_joltage(&banks, 2), 357);
        assert_eq!(total_joltage(&banks, 12), 3121910778619);
    }

    #[test]
    fn single_banks() {
        assert_eq!(largest_joltage(&[8, 1, 1, 9], 2), Some(89));
        assert_eq!(largest_joltage(&[9, 8, 7], 3), Some(987));
        assert_eq!(largest_joltage(&[1, 2], 3), None);
    }

    #[test]
    fn reject_non_digits() {
        assert!(parse("12a4").is_err());
    }
}
