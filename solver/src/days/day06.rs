//! Trash compactor: a worksheet of problems laid out side by side in columns, operator on the last line.

use std::ops::Range;

use advent25::timing::timed;
use anyhow::{bail, Context, Result};
use itertools::Itertools;

use super::Answers;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn parse(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '*' => Some(Self::Multiply),
            _ => None,
        }
    }

    /// [`None`] if the answer does not fit in a `u64`.
    fn apply(self, numbers: &[u64]) -> Option<u64> {
        match self {
            Self::Add => numbers.iter().try_fold(0_u64, |acc, n| acc.checked_add(*n)),
            Self::Multiply => numbers.iter().try_fold(1_u64, |acc, n| acc.checked_mul(*n)),
        }
    }
}

#[derive(Debug)]
struct Problem {
    operator: Operator,
    // one number per line, read left to right
    by_row: Vec<u64>,
    // one number per column, digits top to bottom, columns right to left
    by_column: Vec<u64>,
}

impl Problem {
    fn parse(operators: &[char], digits: &[Vec<char>], span: Range<usize>) -> Result<Self> {
        let symbol = operators[span.clone()].iter()
            .find(|c| !c.is_whitespace())
            .with_context(|| format!("missing operator under columns {}..{}", span.start, span.end))?;
        let operator = Operator::parse(*symbol).with_context(|| format!("unknown operator `{symbol}`"))?;

        let number = |text: String| text.parse::<u64>().with_context(|| format!("bad number `{text}`"));

        let by_row: Vec<u64> = digits.iter()
            .map(|row| row[span.clone()].iter().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .map(&number)
            .try_collect()?;

        let by_column: Vec<u64> = span.clone()
            .rev()
            .map(|column| digits.iter().map(|row| row[column]).filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|text| !text.is_empty())
            .map(&number)
            .try_collect()?;

        Ok(Self { operator, by_row, by_column })
    }
}

fn parse(input: &str) -> Result<Vec<Problem>> {
    let lines = input.lines().collect_vec();
    let used = lines.iter().rposition(|line| !line.trim().is_empty()).map_or(0, |last| last + 1);

    // short lines are padded, as their trailing spaces are often stripped
    let width = lines[..used].iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let sheet = lines[..used].iter()
        .map(|line| line.chars().pad_using(width, |_| ' ').collect_vec())
        .collect_vec();

    let Some((operators, digits)) = sheet.split_last() else {
        bail!("empty worksheet");
    };

    let separator = |column: usize| sheet.iter().all(|row| row[column] == ' ');

    let mut problems = Vec::new();
    let mut column = 0;
    while column < width {
        if separator(column) {
            column += 1;
            continue;
        }

        let start = column;
        while column < width && !separator(column) {
            column += 1;
        }
        problems.push(Problem::parse(operators, digits, start..column)?);
    }

    Ok(problems)
}

fn grand_total(problems: &[Problem], numbers: impl Fn(&Problem) -> &[u64]) -> Result<u64> {
    problems.iter().enumerate().try_fold(0_u64, |total, (index, problem)| {
        problem.operator
            .apply(numbers(problem))
            .with_context(|| format!("problem {} overflows: {:?} {:?}", index + 1, problem.operator, numbers(problem)))?
            .checked_add(total)
            .with_context(|| format!("grand total overflows at problem {}", index + 1))
    })
}

pub(super) fn solve(input: &str) -> Result<Answers> {
    let problems = parse(input)?;

    Ok(Answers::new(
        timed("part 1", || grand_total(&problems, |problem| problem.by_row.as_slice())).transpose()?,
        timed("part 2", || grand_total(&problems, |problem| problem.by_column.as_slice())).transpose()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> String {
        [
            "123 328  51 64 ",
            " 45 64  387 23 ",
            "  6 98  215 314",
            "*   +   *   +  ",
        ].join("\n")
    }

    #[test]
    fn example_totals() {
        let problems = parse(&example()).unwrap();
        assert_eq!(problems.len(), 4);
        assert_eq!(grand_total(&problems, |problem| problem.by_row.as_slice()).unwrap(), 4277556);
        assert_eq!(grand_total(&problems, |problem| problem.by_column.as_slice()).unwrap(), 3263827);
    }

    #[test]
    fn read_columns_right_to_left() {
        let problems = parse(&example()).unwrap();
        assert_eq!(problems[0].by_row, vec![123, 45, 6]);
        assert_eq!(problems[0].by_column, vec![356, 24, 1]);
        assert_eq!(problems[3].operator, Operator::Add);
        assert_eq!(problems[3].by_column, vec![4, 431, 623]);
    }

    #[test]
    fn stripped_trailing_spaces() {
        let stripped = example().lines().map(str::trim_end).join("\n");
        let problems = parse(&stripped).unwrap();
        assert_eq!(grand_total(&problems, |problem| problem.by_column.as_slice()).unwrap(), 3263827);
    }

    #[test]
    fn overflowing_product_fails() {
        let error = solve("99999\n99999\n99999\n99999\n99999\n*    ").err().unwrap();
        assert!(error.to_string().contains("problem 1 overflows"), "{error}");
    }

    #[test]
    fn overflowing_grand_total_fails() {
        let problems = parse("18446744073709551615 1\n+                    +").unwrap();
        assert_eq!(grand_total(&problems[..1], |problem| problem.by_row.as_slice()).unwrap(), u64::MAX);
        let error = grand_total(&problems, |problem| problem.by_row.as_slice()).err().unwrap();
        assert_eq!(error.to_string(), "grand total overflows at problem 2");
    }

    #[test]
    fn missing_operator() {
        assert!(parse("12 3\n4  5\n*   ").is_err());
    }
}
