use std::fs;
use std::path::PathBuf;

use advent25::timing::timed;
use advent25::ErosionConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

mod days;

/// Run one Advent of Code 2025 day and print both answers with timings.
#[derive(Parser)]
struct Cli {
    /// Day to run, e.g. 4
    #[arg(required_unless_present = "list")]
    day: Option<u8>,
    /// List the days with a solution and whether their day-mode input exists, then exit
    #[arg(long, conflicts_with = "day")]
    list: bool,
    /// Input file; when absent, resolved from --root, --year, --month and the day
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Directory holding `<year>/<Month>/DayNN/data/input.csv`
    #[arg(long, default_value = ".")]
    root: PathBuf,
    #[arg(long, default_value_t = 2025)]
    year: u16,
    #[arg(long, default_value = "December")]
    month: String,
    /// Day 4: a cell is removable below this many occupied neighbors
    #[arg(long, default_value_t = ErosionConfig::default().threshold)]
    threshold: usize,
    /// Day 4: character marking an occupied cell
    #[arg(long, default_value_t = ErosionConfig::default().marker)]
    marker: char,
    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn day_mode_path(&self, day: u8) -> PathBuf {
        self.root
            .join(self.year.to_string())
            .join(capitalize(&self.month))
            .join(format!("Day{:02}", day))
            .join("data")
            .join("input.csv")
    }

    fn input_path(&self, day: u8) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => self.day_mode_path(day),
        }
    }
}

fn day_listing(cli: &Cli) -> Vec<String> {
    days::AVAILABLE
        .map(|day| {
            let path = cli.day_mode_path(day);
            let status = if path.is_file() { "input found" } else { "no input" };
            format!("Day {day:02}: {status} at {}", path.display())
        })
        .collect()
}

// "december" and "DECEMBER" both name the `December` directory
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn enable_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    if cli.list {
        println!("\n========= Days =========");
        for line in day_listing(&cli) {
            println!("{line}");
        }
        return Ok(());
    }

    let Some(day) = cli.day else {
        bail!("no day given");
    };
    let path = cli.input_path(day);
    let config = ErosionConfig {
        marker: cli.marker,
        threshold: cli.threshold,
    };

    let total = timed("total", || -> Result<days::Answers> {
        let input = fs::read_to_string(&path)
            .with_context(|| format!("Input file not found: {}", path.display()))?;
        info!(day, path = %path.display(), "running");
        days::run(day, &input, &config)
    });
    let answers = total.value?;

    println!("\n========= Answers =========");
    println!("Part 1: {}", answers.part1.value);
    println!("Part 2: {}", answers.part2.value);

    println!("\n========= Timings =========");
    println!("Part 1 Time: {}ms", answers.part1.millis());
    println!("Part 2 Time: {}ms", answers.part2.millis());

    println!("\nTotal Runtime: {} ms\n", total.elapsed.as_millis());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{capitalize, day_listing, Cli};

    #[test]
    fn resolve_day_mode_path() {
        let cli = Cli::parse_from(["solver", "5", "--root", "puzzles", "--month", "dECEMBER"]);
        assert_eq!(cli.day, Some(5));
        assert_eq!(cli.input_path(5), PathBuf::from("puzzles/2025/December/Day05/data/input.csv"));
    }

    #[test]
    fn explicit_input_wins() {
        let cli = Cli::parse_from(["solver", "4", "--input", "mine.txt", "--year", "2024"]);
        assert_eq!(cli.input_path(4), PathBuf::from("mine.txt"));
        assert_eq!(cli.threshold, 4);
        assert_eq!(cli.marker, '@');
    }

    #[test]
    fn list_instead_of_day() {
        assert!(Cli::try_parse_from(["solver"]).is_err());
        assert!(Cli::try_parse_from(["solver", "3", "--list"]).is_err());

        let cli = Cli::parse_from(["solver", "--list", "--root", "no/such/root"]);
        assert!(cli.list);
        let listing = day_listing(&cli);
        assert_eq!(listing.len(), 6);
        assert_eq!(listing[0], format!("Day 01: no input at {}", PathBuf::from("no/such/root/2025/December/Day01/data/input.csv").display()));
        assert!(listing.iter().all(|line| line.contains("no input")));
    }

    #[test]
    fn capitalize_month() {
        assert_eq!(capitalize("december"), "December");
        assert_eq!(capitalize(""), "");
    }
}
