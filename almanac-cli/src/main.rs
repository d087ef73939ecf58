//! almanac - find the minimum mapped value of an almanac input

mod cli;
mod error;
mod output;

use almanac_engine::{Almanac, par_minimum_output, par_minimum_scalar};
use chrono::Utc;
use clap::Parser;
use cli::{Args, SeedMode};
use error::CliError;
use output::{OutputFormatter, QueryReport};
use std::io::Read;
use std::path::Path;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let input = read_input(args.input.as_deref())?;

    let parse_start = Utc::now();
    let almanac = Almanac::parse(&input)?;
    let parse_end = Utc::now();

    let pool = build_pool(args.threads)?;

    let solve_start = Utc::now();
    let minimum = match args.mode {
        SeedMode::Scalars => {
            pool.install(|| par_minimum_scalar(almanac.seed_values(), almanac.chain()))
        }
        SeedMode::Ranges => {
            let ranges = almanac.seed_ranges()?;
            pool.install(|| par_minimum_output(&ranges, almanac.chain()))
        }
    }
    .ok_or(CliError::NoSeeds)?;
    let solve_end = Utc::now();

    let formatter = OutputFormatter::new(args.quiet);
    formatter.print_report(&QueryReport {
        mode_label: args.mode.label(),
        minimum,
        parse_duration: parse_end - parse_start,
        solve_duration: solve_end - solve_start,
    });

    Ok(())
}

/// Read the almanac text from a file, or stdin when no path was given
fn read_input(path: Option<&Path>) -> Result<String, std::io::Error> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Build the thread pool the query runs on
fn build_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("almanac.txt");
        std::fs::write(&path, "seeds: 1 2\n").unwrap();

        let input = read_input(Some(&path)).unwrap();
        assert_eq!(input, "seeds: 1 2\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("does_not_exist.txt");
        assert!(read_input(Some(&path)).is_err());
    }

    #[test]
    fn test_pool_with_explicit_thread_count() {
        let pool = build_pool(Some(2)).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }

    #[test]
    fn test_end_to_end_queries() {
        let input = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48
";
        let almanac = Almanac::parse(input).unwrap();
        let pool = build_pool(Some(2)).unwrap();

        let scalars =
            pool.install(|| par_minimum_scalar(almanac.seed_values(), almanac.chain()));
        assert_eq!(scalars, Some(13));

        let ranges = almanac.seed_ranges().unwrap();
        let by_range = pool.install(|| par_minimum_output(&ranges, almanac.chain()));
        assert_eq!(by_range, Some(57));
    }
}
