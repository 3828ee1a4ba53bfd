//! CLI argument parsing using clap

use clap::Parser;

/// Advent of Code harness runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Process all solutions for a given year", version)]
pub struct Args {
    /// The year to process
    #[arg(value_name = "YEAR")]
    pub year: u16,

    /// Print out the results with just simple prints
    #[arg(short, long)]
    pub simple: bool,

    /// Force run a specific day, bypassing any caching
    #[arg(short = 'r', long = "run-day", value_parser = clap::value_parser!(u8).range(1..=25))]
    pub run_day: Option<u8>,
}
