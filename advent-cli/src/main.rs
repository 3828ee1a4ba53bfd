//! Advent CLI - discovers, runs and caches Advent of Code solutions

mod cache;
mod cli;
mod config;
mod discover;
mod error;
mod hash;
mod progress;
mod runner;

// Import advent-solutions to link the puzzle plugins
use advent_solutions as _;

use advent_core::RegistryBuilder;
use cache::ResultCache;
use clap::Parser;
use cli::Args;
use config::Config;
use progress::{PlainProgress, Progress, TableProgress};
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let mut cache = ResultCache::load(&config.cache_file, true)?;

    let mut reporter: Box<dyn Progress> = if config.simple {
        Box::new(PlainProgress)
    } else {
        Box::new(TableProgress::new(config.display_year))
    };

    let targets = discover::discover(&config.solutions_root, Some(config.year));
    let mut runner = Runner::new(&registry, &mut cache, &config.solutions_root, config.force_day);
    runner.run(targets, reporter.as_mut())
}
