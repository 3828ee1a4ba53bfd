//! Configuration resolution from CLI args and environment

use crate::cache::DEFAULT_CACHE_FILE;
use crate::cli::Args;
use std::path::PathBuf;

/// Root of the per-day puzzle directories, relative to the working directory.
pub const DEFAULT_SOLUTIONS_ROOT: &str = "advent-solutions/src";

/// Resolved runtime configuration
pub struct Config {
    /// Year to process
    pub year: u16,
    /// Plain printing instead of the live table
    pub simple: bool,
    /// Day whose cache entries are bypassed and overwritten
    pub force_day: Option<u8>,
    /// Root directory of the day folders
    pub solutions_root: PathBuf,
    /// Cache file location
    pub cache_file: PathBuf,
    /// Table-mode display filter from the `YEAR` environment variable
    pub display_year: Option<u16>,
}

impl Config {
    /// Build config from CLI args, reading the display filter from `YEAR`.
    pub fn from_args(args: Args) -> Self {
        Self {
            year: args.year,
            simple: args.simple,
            force_day: args.run_day,
            solutions_root: PathBuf::from(DEFAULT_SOLUTIONS_ROOT),
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            display_year: display_year_filter(std::env::var("YEAR").ok()),
        }
    }
}

/// Parse the optional display filter. Zero and unparseable values mean no
/// filtering, matching the "unset" convention for the variable.
fn display_year_filter(raw: Option<String>) -> Option<u16> {
    raw?.parse().ok().filter(|&year| year != 0)
}
