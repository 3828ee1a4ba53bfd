//! Puzzle identity and folder layout

use std::fmt;
use std::path::{Path, PathBuf};

/// One puzzle, identified by year and day.
///
/// Targets are created fresh on every discovery pass and never persisted;
/// the folder path is derived deterministically from the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub year: u16,
    pub day: u8,
}

impl Target {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Directory holding this puzzle's implementation and input,
    /// `{root}/year_{year}/day_{day:02}`.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(format!("year_{}", self.year))
            .join(format!("day_{:02}", self.day))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}
