//! Core puzzle trait and part identifiers

use crate::error::SolveError;
use crate::solution::Solution;
use std::fmt;
use std::path::Path;

/// One of the two independent questions asked about a day's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts in solve order. Part one always runs before part two
    /// within a target.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// Numeric form used in output.
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    /// Tag appended to a folder digest to form a cache key. The tag is what
    /// keeps part 1 and part 2 of the same folder from colliding.
    pub fn cache_tag(self) -> &'static str {
        match self {
            Part::One => "part_1",
            Part::Two => "part_2",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One day's puzzle.
///
/// Implementations read their own `input.txt` from the day directory handed
/// to them and return an integer or string answer. Solving must be
/// idempotent for fixed folder contents: the result cache keys on a digest
/// of the directory and relies on that.
pub trait Puzzle: Sync {
    /// Solve one part of this puzzle.
    ///
    /// # Arguments
    /// * `dir` - The day directory containing the puzzle's input file
    /// * `part` - Which of the two parts to solve
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError>;
}
