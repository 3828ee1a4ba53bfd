//! Puzzle registry mapping (year, day) pairs to implementations

use crate::error::{RegistrationError, SolverError};
use crate::puzzle::{Part, Puzzle};
use crate::solution::Solution;
use crate::target::Target;
use std::collections::HashMap;
use std::path::Path;

/// Plugin information for automatic puzzle registration
///
/// Day modules submit one of these to make themselves discoverable:
///
/// ```ignore
/// inventory::submit! {
///     PuzzlePlugin { year: 2015, day: 1, puzzle: &Day01 }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle implementation (type-erased)
    pub puzzle: &'static dyn Puzzle,
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);

/// Builder for constructing a [`PuzzleRegistry`]
///
/// Registration detects duplicates; the registry is immutable after
/// construction.
pub struct RegistryBuilder {
    puzzles: HashMap<(u16, u8), &'static dyn Puzzle>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            puzzles: HashMap::new(),
        }
    }

    /// Register a puzzle for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the puzzle registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate puzzle for this year-day combination
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        puzzle: &'static dyn Puzzle,
    ) -> Result<Self, RegistrationError> {
        if self.puzzles.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicatePuzzle(year, day));
        }
        self.puzzles.insert((year, day), puzzle);
        Ok(self)
    }

    /// Register all collected puzzle plugins
    ///
    /// Iterates through every plugin submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            self = self.register(plugin.year, plugin.day, plugin.puzzle)?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            puzzles: self.puzzles,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up puzzles
pub struct PuzzleRegistry {
    puzzles: HashMap<(u16, u8), &'static dyn Puzzle>,
}

impl PuzzleRegistry {
    /// Look up the puzzle for a specific year and day
    pub fn get(&self, year: u16, day: u8) -> Option<&'static dyn Puzzle> {
        self.puzzles.get(&(year, day)).copied()
    }

    /// Solve one part of a target, reading input from `dir`
    ///
    /// # Returns
    /// * `Ok(Solution)` - The computed answer
    /// * `Err(SolverError::NotFound)` - No puzzle registered for the target
    /// * `Err(SolverError::Solve)` - The puzzle itself failed
    pub fn solve(&self, target: &Target, dir: &Path, part: Part) -> Result<Solution, SolverError> {
        let puzzle = self
            .get(target.year, target.day)
            .ok_or(SolverError::NotFound(target.year, target.day))?;

        Ok(puzzle.solve_part(dir, part)?)
    }

    /// Number of registered puzzles
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
