//! Advent of Code harness framework
//!
//! Core types shared between the runner and the per-day puzzle modules:
//! targets, answers, the puzzle trait, and a registry that maps (year, day)
//! pairs to implementations.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining one day's puzzle
//! - An answer type that is either an integer or a string
//! - A registry system populated at startup through `inventory` plugins
//! - A helper for reading a day's `input.txt`
//!
//! # Quick Example
//!
//! ```
//! use advent_core::{Part, Puzzle, RegistryBuilder, Solution, SolveError, Target};
//! use std::path::Path;
//!
//! struct Echo;
//!
//! impl Puzzle for Echo {
//!     fn solve_part(&self, _dir: &Path, part: Part) -> Result<Solution, SolveError> {
//!         Ok(Solution::Int(part.number() as i64))
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2015, 1, &Echo)
//!     .unwrap()
//!     .build();
//!
//! let target = Target::new(2015, 1);
//! let answer = registry.solve(&target, Path::new("."), Part::One).unwrap();
//! assert_eq!(answer, Solution::Int(1));
//! ```
//!
//! # Plugin Registration
//!
//! Day modules register themselves by submitting a [`PuzzlePlugin`]:
//!
//! ```ignore
//! inventory::submit! {
//!     PuzzlePlugin { year: 2015, day: 1, puzzle: &Day01 }
//! }
//! ```
//!
//! The binary then builds the full registry with
//! [`RegistryBuilder::register_all_plugins`] without naming any day.

mod error;
mod input;
mod puzzle;
mod registry;
mod solution;
mod target;

// Re-export public API
pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use input::{INPUT_FILE, input_lines};
pub use puzzle::{Part, Puzzle};
pub use registry::{PuzzlePlugin, PuzzleRegistry, RegistryBuilder};
pub use solution::Solution;
pub use target::Target;

// Re-export inventory for use by day modules
pub use inventory;
