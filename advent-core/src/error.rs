//! Error types for the puzzle framework

use std::path::PathBuf;
use thiserror::Error;

/// Error type for locating and reading a day's input file
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist
    #[error("Input file not found ({0})")]
    NotFound(PathBuf),

    /// IO error while reading the input file
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a part
///
/// Any variant aborts the whole run; puzzle failures are programming or
/// input errors, not transient conditions.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The input file could not be read
    #[error(transparent)]
    Input(#[from] InputError),

    /// The input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The puzzle has no answer for the given input
    #[error("No solution: {0}")]
    NoSolution(String),
}

/// Error type for registry dispatch
#[derive(Debug, Error)]
pub enum SolverError {
    /// No puzzle registered for the given year and day
    #[error("No puzzle registered for year {0} day {1}")]
    NotFound(u16, u8),

    /// Error occurred while solving
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a puzzle for a year-day combination that already exists
    #[error("Duplicate puzzle registration for year {0} day {1}")]
    DuplicatePuzzle(u16, u8),
}
