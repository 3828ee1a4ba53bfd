//! Advent of Code puzzle solutions with automatic registration
//!
//! One directory module per day, with the day's `input.txt` next to the
//! code so the harness can hash and re-run a day when either changes. Each
//! module submits a `PuzzlePlugin` so the CLI builds its registry without
//! naming any day explicitly.

pub mod year_2015;
pub mod year_2020;
