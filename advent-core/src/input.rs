//! Input file access for day modules

use crate::error::InputError;
use std::fs;
use std::path::Path;

/// Name of the input file expected in every day directory.
pub const INPUT_FILE: &str = "input.txt";

/// Read `input.txt` from a day directory, one entry per line with trailing
/// whitespace stripped.
///
/// A missing file is a [`InputError::NotFound`]; there is no fallback.
pub fn input_lines(dir: &Path) -> Result<Vec<String>, InputError> {
    let path = dir.join(INPUT_FILE);
    if !path.exists() {
        return Err(InputError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    Ok(content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect())
}
