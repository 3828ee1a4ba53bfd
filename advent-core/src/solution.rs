//! Answer representation shared by all puzzles

use serde::{Deserialize, Serialize};
use std::fmt;

/// The answer to one part of one puzzle, either numeric or textual.
///
/// The variant is chosen by the puzzle's own logic; the harness treats
/// answers as opaque values that only need to display and serialize.
///
/// Serialization is untagged: integers persist as JSON numbers and strings
/// as JSON strings, so the cache file stays readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Solution {
    Int(i64),
    Text(String),
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Int(n) => write!(f, "{}", n),
            Solution::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Solution {
    fn from(n: i64) -> Self {
        Solution::Int(n)
    }
}

impl From<i32> for Solution {
    fn from(n: i32) -> Self {
        Solution::Int(n.into())
    }
}

impl From<u32> for Solution {
    fn from(n: u32) -> Self {
        Solution::Int(n.into())
    }
}

impl From<usize> for Solution {
    fn from(n: usize) -> Self {
        Solution::Int(n as i64)
    }
}

impl From<String> for Solution {
    fn from(s: String) -> Self {
        Solution::Text(s)
    }
}

impl From<&str> for Solution {
    fn from(s: &str) -> Self {
        Solution::Text(s.to_string())
    }
}
