//! Password Philosophy: validate passwords against their stated policy.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use anyhow::{Context, ensure};
use std::path::Path;

pub struct Day02;

inventory::submit! {
    PuzzlePlugin { year: 2020, day: 2, puzzle: &Day02 }
}

impl Puzzle for Day02 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let lines = input_lines(dir)?;
        let policies = parse_policies(&lines)?;
        let valid = match part {
            Part::One => policies.iter().filter(|p| valid_by_count(p)).count(),
            Part::Two => policies.iter().filter(|p| valid_by_position(p)).count(),
        };
        Ok(valid.into())
    }
}

struct Policy {
    lo: usize,
    hi: usize,
    letter: char,
    password: String,
}

fn parse_policies(lines: &[String]) -> Result<Vec<Policy>, ParseError> {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            parse_policy(line)
                .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", line, e)))
        })
        .collect()
}

/// Parse one `1-3 a: abcde` line.
fn parse_policy(line: &str) -> anyhow::Result<Policy> {
    let (range, rest) = line.split_once(' ').context("missing space after range")?;
    let (lo, hi) = range.split_once('-').context("missing dash in range")?;
    let (letter, password) = rest.split_once(": ").context("missing letter separator")?;

    let mut letters = letter.chars();
    let letter = letters.next().context("empty policy letter")?;
    ensure!(letters.next().is_none(), "policy letter must be a single character");

    Ok(Policy {
        lo: lo.parse().context("bad lower bound")?,
        hi: hi.parse().context("bad upper bound")?,
        letter,
        password: password.to_string(),
    })
}

/// Old policy: the letter must occur between `lo` and `hi` times.
fn valid_by_count(policy: &Policy) -> bool {
    let occurrences = policy
        .password
        .chars()
        .filter(|&c| c == policy.letter)
        .count();
    (policy.lo..=policy.hi).contains(&occurrences)
}

/// New policy: exactly one of the 1-based positions `lo`, `hi` holds the letter.
fn valid_by_position(policy: &Policy) -> bool {
    let chars: Vec<char> = policy.password.chars().collect();
    let holds = |position: usize| {
        position
            .checked_sub(1)
            .and_then(|i| chars.get(i))
            .is_some_and(|&c| c == policy.letter)
    };
    holds(policy.lo) != holds(policy.hi)
}
