//! Report Repair: find expense entries summing to 2020.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use std::path::Path;

pub struct Day01;

inventory::submit! {
    PuzzlePlugin { year: 2020, day: 1, puzzle: &Day01 }
}

const TARGET: i64 = 2020;

impl Puzzle for Day01 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let lines = input_lines(dir)?;
        let entries = parse_entries(&lines)?;
        match part {
            Part::One => product_of_pair(&entries).map(Solution::from),
            Part::Two => product_of_triple(&entries).map(Solution::from),
        }
    }
}

fn parse_entries(lines: &[String]) -> Result<Vec<i64>, ParseError> {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("expected integer, got {:?}", line)))
        })
        .collect()
}

fn product_of_pair(entries: &[i64]) -> Result<i64, SolveError> {
    for (i, &a) in entries.iter().enumerate() {
        for &b in &entries[i + 1..] {
            if a + b == TARGET {
                return Ok(a * b);
            }
        }
    }
    Err(SolveError::NoSolution("no pair sums to 2020".into()))
}

fn product_of_triple(entries: &[i64]) -> Result<i64, SolveError> {
    for (i, &a) in entries.iter().enumerate() {
        for (j, &b) in entries[i + 1..].iter().enumerate() {
            for &c in &entries[i + 1 + j + 1..] {
                if a + b + c == TARGET {
                    return Ok(a * b * c);
                }
            }
        }
    }
    Err(SolveError::NoSolution("no triple sums to 2020".into()))
}
