//! Toboggan Trajectory: count trees hit on slopes through a repeating map.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use std::path::Path;

pub struct Day03;

inventory::submit! {
    PuzzlePlugin { year: 2020, day: 3, puzzle: &Day03 }
}

/// (right, down) slopes checked in part two.
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

impl Puzzle for Day03 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let lines = input_lines(dir)?;
        let forest = parse_forest(&lines)?;
        Ok(match part {
            Part::One => trees_on_slope(&forest, 3, 1).into(),
            Part::Two => SLOPES
                .iter()
                .map(|&(right, down)| trees_on_slope(&forest, right, down))
                .product::<i64>()
                .into(),
        })
    }
}

struct Forest {
    rows: Vec<Vec<bool>>,
    width: usize,
}

fn parse_forest(lines: &[String]) -> Result<Forest, ParseError> {
    let rows: Vec<Vec<bool>> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    other => Err(ParseError::InvalidFormat(format!(
                        "unknown map square {:?}",
                        other
                    ))),
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

    let width = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|row| row.len() != width) {
        return Err(ParseError::InvalidFormat("ragged map rows".into()));
    }
    Ok(Forest { rows, width })
}

/// The map repeats to the right indefinitely.
fn trees_on_slope(forest: &Forest, right: usize, down: usize) -> i64 {
    if forest.width == 0 {
        return 0;
    }
    forest
        .rows
        .iter()
        .step_by(down)
        .enumerate()
        .filter(|(i, row)| row[(i * right) % forest.width])
        .count() as i64
}
