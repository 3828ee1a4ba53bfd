//! Not Quite Lisp: follow `(` and `)` floor instructions.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use std::path::Path;

pub struct Day01;

inventory::submit! {
    PuzzlePlugin { year: 2015, day: 1, puzzle: &Day01 }
}

impl Puzzle for Day01 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let instructions = input_lines(dir)?.concat();
        match part {
            Part::One => final_floor(&instructions).map(Solution::from),
            Part::Two => first_basement(&instructions).map(Solution::from),
        }
    }
}

fn final_floor(instructions: &str) -> Result<i64, SolveError> {
    instructions.chars().try_fold(0i64, |floor, c| match c {
        '(' => Ok(floor + 1),
        ')' => Ok(floor - 1),
        other => Err(ParseError::InvalidFormat(format!("unexpected instruction {:?}", other)).into()),
    })
}

fn first_basement(instructions: &str) -> Result<i64, SolveError> {
    let mut floor = 0i64;
    for (i, c) in instructions.chars().enumerate() {
        match c {
            '(' => floor += 1,
            ')' => floor -= 1,
            other => {
                return Err(
                    ParseError::InvalidFormat(format!("unexpected instruction {:?}", other)).into(),
                );
            }
        }
        if floor == -1 {
            return Ok(i as i64 + 1);
        }
    }
    Err(SolveError::NoSolution("never reached the basement".into()))
}
