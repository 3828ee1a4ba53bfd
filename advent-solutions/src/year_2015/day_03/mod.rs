//! Perfectly Spherical Houses in a Vacuum: deliver presents on an infinite grid.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use std::collections::HashSet;
use std::path::Path;

pub struct Day03;

inventory::submit! {
    PuzzlePlugin { year: 2015, day: 3, puzzle: &Day03 }
}

impl Puzzle for Day03 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let moves = input_lines(dir)?.concat();
        match part {
            Part::One => houses_visited(&moves).map(Solution::from),
            Part::Two => houses_with_robot(&moves).map(Solution::from),
        }
    }
}

fn houses_visited(moves: &str) -> Result<usize, SolveError> {
    let mut pos = (0i32, 0i32);
    let mut seen = HashSet::from([pos]);
    for c in moves.chars() {
        pos = step(pos, c)?;
        seen.insert(pos);
    }
    Ok(seen.len())
}

/// Santa and robo-santa alternate moves, both starting at the origin.
fn houses_with_robot(moves: &str) -> Result<usize, SolveError> {
    let mut santas = [(0i32, 0i32); 2];
    let mut seen = HashSet::from([(0, 0)]);
    for (i, c) in moves.chars().enumerate() {
        let santa = &mut santas[i % 2];
        *santa = step(*santa, c)?;
        seen.insert(*santa);
    }
    Ok(seen.len())
}

fn step((x, y): (i32, i32), c: char) -> Result<(i32, i32), SolveError> {
    Ok(match c {
        '^' => (x, y + 1),
        'v' => (x, y - 1),
        '>' => (x + 1, y),
        '<' => (x - 1, y),
        other => {
            return Err(ParseError::InvalidFormat(format!("unknown move {:?}", other)).into());
        }
    })
}
