//! I Was Told There Would Be No Math: wrapping paper and ribbon for presents.

use advent_core::{Part, ParseError, Puzzle, PuzzlePlugin, Solution, SolveError, input_lines};
use std::path::Path;

pub struct Day02;

inventory::submit! {
    PuzzlePlugin { year: 2015, day: 2, puzzle: &Day02 }
}

impl Puzzle for Day02 {
    fn solve_part(&self, dir: &Path, part: Part) -> Result<Solution, SolveError> {
        let lines = input_lines(dir)?;
        let boxes = parse_boxes(&lines)?;
        Ok(match part {
            Part::One => paper(&boxes).into(),
            Part::Two => ribbon(&boxes).into(),
        })
    }
}

fn parse_boxes(lines: &[String]) -> Result<Vec<[i64; 3]>, ParseError> {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let dims: Vec<i64> = line
                .split('x')
                .map(|dim| {
                    dim.parse().map_err(|_| {
                        ParseError::InvalidFormat(format!("bad dimension in {:?}", line))
                    })
                })
                .collect::<Result<_, _>>()?;

            <[i64; 3]>::try_from(dims)
                .map_err(|_| ParseError::InvalidFormat(format!("expected LxWxH in {:?}", line)))
        })
        .collect()
}

fn paper(boxes: &[[i64; 3]]) -> i64 {
    boxes
        .iter()
        .map(|&[l, w, h]| {
            let sides = [l * w, w * h, h * l];
            let slack = sides[0].min(sides[1]).min(sides[2]);
            2 * (sides[0] + sides[1] + sides[2]) + slack
        })
        .sum()
}

fn ribbon(boxes: &[[i64; 3]]) -> i64 {
    boxes
        .iter()
        .map(|&[l, w, h]| {
            let perimeters = [2 * (l + w), 2 * (w + h), 2 * (h + l)];
            let wrap = perimeters[0].min(perimeters[1]).min(perimeters[2]);
            wrap + l * w * h
        })
        .sum()
}
