//! Progress reporting: plain lines or a live per-year table

use advent_core::{Part, Solution, Target};
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write, stdout};

/// Receives runner events as each part is attempted and solved.
pub trait Progress {
    /// A new year's targets are about to run.
    fn year_started(&mut self, year: u16);

    /// A part missed the cache and is being computed.
    fn part_running(&mut self, target: &Target, part: Part);

    /// A part's answer is known, from cache or freshly computed.
    fn part_solved(&mut self, target: &Target, part: Part, solution: &Solution);
}

/// Simple mode: one line per answer, in the order the runner produces them.
pub struct PlainProgress;

impl Progress for PlainProgress {
    fn year_started(&mut self, _year: u16) {}

    fn part_running(&mut self, _target: &Target, _part: Part) {}

    fn part_solved(&mut self, target: &Target, part: Part, solution: &Solution) {
        println!("{}", plain_line(target, part, solution));
    }
}

/// One output line in simple mode.
fn plain_line(target: &Target, part: Part, solution: &Solution) -> String {
    format!(
        "{} Day {} - Part {}: {}",
        target.year, target.day, part, solution
    )
}

const DAYS: usize = 25;

/// Live table mode: one table per year, one row per possible day, one column
/// per part. Cells start empty, show `...` while a part is computing, and
/// settle on the answer. Every update repaints the table in place by moving
/// the cursor back to its top.
///
/// Rendering is purely presentational: draw failures are swallowed.
pub struct TableProgress<W: Write = Stdout> {
    out: W,
    /// Restricts rendering to one year; other years still run, silently.
    display_year: Option<u16>,
    year: u16,
    cells: [[String; 2]; DAYS],
    active: bool,
    drawn_lines: u16,
}

impl TableProgress<Stdout> {
    pub fn new(display_year: Option<u16>) -> Self {
        Self::with_writer(stdout(), display_year)
    }
}

impl<W: Write> TableProgress<W> {
    pub fn with_writer(out: W, display_year: Option<u16>) -> Self {
        Self {
            out,
            display_year,
            year: 0,
            cells: Default::default(),
            active: false,
            drawn_lines: 0,
        }
    }

    fn set_cell(&mut self, day: u8, part: Part, text: String) {
        if !self.active {
            return;
        }
        if let Some(row) = self.cells.get_mut(day as usize - 1) {
            row[(part.number() - 1) as usize] = text;
        }
        let _ = self.redraw(true);
    }

    fn redraw(&mut self, reposition: bool) -> io::Result<()> {
        if reposition && self.drawn_lines > 0 {
            queue!(self.out, cursor::MoveToPreviousLine(self.drawn_lines))?;
        }

        let day_width = "Day 25".len();
        let part_width = self
            .cells
            .iter()
            .flatten()
            .map(String::len)
            .chain(["Part 1".len()])
            .max()
            .unwrap_or(0);
        let width = day_width + 2 * part_width + 6;

        let mut lines = Vec::with_capacity(DAYS + 3);
        lines.push(format!(
            "{:^width$}",
            format!("\u{1f384} Year {} \u{1f384}", self.year)
        ));
        lines.push(format!(
            "{:<day_width$}   {:<part_width$}   {:<part_width$}",
            "", "Part 1", "Part 2"
        ));
        lines.push("\u{2500}".repeat(width));
        for (i, row) in self.cells.iter().enumerate() {
            lines.push(format!(
                "{:<day_width$}   {:<part_width$}   {:<part_width$}",
                format!("Day {}", i + 1),
                row[0],
                row[1]
            ));
        }

        for line in &lines {
            queue!(
                self.out,
                Clear(ClearType::CurrentLine),
                Print(line),
                Print("\n")
            )?;
        }

        self.drawn_lines = lines.len() as u16;
        self.out.flush()
    }
}

impl<W: Write> Progress for TableProgress<W> {
    fn year_started(&mut self, year: u16) {
        self.active = self.display_year.is_none_or(|y| y == year);
        if !self.active {
            return;
        }

        self.year = year;
        self.cells = Default::default();
        self.drawn_lines = 0;
        let _ = self.redraw(false);
    }

    fn part_running(&mut self, target: &Target, part: Part) {
        self.set_cell(target.day, part, "...".to_string());
    }

    fn part_solved(&mut self, target: &Target, part: Part, solution: &Solution) {
        self.set_cell(target.day, part, solution.to_string());
    }
}
