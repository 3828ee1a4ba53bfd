//! Filesystem discovery of available puzzle targets

use advent_core::Target;
use std::path::Path;

/// First year with puzzles.
pub const FIRST_YEAR: u16 = 2015;
/// Last year scanned when no year is given.
pub const LAST_YEAR: u16 = 2020;
/// Highest day probed within a year.
pub const MAX_DAY: u8 = 25;

/// Enumerate targets whose day directory exists under `root`.
///
/// With a year given only that year is scanned, otherwise every year in the
/// known range, oldest first. Days are probed in ascending order and
/// scanning stops at the first gap: puzzles are added strictly in day order,
/// so a missing day means no later day exists for that year.
///
/// The sequence is lazy and carries no state; re-invoking re-scans the
/// filesystem.
pub fn discover(root: &Path, year: Option<u16>) -> impl Iterator<Item = Target> + '_ {
    let years = match year {
        Some(y) => y..=y,
        None => FIRST_YEAR..=LAST_YEAR,
    };

    years.flat_map(move |y| {
        (1..=MAX_DAY)
            .map(move |d| Target::new(y, d))
            .take_while(move |target| target.dir(root).is_dir())
    })
}
