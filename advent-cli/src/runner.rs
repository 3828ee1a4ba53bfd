//! Orchestration: cache lookup, puzzle dispatch and reporting per target

use crate::cache::ResultCache;
use crate::error::CliError;
use crate::hash;
use crate::progress::Progress;
use advent_core::{Part, PuzzleRegistry, Target};
use std::path::Path;

/// Runs a stream of targets one part at a time, consulting the cache before
/// dispatching to the registry.
///
/// Puzzle failures are not caught here: they propagate and abort the whole
/// run, leaving already-cached results valid.
pub struct Runner<'a> {
    registry: &'a PuzzleRegistry,
    cache: &'a mut ResultCache,
    root: &'a Path,
    force_day: Option<u8>,
}

impl<'a> Runner<'a> {
    pub fn new(
        registry: &'a PuzzleRegistry,
        cache: &'a mut ResultCache,
        root: &'a Path,
        force_day: Option<u8>,
    ) -> Self {
        Self {
            registry,
            cache,
            root,
            force_day,
        }
    }

    /// Solve both parts of every target, part 1 before part 2.
    ///
    /// A part is recomputed when its day is forced or its key is absent from
    /// the cache; otherwise the cached answer is reused. The cache is
    /// flushed unconditionally at the end, which covers non-auto-flush mode.
    pub fn run(
        &mut self,
        targets: impl IntoIterator<Item = Target>,
        progress: &mut dyn Progress,
    ) -> Result<(), CliError> {
        let mut current_year = None;

        for target in targets {
            if current_year != Some(target.year) {
                current_year = Some(target.year);
                progress.year_started(target.year);
            }

            let dir = target.dir(self.root);
            let digest = hash::hash_folder(&dir)?;

            for part in Part::ALL {
                let key = format!("{}-{}", digest, part.cache_tag());
                let forced = self.force_day == Some(target.day);

                let solution = match self.cache.get(&key) {
                    Some(cached) if !forced => cached.clone(),
                    _ => {
                        progress.part_running(&target, part);
                        let solution = self.registry.solve(&target, &dir, part)?;
                        self.cache.put(key, solution.clone())?;
                        solution
                    }
                };

                progress.part_solved(&target, part, &solution);
            }
        }

        self.cache.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{Puzzle, RegistryBuilder, Solution, SolveError};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Counts invocations so tests can observe cache hits and bypasses.
    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl Puzzle for Counting {
        fn solve_part(&self, _dir: &Path, part: Part) -> Result<Solution, SolveError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Solution::Int((n * 10 + part.number() as usize) as i64))
        }
    }

    struct Failing;

    impl Puzzle for Failing {
        fn solve_part(&self, _dir: &Path, _part: Part) -> Result<Solution, SolveError> {
            Err(SolveError::NoSolution("unsolvable".into()))
        }
    }

    /// Records every event the runner reports.
    #[derive(Default)]
    struct Recording {
        events: Vec<String>,
    }

    impl Progress for Recording {
        fn year_started(&mut self, year: u16) {
            self.events.push(format!("year {}", year));
        }

        fn part_running(&mut self, target: &Target, part: Part) {
            self.events.push(format!("running {} part {}", target, part));
        }

        fn part_solved(&mut self, target: &Target, part: Part, solution: &Solution) {
            self.events
                .push(format!("solved {} part {}: {}", target, part, solution));
        }
    }

    fn day_dir(root: &Path, year: u16, day: u8, input: &str) {
        let dir = Target::new(year, day).dir(root);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("input.txt"), input).unwrap();
    }

    fn leaked_counting() -> &'static Counting {
        Box::leak(Box::new(Counting::default()))
    }

    #[test]
    fn miss_computes_and_caches_both_parts() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "abc\n");

        let puzzle = leaked_counting();
        let registry = RegistryBuilder::new().register(2015, 1, puzzle).unwrap().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();
        let mut progress = Recording::default();

        let mut runner = Runner::new(&registry, &mut cache, temp.path(), None);
        runner
            .run(vec![Target::new(2015, 1)], &mut progress)
            .unwrap();

        assert_eq!(puzzle.calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            progress.events,
            vec![
                "year 2015",
                "running 2015 day 1 part 1",
                "solved 2015 day 1 part 1: 1",
                "running 2015 day 1 part 2",
                "solved 2015 day 1 part 2: 12",
            ]
        );

        // The final flush persisted both entries
        let reloaded = ResultCache::load(&cache_path, false).unwrap();
        let digest = hash::hash_folder(&Target::new(2015, 1).dir(temp.path())).unwrap();
        assert_eq!(
            reloaded.get(&format!("{}-part_1", digest)),
            Some(&Solution::Int(1))
        );
        assert_eq!(
            reloaded.get(&format!("{}-part_2", digest)),
            Some(&Solution::Int(12))
        );
    }

    #[test]
    fn hit_skips_computation() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "abc\n");

        let puzzle = leaked_counting();
        let registry = RegistryBuilder::new().register(2015, 1, puzzle).unwrap().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();

        let digest = hash::hash_folder(&Target::new(2015, 1).dir(temp.path())).unwrap();
        cache
            .put(format!("{}-part_1", digest), Solution::Int(100))
            .unwrap();
        cache
            .put(format!("{}-part_2", digest), Solution::Int(200))
            .unwrap();

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), None);
        runner
            .run(vec![Target::new(2015, 1)], &mut progress)
            .unwrap();

        assert_eq!(puzzle.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            progress.events,
            vec![
                "year 2015",
                "solved 2015 day 1 part 1: 100",
                "solved 2015 day 1 part 2: 200",
            ]
        );
    }

    #[test]
    fn forced_day_bypasses_and_overwrites_cache() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "abc\n");

        let puzzle = leaked_counting();
        let registry = RegistryBuilder::new().register(2015, 1, puzzle).unwrap().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();

        let digest = hash::hash_folder(&Target::new(2015, 1).dir(temp.path())).unwrap();
        cache
            .put(format!("{}-part_1", digest), Solution::Int(100))
            .unwrap();
        cache
            .put(format!("{}-part_2", digest), Solution::Int(200))
            .unwrap();

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), Some(1));
        runner
            .run(vec![Target::new(2015, 1)], &mut progress)
            .unwrap();

        assert_eq!(puzzle.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get(&format!("{}-part_1", digest)), Some(&Solution::Int(1)));
        assert_eq!(cache.get(&format!("{}-part_2", digest)), Some(&Solution::Int(12)));
    }

    #[test]
    fn forcing_one_day_leaves_others_cached() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "first\n");
        day_dir(temp.path(), 2015, 2, "second\n");

        let day1 = leaked_counting();
        let day2 = leaked_counting();
        let registry = RegistryBuilder::new()
            .register(2015, 1, day1)
            .unwrap()
            .register(2015, 2, day2)
            .unwrap()
            .build();

        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();
        for day in [1, 2] {
            let digest = hash::hash_folder(&Target::new(2015, day).dir(temp.path())).unwrap();
            for part in Part::ALL {
                cache
                    .put(format!("{}-{}", digest, part.cache_tag()), Solution::Int(0))
                    .unwrap();
            }
        }

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), Some(2));
        runner
            .run(
                vec![Target::new(2015, 1), Target::new(2015, 2)],
                &mut progress,
            )
            .unwrap();

        assert_eq!(day1.calls.load(Ordering::SeqCst), 0);
        assert_eq!(day2.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn parts_never_share_a_cache_key() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "abc\n");

        let puzzle = leaked_counting();
        let registry = RegistryBuilder::new().register(2015, 1, puzzle).unwrap().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), None);
        runner
            .run(vec![Target::new(2015, 1)], &mut progress)
            .unwrap();

        let digest = hash::hash_folder(&Target::new(2015, 1).dir(temp.path())).unwrap();
        let part1 = cache.get(&format!("{}-part_1", digest)).cloned();
        let part2 = cache.get(&format!("{}-part_2", digest)).cloned();
        assert_eq!(part1, Some(Solution::Int(1)));
        assert_eq!(part2, Some(Solution::Int(12)));
    }

    #[test]
    fn puzzle_failure_aborts_the_run() {
        let temp = TempDir::new().unwrap();
        day_dir(temp.path(), 2015, 1, "abc\n");

        let registry = RegistryBuilder::new().register(2015, 1, &Failing).unwrap().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), None);
        let result = runner.run(vec![Target::new(2015, 1)], &mut progress);

        assert!(matches!(result, Err(CliError::Solver(_))));
    }

    #[test]
    fn missing_day_folder_aborts_the_run() {
        let temp = TempDir::new().unwrap();

        let registry = RegistryBuilder::new().build();
        let cache_path = temp.path().join(".cache.json");
        let mut cache = ResultCache::load(&cache_path, false).unwrap();

        let mut progress = Recording::default();
        let mut runner = Runner::new(&registry, &mut cache, temp.path(), None);
        let result = runner.run(vec![Target::new(2015, 1)], &mut progress);

        assert!(matches!(result, Err(CliError::Hash(_))));
    }
}
