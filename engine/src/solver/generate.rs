// engine/src/solver/generate.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::dict::Dictionary;
use crate::engine::{
    fill_random, Level, Pos, GEN_MAX_ATTEMPTS, GRID_SIZE, MIN_START_TARGET_DIST,
};
use crate::solver::simulate::find_solutions;

/// Outcome of one `generate` call.
#[derive(Clone, Copy, Debug)]
pub struct GenReport {
    /// Attempts consumed (1..=GEN_MAX_ATTEMPTS).
    pub attempts: u32,
    /// False when the retry budget ran out and the last (unsolved) candidate
    /// was returned anyway. Callers surface this; play proceeds regardless.
    pub solvable: bool,
}

/// Generate-and-test level construction with a seeded RNG stream.
///
/// There is no termination proof for the random search itself; the bounded
/// retry budget is what guarantees `generate` always returns. A spent budget
/// hands back the last candidate and `GenReport` says so.
pub struct LevelGenerator {
    rng: StdRng,
}

impl LevelGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Up to GEN_MAX_ATTEMPTS times: sample endpoints, fill the board, accept
    /// as soon as the dictionary contains at least one solving word. Never
    /// fails outwardly; always terminates with a usable level.
    pub fn generate(&mut self, dict: &Dictionary) -> (Level, GenReport) {
        let mut attempts = 0u32;
        loop {
            attempts += 1;

            let (start, target) = self.sample_endpoints();
            let cells = fill_random(&mut self.rng, target);
            let level = Level {
                cells,
                start,
                target,
            };

            if !find_solutions(&level.cells, start, target, dict).is_empty() {
                return (
                    level,
                    GenReport {
                        attempts,
                        solvable: true,
                    },
                );
            }
            if attempts >= GEN_MAX_ATTEMPTS {
                return (
                    level,
                    GenReport {
                        attempts,
                        solvable: false,
                    },
                );
            }
        }
    }

    /// Start and target sampled independently and uniformly, re-drawn until
    /// their Manhattan distance reaches the minimum span.
    fn sample_endpoints(&mut self) -> (Pos, Pos) {
        loop {
            let start = self.sample_pos();
            let target = self.sample_pos();
            if start.manhattan(target) >= MIN_START_TARGET_DIST {
                return (start, target);
            }
        }
    }

    fn sample_pos(&mut self) -> Pos {
        Pos::new(
            self.rng.gen_range(0..GRID_SIZE),
            self.rng.gen_range(0..GRID_SIZE),
        )
    }
}
