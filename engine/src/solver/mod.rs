// engine/src/solver/mod.rs
#![forbid(unsafe_code)]

mod generate;
mod simulate;

/**
 * Curated solver public API.
 *
 * Everything here replays the same transition kernel the interactive
 * executor uses; there is no second copy of the rules.
 */
pub use generate::{GenReport, LevelGenerator};
pub use simulate::{find_solutions, hint, simulate};
