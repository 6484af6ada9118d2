// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod constants;
mod geometry;
mod grid;
mod jamo;
mod level;
mod session;
mod transition;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use constants::{GEN_MAX_ATTEMPTS, GRID_SIZE, MIN_START_TARGET_DIST, MIN_WORD_CHARS};
pub use geometry::Pos;
pub use grid::{closest_to, fill_random, render_ascii, symbol_at, warp_candidates, Cells};
pub use jamo::{
    compose, decompose, vowel_delta, Syllable, CHO, GRID_CONSONANTS, JONG, JUNG, SYLLABLE_BASE,
    SYLLABLE_COUNT,
};
pub use level::Level;
pub use session::{NoopObserver, Pause, PlayEvent, Session, SessionObserver, WordOutcome};
pub use transition::{apply_char, CharStep, Halt, WarpStep};
