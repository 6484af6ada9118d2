// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod dict;
pub mod engine;
pub mod solver;

// Re-export the bits the CLI and the test suites use most:
pub use dict::{DictError, Dictionary};
pub use engine::{
    apply_char, decompose, render_ascii, Cells, CharStep, Halt, Level, NoopObserver, Pause,
    PlayEvent, Pos, Session, SessionObserver, Syllable, WordOutcome, GRID_SIZE, MIN_WORD_CHARS,
};
pub use solver::{find_solutions, hint, simulate, GenReport, LevelGenerator};
