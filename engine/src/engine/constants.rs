// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const GRID_SIZE: usize = 5;

/// Words shorter than this are rejected at the input boundary, before the
/// engine is invoked.
pub const MIN_WORD_CHARS: usize = 2;

/// Minimum Manhattan distance between start and target at level creation.
pub const MIN_START_TARGET_DIST: u32 = 3;

/// Level generation retry budget. After this many rejected candidates the
/// generator hands back the last (unsolved) board and reports the fallback.
pub const GEN_MAX_ATTEMPTS: u32 = 200;
