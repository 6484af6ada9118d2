// engine/src/engine/level.rs
#![forbid(unsafe_code)]

use crate::engine::geometry::Pos;
use crate::engine::grid::Cells;

/// One playable board: cells, the token's start cell, the target cell.
///
/// Invariants at creation (enforced by the generator):
/// - exactly the target cell is empty;
/// - Manhattan(start, target) >= MIN_START_TARGET_DIST.
///
/// Levels are read-only during play and replaced wholesale when solved or
/// abandoned; only the session's token position changes between words.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    pub cells: Cells,
    pub start: Pos,
    pub target: Pos,
}
