// engine/src/engine/grid.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::constants::GRID_SIZE;
use crate::engine::geometry::Pos;
use crate::engine::jamo::GRID_CONSONANTS;

/// Cell matrix, indexed `cells[y][x]`. `None` marks the single empty target
/// cell; every other cell holds one of the 14 grid consonants.
pub type Cells = [[Option<char>; GRID_SIZE]; GRID_SIZE];

#[inline]
pub fn symbol_at(cells: &Cells, p: Pos) -> Option<char> {
    cells[p.y][p.x]
}

/// Fill every non-target cell with a uniformly random grid consonant and
/// leave the target cell empty. Deterministic w.r.t. the RNG state.
pub fn fill_random(rng: &mut StdRng, target: Pos) -> Cells {
    let mut cells: Cells = [[None; GRID_SIZE]; GRID_SIZE];
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if x == target.x && y == target.y {
                continue;
            }
            cells[y][x] = Some(*GRID_CONSONANTS.choose(rng).unwrap());
        }
    }
    cells
}

/// All cells holding `symbol`, excluding `from`, in row-major scan order
/// (y outer, x inner). The order is part of the warp tie-break contract.
pub fn warp_candidates(cells: &Cells, from: Pos, symbol: char) -> Vec<Pos> {
    let mut out = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let p = Pos::new(x, y);
            if p == from {
                continue;
            }
            if cells[y][x] == Some(symbol) {
                out.push(p);
            }
        }
    }
    out
}

/// First candidate minimizing Manhattan distance to `target`. Candidates
/// arrive in row-major scan order, so ties resolve to the first minimal one
/// encountered during the scan.
pub fn closest_to(candidates: &[Pos], target: Pos) -> Option<Pos> {
    let mut best: Option<(Pos, u32)> = None;
    for &p in candidates {
        let d = p.manhattan(target);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// ASCII frame for terminal rendering: `[c]` marks the token, `(c)` the
/// target cell, `·` the empty cell.
pub fn render_ascii(cells: &Cells, pos: Pos, target: Pos) -> String {
    let mut s = String::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let p = Pos::new(x, y);
            let sym = cells[y][x].unwrap_or('·');
            if p == pos {
                s.push_str(&format!("[{}]", sym));
            } else if p == target {
                s.push_str(&format!("({})", sym));
            } else {
                s.push_str(&format!(" {} ", sym));
            }
        }
        s.push('\n');
    }
    s.push_str(&format!(
        "pos=({}, {}) target=({}, {})\n",
        pos.x, pos.y, target.x, target.y
    ));
    s
}
