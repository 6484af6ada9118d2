// engine/src/engine/transition.rs
#![forbid(unsafe_code)]

/*
Per-character transition kernel

Phase order is fixed and runs once per character:

    activation check -> warp phase -> vowel-move phase

1. Activation: the consonant under the token must equal the syllable's
   initial, or (when a final exists) its final. Otherwise the whole word
   attempt halts at this character.
2. Warp (final-consonant syllables only): the warp symbol is the consonant
   the cell did NOT match. All matching cells except the current one are
   collected in row-major order; the token relocates to the candidate
   closest (Manhattan) to the target, first-in-scan-order on ties. No
   candidates -> no movement.
3. Vowel move: the vowel's displacement vector, each coordinate clamped to
   the grid.

The kernel is the single rule source for both the silent solver and the
interactive executor; it is pure and deterministic, so the two can never
drift apart.
*/

use crate::engine::geometry::Pos;
use crate::engine::grid::{closest_to, symbol_at, warp_candidates, Cells};
use crate::engine::jamo::{decompose, vowel_delta, Syllable};

/// Why processing of a word halted at a character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Halt {
    /// Character is outside the precomposed syllable block.
    NotHangeul,
    /// The cell symbol matches neither the initial nor the final consonant.
    NoActivation,
}

/// Warp phase result for one character.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WarpStep {
    /// The consonant warped to (the "other" consonant of the syllable).
    pub symbol: char,
    /// Every matching cell in row-major scan order, for highlighting.
    pub candidates: Vec<Pos>,
    /// The selected candidate.
    pub to: Pos,
}

/// Full observable result of one character: enough for a presentation layer
/// to redraw the grid and move an avatar phase by phase.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharStep {
    pub syllable: Syllable,
    pub from: Pos,
    /// `None` when the syllable has no final consonant or no matching cell
    /// exists anywhere else on the grid.
    pub warp: Option<WarpStep>,
    /// Vowel displacement applied after the warp phase.
    pub delta: (i32, i32),
    /// Token position after the vowel move.
    pub to: Pos,
    /// Position equals target; remaining characters must not be processed.
    pub reached: bool,
}

/// Apply one character to the board state. Pure: same inputs, same outputs.
pub fn apply_char(cells: &Cells, pos: Pos, target: Pos, ch: char) -> Result<CharStep, Halt> {
    let syllable = decompose(ch).ok_or(Halt::NotHangeul)?;

    let cell = symbol_at(cells, pos);
    let matches_cho = cell == Some(syllable.cho);
    let matches_jong = syllable.jong.is_some() && cell == syllable.jong;
    if !matches_cho && !matches_jong {
        return Err(Halt::NoActivation);
    }

    let mut cur = pos;
    let mut warp = None;
    if let Some(jong) = syllable.jong {
        // Warp to the consonant the cell did not match. When the cell
        // matches both (cho == jong), the cho match wins, exactly as in the
        // activation check.
        let symbol = if matches_cho { jong } else { syllable.cho };
        let candidates = warp_candidates(cells, cur, symbol);
        if let Some(to) = closest_to(&candidates, target) {
            cur = to;
            warp = Some(WarpStep {
                symbol,
                candidates,
                to,
            });
        }
    }

    let delta = vowel_delta(syllable.jung);
    let to = cur.stepped(delta.0, delta.1);
    let reached = to == target;

    Ok(CharStep {
        syllable,
        from: pos,
        warp,
        delta,
        to,
        reached,
    })
}
