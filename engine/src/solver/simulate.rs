// engine/src/solver/simulate.rs
#![forbid(unsafe_code)]

use crate::dict::Dictionary;
use crate::engine::{apply_char, Cells, Pos, MIN_WORD_CHARS};

/// Silent replay of the transition kernel. True iff `word` moves the token
/// from `start` to `target` (early-success rule) before the word is
/// exhausted or a character halts processing.
///
/// Warp selection commits to the candidate closest to the target, exactly
/// like live play. This makes simulation and play agree by construction; it
/// also means "solvable" is judged against the greedy warp only, not against
/// every candidate a free-choosing player could pick.
pub fn simulate(cells: &Cells, start: Pos, target: Pos, word: &str) -> bool {
    let mut pos = start;
    for ch in word.chars() {
        match apply_char(cells, pos, target, ch) {
            Ok(step) => {
                pos = step.to;
                if step.reached {
                    return true;
                }
            }
            Err(_) => return false,
        }
    }
    false
}

/// Dictionary-order filter of the words (MIN_WORD_CHARS+ characters) that
/// solve the position. The order is the dictionary's own; hint selection
/// sorts a copy and never re-orders this result.
pub fn find_solutions<'d>(
    cells: &Cells,
    start: Pos,
    target: Pos,
    dict: &'d Dictionary,
) -> Vec<&'d str> {
    dict.words()
        .iter()
        .map(|w| w.as_str())
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS && simulate(cells, start, target, w))
        .collect()
}

/// Shortest solving word by character count; ties keep dictionary order.
/// `None` when no dictionary word solves the position — a legitimate state,
/// not an error.
pub fn hint<'d>(cells: &Cells, start: Pos, target: Pos, dict: &'d Dictionary) -> Option<&'d str> {
    let mut solutions = find_solutions(cells, start, target, dict);
    // Stable sort: equal lengths stay in dictionary order.
    solutions.sort_by_key(|w| w.chars().count());
    solutions.first().copied()
}
