// engine/src/engine/session.rs
#![forbid(unsafe_code)]

use crate::engine::geometry::Pos;
use crate::engine::grid::render_ascii;
use crate::engine::level::Level;
use crate::engine::transition::{apply_char, Halt};

/// Pause points between externally observable phases of a word.
///
/// Pacing is cooperative: the session calls `SessionObserver::pause` at each
/// point and the observer decides how long (if at all) to wait. Returning
/// `false` cancels the in-flight word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pause {
    /// Warp candidates are highlighted; the token has not relocated yet.
    BeforeWarp,
    /// The token has landed on the selected warp cell.
    AfterWarp,
    /// The token finished the vowel move for this character.
    AfterMove,
    /// Between characters of the word.
    NextChar,
}

/// Observation stream for the presentation layer. Events carry everything a
/// renderer needs to redraw the grid and move an avatar; the session never
/// touches presentation state.
#[derive(Clone, Debug)]
pub enum PlayEvent {
    CharStart { index: usize, ch: char },
    /// Warp phase located candidate cells for `symbol`.
    WarpScan { symbol: char, candidates: Vec<Pos> },
    Warped { to: Pos },
    Moved { to: Pos, delta: (i32, i32) },
    Reached { index: usize },
    Halted { index: usize, ch: char, halt: Halt },
}

pub trait SessionObserver {
    fn on_event(&mut self, _ev: &PlayEvent) {}

    /// Cooperative pacing hook. Return `false` to cancel the in-flight word;
    /// the session rolls the token back to where the word began.
    fn pause(&mut self, _at: Pause) -> bool {
        true
    }
}

/// Observer with no side effects: runs the full transition sequence without
/// wall-clock waits. This is what the solver-parity tests drive.
#[derive(Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Result of one word attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WordOutcome {
    /// Target reached; `chars_used` characters were consumed, the rest
    /// skipped.
    Reached { chars_used: usize },
    /// Word fully consumed without reaching the target. A normal outcome,
    /// not an error; the token is rolled back.
    Exhausted,
    /// Processing halted at `index`; the token is rolled back.
    Halted { index: usize, ch: char, halt: Halt },
    /// The observer cancelled the word; the token is rolled back.
    Cancelled,
    /// A word is already mid-transition. The new word is rejected, not
    /// queued.
    Busy,
}

/// Interactive play state: the active level plus the token position.
///
/// Owned exclusively by the play session; the level is replaced wholesale on
/// solve/abandon, never mutated. The UI holds no reference into it — it sees
/// only the `PlayEvent` stream.
pub struct Session {
    level: Level,
    pos: Pos,
    moving: bool,
}

impl Session {
    pub fn new(level: Level) -> Self {
        Self {
            pos: level.start,
            level,
            moving: false,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Replace the level wholesale and put the token on its start cell.
    pub fn replace_level(&mut self, level: Level) {
        self.pos = level.start;
        self.level = level;
    }

    pub fn render_ascii(&self) -> String {
        render_ascii(&self.level.cells, self.pos, self.level.target)
    }

    /// Drive the transition kernel over `word`, one character at a time,
    /// emitting observation events and honoring the observer's pause
    /// points.
    ///
    /// The caller validates the minimum word length (MIN_WORD_CHARS) before
    /// invoking this; non-Hangeul characters are still rejected here via
    /// decomposition failure.
    ///
    /// Rollback contract: every outcome except `Reached` restores the token
    /// to its position before the word began — full rollback, never partial.
    pub fn play_word(&mut self, word: &str, obs: &mut dyn SessionObserver) -> WordOutcome {
        if self.moving {
            return WordOutcome::Busy;
        }
        self.moving = true;
        let start = self.pos;

        let outcome = self.run_word(word, obs);
        if !matches!(outcome, WordOutcome::Reached { .. }) {
            self.pos = start;
        }

        self.moving = false;
        outcome
    }

    fn run_word(&mut self, word: &str, obs: &mut dyn SessionObserver) -> WordOutcome {
        for (index, ch) in word.chars().enumerate() {
            obs.on_event(&PlayEvent::CharStart { index, ch });

            let step = match apply_char(&self.level.cells, self.pos, self.level.target, ch) {
                Ok(step) => step,
                Err(halt) => {
                    obs.on_event(&PlayEvent::Halted { index, ch, halt });
                    return WordOutcome::Halted { index, ch, halt };
                }
            };

            if let Some(w) = &step.warp {
                obs.on_event(&PlayEvent::WarpScan {
                    symbol: w.symbol,
                    candidates: w.candidates.clone(),
                });
                if !obs.pause(Pause::BeforeWarp) {
                    return WordOutcome::Cancelled;
                }
                // Observable intermediate state: the token sits on the warp
                // cell until the vowel move runs.
                self.pos = w.to;
                obs.on_event(&PlayEvent::Warped { to: w.to });
                if !obs.pause(Pause::AfterWarp) {
                    return WordOutcome::Cancelled;
                }
            }

            self.pos = step.to;
            obs.on_event(&PlayEvent::Moved {
                to: step.to,
                delta: step.delta,
            });
            if !obs.pause(Pause::AfterMove) {
                return WordOutcome::Cancelled;
            }

            if step.reached {
                obs.on_event(&PlayEvent::Reached { index });
                return WordOutcome::Reached {
                    chars_used: index + 1,
                };
            }

            if !obs.pause(Pause::NextChar) {
                return WordOutcome::Cancelled;
            }
        }

        WordOutcome::Exhausted
    }
}
