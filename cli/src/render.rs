// cli/src/render.rs
#![forbid(unsafe_code)]

use std::thread;
use std::time::Duration;

use wordwarp_engine::{render_ascii, Cells, Level, Pause, PlayEvent, Pos, SessionObserver};

/// Renders the event stream as ASCII frames and paces phases with short
/// sleeps. Holds its own copy of the cells and mirrors the token position
/// from events only; it never reaches back into the session.
pub struct ConsoleObserver {
    cells: Cells,
    target: Pos,
    pos: Pos,
    sleep_ms: u64,
}

impl ConsoleObserver {
    pub fn new(level: &Level, pos: Pos, sleep_ms: u64) -> Self {
        Self {
            cells: level.cells,
            target: level.target,
            pos,
            sleep_ms,
        }
    }

    fn frame(&self) -> String {
        render_ascii(&self.cells, self.pos, self.target)
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_event(&mut self, ev: &PlayEvent) {
        match ev {
            PlayEvent::CharStart { index, ch } => {
                println!("character {}: {}", index + 1, ch);
            }
            PlayEvent::WarpScan { symbol, candidates } => {
                let cells: Vec<String> = candidates
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                println!("warp to '{}': candidates {}", symbol, cells.join(" "));
            }
            PlayEvent::Warped { to } => {
                self.pos = *to;
                print!("{}", self.frame());
            }
            PlayEvent::Moved { to, delta } => {
                self.pos = *to;
                println!("vowel move ({:+}, {:+})", delta.0, delta.1);
                print!("{}", self.frame());
            }
            PlayEvent::Reached { .. } => println!("Target reached!"),
            PlayEvent::Halted { .. } => {}
        }
    }

    fn pause(&mut self, at: Pause) -> bool {
        // Longer beats before a warp lands and between characters, matching
        // the highlight-then-jump rhythm.
        let ms = match at {
            Pause::BeforeWarp | Pause::NextChar => self.sleep_ms.saturating_mul(3) / 2,
            Pause::AfterWarp | Pause::AfterMove => self.sleep_ms,
        };
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
        true
    }
}
