// cli/src/play.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use wordwarp_engine::{
    hint, Dictionary, GenReport, Halt, LevelGenerator, Session, WordOutcome, MIN_WORD_CHARS,
};

use crate::render::ConsoleObserver;

/// Interactive play loop: one word per attempt from stdin, `hint` and `quit`
/// keywords, a fresh level on every solve.
pub fn run(seed: u64, dict: &Dictionary, sleep_ms: u64) {
    let mut generator = LevelGenerator::new(seed);

    let (level, report) = generator.generate(dict);
    warn_on_fallback(&report);
    let mut session = Session::new(level);

    println!("Move the bracketed token onto the empty target cell (·).");
    println!("Type a word of {MIN_WORD_CHARS}+ Hangeul syllables; `hint` for a suggestion, `quit` to leave.");
    print!("{}", session.render_ascii());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "hint" | "?" => {
                let level = session.level();
                match hint(&level.cells, session.pos(), level.target, dict) {
                    Some(word) => println!("Suggested word: {}", word),
                    None => println!("No solving word from the current position."),
                }
                continue;
            }
            _ => {}
        }

        if input.chars().count() < MIN_WORD_CHARS {
            println!("Words need at least {MIN_WORD_CHARS} characters.");
            continue;
        }

        let mut obs = ConsoleObserver::new(session.level(), session.pos(), sleep_ms);
        match session.play_word(input, &mut obs) {
            WordOutcome::Reached { chars_used } => {
                println!("Reached the target in {chars_used} character(s). Next level!");
                let (level, report) = generator.generate(dict);
                warn_on_fallback(&report);
                session.replace_level(level);
                print!("{}", session.render_ascii());
            }
            WordOutcome::Exhausted => {
                println!("Word used up before the target. Token returned to the start of the attempt.");
                print!("{}", session.render_ascii());
            }
            WordOutcome::Halted { index, ch, halt } => {
                match halt {
                    Halt::NotHangeul => {
                        println!("'{ch}' (character {}) is not a Hangeul syllable.", index + 1)
                    }
                    Halt::NoActivation => println!(
                        "'{ch}' does not match the consonant under the token; attempt rolled back."
                    ),
                }
                print!("{}", session.render_ascii());
            }
            WordOutcome::Cancelled => {
                println!("Word cancelled; token rolled back.");
                print!("{}", session.render_ascii());
            }
            WordOutcome::Busy => println!("A word is already in flight."),
        }
    }
}

fn warn_on_fallback(report: &GenReport) {
    if !report.solvable {
        // Generation gave up; play proceeds on an unsolved board.
        eprintln!(
            "warning: no solvable level within {} attempts; using the last candidate. Check the dictionary or grid settings.",
            report.attempts
        );
    }
}
