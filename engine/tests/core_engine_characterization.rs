// engine/tests/core_engine_characterization.rs
#![forbid(unsafe_code)]

/**
 * Core engine characterization tests.
 *
 * Purpose:
 * - Lock in observable transition behavior: activation, warp selection,
 *   vowel displacement, early success, rollback.
 * - Catch regressions in the kernel shared by the solver and the
 *   interactive executor.
 *
 * What is tested:
 * - Syllable decomposition basics on known characters.
 * - The uniform-ㄱ board single-syllable walkthrough.
 * - Early success consumes no further characters.
 * - Warp candidate selection: strictly-closer wins, ties resolve to the
 *   first candidate in row-major scan order, reproducibly.
 * - Warp on a final-consonant match jumps to the initial consonant.
 * - The greedy warp commitment: simulation solves via the closest candidate
 *   only, even when a differently-chosen candidate would also (or only)
 *   have solved the position.
 * - Full rollback on every non-success outcome, including observer
 *   cancellation; the event stream seen by the presentation layer.
 *
 * How the tests work:
 * - Boards are built by hand around one symbol of interest so every warp
 *   scan has a known candidate set.
 * - Deterministic fixture seeds; repeated runs must agree exactly.
 */
use wordwarp_engine::{
    apply_char, decompose, simulate, Cells, Dictionary, Halt, Level, LevelGenerator, NoopObserver,
    Pause, PlayEvent, Pos, Session, SessionObserver, WordOutcome, GRID_SIZE,
};

fn uniform_cells(symbol: char, target: Pos) -> Cells {
    let mut cells: Cells = [[Some(symbol); GRID_SIZE]; GRID_SIZE];
    cells[target.y][target.x] = None;
    cells
}

fn level(cells: Cells, start: Pos, target: Pos) -> Level {
    Level {
        cells,
        start,
        target,
    }
}

#[test]
fn decompose_splits_syllables_into_jamo() {
    let ga = decompose('가').unwrap();
    assert_eq!(ga.cho, 'ㄱ');
    assert_eq!(ga.jung, 'ㅏ');
    assert_eq!(ga.jong, None);

    let mul = decompose('물').unwrap();
    assert_eq!(mul.cho, 'ㅁ');
    assert_eq!(mul.jung, 'ㅜ');
    assert_eq!(mul.jong, Some('ㄹ'));

    let gaps = decompose('값').unwrap();
    assert_eq!(gaps.cho, 'ㄱ');
    assert_eq!(gaps.jung, 'ㅏ');
    assert_eq!(gaps.jong, Some('ㅄ'));

    // Block edges.
    assert!(decompose('가').is_some());
    assert!(decompose('힣').is_some());

    // Outside the block: ASCII, digits, and bare jamo all fail.
    assert!(decompose('a').is_none());
    assert!(decompose('3').is_none());
    assert!(decompose('ㄱ').is_none());
    assert!(decompose('\u{ABFF}').is_none());
    assert!(decompose('\u{D7A4}').is_none());
}

#[test]
fn uniform_board_single_syllable_walkthrough() {
    // Every cell ㄱ, target (4,4) empty, start (0,0). "가" activates (initial
    // matches), has no final so no warp, and ㅏ moves +1 in x.
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '가').unwrap();
    assert!(step.warp.is_none());
    assert_eq!(step.delta, (1, 0));
    assert_eq!(step.to, Pos::new(1, 0));
    assert!(!step.reached);

    assert!(!simulate(&cells, start, target, "가"));

    // The same word through the interactive executor: exhausted and rolled
    // back to where the word began.
    let mut session = Session::new(level(cells, start, target));
    let outcome = session.play_word("가", &mut NoopObserver);
    assert_eq!(outcome, WordOutcome::Exhausted);
    assert_eq!(session.pos(), start);
}

#[test]
fn early_success_skips_remaining_characters() {
    // Target two cells to the right: the second ㅏ step lands on it, so the
    // third character must never be processed (it would halt on the empty
    // target cell).
    let target = Pos::new(2, 0);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    assert!(simulate(&cells, start, target, "가가가"));

    let mut session = Session::new(level(cells, start, target));
    let outcome = session.play_word("가가가", &mut NoopObserver);
    assert_eq!(outcome, WordOutcome::Reached { chars_used: 2 });
    assert_eq!(session.pos(), target);
}

#[test]
fn warp_tiebreak_prefers_first_in_row_major_scan() {
    // Two ㄴ cells, both Manhattan 2 from the target: (2,0) on row 0 is
    // scanned before (0,2) on row 2 and must win, every run.
    let target = Pos::new(2, 2);
    let mut cells = uniform_cells('ㄱ', target);
    cells[0][2] = Some('ㄴ');
    cells[2][0] = Some('ㄴ');
    let start = Pos::new(0, 0);

    for _ in 0..3 {
        let step = apply_char(&cells, start, target, '간').unwrap();
        let warp = step.warp.as_ref().unwrap();
        assert_eq!(warp.symbol, 'ㄴ');
        assert_eq!(warp.candidates, vec![Pos::new(2, 0), Pos::new(0, 2)]);
        assert_eq!(warp.to, Pos::new(2, 0));
        assert_eq!(step.to, Pos::new(3, 0));
    }
}

#[test]
fn warp_picks_strictly_closest_candidate_regardless_of_scan_order() {
    let target = Pos::new(2, 2);
    let mut cells = uniform_cells('ㅎ', target);
    cells[0][0] = Some('ㄱ');
    cells[1][0] = Some('ㄴ'); // (0,1), distance 3, scanned first
    cells[1][2] = Some('ㄴ'); // (2,1), distance 1
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '간').unwrap();
    let warp = step.warp.as_ref().unwrap();
    assert_eq!(warp.candidates, vec![Pos::new(0, 1), Pos::new(2, 1)]);
    assert_eq!(warp.to, Pos::new(2, 1));
    assert_eq!(step.to, Pos::new(3, 1));
}

#[test]
fn final_consonant_match_warps_to_initial() {
    // The cell matches the final of "간", so the warp symbol is the initial
    // ㄱ, whose only other occurrence is (0,3).
    let target = Pos::new(4, 4);
    let mut cells = uniform_cells('ㅎ', target);
    cells[0][0] = Some('ㄴ');
    cells[3][0] = Some('ㄱ');
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '간').unwrap();
    let warp = step.warp.as_ref().unwrap();
    assert_eq!(warp.symbol, 'ㄱ');
    assert_eq!(warp.to, Pos::new(0, 3));
    assert_eq!(step.to, Pos::new(1, 3));
}

#[test]
fn warp_with_no_candidates_does_not_move() {
    // "간" carries a final, but there is no ㄴ anywhere on the board.
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '간').unwrap();
    assert!(step.warp.is_none());
    assert_eq!(step.to, Pos::new(1, 0));
}

#[test]
fn same_symbol_warp_excludes_current_cell() {
    // "각": initial and final are both ㄱ, the cell matches the initial, so
    // the warp scans for other ㄱ cells. Closest to (4,4) are (4,3) and
    // (3,4) at distance 1; (4,3) sits on the earlier row.
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '각').unwrap();
    let warp = step.warp.as_ref().unwrap();
    assert_eq!(warp.symbol, 'ㄱ');
    assert_eq!(warp.to, Pos::new(4, 3));
    // ㅏ clamps against the right edge.
    assert_eq!(step.to, Pos::new(4, 3));
}

#[test]
fn greedy_warp_solves_when_best_candidate_wins() {
    // Single ㄴ at (2,4); "갼" warps there and ㅑ's double step lands on the
    // target.
    let target = Pos::new(4, 4);
    let mut cells = uniform_cells('ㅎ', target);
    cells[0][0] = Some('ㄱ');
    cells[4][2] = Some('ㄴ');
    let start = Pos::new(0, 0);

    assert!(simulate(&cells, start, target, "갼"));
}

#[test]
fn greedy_warp_can_miss_solutions_a_free_choice_would_find() {
    // Same board plus a decoy ㄴ at (4,3), one cell closer to the target.
    // The engine commits to the decoy; ㅑ then clamps against the edge and
    // the word fails — even though warping to (2,4) would still have solved
    // it. The greedy commitment is the contract, for the solver and for
    // live play alike.
    let target = Pos::new(4, 4);
    let mut cells = uniform_cells('ㅎ', target);
    cells[0][0] = Some('ㄱ');
    cells[4][2] = Some('ㄴ');
    cells[3][4] = Some('ㄴ');
    let start = Pos::new(0, 0);

    let step = apply_char(&cells, start, target, '갼').unwrap();
    assert_eq!(step.warp.as_ref().unwrap().to, Pos::new(4, 3));
    assert!(!step.reached);

    assert!(!simulate(&cells, start, target, "갼"));
}

#[test]
fn activation_mismatch_halts_and_rolls_back() {
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    assert_eq!(
        apply_char(&cells, start, target, '나'),
        Err(Halt::NoActivation)
    );

    let mut session = Session::new(level(cells, start, target));
    let outcome = session.play_word("나무", &mut NoopObserver);
    assert_eq!(
        outcome,
        WordOutcome::Halted {
            index: 0,
            ch: '나',
            halt: Halt::NoActivation
        }
    );
    assert_eq!(session.pos(), start);
}

#[test]
fn non_hangeul_character_halts_mid_word() {
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    let mut session = Session::new(level(cells, start, target));
    let outcome = session.play_word("가a", &mut NoopObserver);
    assert_eq!(
        outcome,
        WordOutcome::Halted {
            index: 1,
            ch: 'a',
            halt: Halt::NotHangeul
        }
    );
    // The first character had already moved the token; rollback is full,
    // not partial.
    assert_eq!(session.pos(), start);
}

struct CancelAt {
    at: Pause,
}

impl SessionObserver for CancelAt {
    fn pause(&mut self, at: Pause) -> bool {
        at != self.at
    }
}

#[test]
fn observer_cancellation_rolls_back_mid_transition() {
    let target = Pos::new(2, 2);
    let mut cells = uniform_cells('ㄱ', target);
    cells[0][2] = Some('ㄴ');
    let start = Pos::new(0, 0);

    for at in [
        Pause::BeforeWarp,
        Pause::AfterWarp,
        Pause::AfterMove,
        Pause::NextChar,
    ] {
        let mut session = Session::new(level(cells, start, target));
        let outcome = session.play_word("간가", &mut CancelAt { at });
        assert_eq!(outcome, WordOutcome::Cancelled);
        assert_eq!(session.pos(), start);
    }
}

#[derive(Default)]
struct Recorder {
    tags: Vec<&'static str>,
}

impl SessionObserver for Recorder {
    fn on_event(&mut self, ev: &PlayEvent) {
        self.tags.push(match ev {
            PlayEvent::CharStart { .. } => "char_start",
            PlayEvent::WarpScan { .. } => "warp_scan",
            PlayEvent::Warped { .. } => "warped",
            PlayEvent::Moved { .. } => "moved",
            PlayEvent::Reached { .. } => "reached",
            PlayEvent::Halted { .. } => "halted",
        });
    }
}

#[test]
fn event_stream_covers_every_observable_phase() {
    // "간" warps to the lone ㄴ at (1,2) and ㅏ then lands on the target at
    // (2,2): one full char, all phases observable.
    let target = Pos::new(2, 2);
    let mut cells = uniform_cells('ㄱ', target);
    cells[2][1] = Some('ㄴ');
    let start = Pos::new(0, 0);

    let mut session = Session::new(level(cells, start, target));
    let mut rec = Recorder::default();
    let outcome = session.play_word("간가", &mut rec);

    assert_eq!(outcome, WordOutcome::Reached { chars_used: 1 });
    assert_eq!(
        rec.tags,
        vec!["char_start", "warp_scan", "warped", "moved", "reached"]
    );
}

#[test]
fn generation_and_play_are_deterministic_for_a_seed() {
    let dict = Dictionary::builtin();

    let (l1, r1) = LevelGenerator::new(20260806).generate(&dict);
    let (l2, r2) = LevelGenerator::new(20260806).generate(&dict);
    assert_eq!(l1.cells, l2.cells);
    assert_eq!(l1.start, l2.start);
    assert_eq!(l1.target, l2.target);
    assert_eq!(r1.attempts, r2.attempts);
    assert_eq!(r1.solvable, r2.solvable);

    // Replaying any word gives the same outcome and final position.
    for word in ["바다", "물살", "학교"] {
        let a = simulate(&l1.cells, l1.start, l1.target, word);
        let b = simulate(&l2.cells, l2.start, l2.target, word);
        assert_eq!(a, b);

        let mut s1 = Session::new(l1);
        let mut s2 = Session::new(l2);
        let o1 = s1.play_word(word, &mut NoopObserver);
        let o2 = s2.play_word(word, &mut NoopObserver);
        assert_eq!(o1, o2);
        assert_eq!(s1.pos(), s2.pos());
    }
}
