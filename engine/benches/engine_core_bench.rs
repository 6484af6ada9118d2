// engine/benches/engine_core_bench.rs
#![forbid(unsafe_code)]

/**
 * Core engine micro-benchmarks.
 *
 * Focus:
 * - Transition kernel (`apply_char`), with and without a warp scan
 * - Silent word simulation and full-dictionary solution search
 * - Level generation (generate-and-test loop against the built-in list)
 */
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use wordwarp_engine::{
    apply_char, find_solutions, simulate, Cells, Dictionary, LevelGenerator, Pos, GRID_SIZE,
};

fn uniform_cells(symbol: char, target: Pos) -> Cells {
    let mut cells: Cells = [[Some(symbol); GRID_SIZE]; GRID_SIZE];
    cells[target.y][target.x] = None;
    cells
}

fn bench_apply_char(c: &mut Criterion) {
    let target = Pos::new(4, 4);
    let cells = uniform_cells('ㄱ', target);
    let start = Pos::new(0, 0);

    c.bench_function("apply_char_no_warp", |b| {
        b.iter(|| apply_char(black_box(&cells), black_box(start), black_box(target), '가'))
    });

    // "각" matches every cell, so the warp phase scans the whole board.
    c.bench_function("apply_char_full_warp_scan", |b| {
        b.iter(|| apply_char(black_box(&cells), black_box(start), black_box(target), '각'))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let dict = Dictionary::builtin();
    let (level, _) = LevelGenerator::new(7).generate(&dict);

    c.bench_function("simulate_short_word", |b| {
        b.iter(|| {
            simulate(
                black_box(&level.cells),
                black_box(level.start),
                black_box(level.target),
                "물살",
            )
        })
    });

    c.bench_function("find_solutions_builtin_dict", |b| {
        b.iter(|| {
            find_solutions(
                black_box(&level.cells),
                black_box(level.start),
                black_box(level.target),
                black_box(&dict),
            )
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let dict = Dictionary::builtin();

    c.bench_function("level_generate", |b| {
        b.iter_batched(
            || LevelGenerator::new(7),
            |mut generator| generator.generate(black_box(&dict)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_apply_char, bench_simulate, bench_generate);
criterion_main!(benches);
