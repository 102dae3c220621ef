//! Draughts Engine Benchmarks
//!
//! Performance benchmarks for move generation, evaluation and search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughts_engine::api::create_initial_board;
use draughts_engine::evaluation::evaluate;
use draughts_engine::move_gen::generate_moves;
use draughts_engine::{Searcher, Side};

fn bench_initial_board(c: &mut Criterion) {
    c.bench_function("create_initial_board", |b| {
        b.iter(|| black_box(create_initial_board()))
    });
}

fn bench_move_generation_both_sides(c: &mut Criterion) {
    let board = create_initial_board();

    c.bench_function("generate_moves_both_sides", |b| {
        b.iter(|| {
            let white = generate_moves(&board, Side::White);
            let black = generate_moves(&board, Side::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = create_initial_board();

    c.bench_function("evaluate_starting", |b| {
        b.iter(|| black_box(evaluate(&board, Side::White)))
    });
}

fn bench_search_depth_four(c: &mut Criterion) {
    let board = create_initial_board();
    let plain = Searcher::default();
    let pruned = Searcher::default().with_alpha_beta(true);

    c.bench_function("minimax_depth_4_starting", |b| {
        b.iter(|| black_box(plain.search(&board, Side::White)))
    });
    c.bench_function("alphabeta_depth_4_starting", |b| {
        b.iter(|| black_box(pruned.search(&board, Side::White)))
    });
}

criterion_group!(
    benches,
    bench_initial_board,
    bench_move_generation_both_sides,
    bench_evaluate_starting,
    bench_search_depth_four,
);
criterion_main!(benches);
