//! Chess Engine Benchmarks
//!
//! Performance benchmarks for the rule checks and the king-safety search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fdchess::{Board, ChessService, Color, MoveRules, QuickGameSimulation};

fn bench_standard_board(c: &mut Criterion) {
    c.bench_function("standard_board", |b| b.iter(|| black_box(Board::standard())));
}

fn bench_possible_moves_starting(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("possible_moves_starting_position", |b| {
        b.iter(|| {
            let total: usize = board
                .pieces_of(Color::White)
                .map(|piece| piece.possible_moves(&board).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_stalemate_search_starting(c: &mut Criterion) {
    //! Worst case for the search: every piece has to be tried
    let board = Board::standard();

    c.bench_function("stalemate_search_starting_position", |b| {
        b.iter(|| black_box(board.is_king_in_stalemate(Color::White)))
    });
}

fn bench_scholars_mate(c: &mut Criterion) {
    let simulation = QuickGameSimulation::scholars_mate();

    c.bench_function("scholars_mate_full_game", |b| {
        b.iter(|| {
            let mut service = ChessService::new();
            black_box(simulation.run(&mut service).len())
        })
    });
}

criterion_group!(
    benches,
    bench_standard_board,
    bench_possible_moves_starting,
    bench_stalemate_search_starting,
    bench_scholars_mate,
);
criterion_main!(benches);
