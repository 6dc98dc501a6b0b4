//! Search Benchmarks
//!
//! Performance benchmarks for evaluation and shallow searches using Criterion.

use chess_search::{
    evaluate_position, find_best_move, reply, select_candidates, Board, RootPerspective,
    SearchPosition, SearchSettings, SearchStats,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME_FEN: &str = "r3k2r/ppp2ppp/2n1bn2/3qp3/3P4/2N1BN2/PPP2PPP/R2QK2R b KQkq - 0 8";

fn bench_evaluate_position_starting(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("evaluate_position_starting", |b| {
        b.iter(|| black_box(evaluate_position(&board)))
    });
}

fn bench_select_candidates_middlegame(c: &mut Criterion) {
    let mut board = Board::from_fen(MIDDLEGAME_FEN).unwrap();

    c.bench_function("select_candidates_middlegame", |b| {
        b.iter(|| {
            let moves = board.legal_moves();
            let mut stats = SearchStats::default();
            black_box(select_candidates(&mut board, moves, false, &mut stats).unwrap())
        })
    });
}

fn bench_best_move_depth_3(c: &mut Criterion) {
    let mut board = Board::default();

    c.bench_function("find_best_move_depth_3", |b| {
        b.iter(|| black_box(find_best_move(&mut board, 3, RootPerspective::SideToMove).unwrap()))
    });
}

fn bench_reply_depth_5(c: &mut Criterion) {
    let settings = SearchSettings {
        depth: 5,
        perspective: RootPerspective::SideToMove,
    };

    c.bench_function("reply_middlegame_depth_5", |b| {
        b.iter(|| black_box(reply(MIDDLEGAME_FEN, &settings).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_evaluate_position_starting,
    bench_select_candidates_middlegame,
    bench_best_move_depth_3,
    bench_reply_depth_5,
);
criterion_main!(benches);
