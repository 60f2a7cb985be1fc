use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::Position;
use material_engine::{greedy, minimax};
use rand::rngs::StdRng;
use rand::SeedableRng;

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &(name, fen) in POSITIONS {
        let Ok(mut pos) = Position::from_fen(fen) else {
            continue;
        };
        let moves = pos.legal_moves().moves;
        group.bench_with_input(BenchmarkId::from_parameter(name), &moves, |b, moves| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(greedy::select(&mut pos, moves, &mut rng)));
        });
    }
    group.finish();
}

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);
    for &(name, fen) in POSITIONS {
        let Ok(mut pos) = Position::from_fen(fen) else {
            continue;
        };
        let moves = pos.legal_moves().moves;
        for depth in [2u8, 3] {
            let id = BenchmarkId::new(name, depth);
            group.bench_with_input(id, &moves, |b, moves| {
                b.iter(|| black_box(minimax::select_root(&mut pos, moves, depth)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_minimax);
criterion_main!(benches);
