use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parlorchess::{moves, Board, Coord, PieceKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_delta_legal");
    let deltas: Vec<_> = Coord::iter()
        .flat_map(|src| Coord::iter().map(move |dst| src.delta_to(dst)))
        .collect();
    for kind in [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        group.bench_function(format!("{:?}", kind), |b| {
            b.iter(|| {
                for &d in &deltas {
                    black_box(moves::is_delta_legal(kind, d));
                }
            })
        });
    }
}

fn bench_apply_move(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let pairs: Vec<(Coord, Coord)> = (0..256)
        .map(|_| {
            (
                Coord::from_index(rng.gen_range(0..64)),
                Coord::from_index(rng.gen_range(0..64)),
            )
        })
        .collect();
    let board = Board::initial();
    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let mut board = board.clone();
            for &(src, dst) in &pairs {
                black_box(board.apply_move(src, dst).is_ok());
            }
        })
    });
}

fn bench_execute(c: &mut Criterion) {
    let inputs = ["a1 f1", "c1 e3", "b2 e2", "e4 e5", "i9 e4"];
    let board = Board::initial();
    c.bench_function("execute", |b| {
        b.iter(|| {
            let mut board = board.clone();
            for input in inputs {
                black_box(moves::execute(&mut board, input).is_ok());
            }
        })
    });
}

criterion_group!(board, bench_legality, bench_apply_move, bench_execute);

criterion_main!(board);
