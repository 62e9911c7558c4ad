use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mineboard_core::{Board, BoardConfig, CellCount, Coord, seeded};
use std::hint::black_box;

const TIERS: [(&str, Coord, Coord, CellCount); 3] = [
    ("small", 9, 9, 10),
    ("medium", 16, 16, 40),
    ("large", 16, 30, 99),
];

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for (name, rows, columns, mines) in TIERS {
        let config = BoardConfig::new(rows, columns, mines).expect("valid tier");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut rng = seeded(0x5eed);
            b.iter(|| Board::new(black_box(config), &mut rng));
        });
    }
    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood");
    for (name, rows, columns, _) in TIERS {
        // a single corner mine leaves nearly the whole board to one flood
        let board = Board::from_mine_coords((rows, columns), &[(0, 0)]).expect("valid layout");
        let target = (rows - 1, columns - 1);
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter_batched(
                || board.clone(),
                |mut board| board.reveal(black_box(target)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_create, bench_flood);
criterion_main!(benches);
