use std::hint::black_box;

use clearfield_core::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [64, 256, 1024] {
        let empty = Board::new(MineLayout::from_mine_coords((size, size), &[]).unwrap());
        group.bench_function(format!("empty_{size}x{size}"), |b| {
            b.iter_batched(
                || empty.clone(),
                |mut board| black_box(board.reveal((size / 2, size / 2))),
                BatchSize::LargeInput,
            )
        });
    }

    let config = GameConfig::new(256, 256, GameConfig::DEFAULT_MINE_PROBABILITY).unwrap();
    let sparse = Board::create(&config, RandomMinefieldGenerator::new(0xB0A4D)).unwrap();
    group.bench_function("sparse_256x256_all_cells", |b| {
        b.iter_batched(
            || sparse.clone(),
            |mut board| {
                let safe: Vec<Position> = board
                    .iter_cells()
                    .filter(|cell| !cell.is_mine())
                    .map(|cell| cell.position())
                    .collect();
                for pos in safe {
                    black_box(board.reveal(pos).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn generate(c: &mut Criterion) {
    let config = GameConfig::new(512, 512, GameConfig::DEFAULT_MINE_PROBABILITY).unwrap();
    c.bench_function("generate_512x512", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(RandomMinefieldGenerator::new(seed).generate(&config).unwrap())
        })
    });
}

criterion_group!(benches, flood_fill, generate);
criterion_main!(benches);
