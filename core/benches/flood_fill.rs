use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::*;

fn bench_open_empty_board(c: &mut Criterion) {
    c.bench_function("open 255x255 single mine", |b| {
        b.iter_batched(
            || GameSession::from_layout((255, 255), &[(254, 254)]).unwrap(),
            |mut session| black_box(session.reveal(black_box((0, 0))).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_random_opening(c: &mut Criterion) {
    let mut group = c.benchmark_group("random opening");
    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("intermediate", GameConfig::intermediate()),
        ("expert", GameConfig::expert()),
    ] {
        let mut seed = 0;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed += 1;
                let mut session = GameSession::new(config, SessionOptions::new(seed)).unwrap();
                let (rows, cols) = config.size();
                black_box(session.reveal((rows / 2, cols / 2)).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_open_empty_board, bench_random_opening);
criterion_main!(benches);
