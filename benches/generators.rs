use criterion::{criterion_group, criterion_main, Criterion};
use labyrinth::{
    automata,
    generators,
    grid_dimensions::GridDimensions,
    settings::{CaveSettings, EvolutionRule},
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_ellers_maze_50(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(50), ColumnsCount(50)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(50);

    c.bench_function("ellers_maze_50", move |b| {
        b.iter(|| generators::ellers(dimensions, &mut rng))
    });
}

fn bench_cave_50(c: &mut Criterion) {
    let settings = CaveSettings::new(50, 50, 45).with_generations(40);
    let mut rng = ChaCha8Rng::seed_from_u64(50);

    c.bench_function("cave_50", move |b| {
        b.iter(|| automata::generate_cave(&settings, &mut rng))
    });
}

fn bench_next_generation_50(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(50), ColumnsCount(50)).unwrap();
    let cave = automata::seed_cave(dimensions, 45, &mut ChaCha8Rng::seed_from_u64(50));
    let rule = EvolutionRule::default();

    c.bench_function("next_generation_50", move |b| {
        b.iter(|| automata::next_generation(&cave, &rule))
    });
}

criterion_group!(
    benches,
    bench_ellers_maze_50,
    bench_cave_50,
    bench_next_generation_50
);
criterion_main!(benches);
