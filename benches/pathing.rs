use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use labyrinth::cells::Point;
use labyrinth::generators;
use labyrinth::maze::Maze;
use labyrinth::pathing;
use labyrinth::settings::MazeSettings;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn maze_50() -> Maze {
    generators::generate_maze(&MazeSettings::new(50, 50), &mut ChaCha8Rng::seed_from_u64(50))
        .unwrap()
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = maze_50();
        let start = Point::new(25, 25);
        b.iter(|| pathing::Distances::for_grid(&g, start))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let g = maze_50();
        let distances = pathing::Distances::for_grid(&g, Point::new(25, 25)).unwrap();
        b.iter(|| distances.furthest_points_on_grid())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = maze_50();
        let distances = pathing::Distances::for_grid(&g, Point::new(0, 0)).unwrap();
        let goal = Point::new(49, 49);
        b.iter(|| pathing::shortest_path(&g, &distances, goal))
    });
}

fn bench_solve_corner_to_corner(c: &mut Criterion) {
    c.bench_function("solve_corner_to_corner", |b| {
        let g = maze_50();
        b.iter(|| pathing::solve(&g, Point::new(0, 0), Point::new(49, 49)))
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_solve_corner_to_corner
);
criterion_main!(benches);
