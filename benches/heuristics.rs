extern crate maze_heuristics;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use log::info;
use maze_heuristics::{oracle::distances_to_goal, prelude::*};

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to trace to enable the internal timings.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("Backward Distance Oracle");

    init();

    for size in [41, 101, 201] {
        let maze = generate_maze_seeded(size, size, GeneratorConfig::default(), 4).unwrap();
        let (_, goal) = maze.default_endpoints();

        let id = format!("Distances to goal, Maze Size: ({}, {})", size, size);
        group.bench_function(&id, |b| b.iter(|| distances_to_goal(&maze, goal)));
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve");

    for size in [41, 101] {
        for config in [GeneratorConfig::PERFECT, GeneratorConfig::default()] {
            let maze = generate_maze_seeded(size, size, config, 4).unwrap();
            let (start, goal) = maze.default_endpoints();
            let label = if config.multiple_paths { "Loops" } else { "Perfect" };

            for kind in HeuristicKind::ALL {
                let solution = solve(&maze, start, goal, kind).unwrap();
                info!(
                    "{} {}x{} with {}: path length {:?}, expanded {}",
                    label,
                    size,
                    size,
                    kind,
                    solution.path_len(),
                    solution.expanded
                );

                let id = format!(
                    "Solve, {} Maze, Maze Size: ({}, {}), Heuristic: {}",
                    label, size, size, kind
                );
                group.bench_function(&id, |b| b.iter(|| solve(&maze, start, goal, kind)));
            }
        }
    }
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compare Heuristics");
    // every iteration trains two models
    group.sample_size(20);

    let (width, height) = (41, 41);
    let maze = generate_maze_seeded(height, width, GeneratorConfig::default(), 8).unwrap();
    let (start, goal) = maze.default_endpoints();

    let id = format!("Compare all, Maze Size: ({}, {})", width, height);
    group.bench_function(&id, |b| b.iter(|| compare_heuristics(&maze, start, goal)));

    #[cfg(feature = "parallel")]
    {
        let problems: Vec<_> = (0..16)
            .map(|seed| {
                let maze =
                    generate_maze_seeded(height, width, GeneratorConfig::default(), seed).unwrap();
                let (start, goal) = maze.default_endpoints();
                (maze, start, goal)
            })
            .collect();

        let id = format!(
            "Compare batch, Parallel, 16 Mazes, Maze Size: ({}, {})",
            width, height
        );
        group.bench_function(&id, |b| {
            b.iter(|| maze_heuristics::compare_batch(&problems))
        });
    }
}

criterion_group!(benches, bench_oracle, bench_solve, bench_compare);
criterion_main!(benches);
