use log::info;
use maze_heuristics::{compare_batch, prelude::*, Comparison};
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;

const SIZE: usize = 41;
const MAZES: usize = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::thread_rng();

    let problems: Vec<_> = (0..MAZES)
        .map(|_| {
            let seed: u64 = rng.gen();
            let maze = generate_maze_seeded(SIZE, SIZE, GeneratorConfig::default(), seed)
                .expect("SIZE is odd and at least 5");
            let (start, goal) = maze.default_endpoints();
            (maze, start, goal)
        })
        .collect();
    info!("finished Maze gen");

    let comparisons: Vec<Comparison> = compare_batch(&problems)
        .into_iter()
        .map(|result| result.expect("endpoints are within the Maze"))
        .collect();
    info!("finished solving");

    if let Some(run) = comparisons[0].get(HeuristicKind::Manhattan) {
        println!("{}\n", run.solution.maze);
    }

    let mut results: HashMap<HeuristicKind, Vec<(Duration, Option<usize>)>> = HashMap::new();
    for comparison in &comparisons {
        for run in comparison.runs() {
            results
                .entry(run.kind)
                .or_default()
                .push((run.solution.elapsed, run.solution.path_len()));
        }
    }

    let mut wins: HashMap<HeuristicKind, usize> = HashMap::new();
    for comparison in &comparisons {
        if let Some(run) = comparison.fastest() {
            *wins.entry(run.kind).or_default() += 1;
        }
    }

    let best = results[&HeuristicKind::Manhattan]
        .iter()
        .map(|(_, len)| *len)
        .collect::<Vec<_>>();

    for kind in HeuristicKind::ALL {
        let results = &results[&kind];
        let times = results.iter().map(|r| r.0.as_secs_f64() * 1000.0);
        let min_time = times.clone().fold(f64::INFINITY, f64::min);
        let max_time = times.clone().fold(0.0, f64::max);
        let avg_time = times.sum::<f64>() / results.len() as f64;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1.is_some() == b.is_some()));

        let lengths = results
            .iter()
            .filter_map(|r| r.1)
            .zip(best.iter().filter_map(|p| *p))
            .map(|(len, best)| best as f64 / len as f64);

        let min_len = lengths.clone().fold(f64::INFINITY, f64::min);
        let max_len = lengths.clone().fold(0.0_f64, f64::max);
        let avg_len = lengths.clone().sum::<f64>() / lengths.count() as f64;

        println!(
            "{:>13} | {:.3}ms - {:.3}ms; {:.3}ms | {:.2}% - {:.2}%; {:.2}% | fastest {}/{}",
            kind.name(),
            min_time,
            max_time,
            avg_time,
            min_len * 100.0,
            max_len * 100.0,
            avg_len * 100.0,
            wins.get(&kind).copied().unwrap_or(0),
            MAZES,
        );
    }
}
