#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to solve Mazes with A* and compare learned Heuristics against the Manhattan distance.
//!
//! ## Introduction
//! A* is only as good as its Heuristic. On a Grid with 4-connected movement the Manhattan
//! distance is the textbook choice: it never overestimates, so the Paths are always optimal,
//! but it knows nothing about walls and lets the search wander into dead ends.
//!
//! This crate implements two Heuristics that learn the actual distances of a Maze before the
//! search starts, and a harness to compare all three on the same problem:
//! - [`ManhattanHeuristic`]: `|Δrow| + |Δcol|`, no training.
//! - [`KnnHeuristic`]: weighted k-nearest-neighbor regression over known distances, blended
//!   with the Manhattan distance and inflated next to walls.
//! - [`TreeHeuristic`]: a regression tree over position, offset to the goal and local wall
//!   density.
//!
//! Both learned Heuristics are trained on the output of the [Backward Distance
//! Oracle](oracle::distances_to_goal), a breadth-first search from the goal. They may
//! overestimate, so **Paths found with them are not guaranteed to be the shortest**.
//!
//! ## Examples
//! Solving a Maze:
//! ```
//! use maze_heuristics::{solve, HeuristicKind, Maze};
//!
//! // # = wall, . = open
//! let maze: Maze = concat!(
//!     "#######\n",
//!     "#...#.#\n",
//!     "#.#.#.#\n",
//!     "#.#...#\n",
//!     "#######",
//! ).parse().unwrap();
//!
//! let solution = solve(&maze, (1, 1), (1, 5), HeuristicKind::Manhattan).unwrap();
//!
//! assert_eq!(solution.path_len(), Some(8));
//! // * = solution
//! assert_eq!(solution.maze.to_string(), concat!(
//!     "#######\n",
//!     "#***#*#\n",
//!     "#.#*#*#\n",
//!     "#.#***#\n",
//!     "#######",
//! ));
//! ```
//! The Maze passed in is never modified. A copy with the Path marked on it is returned as part
//! of the [`Solution`], along with the Path itself and the time it took.
//!
//! ### Comparing Heuristics
//! ```
//! use maze_heuristics::{compare_heuristics, generate_maze_seeded, GeneratorConfig};
//!
//! let maze = generate_maze_seeded(21, 21, GeneratorConfig::default(), 42).unwrap();
//! let (start, goal) = maze.default_endpoints();
//!
//! let comparison = compare_heuristics(&maze, start, goal).unwrap();
//!
//! for run in comparison.runs() {
//!     assert!(run.solution.is_solved());
//!     println!("{}: {:?}", run.kind, run.solution.elapsed);
//! }
//! ```
//!
//! ### Custom Heuristics
//! Anything implementing [`Heuristic`] can drive the search. Every search should get its own
//! instance, since the learned state belongs to one Maze and one goal:
//! ```
//! use maze_heuristics::{a_star_search, KnnConfig, KnnHeuristic, Maze};
//!
//! # let maze: Maze = "#####\n#...#\n#####".parse().unwrap();
//! let mut heuristic = KnnHeuristic::new(KnnConfig {
//!     model_weight: 0.9,
//!     ..Default::default()
//! });
//! let solution = a_star_search(&maze, (1, 1), (1, 3), &mut heuristic).unwrap();
//!
//! assert_eq!(solution.oracle_distance, Some(2));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`compare_batch`] runs many comparisons on the rayon thread pool.
//! - `log`: trace timings of the training and search phases through the `log` crate.

/// A shorthand for Points on the grid: `(row, col)`
pub type Point = (usize, usize);

/// The Cost of a Path, in steps
pub type Cost = usize;

type PointMap<V> = hashbrown::HashMap<Point, V>;
type PointSet = hashbrown::HashSet<Point>;

#[cfg(feature = "log")]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {
		let now = std::time::Instant::now();
		log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
		#[allow(unused)]
		let $timer = now;
	};
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {};
}

mod error;
pub use self::error::{MazeError, Result};

mod maze;
pub use self::maze::{Cell, Maze};

mod path;
pub use self::path::Path;

pub mod neighbors;

pub mod oracle;

pub mod regression_tree;
pub use self::regression_tree::TreeConfig;

pub mod heuristic;
pub use self::heuristic::{
	maze_features, Heuristic, HeuristicKind, KnnConfig, KnnHeuristic, ManhattanHeuristic,
	TreeHeuristic,
};

mod search;
pub use self::search::{a_star_search, solve, Solution};

mod compare;
#[cfg(feature = "parallel")]
pub use self::compare::compare_batch;
pub use self::compare::{compare_heuristics, Comparison, RunReport};

mod generator;
pub use self::generator::{generate_maze, generate_maze_seeded, GeneratorConfig};

/// The most commonly used items
pub mod prelude {
	pub use crate::{
		a_star_search, compare_heuristics, generate_maze_seeded, solve, Cell, GeneratorConfig,
		Heuristic, HeuristicKind, Maze, Point, Solution,
	};
}
