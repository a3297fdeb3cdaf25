//! Cost estimation strategies for the A* search.
//!
//! Every strategy implements [`Heuristic`]. The search calls [`Heuristic::prepare`] once before
//! it starts and [`Heuristic::estimate`] for every Point it pushes. A Heuristic instance belongs
//! to a single solving session: learned state is tied to one Maze and one goal, so a fresh
//! instance has to be built for every search (see [`HeuristicKind::build`]).

use crate::{Cost, Maze, Point};
use std::fmt;

mod manhattan;
pub use self::manhattan::ManhattanHeuristic;

mod knn;
pub use self::knn::{KnnConfig, KnnHeuristic};

mod tree;
pub use self::tree::{maze_features, TreeHeuristic};

/// Estimates the remaining Cost from a Point to the goal.
pub trait Heuristic: fmt::Debug {
	/// Primes the Heuristic for a search from `start` to `goal` on `maze`.
	///
	/// Returns the exact distance from `start` to `goal` if the training step computed it,
	/// `None` if the goal is unreachable or the Heuristic does not train.
	fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Option<Cost> {
		let _ = (maze, start, goal);
		None
	}

	/// Estimates the Cost of reaching `goal` from `point`.
	///
	/// Learned Heuristics may overestimate, in which case A* is no longer guaranteed to
	/// return a shortest Path.
	fn estimate(&mut self, point: Point, goal: Point, maze: &Maze) -> f64;
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
	fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Option<Cost> {
		(**self).prepare(maze, start, goal)
	}
	fn estimate(&mut self, point: Point, goal: Point, maze: &Maze) -> f64 {
		(**self).estimate(point, goal, maze)
	}
}

/// The available strategies, in the order they are compared
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeuristicKind {
	/// [`ManhattanHeuristic`]
	Manhattan,
	/// [`KnnHeuristic`]
	NearestNeighbor,
	/// [`TreeHeuristic`]
	DecisionTree,
}

impl HeuristicKind {
	/// All kinds, in display order
	pub const ALL: [HeuristicKind; 3] = [
		HeuristicKind::Manhattan,
		HeuristicKind::NearestNeighbor,
		HeuristicKind::DecisionTree,
	];

	/// The label used when reporting results
	///
	/// ```
	/// # use maze_heuristics::HeuristicKind;
	/// let names: Vec<_> = HeuristicKind::ALL.iter().map(|kind| kind.name()).collect();
	/// assert_eq!(names, ["manhattan", "KNN", "decision_tree"]);
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			HeuristicKind::Manhattan => "manhattan",
			HeuristicKind::NearestNeighbor => "KNN",
			HeuristicKind::DecisionTree => "decision_tree",
		}
	}

	/// 1-based position of this kind when results are displayed side by side
	pub fn display_order(self) -> usize {
		match self {
			HeuristicKind::Manhattan => 1,
			HeuristicKind::NearestNeighbor => 2,
			HeuristicKind::DecisionTree => 3,
		}
	}

	/// Creates a fresh, untrained instance with default options
	pub fn build(self) -> Box<dyn Heuristic + Send> {
		match self {
			HeuristicKind::Manhattan => Box::new(ManhattanHeuristic),
			HeuristicKind::NearestNeighbor => Box::new(KnnHeuristic::default()),
			HeuristicKind::DecisionTree => Box::new(TreeHeuristic::default()),
		}
	}
}

impl fmt::Display for HeuristicKind {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.name())
	}
}
