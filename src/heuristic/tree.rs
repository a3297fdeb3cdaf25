use super::Heuristic;
use crate::{
	neighbors::manhattan_distance,
	oracle::distances_to_goal,
	regression_tree::{Features, RegressionTree, TreeConfig},
	Cost, Maze, Point,
};

/// The feature vector describing `point` relative to `goal`:
/// `[row, col, row - goal_row, col - goal_col, manhattan distance, walls in the 3x3 square]`
///
/// ```
/// # use maze_heuristics::{maze_features, Maze};
/// let maze: Maze = "#####\n#...#\n#####".parse().unwrap();
/// assert_eq!(
///     maze_features(&maze, (1, 1), (1, 3)),
///     [1.0, 1.0, 0.0, -2.0, 2.0, 7.0],
/// );
/// ```
pub fn maze_features(maze: &Maze, point: Point, goal: Point) -> Features {
	let row_offset = point.0 as f64 - goal.0 as f64;
	let col_offset = point.1 as f64 - goal.1 as f64;
	[
		point.0 as f64,
		point.1 as f64,
		row_offset,
		col_offset,
		manhattan_distance(point, goal) as f64,
		maze.walls_around(point) as f64,
	]
}

/// A Heuristic backed by a regression tree.
///
/// [`prepare`](Heuristic::prepare) computes the exact distance of every Point that can reach
/// the goal and fits a tree from [`maze_features`] to those distances. Estimates run the tree
/// and are never below `1.0`. While untrained, or if inference fails, the Manhattan distance
/// is used instead.
#[derive(Clone, Debug, Default)]
pub struct TreeHeuristic {
	config: TreeConfig,
	model: Option<RegressionTree>,
}

impl TreeHeuristic {
	/// Creates an untrained TreeHeuristic
	pub fn new(config: TreeConfig) -> TreeHeuristic {
		TreeHeuristic {
			config,
			model: None,
		}
	}

	/// The fitted tree, if [`prepare`](Heuristic::prepare) found anything to train on
	pub fn model(&self) -> Option<&RegressionTree> {
		self.model.as_ref()
	}

	/// `true` once a tree has been fitted
	pub fn is_trained(&self) -> bool {
		self.model.is_some()
	}
}

impl Heuristic for TreeHeuristic {
	fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Option<Cost> {
		let distances = distances_to_goal(maze, goal);

		let (samples, targets): (Vec<Features>, Vec<f64>) = distances
			.iter()
			.map(|(point, distance)| (maze_features(maze, point, goal), distance as f64))
			.unzip();

		self.model = RegressionTree::fit(&samples, &targets, self.config);

		#[cfg(feature = "log")]
		if let Some(model) = &self.model {
			log::debug!(
				"fitted regression tree on {} samples: {} nodes, depth {}",
				samples.len(),
				model.node_count(),
				model.depth()
			);
		}

		distances.get(start)
	}

	fn estimate(&mut self, point: Point, goal: Point, maze: &Maze) -> f64 {
		let base = manhattan_distance(point, goal) as f64;
		self.predict_or(&maze_features(maze, point, goal), base)
	}
}

impl TreeHeuristic {
	/// Runs the model on `features`, or returns `fallback` if there is no model or inference
	/// fails.
	fn predict_or(&self, features: &Features, fallback: f64) -> f64 {
		let model = match &self.model {
			Some(model) => model,
			None => return fallback,
		};

		match model.predict(features) {
			Ok(prediction) => prediction.max(1.0),
			Err(_e) => {
				#[cfg(feature = "log")]
				log::debug!("tree inference failed on {:?}: {}", features, _e);
				fallback
			}
		}
	}
}
