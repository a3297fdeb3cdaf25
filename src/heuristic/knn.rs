use super::Heuristic;
use crate::{
	neighbors::manhattan_distance, oracle::distances_to_goal, Cost, Maze, Point, PointMap,
};
use std::collections::VecDeque;

/// Options for the [`KnnHeuristic`]
///
/// The blend weight and the obstacle penalty are empirical choices, not derived values.
///
/// Default options:
/// ```
/// # use maze_heuristics::KnnConfig;
/// assert_eq!(
/// 	KnnConfig {
/// 		k: 3,
/// 		max_samples: 1000,
/// 		model_weight: 0.7,
/// 		obstacle_divisor: 8.0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnnConfig {
	/// The number of neighbors to average over. Values below 1 are treated as 1.
	pub k: usize,
	/// Capacity of the sample store. The oldest samples are evicted first.
	pub max_samples: usize,
	/// Share of the neighbor average in a prediction. The fallback estimate makes up the rest.
	pub model_weight: f64,
	/// Estimates are multiplied by `1 + adjacent_walls / obstacle_divisor`
	pub obstacle_divisor: f64,
}

impl KnnConfig {
	/// Uses the neighbor average as is: no blending with the fallback, no obstacle penalty.
	///
	/// Values:
	/// ```
	/// # use maze_heuristics::KnnConfig;
	/// assert_eq!(
	/// 	KnnConfig {
	/// 		k: 3,
	/// 		max_samples: 1000,
	/// 		model_weight: 1.0,
	/// 		obstacle_divisor: f64::INFINITY,
	/// 	},
	/// 	KnnConfig::PURE_MODEL
	/// );
	/// ```
	pub const PURE_MODEL: KnnConfig = KnnConfig {
		k: 3,
		max_samples: 1000,
		model_weight: 1.0,
		obstacle_divisor: f64::INFINITY,
	};
}

impl Default for KnnConfig {
	fn default() -> KnnConfig {
		KnnConfig {
			k: 3,
			max_samples: 1000,
			model_weight: 0.7,
			obstacle_divisor: 8.0,
		}
	}
}

/// A Heuristic that learns from known distances with weighted k-nearest-neighbor regression.
///
/// The sample store holds `(point, distance to goal)` pairs, bounded by
/// [`max_samples`](KnnConfig::max_samples). Exact matches are answered from a cache, other
/// Points get the inverse-distance weighted mean of their `k` closest samples (in the
/// Manhattan metric), blended with the Manhattan estimate. Near walls the result is inflated
/// to steer the search away from boxed-in cells, so the Heuristic is not admissible.
///
/// ## Examples
/// ```
/// use maze_heuristics::KnnHeuristic;
///
/// let mut knn = KnnHeuristic::default();
/// knn.add_sample((1, 1), 10.0);
/// knn.add_sample((1, 3), 8.0);
///
/// // exact hit
/// assert_eq!(knn.predict((1, 1), 4.0), 10.0);
/// // not enough samples for 3 neighbors yet
/// assert_eq!(knn.predict((1, 2), 4.0), 4.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KnnHeuristic {
	config: KnnConfig,
	samples: VecDeque<(Point, f64)>,
	cache: PointMap<f64>,
}

impl KnnHeuristic {
	/// Creates an empty KnnHeuristic
	pub fn new(config: KnnConfig) -> KnnHeuristic {
		KnnHeuristic {
			config,
			samples: VecDeque::new(),
			cache: PointMap::default(),
		}
	}

	/// The options this Heuristic was created with
	pub fn config(&self) -> &KnnConfig {
		&self.config
	}

	/// The number of stored samples
	pub fn sample_count(&self) -> usize {
		self.samples.len()
	}

	/// Forgets all samples and cached predictions
	pub fn clear(&mut self) {
		self.samples.clear();
		self.cache.clear();
	}

	/// Records that `point` is `distance` away from the goal.
	///
	/// Evicts the oldest sample once the store is over capacity.
	pub fn add_sample(&mut self, point: Point, distance: f64) {
		self.samples.push_back((point, distance));
		self.cache.insert(point, distance);

		while self.samples.len() > self.config.max_samples {
			if let Some((removed, _)) = self.samples.pop_front() {
				if !self.samples.iter().any(|&(p, _)| p == removed) {
					self.cache.remove(&removed);
				}
			}
		}
	}

	/// Predicts the distance from `point` to the goal.
	///
	/// Returns the cached value for a known Point, and `fallback` as long as fewer than `k`
	/// samples are stored. Otherwise the weighted neighbor mean is blended with `fallback`,
	/// cached and returned.
	pub fn predict(&mut self, point: Point, fallback: f64) -> f64 {
		if let Some(&known) = self.cache.get(&point) {
			return known;
		}
		let k = self.config.k.max(1);
		if self.samples.len() < k {
			return fallback;
		}

		// (distance, store index) is unique, so selection is deterministic
		let mut nearest: Vec<(Cost, usize)> = self
			.samples
			.iter()
			.enumerate()
			.map(|(index, &(p, _))| (manhattan_distance(p, point), index))
			.collect();
		nearest.select_nth_unstable(k - 1);

		let (weighted, total_weight) = nearest[..k].iter().fold(
			(0.0, 0.0),
			|(weighted, total_weight), &(distance, index)| {
				let weight = if distance > 0 {
					1.0 / distance as f64
				} else {
					1.0
				};
				(weighted + weight * self.samples[index].1, total_weight + weight)
			},
		);
		if total_weight <= 0.0 {
			return fallback;
		}

		let model_weight = self.config.model_weight;
		let result = model_weight * (weighted / total_weight) + (1.0 - model_weight) * fallback;
		self.cache.insert(point, result);
		result
	}
}

impl Heuristic for KnnHeuristic {
	/// Fills the sample store with the exact distance of every Point that can reach `goal`,
	/// nearest to the goal first. Any earlier samples are discarded.
	fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Option<Cost> {
		self.clear();
		let distances = distances_to_goal(maze, goal);
		for (point, distance) in distances.iter() {
			self.add_sample(point, distance as f64);
		}
		distances.get(start)
	}

	fn estimate(&mut self, point: Point, goal: Point, maze: &Maze) -> f64 {
		let base = manhattan_distance(point, goal) as f64;
		let estimate = self.predict(point, base);

		let walls = maze.adjacent_walls(point) as f64;
		estimate * (1.0 + walls / self.config.obstacle_divisor)
	}
}
