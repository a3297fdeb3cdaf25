//! A small CART regression tree over fixed-size feature vectors.
//!
//! Splits are chosen greedily by the largest reduction of the squared error. A sample goes to
//! the left child if its feature value is `<=` the threshold, thresholds sit halfway between
//! two neighboring distinct values. Leaves predict the mean target of their samples.

use crate::{MazeError, Result};

/// The number of features the tree is trained on
pub const FEATURE_COUNT: usize = 6;

/// A single feature vector
pub type Features = [f64; FEATURE_COUNT];

/// Options for fitting a [`RegressionTree`]
///
/// Default options:
/// ```
/// # use maze_heuristics::TreeConfig;
/// assert_eq!(
/// 	TreeConfig {
/// 		max_depth: 10,
/// 		min_samples_split: 2,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
	/// Nodes at this depth are always leaves. The root has depth 0.
	pub max_depth: usize,
	/// Nodes with fewer samples than this are not split any further
	pub min_samples_split: usize,
}

impl Default for TreeConfig {
	fn default() -> TreeConfig {
		TreeConfig {
			max_depth: 10,
			min_samples_split: 2,
		}
	}
}

type NodeID = u32;

/// Nodes with a squared error at or below this are considered pure
const PURE_ERROR: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Node {
	Leaf {
		value: f64,
	},
	Split {
		feature: usize,
		threshold: f64,
		left: NodeID,
		right: NodeID,
	},
}

/// A fitted regression tree. Node 0 is the root.
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionTree {
	nodes: Vec<Node>,
	depth: usize,
}

impl RegressionTree {
	/// Fits a tree mapping `samples[i]` to `targets[i]`.
	///
	/// Returns `None` if there are no samples, or if `samples` and `targets` differ in length.
	///
	/// ## Examples
	/// ```
	/// use maze_heuristics::regression_tree::{RegressionTree, TreeConfig};
	///
	/// let samples = [
	///     [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
	///     [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
	///     [2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
	///     [3.0, 0.0, 0.0, 0.0, 0.0, 0.0],
	/// ];
	/// let targets = [5.0, 5.0, 9.0, 9.0];
	///
	/// let tree = RegressionTree::fit(&samples, &targets, TreeConfig::default()).unwrap();
	///
	/// assert_eq!(tree.predict(&[0.5, 0.0, 0.0, 0.0, 0.0, 0.0]), Ok(5.0));
	/// assert_eq!(tree.predict(&[2.5, 0.0, 0.0, 0.0, 0.0, 0.0]), Ok(9.0));
	/// assert_eq!(tree.depth(), 1);
	/// ```
	pub fn fit(samples: &[Features], targets: &[f64], config: TreeConfig) -> Option<RegressionTree> {
		if samples.is_empty() || samples.len() != targets.len() {
			return None;
		}
		let mut builder = Builder {
			samples,
			targets,
			config,
			nodes: Vec::new(),
			depth: 0,
		};
		let mut indices: Vec<usize> = (0..samples.len()).collect();
		builder.grow(&mut indices, 0);

		Some(RegressionTree {
			nodes: builder.nodes,
			depth: builder.depth,
		})
	}

	/// Runs inference for a single feature vector.
	///
	/// Fails if any feature is NaN or infinite, since such a value cannot be routed through
	/// the splits.
	pub fn predict(&self, features: &Features) -> Result<f64> {
		if let Some(index) = features.iter().position(|f| !f.is_finite()) {
			return Err(MazeError::NonFiniteFeature { index });
		}
		let mut current = 0;
		loop {
			match self.nodes[current] {
				Node::Leaf { value } => return Ok(value),
				Node::Split {
					feature,
					threshold,
					left,
					right,
				} => {
					let next = if features[feature] <= threshold {
						left
					} else {
						right
					};
					current = next as usize;
				}
			}
		}
	}

	/// The depth of the deepest leaf
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// The total number of nodes
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// The number of leaves
	pub fn leaf_count(&self) -> usize {
		self.nodes
			.iter()
			.filter(|node| matches!(node, Node::Leaf { .. }))
			.count()
	}
}

struct Builder<'a> {
	samples: &'a [Features],
	targets: &'a [f64],
	config: TreeConfig,
	nodes: Vec<Node>,
	depth: usize,
}

struct BestSplit {
	feature: usize,
	threshold: f64,
	error: f64,
}

impl Builder<'_> {
	fn grow(&mut self, indices: &mut [usize], depth: usize) -> NodeID {
		let id = self.nodes.len();
		self.depth = self.depth.max(depth);

		let (sum, sum_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
			let y = self.targets[i];
			(s + y, sq + y * y)
		});
		let count = indices.len() as f64;
		self.nodes.push(Node::Leaf { value: sum / count });

		let error = squared_error(sum, sum_sq, count);
		if depth >= self.config.max_depth
			|| indices.len() < self.config.min_samples_split.max(2)
			|| error <= PURE_ERROR
		{
			return id as NodeID;
		}

		let split = match self.best_split(indices, error) {
			Some(split) => split,
			None => return id as NodeID,
		};

		let (mut left, mut right): (Vec<usize>, Vec<usize>) = indices
			.iter()
			.partition(|&&i| self.samples[i][split.feature] <= split.threshold);

		let left = self.grow(&mut left, depth + 1);
		let right = self.grow(&mut right, depth + 1);
		self.nodes[id] = Node::Split {
			feature: split.feature,
			threshold: split.threshold,
			left,
			right,
		};
		id as NodeID
	}

	/// Finds the split with the lowest combined squared error, if any improves on `parent_error`
	fn best_split(&self, indices: &mut [usize], parent_error: f64) -> Option<BestSplit> {
		let mut best: Option<BestSplit> = None;
		let count = indices.len();

		for feature in 0..FEATURE_COUNT {
			indices.sort_by(|&a, &b| {
				self.samples[a][feature]
					.total_cmp(&self.samples[b][feature])
					.then(a.cmp(&b))
			});

			let (total, total_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
				let y = self.targets[i];
				(s + y, sq + y * y)
			});
			let (mut left_sum, mut left_sq) = (0.0, 0.0);

			for pos in 0..count - 1 {
				let y = self.targets[indices[pos]];
				left_sum += y;
				left_sq += y * y;

				let here = self.samples[indices[pos]][feature];
				let next = self.samples[indices[pos + 1]][feature];
				if here == next {
					continue;
				}

				let left_count = (pos + 1) as f64;
				let right_count = (count - pos - 1) as f64;
				let error = squared_error(left_sum, left_sq, left_count)
					+ squared_error(total - left_sum, total_sq - left_sq, right_count);

				if best.as_ref().map_or(true, |b| error < b.error) {
					let mut threshold = here + (next - here) / 2.0;
					if threshold >= next {
						threshold = here;
					}
					best = Some(BestSplit {
						feature,
						threshold,
						error,
					});
				}
			}
		}

		best.filter(|b| b.error < parent_error)
	}
}

/// Sum of squared deviations from the mean, from running sums
fn squared_error(sum: f64, sum_sq: f64, count: f64) -> f64 {
	(sum_sq - sum * sum / count).max(0.0)
}
