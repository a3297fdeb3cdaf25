//! Runs every Heuristic on the same problem and compares the timings.

use crate::{search::solve, HeuristicKind, Maze, Point, Result, Solution};

/// The result of one Heuristic in a [`Comparison`]
#[derive(Clone, Debug)]
pub struct RunReport {
	/// The Heuristic that was used
	pub kind: HeuristicKind,
	/// What the search returned
	pub solution: Solution,
}

/// One run per [`HeuristicKind`], in the order of [`HeuristicKind::ALL`].
#[derive(Clone, Debug)]
pub struct Comparison {
	runs: Vec<RunReport>,
}

impl Comparison {
	/// All runs, in display order
	pub fn runs(&self) -> &[RunReport] {
		&self.runs
	}

	/// The run of a specific Heuristic
	pub fn get(&self, kind: HeuristicKind) -> Option<&RunReport> {
		self.runs.iter().find(|run| run.kind == kind)
	}

	/// The run with the shortest wall-clock time. The earlier run wins a tie.
	pub fn fastest(&self) -> Option<&RunReport> {
		self.runs.iter().fold(None, |best: Option<&RunReport>, run| match best {
			Some(best) if best.solution.elapsed <= run.solution.elapsed => Some(best),
			_ => Some(run),
		})
	}
}

/// Solves the same problem once with every Heuristic.
///
/// Each run builds and trains its own Heuristic, nothing learned in one run carries over to
/// another.
///
/// ## Examples
/// ```
/// use maze_heuristics::{compare_heuristics, HeuristicKind, Maze};
///
/// let maze: Maze = concat!(
///     "#######\n",
///     "#.....#\n",
///     "#.###.#\n",
///     "#...#.#\n",
///     "#######",
/// ).parse().unwrap();
///
/// let comparison = compare_heuristics(&maze, (1, 1), (3, 5)).unwrap();
///
/// let kinds: Vec<_> = comparison.runs().iter().map(|run| run.kind).collect();
/// assert_eq!(kinds, HeuristicKind::ALL);
/// assert!(comparison.runs().iter().all(|run| run.solution.path_len() == Some(6)));
/// assert!(comparison.fastest().is_some());
/// ```
pub fn compare_heuristics(maze: &Maze, start: Point, goal: Point) -> Result<Comparison> {
	let runs = HeuristicKind::ALL
		.iter()
		.map(|&kind| {
			solve(maze, start, goal, kind).map(|solution| {
				#[cfg(feature = "log")]
				log::info!("{}: {:?}", kind, solution.elapsed);
				RunReport { kind, solution }
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(Comparison { runs })
}

/// Runs [`compare_heuristics`] for every `(maze, start, goal)` on the rayon thread pool.
///
/// Results are returned in the order of `problems`.
#[cfg(feature = "parallel")]
pub fn compare_batch(problems: &[(Maze, Point, Point)]) -> Vec<Result<Comparison>> {
	use rayon::prelude::*;

	problems
		.par_iter()
		.map(|(maze, start, goal)| compare_heuristics(maze, *start, *goal))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn report(kind: HeuristicKind, millis: u64) -> RunReport {
		let maze = Maze::filled(3, 3).unwrap();
		RunReport {
			kind,
			solution: Solution {
				maze,
				path: None,
				oracle_distance: None,
				elapsed: Duration::from_millis(millis),
				expanded: 0,
			},
		}
	}

	#[test]
	fn fastest_prefers_earlier_on_ties() {
		let comparison = Comparison {
			runs: vec![
				report(HeuristicKind::Manhattan, 5),
				report(HeuristicKind::NearestNeighbor, 3),
				report(HeuristicKind::DecisionTree, 3),
			],
		};
		assert_eq!(
			comparison.fastest().map(|run| run.kind),
			Some(HeuristicKind::NearestNeighbor)
		);
		assert_eq!(
			comparison.get(HeuristicKind::DecisionTree).map(|run| run.kind),
			Some(HeuristicKind::DecisionTree)
		);
	}

	#[test]
	fn invalid_input_fails_before_searching() {
		let maze = Maze::filled(5, 5).unwrap();
		assert!(compare_heuristics(&maze, (9, 9), (3, 3)).is_err());
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn batch_keeps_order() {
		let open: Maze = "#####\n#...#\n#####".parse().unwrap();
		let long: Maze = "#######\n#.....#\n#######".parse().unwrap();
		let problems = vec![
			(open, (1, 1), (1, 3)),
			(long, (1, 1), (1, 5)),
		];

		let results = compare_batch(&problems);
		let lengths: Vec<_> = results
			.iter()
			.map(|result| result.as_ref().unwrap().runs()[0].solution.path_len())
			.collect();
		assert_eq!(lengths, vec![Some(2), Some(4)]);
	}
}
