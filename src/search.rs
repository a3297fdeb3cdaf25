//! The A* Search Engine.

use crate::{
	heuristic::{Heuristic, HeuristicKind},
	Cell, Cost, Maze, Path, Point, PointMap, PointSet, Result,
};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// An entry of the open queue: `(position, g-score, f-score, sequence number)`.
///
/// The lowest f-score is popped first. Among equal f-scores the entry that was pushed first
/// wins, which makes the expansion order independent of the heap's internals.
#[derive(Debug)]
struct HeuristicElement(Point, Cost, f64, u64);

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2.total_cmp(&self.2).then_with(|| rhs.3.cmp(&self.3))
	}
}

/// The outcome of a single search.
#[derive(Clone, Debug)]
pub struct Solution {
	/// A copy of the searched Maze with every Path cell set to [`Cell::SolutionMark`].
	/// Identical to the input if no Path was found.
	pub maze: Maze,
	/// The Path from start to goal, or `None` if the goal is unreachable
	pub path: Option<Path<Point>>,
	/// The exact start-to-goal distance reported by the Heuristic's training step, if any
	pub oracle_distance: Option<Cost>,
	/// Wall-clock time spent on training and searching
	pub elapsed: Duration,
	/// The number of Points that were moved to the closed set
	pub expanded: usize,
}

impl Solution {
	/// `true` if a Path was found
	pub fn is_solved(&self) -> bool {
		self.path.is_some()
	}

	/// The number of steps of the Path, if one was found
	pub fn path_len(&self) -> Option<Cost> {
		self.path.as_ref().map(Path::cost)
	}
}

/// Searches `maze` for a Path from `start` to `goal` using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Heuristic is prepared first and then asked for an estimate of every Point that is
/// pushed onto the open queue. Only the static Manhattan Heuristic guarantees a shortest Path.
///
/// Stale queue entries are not removed: a Point may be queued several times and every entry
/// after the first one that is popped is discarded. The parent of a Point is only replaced
/// by a strictly cheaper one.
///
/// ## Examples
/// ```
/// use maze_heuristics::{a_star_search, Maze, ManhattanHeuristic};
///
/// let maze: Maze = concat!(
///     "#####\n",
///     "#...#\n",
///     "###.#\n",
///     "#...#\n",
///     "#####",
/// ).parse().unwrap();
///
/// let solution = a_star_search(&maze, (1, 1), (3, 3), &mut ManhattanHeuristic).unwrap();
///
/// assert_eq!(solution.path_len(), Some(4));
/// assert_eq!(solution.maze.to_string(), concat!(
///     "#####\n",
///     "#***#\n",
///     "###*#\n",
///     "#..*#\n",
///     "#####",
/// ));
/// ```
///
/// If the goal cannot be reached, the Maze comes back unchanged:
/// ```
/// # use maze_heuristics::{a_star_search, Maze, ManhattanHeuristic};
/// let maze: Maze = concat!(
///     "#####\n",
///     "#.#.#\n",
///     "#####",
/// ).parse().unwrap();
///
/// let solution = a_star_search(&maze, (1, 1), (1, 3), &mut ManhattanHeuristic).unwrap();
///
/// assert!(solution.path.is_none());
/// assert_eq!(solution.maze, maze);
/// ```
///
/// ## Errors
/// [`MazeError::OutOfBounds`](crate::MazeError::OutOfBounds) if `start` or `goal` lies outside
/// of the Maze. Nothing is searched in that case.
pub fn a_star_search<H: Heuristic + ?Sized>(
	maze: &Maze,
	start: Point,
	goal: Point,
	heuristic: &mut H,
) -> Result<Solution> {
	maze.check_bounds(start)?;
	maze.check_bounds(goal)?;

	let timer = Instant::now();
	#[allow(unused_variables)]
	let trace_timer = timer;

	let oracle_distance = heuristic.prepare(maze, start, goal);
	re_trace!("prepare heuristic", trace_timer);

	let neighborhood = maze.neighborhood();
	let size_hint = maze.rows() * maze.cols();

	let mut closed = PointSet::with_capacity(size_hint);
	// point -> (parent, best g-score seen so far)
	let mut parents: PointMap<(Point, Cost)> = PointMap::with_capacity(size_hint);
	let mut next = BinaryHeap::with_capacity(size_hint / 2);
	let mut sequence = 0;

	next.push(HeuristicElement(
		start,
		0,
		heuristic.estimate(start, goal, maze),
		sequence,
	));

	let mut found = false;
	while let Some(HeuristicElement(current, current_cost, _, _)) = next.pop() {
		if !closed.insert(current) {
			continue;
		}
		if current == goal {
			// a Wall goal is only popped when it is also the start
			found = maze.is_open(goal);
			break;
		}

		let other_cost = current_cost + 1;
		for other in neighborhood.get_all_neighbors(current) {
			if !maze.is_open(other) || closed.contains(&other) {
				continue;
			}

			let estimate = heuristic.estimate(other, goal, maze);
			sequence += 1;
			next.push(HeuristicElement(
				other,
				other_cost,
				other_cost as f64 + estimate,
				sequence,
			));

			match parents.get_mut(&other) {
				Some((parent, best_cost)) => {
					if other_cost < *best_cost {
						*parent = current;
						*best_cost = other_cost;
					}
				}
				None => {
					parents.insert(other, (current, other_cost));
				}
			}
		}
	}
	re_trace!("search", trace_timer);

	let path = if found {
		let mut steps = vec![];
		let mut current = goal;

		while current != start {
			steps.push(current);
			current = parents[&current].0;
		}
		steps.push(start);
		steps.reverse();
		let cost = steps.len() - 1;
		Some(Path::new(steps, cost))
	} else {
		None
	};

	let mut solved = maze.clone();
	if let Some(path) = &path {
		for &point in path {
			solved.set(point, Cell::SolutionMark);
		}
	}

	#[cfg(feature = "log")]
	log::debug!(
		"a* from {:?} to {:?}: expanded {} points, path length {:?}",
		start,
		goal,
		closed.len(),
		path.as_ref().map(Path::cost)
	);

	Ok(Solution {
		maze: solved,
		path,
		oracle_distance,
		elapsed: timer.elapsed(),
		expanded: closed.len(),
	})
}

/// Builds a fresh Heuristic of the given kind and runs [`a_star_search`] with it.
///
/// ```
/// use maze_heuristics::{solve, HeuristicKind, Maze};
///
/// let maze: Maze = concat!(
///     "#######\n",
///     "#.....#\n",
///     "#.....#\n",
///     "#.....#\n",
///     "#######",
/// ).parse().unwrap();
///
/// for kind in HeuristicKind::ALL {
///     let solution = solve(&maze, (1, 1), (3, 5), kind).unwrap();
///     assert_eq!(solution.path_len(), Some(6));
/// }
/// ```
pub fn solve(maze: &Maze, start: Point, goal: Point, kind: HeuristicKind) -> Result<Solution> {
	let mut heuristic = kind.build();
	a_star_search(maze, start, goal, &mut heuristic)
}
