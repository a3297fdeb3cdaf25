//! The Backward Distance Oracle: exact remaining distances by breadth-first search from the goal.

use crate::{Cost, Maze, Point, PointMap};
use std::collections::VecDeque;

/// Exact hop counts from every goal-reachable Point to the goal.
///
/// Points are kept in the order the traversal discovered them, so iterating a table is
/// deterministic and runs from the goal outwards.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
	goal: Option<Point>,
	order: Vec<(Point, Cost)>,
	lookup: PointMap<Cost>,
}

impl DistanceTable {
	/// The goal this table was computed for, `None` for an empty table
	pub fn goal(&self) -> Option<Point> {
		self.goal
	}

	/// The exact distance from `point` to the goal, or `None` if the goal is unreachable
	pub fn get(&self, point: Point) -> Option<Cost> {
		self.lookup.get(&point).copied()
	}

	/// `true` if the goal can be reached from `point`
	pub fn contains(&self, point: Point) -> bool {
		self.lookup.contains_key(&point)
	}

	/// The number of reachable Points, the goal included
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// `true` if nothing is reachable
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Iterates over `(point, distance)` in discovery order, i.e. by increasing distance
	pub fn iter(&self) -> impl Iterator<Item = (Point, Cost)> + '_ {
		self.order.iter().copied()
	}
}

/// Runs a breadth-first traversal over the Open cells of `maze`, starting at `goal`.
///
/// The Maze is treated as an undirected, unweighted, 4-connected Graph. Every Point that can
/// reach the goal ends up in the result with its hop distance. Unreachable Points are simply
/// absent. A goal outside the Grid or on a Wall yields an empty table.
///
/// ## Examples
/// ```
/// use maze_heuristics::{oracle::distances_to_goal, Maze};
///
/// let maze: Maze = concat!(
///     "#####\n",
///     "#...#\n",
///     "###.#\n",
///     "#.#.#\n",
///     "#####",
/// ).parse().unwrap();
///
/// let distances = distances_to_goal(&maze, (3, 3));
///
/// assert_eq!(distances.get((3, 3)), Some(0));
/// assert_eq!(distances.get((1, 1)), Some(4));
/// // walled off
/// assert_eq!(distances.get((3, 1)), None);
/// ```
pub fn distances_to_goal(maze: &Maze, goal: Point) -> DistanceTable {
	if !maze.is_open(goal) {
		return DistanceTable::default();
	}
	let neighborhood = maze.neighborhood();

	let mut table = DistanceTable {
		goal: Some(goal),
		order: Vec::new(),
		lookup: PointMap::default(),
	};
	let mut next = VecDeque::new();
	next.push_back((goal, 0));
	table.lookup.insert(goal, 0);

	while let Some((current, distance)) = next.pop_front() {
		table.order.push((current, distance));

		for other in neighborhood.get_all_neighbors(current) {
			if !maze.is_open(other) || table.lookup.contains_key(&other) {
				continue;
			}
			table.lookup.insert(other, distance + 1);
			next.push_back((other, distance + 1));
		}
	}

	table
}
