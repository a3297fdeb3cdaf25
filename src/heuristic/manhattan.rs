use super::Heuristic;
use crate::{neighbors::manhattan_distance, Maze, Point};

/// The static Manhattan distance.
///
/// Admissible and consistent on a 4-connected unit-cost Grid, so this is the only strategy
/// for which A* is guaranteed to find a shortest Path. It needs no training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
	fn estimate(&mut self, point: Point, goal: Point, _maze: &Maze) -> f64 {
		manhattan_distance(point, goal) as f64
	}
}
