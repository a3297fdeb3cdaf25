//! Movement on the Grid

use crate::{Cost, Point};

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are always produced in the order up, right, down, left.
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}

	/// Provides all Neighbors of a Point that lie within the Grid.
	///
	/// Note that this does not check weather the Tile at a Point is solid or not.
	pub fn get_all_neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
		let (rows, cols) = (self.rows, self.cols);

		DIRECTIONS
			.iter()
			.map(move |(dr, dc)| (point.0 as isize + dr, point.1 as isize + dc))
			.filter(move |(r, c)| *r >= 0 && *c >= 0 && (*r as usize) < rows && (*c as usize) < cols)
			.map(|(r, c)| (r as usize, c as usize))
	}
}

/// `|row_a - row_b| + |col_a - col_b|`
///
/// ```
/// # use maze_heuristics::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 0)), 3 + 1);
/// ```
pub fn manhattan_distance(a: Point, b: Point) -> Cost {
	a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 3), (1, 2), (0, 1)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((2, 2)).collect::<Vec<_>>(),
		vec![(1, 2), (2, 3), (3, 2), (2, 1)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
		vec![(3, 4), (4, 3)],
	);
}
