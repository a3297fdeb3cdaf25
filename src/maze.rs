//! The Grid Model: a rectangular maze of walls and open cells.

use crate::{neighbors::ManhattanNeighborhood, MazeError, Point, Result};
use std::fmt;
use std::str::FromStr;

/// A single Tile of a [`Maze`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
	/// A traversable Tile (`0`)
	Open,
	/// A blocked Tile (`1`)
	Wall,
	/// An open Tile that lies on a reconstructed Path (`2`)
	SolutionMark,
}

impl Cell {
	/// The numeric code used by the presentation layer
	pub fn to_numeric(self) -> u8 {
		match self {
			Cell::Open => 0,
			Cell::Wall => 1,
			Cell::SolutionMark => 2,
		}
	}

	/// Parses a numeric code. Returns `None` for anything but 0, 1 or 2.
	pub fn from_numeric(value: u8) -> Option<Cell> {
		match value {
			0 => Some(Cell::Open),
			1 => Some(Cell::Wall),
			2 => Some(Cell::SolutionMark),
			_ => None,
		}
	}

	fn to_char(self) -> char {
		match self {
			Cell::Open => '.',
			Cell::Wall => '#',
			Cell::SolutionMark => '*',
		}
	}

	fn from_char(c: char) -> Option<Cell> {
		match c {
			'.' => Some(Cell::Open),
			'#' => Some(Cell::Wall),
			'*' => Some(Cell::SolutionMark),
			_ => None,
		}
	}
}

/// A rectangular Grid of [`Cell`]s, stored row-major.
///
/// Points are `(row, col)` and 0-indexed. The search never mutates a Maze it is given, it
/// returns an annotated copy instead.
///
/// ## Examples
/// ```
/// use maze_heuristics::{Cell, Maze};
///
/// let maze: Maze = concat!(
///     "#####\n",
///     "#...#\n",
///     "###.#\n",
///     "#...#\n",
///     "#####",
/// ).parse().unwrap();
///
/// assert_eq!((maze.rows(), maze.cols()), (5, 5));
/// assert_eq!(maze.get((2, 3)), Some(Cell::Open));
/// assert_eq!(maze.get((2, 2)), Some(Cell::Wall));
/// assert_eq!(maze.get((5, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
	rows: usize,
	cols: usize,
	cells: Vec<Cell>,
}

impl Maze {
	/// Creates a Maze of the given size where every Cell is a Wall
	pub fn filled(rows: usize, cols: usize) -> Result<Maze> {
		if rows == 0 || cols == 0 {
			return Err(MazeError::EmptyGrid);
		}
		Ok(Maze {
			rows,
			cols,
			cells: vec![Cell::Wall; rows * cols],
		})
	}

	/// Creates a Maze from rows of Cells.
	///
	/// Fails if there are no Cells or if the rows differ in length.
	pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Maze> {
		let cols = rows.first().map_or(0, Vec::len);
		if cols == 0 {
			return Err(MazeError::EmptyGrid);
		}
		let mut cells = Vec::with_capacity(rows.len() * cols);
		for (index, row) in rows.iter().enumerate() {
			if row.len() != cols {
				return Err(MazeError::NotRectangular {
					row: index,
					expected: cols,
					found: row.len(),
				});
			}
			cells.extend_from_slice(row);
		}
		Ok(Maze {
			rows: rows.len(),
			cols,
			cells,
		})
	}

	/// Creates a Maze from the numeric format (0 = open, 1 = wall, 2 = solution).
	///
	/// ## Examples
	/// ```
	/// # use maze_heuristics::Maze;
	/// let grid = vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]];
	/// let maze = Maze::from_numeric(&grid).unwrap();
	///
	/// assert!(maze.is_open((1, 1)));
	/// assert_eq!(maze.to_numeric(), grid);
	/// ```
	pub fn from_numeric(grid: &[Vec<u8>]) -> Result<Maze> {
		let rows = grid
			.iter()
			.enumerate()
			.map(|(row, values)| {
				values
					.iter()
					.enumerate()
					.map(|(col, &value)| {
						Cell::from_numeric(value)
							.ok_or(MazeError::InvalidCellValue { row, col, value })
					})
					.collect::<Result<Vec<_>>>()
			})
			.collect::<Result<Vec<_>>>()?;
		Maze::from_rows(rows)
	}

	/// Converts the Maze into the numeric format (0 = open, 1 = wall, 2 = solution)
	pub fn to_numeric(&self) -> Vec<Vec<u8>> {
		self.cells
			.chunks(self.cols)
			.map(|row| row.iter().map(|cell| cell.to_numeric()).collect())
			.collect()
	}

	/// The number of rows
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// The number of columns
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// The 4-connected Neighborhood matching the size of this Maze
	pub fn neighborhood(&self) -> ManhattanNeighborhood {
		ManhattanNeighborhood::new(self.rows, self.cols)
	}

	/// The conventional start `(1, 1)` and end `(rows - 2, cols - 2)` of a generated Maze
	pub fn default_endpoints(&self) -> (Point, Point) {
		(
			(1, 1),
			(self.rows.saturating_sub(2), self.cols.saturating_sub(2)),
		)
	}

	/// Checks if `point` lies within the Grid
	pub fn in_bounds(&self, (row, col): Point) -> bool {
		row < self.rows && col < self.cols
	}

	/// Returns an error if `point` lies outside of the Grid
	pub fn check_bounds(&self, point: Point) -> Result<()> {
		if self.in_bounds(point) {
			Ok(())
		} else {
			Err(MazeError::OutOfBounds {
				point,
				rows: self.rows,
				cols: self.cols,
			})
		}
	}

	/// The Cell at `point`, or `None` if it is out of bounds
	pub fn get(&self, point: Point) -> Option<Cell> {
		if self.in_bounds(point) {
			Some(self.cells[point.0 * self.cols + point.1])
		} else {
			None
		}
	}

	/// Overwrites the Cell at `point`. Out of bounds writes are ignored.
	pub fn set(&mut self, point: Point, cell: Cell) {
		if self.in_bounds(point) {
			self.cells[point.0 * self.cols + point.1] = cell;
		}
	}

	/// `true` if `point` is within bounds and not a Wall
	pub fn is_open(&self, point: Point) -> bool {
		matches!(self.get(point), Some(Cell::Open) | Some(Cell::SolutionMark))
	}

	/// `true` if `point` is within bounds and a Wall
	pub fn is_wall(&self, point: Point) -> bool {
		self.get(point) == Some(Cell::Wall)
	}

	/// Counts the Walls among the 4 orthogonal neighbors of `point`
	pub fn adjacent_walls(&self, point: Point) -> usize {
		self.neighborhood()
			.get_all_neighbors(point)
			.filter(|&p| self.is_wall(p))
			.count()
	}

	/// Counts the Walls in the 3x3 square centered on `point`, including `point` itself.
	///
	/// Cells outside of the Grid do not count.
	pub fn walls_around(&self, (row, col): Point) -> usize {
		let mut walls = 0;
		for r in row.saturating_sub(1)..=row + 1 {
			for c in col.saturating_sub(1)..=col + 1 {
				if self.is_wall((r, c)) {
					walls += 1;
				}
			}
		}
		walls
	}

	/// Iterates over all Points marked as part of a solution, row by row
	pub fn solution_cells(&self) -> impl Iterator<Item = Point> + '_ {
		self.cells
			.iter()
			.enumerate()
			.filter(|(_, &cell)| cell == Cell::SolutionMark)
			.map(move |(index, _)| (index / self.cols, index % self.cols))
	}
}

impl FromStr for Maze {
	type Err = MazeError;

	/// Parses one line per row: `#` = wall, `.` = open, `*` = solution.
	/// Surrounding whitespace of each line is ignored, blank lines are skipped.
	fn from_str(s: &str) -> Result<Maze> {
		let rows = s
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.enumerate()
			.map(|(row, line)| {
				line.chars()
					.enumerate()
					.map(|(col, found)| {
						Cell::from_char(found).ok_or(MazeError::InvalidCellChar { row, col, found })
					})
					.collect::<Result<Vec<_>>>()
			})
			.collect::<Result<Vec<_>>>()?;
		Maze::from_rows(rows)
	}
}

impl fmt::Display for Maze {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for (index, row) in self.cells.chunks(self.cols).enumerate() {
			if index > 0 {
				writeln!(fmt)?;
			}
			for cell in row {
				write!(fmt, "{}", cell.to_char())?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_ragged_rows() {
		let grid = vec![vec![1, 1, 1], vec![1, 0], vec![1, 1, 1]];
		assert_eq!(
			Maze::from_numeric(&grid),
			Err(MazeError::NotRectangular {
				row: 1,
				expected: 3,
				found: 2
			})
		);
	}

	#[test]
	fn rejects_empty_grid() {
		assert_eq!(Maze::from_numeric(&[]), Err(MazeError::EmptyGrid));
		assert_eq!(Maze::from_numeric(&[vec![]]), Err(MazeError::EmptyGrid));
		assert_eq!(Maze::filled(0, 3), Err(MazeError::EmptyGrid));
	}

	#[test]
	fn rejects_unknown_cells() {
		let grid = vec![vec![1, 3]];
		assert_eq!(
			Maze::from_numeric(&grid),
			Err(MazeError::InvalidCellValue {
				row: 0,
				col: 1,
				value: 3
			})
		);
		assert_eq!(
			"#.x".parse::<Maze>(),
			Err(MazeError::InvalidCellChar {
				row: 0,
				col: 2,
				found: 'x'
			})
		);
	}

	#[test]
	fn display_round_trip() {
		let text = "#####\n#.*.#\n#####";
		let maze: Maze = text.parse().unwrap();
		assert_eq!(maze.to_string(), text);
		assert_eq!(maze.solution_cells().collect::<Vec<_>>(), vec![(1, 2)]);
	}

	#[test]
	fn wall_counts() {
		let maze: Maze = "\
			#####
			#...#
			#.#.#
			#...#
			#####"
			.parse()
			.unwrap();

		assert_eq!(maze.adjacent_walls((1, 1)), 2);
		assert_eq!(maze.adjacent_walls((1, 2)), 2);
		assert_eq!(maze.adjacent_walls((2, 2)), 0);

		// corner of the grid: only 4 of the 9 cells exist
		assert_eq!(maze.walls_around((0, 0)), 3);
		assert_eq!(maze.walls_around((1, 1)), 6);
		assert_eq!(maze.walls_around((2, 2)), 1);
		assert_eq!(maze.walls_around((4, 4)), 3);
	}

	#[test]
	fn bounds() {
		let maze = Maze::filled(5, 7).unwrap();
		assert!(maze.in_bounds((4, 6)));
		assert!(!maze.in_bounds((5, 0)));
		assert_eq!(
			maze.check_bounds((0, 7)),
			Err(MazeError::OutOfBounds {
				point: (0, 7),
				rows: 5,
				cols: 7
			})
		);
		assert_eq!(maze.default_endpoints(), ((1, 1), (3, 5)));
	}
}
