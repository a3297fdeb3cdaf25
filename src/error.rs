//! Error types for building and solving mazes

use crate::Point;
use thiserror::Error;

/// Everything that can go wrong before a search starts.
///
/// An unreachable goal is not an error: it is reported as a [`Solution`](crate::Solution)
/// without a Path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
	/// The grid has no rows or no columns
	#[error("grid is empty")]
	EmptyGrid,

	/// A row has a different length than the first row
	#[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
	NotRectangular {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// The generator needs odd dimensions of at least 5
	#[error("invalid maze dimensions {rows}x{cols}: both must be odd and at least 5")]
	InvalidDimensions {
		/// requested row count
		rows: usize,
		/// requested column count
		cols: usize,
	},

	/// A start or goal outside of the grid
	#[error("point {point:?} is outside of the {rows}x{cols} grid")]
	OutOfBounds {
		/// the offending Point
		point: Point,
		/// row count of the grid
		rows: usize,
		/// column count of the grid
		cols: usize,
	},

	/// A numeric cell that is not 0, 1 or 2
	#[error("invalid cell value {value} at ({row}, {col})")]
	InvalidCellValue {
		/// row of the cell
		row: usize,
		/// column of the cell
		col: usize,
		/// the value found
		value: u8,
	},

	/// A character in a text grid that is not `#`, `.` or `*`
	#[error("invalid cell character {found:?} at ({row}, {col})")]
	InvalidCellChar {
		/// row of the cell
		row: usize,
		/// column of the cell
		col: usize,
		/// the character found
		found: char,
	},

	/// A wall removal probability outside of `[0, 1]`
	#[error("wall removal probability {0} is not within [0, 1]")]
	InvalidProbability(f64),

	/// Regression tree inference was handed a NaN or infinite feature
	#[error("feature {index} is not a finite number")]
	NonFiniteFeature {
		/// position of the feature in the feature vector
		index: usize,
	},
}

/// Shorthand for results carrying a [`MazeError`]
pub type Result<T> = std::result::Result<T, MazeError>;
