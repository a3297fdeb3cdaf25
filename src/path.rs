use crate::Cost;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc as Arc;

/// A Path through the Maze, from start to goal.
///
/// Stores the sequence of Points and the total Cost of walking it. On a unit-cost Grid the
/// Cost is the number of steps, which is one less than the number of Points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use maze_heuristics::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 2);
	///
	/// assert_eq!(path.cost(), 2);
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path[2], 'c');
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// The total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of Points in the Path
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path has no Points
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// The first Point of the Path
	pub fn first(&self) -> Option<&P> {
		self.path.first()
	}

	/// The last Point of the Path
	pub fn last(&self) -> Option<&P> {
		self.path.last()
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		*self.path == **rhs
	}
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
