//! Random maze generation: depth-first backtracking plus optional loops.

use crate::{Cell, Maze, MazeError, Point, Result};
use nanorand::{Rng, WyRand};

/// Options for [`generate_maze`]
///
/// Default options:
/// ```
/// # use maze_heuristics::GeneratorConfig;
/// assert_eq!(
/// 	GeneratorConfig {
/// 		multiple_paths: true,
/// 		wall_removal_probability: 0.2,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
	/// `true` (default): knock out some walls after carving, so that there is more than one
	/// way through the Maze.
	///
	/// `false`: a perfect Maze, with exactly one Path between any two cells.
	pub multiple_paths: bool,
	/// The chance of each removable wall being knocked out. Must be within `[0, 1]`.
	pub wall_removal_probability: f64,
}

impl GeneratorConfig {
	/// A Maze without loops
	pub const PERFECT: GeneratorConfig = GeneratorConfig {
		multiple_paths: false,
		wall_removal_probability: 0.0,
	};
}

impl Default for GeneratorConfig {
	fn default() -> GeneratorConfig {
		GeneratorConfig {
			multiple_paths: true,
			wall_removal_probability: 0.2,
		}
	}
}

const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Generates a random Maze of `rows` x `cols` cells.
///
/// Starting from a Grid full of walls, passages are carved from `(1, 1)` in steps of two
/// cells, visiting the directions of every cell in random order and backtracking at dead
/// ends. The conventional endpoints `(1, 1)` and `(rows - 2, cols - 2)` are always open and
/// connected. With [`multiple_paths`](GeneratorConfig::multiple_paths) set, every interior wall
/// that separates two open cells in a straight line is then removed with the configured
/// probability. The border is never touched.
///
/// ## Errors
/// - [`MazeError::InvalidDimensions`] unless both `rows` and `cols` are odd and at least 5
/// - [`MazeError::InvalidProbability`] if the probability is outside of `[0, 1]`
pub fn generate_maze(
	rows: usize,
	cols: usize,
	config: GeneratorConfig,
	rng: &mut WyRand,
) -> Result<Maze> {
	if rows < 5 || cols < 5 || rows % 2 == 0 || cols % 2 == 0 {
		return Err(MazeError::InvalidDimensions { rows, cols });
	}
	let probability = config.wall_removal_probability;
	if !(0.0..=1.0).contains(&probability) {
		return Err(MazeError::InvalidProbability(probability));
	}

	let mut maze = Maze::filled(rows, cols)?;
	carve_passages(&mut maze, (1, 1), rng);
	maze.set((1, 1), Cell::Open);
	maze.set((rows - 2, cols - 2), Cell::Open);

	if config.multiple_paths {
		remove_walls(&mut maze, probability, rng);
	}

	Ok(maze)
}

/// [`generate_maze`] with a fresh generator seeded by `seed`.
///
/// The same seed always produces the same Maze.
///
/// ```
/// use maze_heuristics::{generate_maze_seeded, GeneratorConfig};
///
/// let a = generate_maze_seeded(15, 21, GeneratorConfig::default(), 7).unwrap();
/// let b = generate_maze_seeded(15, 21, GeneratorConfig::default(), 7).unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!((a.rows(), a.cols()), (15, 21));
/// assert!(a.is_open((1, 1)) && a.is_open((13, 19)));
/// ```
pub fn generate_maze_seeded(
	rows: usize,
	cols: usize,
	config: GeneratorConfig,
	seed: u64,
) -> Result<Maze> {
	let mut rng = WyRand::new_seed(seed);
	generate_maze(rows, cols, config, &mut rng)
}

/// Depth-first carving with an explicit stack, so large Mazes cannot overflow the call stack
fn carve_passages(maze: &mut Maze, from: Point, rng: &mut WyRand) {
	let (rows, cols) = (maze.rows() as isize, maze.cols() as isize);
	maze.set(from, Cell::Open);

	let mut directions = CARVE_DIRECTIONS;
	rng.shuffle(&mut directions);
	let mut stack = vec![(from, directions, 0)];

	while let Some((current, directions, next_dir)) = stack.last_mut() {
		if *next_dir == directions.len() {
			stack.pop();
			continue;
		}
		let (dr, dc) = directions[*next_dir];
		*next_dir += 1;

		let (r, c) = (current.0 as isize + dr, current.1 as isize + dc);
		if r <= 0 || c <= 0 || r >= rows - 1 || c >= cols - 1 {
			continue;
		}
		let other = (r as usize, c as usize);
		if !maze.is_wall(other) {
			continue;
		}

		let between = (
			(current.0 as isize + dr / 2) as usize,
			(current.1 as isize + dc / 2) as usize,
		);
		maze.set(other, Cell::Open);
		maze.set(between, Cell::Open);

		let mut directions = CARVE_DIRECTIONS;
		rng.shuffle(&mut directions);
		stack.push((other, directions, 0));
	}
}

fn remove_walls(maze: &mut Maze, probability: f64, rng: &mut WyRand) {
	for row in 1..maze.rows() - 1 {
		for col in 1..maze.cols() - 1 {
			if !maze.is_wall((row, col)) {
				continue;
			}
			let vertical = maze.is_open((row - 1, col)) && maze.is_open((row + 1, col));
			let horizontal = maze.is_open((row, col - 1)) && maze.is_open((row, col + 1));
			if (vertical || horizontal) && random_unit(rng) < probability {
				maze.set((row, col), Cell::Open);
			}
		}
	}
}

/// A uniformly distributed number in `[0, 1)`
fn random_unit(rng: &mut WyRand) -> f64 {
	rng.generate::<u32>() as f64 / (u32::MAX as f64 + 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::oracle::distances_to_goal;

	#[test]
	fn invalid_dimensions() {
		for (rows, cols) in [(3, 7), (7, 3), (6, 7), (7, 8)] {
			assert_eq!(
				generate_maze_seeded(rows, cols, GeneratorConfig::default(), 1),
				Err(MazeError::InvalidDimensions { rows, cols })
			);
		}
	}

	#[test]
	fn invalid_probability() {
		let config = GeneratorConfig {
			multiple_paths: true,
			wall_removal_probability: 1.5,
		};
		assert_eq!(
			generate_maze_seeded(7, 7, config, 1),
			Err(MazeError::InvalidProbability(1.5))
		);
	}

	#[test]
	fn border_stays_solid() {
		for seed in 0..10 {
			let maze = generate_maze_seeded(21, 31, GeneratorConfig::default(), seed).unwrap();
			for row in 0..maze.rows() {
				assert!(maze.is_wall((row, 0)) && maze.is_wall((row, maze.cols() - 1)));
			}
			for col in 0..maze.cols() {
				assert!(maze.is_wall((0, col)) && maze.is_wall((maze.rows() - 1, col)));
			}
		}
	}

	#[test]
	fn perfect_maze_reaches_every_room() {
		for seed in 0..10 {
			let maze = generate_maze_seeded(21, 21, GeneratorConfig::PERFECT, seed).unwrap();
			let (start, end) = maze.default_endpoints();
			let distances = distances_to_goal(&maze, end);

			assert!(distances.contains(start));
			// every odd/odd cell is a room and gets carved
			for row in (1..21).step_by(2) {
				for col in (1..21).step_by(2) {
					assert!(distances.contains((row, col)));
				}
			}
			// a spanning tree over 100 rooms has 99 corridors
			let open = (0..21)
				.flat_map(|row| (0..21).map(move |col| (row, col)))
				.filter(|&p| maze.is_open(p))
				.count();
			assert_eq!(open, 100 + 99);
		}
	}

	#[test]
	fn loops_open_more_cells() {
		let perfect = generate_maze_seeded(41, 41, GeneratorConfig::PERFECT, 3).unwrap();
		let looped = generate_maze_seeded(
			41,
			41,
			GeneratorConfig {
				multiple_paths: true,
				wall_removal_probability: 1.0,
			},
			3,
		)
		.unwrap();

		let count = |maze: &Maze| maze.to_numeric().iter().flatten().filter(|&&v| v == 0).count();
		assert!(count(&looped) > count(&perfect));
	}
}
