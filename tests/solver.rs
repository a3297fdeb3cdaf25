use maze_heuristics::{oracle::distances_to_goal, prelude::*, TreeHeuristic};

fn solve_all(maze: &Maze, start: Point, goal: Point) -> Vec<Solution> {
    HeuristicKind::ALL
        .iter()
        .map(|&kind| solve(maze, start, goal, kind).unwrap())
        .collect()
}

#[test]
fn single_corridor() {
    let maze: Maze = "\
        #####
        #...#
        ###.#
        #...#
        #####"
        .parse()
        .unwrap();

    let solution = solve(&maze, (1, 1), (3, 3), HeuristicKind::Manhattan).unwrap();
    assert_eq!(solution.path_len(), Some(4));
    assert_eq!(
        solution.maze.solution_cells().collect::<Vec<_>>(),
        vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)],
    );
    let path = solution.path.unwrap();
    assert_eq!(path, vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]);
}

#[test]
fn open_room_has_no_detours() {
    let maze: Maze = "\
        #######
        #.....#
        #.....#
        #.....#
        #.....#
        #.....#
        #######"
        .parse()
        .unwrap();

    let problems: [(Point, Point); 4] = [
        ((1, 1), (5, 5)),
        ((5, 1), (1, 5)),
        ((3, 3), (1, 1)),
        ((2, 4), (5, 2)),
    ];
    for (start, goal) in problems {
        let manhattan = start.0.abs_diff(goal.0) + start.1.abs_diff(goal.1);
        for (kind, solution) in HeuristicKind::ALL.iter().zip(solve_all(&maze, start, goal)) {
            assert_eq!(
                solution.path_len(),
                Some(manhattan),
                "{} from {:?} to {:?}",
                kind,
                start,
                goal
            );
        }
    }
}

#[test]
fn walled_in_start() {
    let maze: Maze = "\
        #######
        #.#...#
        ###...#
        #.....#
        #######"
        .parse()
        .unwrap();

    for solution in solve_all(&maze, (1, 1), (3, 5)) {
        assert!(!solution.is_solved());
        assert_eq!(solution.maze, maze);
        assert_eq!(solution.maze.solution_cells().count(), 0);
        assert_eq!(solution.expanded, 1);
    }
}

#[test]
fn manhattan_is_admissible() {
    for seed in 0..8 {
        let maze = generate_maze_seeded(31, 31, GeneratorConfig::default(), seed).unwrap();
        let (_, goal) = maze.default_endpoints();
        let distances = distances_to_goal(&maze, goal);

        for (point, distance) in distances.iter() {
            let estimate = point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1);
            assert!(estimate <= distance);
        }
    }
}

#[test]
fn manhattan_finds_shortest_paths() {
    for seed in 0..8 {
        let maze = generate_maze_seeded(41, 41, GeneratorConfig::default(), seed).unwrap();
        let (start, goal) = maze.default_endpoints();
        let distances = distances_to_goal(&maze, goal);

        let solution = solve(&maze, start, goal, HeuristicKind::Manhattan).unwrap();
        assert_eq!(solution.path_len(), distances.get(start));
    }
}

#[test]
fn learned_paths_are_valid() {
    for seed in 0..8 {
        let maze = generate_maze_seeded(41, 41, GeneratorConfig::default(), seed).unwrap();
        let (start, goal) = maze.default_endpoints();
        let shortest = distances_to_goal(&maze, goal).get(start).unwrap();

        for solution in solve_all(&maze, start, goal) {
            assert_eq!(solution.oracle_distance.unwrap_or(shortest), shortest);
            let path = solution.path.expect("generated mazes are connected");
            assert!(path.cost() >= shortest);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            for (a, b) in path.iter().zip(path.iter().skip(1)) {
                assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
                assert!(maze.is_open(*b));
            }
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let maze = generate_maze_seeded(41, 41, GeneratorConfig::default(), 99).unwrap();
    let (start, goal) = maze.default_endpoints();

    for kind in HeuristicKind::ALL {
        let first = solve(&maze, start, goal, kind).unwrap();
        for _ in 0..3 {
            let again = solve(&maze, start, goal, kind).unwrap();
            assert_eq!(again.maze, first.maze);
            assert_eq!(again.path, first.path);
            assert_eq!(again.expanded, first.expanded);
        }
    }
}

#[test]
fn tree_estimates_are_clamped() {
    let maze = generate_maze_seeded(25, 25, GeneratorConfig::default(), 5).unwrap();
    let (start, goal) = maze.default_endpoints();

    let mut heuristic = TreeHeuristic::default();
    heuristic.prepare(&maze, start, goal);
    assert!(heuristic.is_trained());

    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            assert!(heuristic.estimate((row, col), goal, &maze) >= 1.0);
        }
    }
}

#[test]
fn numeric_interchange() {
    let grid = vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 1, 1, 0, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
    ];
    let maze = Maze::from_numeric(&grid).unwrap();
    let comparison = compare_heuristics(&maze, (1, 1), (3, 1)).unwrap();

    for run in comparison.runs() {
        assert_eq!(
            run.solution.maze.to_numeric(),
            vec![
                vec![1, 1, 1, 1, 1],
                vec![1, 2, 2, 2, 1],
                vec![1, 1, 1, 2, 1],
                vec![1, 2, 2, 2, 1],
                vec![1, 1, 1, 1, 1],
            ]
        );
    }
}
