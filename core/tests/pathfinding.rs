use mazepath_core::{Grid, Maze, Position, bfs_find_path, dfs_find_path, neighbors, reconstruct_path};
use rustc_hash::FxHashMap;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn open_maze(rows: usize, cols: usize, start: Position, end: Position) -> Maze {
    Maze::new(rows, cols, start, end).unwrap()
}

fn assert_valid_path(maze: &Maze, path: &[Position]) {
    assert_eq!(path.first(), Some(&maze.start()));
    assert_eq!(path.last(), Some(&maze.end()));
    for cell in path {
        assert!(maze.is_valid_cell(cell.row, cell.col), "{cell} is not open");
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a single step", pair[0], pair[1]);
    }
}

#[test]
fn test_neighbors_follow_north_east_south_west_order() {
    let maze = open_maze(3, 3, pos(0, 0), pos(2, 2));
    assert_eq!(
        neighbors(&maze, pos(1, 1)),
        vec![pos(0, 1), pos(1, 2), pos(2, 1), pos(1, 0)]
    );
}

#[test]
fn test_neighbors_skip_out_of_bounds_and_walls() {
    let maze = open_maze(3, 3, pos(0, 0), pos(2, 2))
        .with_walls([pos(1, 0)])
        .unwrap();

    assert_eq!(neighbors(&maze, pos(0, 0)), vec![pos(0, 1)]);
    assert_eq!(neighbors(&maze, pos(2, 2)), vec![pos(1, 2), pos(2, 1)]);
}

#[test]
fn test_neighbors_of_single_cell_grid() {
    let maze = open_maze(1, 1, pos(0, 0), pos(0, 0));
    assert!(neighbors(&maze, pos(0, 0)).is_empty());
}

#[test]
fn test_bfs_open_grid_finds_shortest_path() {
    let maze = open_maze(3, 3, pos(0, 0), pos(2, 2));

    let (path, visited_count, _) = bfs_find_path(&maze);

    let path = path.unwrap();
    assert_eq!(path, vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 2), pos(2, 2)]);
    assert_eq!(visited_count, 9);
}

#[test]
fn test_dfs_open_grid_finds_connecting_path() {
    let maze = open_maze(3, 3, pos(0, 0), pos(2, 2));

    let (path, visited_count, _) = dfs_find_path(&maze);

    let path = path.unwrap();
    assert_valid_path(&maze, &path);
    assert_eq!(path, vec![pos(0, 0), pos(1, 0), pos(2, 0), pos(2, 1), pos(2, 2)]);
    assert_eq!(visited_count, 7);
}

#[test]
fn test_dfs_path_can_be_longer_than_bfs() {
    let maze = open_maze(3, 3, pos(0, 0), pos(0, 2));

    let (bfs_path, _, _) = bfs_find_path(&maze);
    let (dfs_path, _, _) = dfs_find_path(&maze);

    let bfs_path = bfs_path.unwrap();
    let dfs_path = dfs_path.unwrap();
    assert_eq!(bfs_path.len(), 3);
    assert_eq!(dfs_path.len(), 7);
    assert_valid_path(&maze, &dfs_path);
}

#[test]
fn test_start_equals_end_yields_single_cell() {
    let maze = open_maze(2, 2, pos(1, 1), pos(1, 1));

    let (bfs_path, bfs_visited, _) = bfs_find_path(&maze);
    let (dfs_path, dfs_visited, _) = dfs_find_path(&maze);

    assert_eq!(bfs_path, Some(vec![pos(1, 1)]));
    assert_eq!(dfs_path, Some(vec![pos(1, 1)]));
    assert_eq!(bfs_visited, 1);
    assert_eq!(dfs_visited, 1);
}

#[test]
fn test_walled_off_end_is_not_found() {
    let maze: Maze = "A..\n..#\n.#B\n".parse().unwrap();

    let (bfs_path, bfs_visited, _) = bfs_find_path(&maze);
    let (dfs_path, dfs_visited, _) = dfs_find_path(&maze);

    assert!(bfs_path.is_none());
    assert!(dfs_path.is_none());
    // Every reachable open cell is visited before giving up
    assert_eq!(bfs_visited, 6);
    assert_eq!(dfs_visited, 6);
}

#[test]
fn test_bfs_follows_winding_corridor() {
    let maze: Maze = "\
A..
##.
B..
"
    .parse()
    .unwrap();

    let (path, _, _) = bfs_find_path(&maze);

    assert_eq!(
        path.unwrap(),
        vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 2), pos(2, 2), pos(2, 1), pos(2, 0)]
    );
}

#[test]
fn test_reconstruct_path_walks_parents_back_to_start() {
    let mut parent_map = FxHashMap::default();
    parent_map.insert(pos(0, 1), pos(0, 0));
    parent_map.insert(pos(1, 1), pos(0, 1));
    parent_map.insert(pos(1, 2), pos(1, 1));

    let path = reconstruct_path(&parent_map, pos(0, 0), pos(1, 2));

    assert_eq!(path, vec![pos(0, 0), pos(0, 1), pos(1, 1), pos(1, 2)]);
}

#[test]
fn test_reconstruct_path_with_target_as_start() {
    let parent_map = FxHashMap::default();
    assert_eq!(reconstruct_path(&parent_map, pos(3, 3), pos(3, 3)), vec![pos(3, 3)]);
}

#[test]
fn test_reconstruct_path_stops_at_broken_chain() {
    let mut parent_map = FxHashMap::default();
    parent_map.insert(pos(2, 2), pos(2, 1));

    let path = reconstruct_path(&parent_map, pos(0, 0), pos(2, 2));

    assert_eq!(path, vec![pos(2, 1), pos(2, 2)]);
}
