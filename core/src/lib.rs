pub mod algorithm;
pub mod error;
pub mod grid;
pub mod maze;
pub mod pathfinding;
pub mod solver;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::MazeError;
pub use grid::{Grid, Position};
pub use maze::{Maze, Tile};
pub use pathfinding::{PathResult, bfs_find_path, dfs_find_path, neighbors, reconstruct_path};
pub use solver::MazeSolver;
