pub mod bfs;
pub mod dfs;
pub mod frontier;
pub mod neighborhood;
pub mod state;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use frontier::{Frontier, Queue, Stack};
pub use neighborhood::neighbors;
pub use state::{SearchState, timed_search};
pub use utils::{PathResult, reconstruct_path};
