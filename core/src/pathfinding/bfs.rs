use super::frontier::Queue;
use super::state::timed_search;
use super::utils::PathResult;
use crate::grid::Grid;

/// Breadth-first search from the grid's start cell to its end cell.
///
/// The returned path has the fewest possible steps.
pub fn bfs_find_path<G: Grid + ?Sized>(grid: &G) -> PathResult {
    let (result, _) = timed_search::<Queue, G>(grid);
    result
}
