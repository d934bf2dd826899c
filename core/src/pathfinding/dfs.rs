use super::frontier::Stack;
use super::state::timed_search;
use super::utils::PathResult;
use crate::grid::Grid;

/// Depth-first search from the grid's start cell to its end cell.
///
/// Finds *a* connecting path, not necessarily a shortest one.
pub fn dfs_find_path<G: Grid + ?Sized>(grid: &G) -> PathResult {
    let (result, _) = timed_search::<Stack, G>(grid);
    result
}
