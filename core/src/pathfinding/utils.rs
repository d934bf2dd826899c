use crate::grid::Position;
use rustc_hash::FxHashMap;

/// Path from start to end (`None` when unreachable), cells visited, seconds spent.
pub type PathResult = (Option<Vec<Position>>, usize, f64);

/// Walk parent links back from `target` to `start` and return the cells in
/// start-to-target order.
///
/// If the chain breaks before reaching `start` the partial chain is returned,
/// beginning at the first cell that has no parent.
pub fn reconstruct_path(
    parent_map: &FxHashMap<Position, Position>,
    start: Position,
    target: Position,
) -> Vec<Position> {
    let mut path = vec![target];
    let mut current_cell = target;

    while current_cell != start {
        match parent_map.get(&current_cell) {
            Some(&parent_cell) => {
                path.push(parent_cell);
                current_cell = parent_cell;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
