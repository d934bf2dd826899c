use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;
use tracing::{debug, trace};

use super::frontier::Frontier;
use super::neighborhood::neighbors;
use super::utils::{PathResult, reconstruct_path};
use crate::grid::{Grid, Position};

/// Bookkeeping for a single traversal: pending cells, cells already
/// discovered and the cell each one was discovered from.
pub struct SearchState<F: Frontier> {
    frontier: F,
    pub visited: FxHashSet<Position>,
    parent_map: FxHashMap<Position, Position>,
    start: Position,
}

impl<F: Frontier> SearchState<F> {
    pub fn new(start: Position) -> Self {
        let mut frontier = F::default();
        let mut visited = FxHashSet::default();

        frontier.push(start);
        visited.insert(start);

        Self {
            frontier,
            visited,
            parent_map: FxHashMap::default(),
            start,
        }
    }

    // A cell enters the frontier at most once; its parent is whoever saw it first.
    fn visit_neighbor(&mut self, neighbor: Position, current: Position) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.frontier.push(neighbor);
        }
    }

    pub fn find_path_to_target<G: Grid + ?Sized>(
        &mut self,
        grid: &G,
        target: Position,
    ) -> Option<Vec<Position>> {
        debug!(algorithm = %F::ALGORITHM, start = %self.start, %target, "starting maze search");

        while let Some(current) = self.frontier.pop() {
            trace!(cell = %current, pending = self.frontier.len(), "explore");

            if current == target {
                let path = reconstruct_path(&self.parent_map, self.start, target);
                debug!(
                    algorithm = %F::ALGORITHM,
                    visited = self.visited.len(),
                    length = path.len(),
                    "path found"
                );
                return Some(path);
            }

            for neighbor in neighbors(grid, current) {
                self.visit_neighbor(neighbor, current);
            }
        }

        debug!(algorithm = %F::ALGORITHM, visited = self.visited.len(), "no path found");
        None
    }

    pub fn into_parent_map(self) -> FxHashMap<Position, Position> {
        self.parent_map
    }
}

/// Search `grid` from its start to its end cell with frontier `F`, timing the
/// run. The parent map is handed back so callers can rebuild the path later.
pub fn timed_search<F: Frontier, G: Grid + ?Sized>(
    grid: &G,
) -> (PathResult, FxHashMap<Position, Position>) {
    let search_timer = Instant::now();

    let mut search_state = SearchState::<F>::new(grid.start());
    let path = search_state.find_path_to_target(grid, grid.end());
    let visited_count = search_state.visited.len();

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    ((path, visited_count, elapsed_time), search_state.into_parent_map())
}
