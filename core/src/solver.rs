use rustc_hash::FxHashMap;

use crate::algorithm::Algorithm;
use crate::grid::{Grid, Position};
use crate::pathfinding::{Frontier, PathResult, Queue, Stack, reconstruct_path, timed_search};

/// Solves one grid with DFS or BFS and remembers the parent links of the last
/// successful run, so the solution can be rebuilt later with [`solution`].
///
/// Every run starts from fresh search state; calling [`reset`] between runs
/// is not required.
///
/// [`solution`]: MazeSolver::solution
/// [`reset`]: MazeSolver::reset
pub struct MazeSolver<'g, G: Grid + ?Sized> {
    grid: &'g G,
    parent_map: FxHashMap<Position, Position>,
    solved: bool,
}

impl<'g, G: Grid + ?Sized> MazeSolver<'g, G> {
    pub fn new(grid: &'g G) -> Self {
        Self {
            grid,
            parent_map: FxHashMap::default(),
            solved: false,
        }
    }

    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// Point the solver at another grid, dropping any previous result.
    pub fn set_grid(&mut self, grid: &'g G) {
        self.grid = grid;
        self.reset();
    }

    pub fn solve_dfs(&mut self) -> Option<Vec<Position>> {
        self.solve(Algorithm::Dfs).0
    }

    pub fn solve_bfs(&mut self) -> Option<Vec<Position>> {
        self.solve(Algorithm::Bfs).0
    }

    pub fn solve(&mut self, algorithm: Algorithm) -> PathResult {
        match algorithm {
            Algorithm::Dfs => self.run::<Stack>(),
            Algorithm::Bfs => self.run::<Queue>(),
        }
    }

    /// Rebuild the start-to-end path found by the last run.
    ///
    /// Returns `None` if nothing was solved since construction or the last
    /// [`reset`](MazeSolver::reset).
    pub fn solution(&self) -> Option<Vec<Position>> {
        self.solved
            .then(|| reconstruct_path(&self.parent_map, self.grid.start(), self.grid.end()))
    }

    pub fn reset(&mut self) {
        self.parent_map.clear();
        self.solved = false;
    }

    fn run<F: Frontier>(&mut self) -> PathResult {
        self.reset();

        let (result, parent_map) = timed_search::<F, G>(self.grid);
        self.solved = result.0.is_some();
        self.parent_map = parent_map;

        result
    }
}
