use mazepath_core::{Algorithm, Maze, MazeSolver, Position};
use tracing::info;

pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Option<Vec<Position>>,
    pub cells_visited: usize,
    pub search_duration: f64,
}

impl SearchResult {
    /// Number of moves on the path, `None` when no path was found.
    pub fn step_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// Run each algorithm in turn on the same maze, resetting the solver between runs.
pub fn execute_searches(maze: &Maze, algorithms: &[Algorithm]) -> Vec<SearchResult> {
    let mut solver = MazeSolver::new(maze);

    algorithms
        .iter()
        .map(|&algorithm| {
            let (path, cells_visited, search_duration) = solver.solve(algorithm);
            solver.reset();

            info!(
                %algorithm,
                found = path.is_some(),
                cells_visited,
                "search finished in {:.3} ms",
                search_duration * 1000.0
            );

            SearchResult {
                algorithm,
                path,
                cells_visited,
                search_duration,
            }
        })
        .collect()
}
