use clap::{Parser, ValueEnum};
use mazepath_core::Algorithm;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "mazepath")]
#[command(about = "Solve a text-file maze with depth-first or breadth-first search")]
pub struct Args {
    /// Maze file ('#' wall, '.' open, 'A' start, 'B' end)
    pub maze_file: PathBuf,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
    pub algorithm: Strategy,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show maze info, search statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path coordinates
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Dfs,
    Bfs,
    /// DFS first, then BFS on the same maze
    Both,
}

impl Strategy {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            Strategy::Dfs => vec![Algorithm::Dfs],
            Strategy::Bfs => vec![Algorithm::Bfs],
            Strategy::Both => vec![Algorithm::Dfs, Algorithm::Bfs],
        }
    }
}
