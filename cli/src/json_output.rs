use mazepath_core::{Algorithm, Grid, Maze, Position};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub maze: String,
    pub algorithm: Algorithm,
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub end: Position,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Position>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub cells_explored: usize,
}

pub fn create_json_output(result: &SearchResult, maze_path: &Path, maze: &Maze) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            maze: maze_path.display().to_string(),
            algorithm: result.algorithm,
            rows: maze.rows(),
            cols: maze.cols(),
            start: maze.start(),
            end: maze.end(),
        },
        result: JsonResult {
            found: result.path.is_some(),
            steps: result.step_count(),
            path: result.path.clone(),
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            cells_explored: result.cells_visited,
        },
    }
}

pub fn print_json_output(json_outputs: &[JsonOutput]) {
    match serde_json::to_string_pretty(json_outputs) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
