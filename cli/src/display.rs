use mazepath_core::maze::{END, PATH, START, WALL};
use mazepath_core::{Grid, Maze, Position};
use std::path::Path;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::SearchResult;
use crate::utils::format_number;

pub fn display_search_info(maze_path: &Path, maze: &Maze, colors: &ColorScheme) {
    println!(
        "🧭 Solving {} ({}x{}) from {} to {}",
        maze_path.display(),
        colors.number(&maze.rows().to_string()),
        colors.number(&maze.cols().to_string()),
        colors.position(&maze.start().to_string()),
        colors.position(&maze.end().to_string())
    );
}

pub fn display_search_results(
    result: &SearchResult,
    maze: &Maze,
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.quiet {
        match &result.path {
            Some(path) => println!("{}", format_path_flow(path, colors)),
            None => println!("{}", colors.error("no path")),
        }
        return;
    }

    let label = colors.algorithm(&result.algorithm.as_str().to_uppercase());

    match &result.path {
        Some(path) => {
            println!(
                "{} {} found a path with {} steps:\n",
                colors.success("✅"),
                label,
                colors.number(&path.len().saturating_sub(1).to_string())
            );
            print!("{}", format_maze(maze, Some(path.as_slice()), colors));
            println!();
            println!("{}", format_path_flow(path, colors));
        }
        None => {
            println!(
                "{} {} found no path between {} and {}",
                colors.error("❌"),
                label,
                colors.position(&maze.start().to_string()),
                colors.position(&maze.end().to_string())
            );
        }
    }

    if display_options.verbose {
        display_search_statistics(result.cells_visited, result.search_duration, colors);
    }
    println!();
}

/// `(0, 0) → (0, 1) → ...`
pub fn format_path_flow(path: &[Position], colors: &ColorScheme) -> String {
    path.iter()
        .map(|cell| colors.position(&cell.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// The maze drawn with `*` on every path cell between start and end.
pub fn format_maze(maze: &Maze, path: Option<&[Position]>, colors: &ColorScheme) -> String {
    maze.render(path)
        .chars()
        .map(|ch| {
            let glyph = ch.to_string();
            match ch {
                START | END => colors.endpoint(&glyph).to_string(),
                PATH => colors.path_cell(&glyph).to_string(),
                WALL => colors.wall(&glyph).to_string(),
                '\n' => glyph,
                _ => colors.floor(&glyph).to_string(),
            }
        })
        .collect()
}

fn display_search_statistics(cells_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!(
        "\n{} Explored {} cells in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(cells_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
