use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a [`crate::Maze`].
///
/// A search that finds no path is not an error: it is reported as a `None`
/// path by the traversal functions.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("maze has no rows")]
    Empty,

    #[error("invalid header line {line:?}, expected \"<rows> <cols>\"")]
    InvalidHeader { line: String },

    #[error("header declares {rows}x{cols} but maze body is {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("unknown cell character {ch:?} at row {row}, col {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("maze has no start cell ('A')")]
    MissingStart,

    #[error("maze has no end cell ('B')")]
    MissingEnd,

    #[error("second start cell at row {row}, col {col}")]
    DuplicateStart { row: usize, col: usize },

    #[error("second end cell at row {row}, col {col}")]
    DuplicateEnd { row: usize, col: usize },

    #[error("position ({row}, {col}) is outside a {rows}x{cols} maze")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
