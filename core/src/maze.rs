use crate::error::MazeError;
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::{fmt, path::Path, str::FromStr};

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'A';
pub const END: char = 'B';
pub const PATH: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// A rectangular maze of open and wall tiles with a start and an end cell.
///
/// Text format, one line per row:
///
/// ```text
/// 3 4
/// A..#
/// .#..
/// ...B
/// ```
///
/// `#` is a wall, `.` or a space is open, `A` marks the start and `B` the
/// end. The leading `<rows> <cols>` header is optional; when present the
/// body has to match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    start: Position,
    end: Position,
}

impl Maze {
    /// Build a fully open `rows` x `cols` maze.
    pub fn new(rows: usize, cols: usize, start: Position, end: Position) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }

        let maze = Self {
            tiles: vec![Tile::Open; rows * cols],
            rows,
            cols,
            start,
            end,
        };
        maze.check_bounds(start)?;
        maze.check_bounds(end)?;
        Ok(maze)
    }

    /// Read and parse a maze file.
    pub fn load(file_path: &Path) -> Result<Self, MazeError> {
        let contents = std::fs::read_to_string(file_path).map_err(|source| MazeError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    /// Turn the cell at `pos` into a wall. Start and end cells stay open.
    pub fn set_wall(&mut self, pos: Position) -> Result<(), MazeError> {
        self.check_bounds(pos)?;
        if pos != self.start && pos != self.end {
            let idx = self.index(pos);
            self.tiles[idx] = Tile::Wall;
        }
        Ok(())
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Position>) -> Result<Self, MazeError> {
        for wall in walls {
            self.set_wall(wall)?;
        }
        Ok(self)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.rows && col < self.cols {
            Some(self.tiles[row * self.cols + col])
        } else {
            None
        }
    }

    /// Draw the maze as text, marking the cells of `path` with `*`.
    pub fn render(&self, path: Option<&[Position]>) -> String {
        let on_path: FxHashSet<Position> = path.unwrap_or_default().iter().copied().collect();
        let mut out = String::with_capacity(self.rows * (self.cols + 1));

        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let ch = if pos == self.start {
                    START
                } else if pos == self.end {
                    END
                } else if on_path.contains(&pos) {
                    PATH
                } else {
                    match self.tiles[self.index(pos)] {
                        Tile::Open => OPEN,
                        Tile::Wall => WALL,
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }

        out
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn check_bounds(&self, pos: Position) -> Result<(), MazeError> {
        if pos.row < self.rows && pos.col < self.cols {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Grid for Maze {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Tile::Open)
    }

    fn start(&self) -> Position {
        self.start
    }

    fn end(&self) -> Position {
        self.end
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = input
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .skip_while(|line| line.is_empty())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let header = match lines.first() {
            Some(first) if first.trim_start().starts_with(|c: char| c.is_ascii_digit()) => {
                Some(parse_header(first)?)
            }
            _ => None,
        };
        let body = if header.is_some() { &lines[1..] } else { &lines[..] };

        let Some(first_row) = body.first() else {
            return Err(MazeError::Empty);
        };
        let cols = first_row.chars().count();
        if cols == 0 {
            return Err(MazeError::Empty);
        }
        let rows = body.len();

        if let Some((declared_rows, declared_cols)) = header {
            if declared_rows != rows || declared_cols != cols {
                return Err(MazeError::DimensionMismatch {
                    rows: declared_rows,
                    cols: declared_cols,
                    actual_rows: rows,
                    actual_cols: cols,
                });
            }
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        let mut start = None;
        let mut end = None;

        for (row, line) in body.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    width,
                    expected: cols,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    WALL => Tile::Wall,
                    OPEN | ' ' => Tile::Open,
                    START => {
                        if start.replace(Position::new(row, col)).is_some() {
                            return Err(MazeError::DuplicateStart { row, col });
                        }
                        Tile::Open
                    }
                    END => {
                        if end.replace(Position::new(row, col)).is_some() {
                            return Err(MazeError::DuplicateEnd { row, col });
                        }
                        Tile::Open
                    }
                    other => return Err(MazeError::UnknownCell { ch: other, row, col }),
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            rows,
            cols,
            start: start.ok_or(MazeError::MissingStart)?,
            end: end.ok_or(MazeError::MissingEnd)?,
        })
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidHeader {
        line: line.to_string(),
    };

    let mut parts = line.split_whitespace();
    let rows = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let cols = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok((rows, cols))
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
