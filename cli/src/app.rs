use mazepath_core::{Maze, MazeError};
use std::{error::Error, path::{Path, PathBuf}};

pub struct MazeApp {
    pub maze_path: PathBuf,
}

impl MazeApp {
    pub fn new(maze_path: &Path) -> Result<Self, Box<dyn Error>> {
        if !maze_path.exists() {
            return Err(format!("Maze file does not exist: {:?}", maze_path).into());
        }
        if !maze_path.is_file() {
            return Err(format!("Maze path is not a file: {:?}", maze_path).into());
        }

        Ok(Self {
            maze_path: maze_path.to_path_buf(),
        })
    }

    pub fn load_maze(&self) -> Result<Maze, MazeError> {
        Maze::load(&self.maze_path)
    }
}
