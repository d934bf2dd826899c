use crate::algorithm::Algorithm;
use crate::grid::Position;
use std::collections::VecDeque;

/// The pending set of a traversal. DFS and BFS differ only in which cell
/// `pop` hands back.
pub trait Frontier: Default {
    const ALGORITHM: Algorithm;

    fn push(&mut self, cell: Position);

    fn pop(&mut self) -> Option<Position>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
pub type Stack = Vec<Position>;

/// First in, first out.
pub type Queue = VecDeque<Position>;

impl Frontier for Stack {
    const ALGORITHM: Algorithm = Algorithm::Dfs;

    fn push(&mut self, cell: Position) {
        Vec::push(self, cell);
    }

    fn pop(&mut self) -> Option<Position> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Frontier for Queue {
    const ALGORITHM: Algorithm = Algorithm::Bfs;

    fn push(&mut self, cell: Position) {
        self.push_back(cell);
    }

    fn pop(&mut self) -> Option<Position> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
