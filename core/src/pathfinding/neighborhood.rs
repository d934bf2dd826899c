use crate::grid::{Grid, Position};

/// Orthogonal neighbors of `cell` the grid reports as valid, in North, East,
/// South, West order.
///
/// The order decides which route DFS follows when several exist. Visited
/// state is not consulted here.
pub fn neighbors<G: Grid + ?Sized>(grid: &G, cell: Position) -> Vec<Position> {
    let Position { row, col } = cell;
    let candidates = [
        row.checked_sub(1).map(|r| Position::new(r, col)),
        col.checked_add(1).map(|c| Position::new(row, c)),
        row.checked_add(1).map(|r| Position::new(r, col)),
        col.checked_sub(1).map(|c| Position::new(row, c)),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|pos| grid.is_valid_cell(pos.row, pos.col))
        .collect()
}
