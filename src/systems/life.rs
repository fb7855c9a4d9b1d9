//! Life System - Conway's rule, one generation at a time.
//!
//! The whole system is three pure functions over `Grid`:
//! - neighbors are the 8 surrounding cells, clipped at the edges
//!   (no wraparound; outside the board counts as dead)
//! - a live cell survives with 2 or 3 live neighbors
//! - a dead cell becomes alive with exactly 3 live neighbors
//!
//! `next_generation` only reads its input and hands back a fresh board,
//! so callers can keep old generations around untouched.

use crate::grid::{Cell, Grid, CELL_ALIVE, CELL_DEAD};

/// Offsets of the 8 neighbors around a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors of (row, col). Offsets falling off the board
/// contribute nothing, which is what kills edge gliders.
pub fn count_live_neighbors(grid: &Grid, row: u32, col: u32) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        if grid.is_alive(row as i32 + dr, col as i32 + dc) {
            count += 1;
        }
    }
    count
}

/// B3/S23 transition for a single cell.
pub fn next_state(alive: bool, live_neighbors: u8) -> Cell {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => CELL_ALIVE,
        (false, 3) => CELL_ALIVE,
        _ => CELL_DEAD,
    }
}

/// Compute generation N+1 from generation N. Every cell is decided from
/// the input board alone; in-pass writes go only to the output.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::empty(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let alive = grid.is_alive(row as i32, col as i32);
            let live_neighbors = count_live_neighbors(grid, row, col);
            next.set_cell(row, col, next_state(alive, live_neighbors));
        }
    }
    next
}
