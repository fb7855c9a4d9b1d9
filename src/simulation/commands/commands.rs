use crate::grid::Grid;

use super::SimulationCore;

pub(super) fn randomize(core: &mut SimulationCore) {
    let (rows, cols) = (core.grid.rows(), core.grid.cols());
    core.grid = Grid::random(rows, cols, core.density, &mut core.rng_state);
    core.generation = 0;
}

/// Clear is also the stop button: wipe the board and halt the run,
/// so a queued tick cannot repopulate an emptied grid.
pub(super) fn clear(core: &mut SimulationCore) {
    core.gate.stop();
    core.grid = Grid::empty(core.grid.rows(), core.grid.cols());
    core.generation = 0;
}

pub(super) fn set_cell_alive(core: &mut SimulationCore, row: i32, col: i32) {
    core.grid.set_alive(row, col);
}

pub(super) fn set_cell_dead(core: &mut SimulationCore, row: i32, col: i32) {
    core.grid.set_dead(row, col);
}

pub(super) fn paint_cells_in_radius(core: &mut SimulationCore, row: i32, col: i32, radius: i32) {
    let r2 = radius * radius;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr * dr + dc * dc <= r2 {
                core.grid.set_alive(row + dr, col + dc);
            }
        }
    }
}

pub(super) fn erase_cells_in_radius(core: &mut SimulationCore, row: i32, col: i32, radius: i32) {
    let r2 = radius * radius;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr * dr + dc * dc <= r2 {
                core.grid.set_dead(row + dr, col + dc);
            }
        }
    }
}

/// New dimensions mean a new board; cell content does not survive a
/// resize. The run/pause state is left alone.
pub(super) fn resize(core: &mut SimulationCore, rows: u32, cols: u32) {
    core.grid = Grid::empty(rows, cols);
    core.generation = 0;
}
