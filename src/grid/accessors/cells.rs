use super::super::{random, Cell, Grid, CELL_ALIVE, CELL_DEAD};

impl Grid {
    // === Cell access ===

    /// Cell state at (row, col); anything outside the grid reads as dead.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Cell {
        if !self.in_bounds(row, col) {
            return CELL_DEAD;
        }
        self.cells[self.index(row as u32, col as u32)]
    }

    #[inline]
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == CELL_ALIVE
    }

    /// Raw write at known-valid coordinates.
    #[inline]
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    // === Painting ===

    /// Mark a cell alive. Coordinates outside the grid are ignored;
    /// pointer drags near the edge produce them routinely.
    pub fn set_alive(&mut self, row: i32, col: i32) {
        if self.in_bounds(row, col) {
            self.set_cell(row as u32, col as u32, CELL_ALIVE);
        }
    }

    pub fn set_dead(&mut self, row: i32, col: i32) {
        if self.in_bounds(row, col) {
            self.set_cell(row as u32, col as u32, CELL_DEAD);
        }
    }

    /// Copy of this grid with (row, col) alive; the receiver is left
    /// untouched. Out-of-bounds coordinates give an unchanged copy.
    pub fn with_cell_alive(&self, row: i32, col: i32) -> Grid {
        let mut next = self.clone();
        next.set_alive(row, col);
        next
    }

    // === Whole-grid operations ===

    pub fn clear(&mut self) {
        self.cells.fill(CELL_DEAD);
    }

    /// Re-roll every cell: alive with probability `density`, which is
    /// clamped into [0, 1] here so a wild knob value cannot fail.
    pub fn randomize(&mut self, density: f32, rng_state: &mut u32) {
        let density = random::clamp_unit(density);
        for cell in self.cells.iter_mut() {
            *cell = if random::unit_f32(rng_state) < density {
                CELL_ALIVE
            } else {
                CELL_DEAD
            };
        }
    }

    // === Aggregates / views ===

    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell == CELL_ALIVE).count() as u32
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
