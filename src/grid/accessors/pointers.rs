use super::super::{Cell, Grid};

impl Grid {
    // === Raw buffer view for the JS renderer ===

    /// Pointer into wasm linear memory. JS wraps it in a `Uint8Array`
    /// of `size()` bytes and must re-query after any engine call; steps
    /// and resizes reallocate the buffer.
    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }
}
