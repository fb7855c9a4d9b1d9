//! Grid - flat row-major cell storage for the Life board.
//!
//! One byte per cell instead of a vec-of-vecs: the whole board lives in a
//! single linear buffer that clones cheaply and that JS can view directly
//! as a `Uint8Array` over wasm memory.

mod accessors;
mod indexing;
pub(crate) mod random;

/// Cell state. `u8` so the buffer maps 1:1 onto a JS typed array.
pub type Cell = u8;

pub const CELL_DEAD: Cell = 0;
pub const CELL_ALIVE: Cell = 1;

/// Row-major cell matrix. Dimensions are fixed at construction; resizing
/// means building a new grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid. Zero rows or columns gives a zero-length buffer,
    /// which every other operation tolerates.
    pub fn empty(rows: u32, cols: u32) -> Self {
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            size,
            cells: vec![CELL_DEAD; size],
        }
    }

    /// Fresh grid where each cell is alive with probability `density`.
    pub fn random(rows: u32, cols: u32, density: f32, rng_state: &mut u32) -> Self {
        let mut grid = Self::empty(rows, cols);
        grid.randomize(density, rng_state);
        grid
    }
}
