use super::*;

impl Grid {
    // === Dimensions ===

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    // === Index conversion ===

    /// (row, col) to flat buffer index. Callers check bounds first.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        (row * self.cols + col) as usize
    }

    // === Bounds checking ===

    /// Signed coordinates so callers can probe neighbors of edge cells
    /// without wrapping arithmetic.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }
}
