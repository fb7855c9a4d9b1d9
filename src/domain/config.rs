//! Simulation configuration as handed over by the embedding page.
//!
//! The page passes a JSON object with camelCase keys; every field is
//! optional and falls back to the defaults below.

use serde::Deserialize;

pub const DEFAULT_ROWS: i32 = 32;
pub const DEFAULT_COLS: i32 = 60;
pub const DEFAULT_DENSITY: f32 = 0.3;
pub const DEFAULT_TICK_INTERVAL_MS: i32 = 500;
/// xorshift32 seed; any nonzero value works.
pub const DEFAULT_SEED: u32 = 0x4C69_6665;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: i32,
    #[serde(default = "default_seed")]
    pub seed: u32,
}

fn default_rows() -> i32 {
    DEFAULT_ROWS
}

fn default_cols() -> i32 {
    DEFAULT_COLS
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
}

fn default_tick_interval_ms() -> i32 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            density: DEFAULT_DENSITY,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Validated grid dimensions. Negative values are a caller bug and
    /// are rejected here instead of being clamped away.
    pub fn dimensions(&self) -> Result<(u32, u32), String> {
        check_dimensions(self.rows, self.cols)
    }
}

pub(crate) fn check_dimensions(rows: i32, cols: i32) -> Result<(u32, u32), String> {
    if rows < 0 || cols < 0 {
        return Err(format!("invalid grid dimensions: {}x{}", rows, cols));
    }
    Ok((rows as u32, cols as u32))
}
