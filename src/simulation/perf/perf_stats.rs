use wasm_bindgen::prelude::*;

/// Snapshot of the most recent stepped generation. Zeros until perf
/// metrics are enabled; collecting them adds timing overhead.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rows: u32,
    pub(super) cols: u32,
    pub(super) grid_size: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) population: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.rows }
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.cols }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
}
