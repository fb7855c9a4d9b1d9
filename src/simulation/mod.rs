//! Simulation - one Life board plus the machinery around it.
//!
//! `SimulationCore` owns the grid, the generation counter, and the
//! run/pause gate; every mutation of the board goes through it. The
//! wasm facade in `facade.rs` wraps the core for JS, and `ticker/`
//! holds the browser timer plumbing. The core itself never talks to
//! JS, which is what keeps it testable on the native target.

use crate::domain::config::SimConfig;
use crate::grid::{Cell, Grid};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "ticker/gate.rs"]
mod gate;
#[cfg(target_arch = "wasm32")]
#[path = "ticker/chain.rs"]
mod chain;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use gate::TickGate;
use perf_timer::PerfTimer;

/// The simulation state behind the facade.
pub struct SimulationCore {
    grid: Grid,
    gate: TickGate,

    // Settings
    density: f32,
    tick_interval_ms: u32,

    // State
    generation: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a paused core with an all-dead board.
    pub fn new(rows: u32, cols: u32) -> Self {
        init::create_simulation_core(rows, cols)
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, String> {
        init::from_config(config)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> u32 { self.grid.population() }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Deep copy of the current board; later steps and commands leave
    /// it untouched.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn set_density(&mut self, density: f32) {
        settings::set_density(self, density);
    }

    pub fn density(&self) -> f32 { self.density }

    pub fn set_tick_interval_ms(&mut self, ms: i32) {
        settings::set_tick_interval_ms(self, ms);
    }

    pub fn tick_interval_ms(&self) -> u32 { self.tick_interval_ms }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Re-roll the board from the density knob
    pub fn randomize(&mut self) {
        commands::randomize(self);
    }

    /// Wipe the board and stop the run
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Paint one cell alive; out of bounds is ignored
    pub fn set_cell_alive(&mut self, row: i32, col: i32) {
        commands::set_cell_alive(self, row, col);
    }

    /// Erase one cell; out of bounds is ignored
    pub fn set_cell_dead(&mut self, row: i32, col: i32) {
        commands::set_cell_dead(self, row, col);
    }

    /// Paint a filled disc (brush)
    pub fn paint_cells_in_radius(&mut self, row: i32, col: i32, radius: i32) {
        commands::paint_cells_in_radius(self, row, col, radius);
    }

    /// Erase a filled disc
    pub fn erase_cells_in_radius(&mut self, row: i32, col: i32, radius: i32) {
        commands::erase_cells_in_radius(self, row, col, radius);
    }

    /// Swap in a fresh all-dead board with new dimensions
    pub fn resize(&mut self, rows: u32, cols: u32) {
        commands::resize(self, rows, cols);
    }

    /// Advance one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Open the gate. Returns the epoch for the new run, or `None`
    /// when already running.
    pub fn resume(&mut self) -> Option<u64> {
        self.gate.start()
    }

    /// Close the gate; queued ticks become no-ops.
    pub fn halt(&mut self) {
        self.gate.stop();
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_running()
    }

    /// Fire-time check used by the tick chain.
    pub fn ticks_allowed(&self, epoch: u64) -> bool {
        self.gate.may_fire(epoch)
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const Cell {
        self.grid.cells_ptr()
    }

    /// Cell count of the board
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
