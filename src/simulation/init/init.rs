use crate::domain::config::{SimConfig, DEFAULT_DENSITY, DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS};
use crate::grid::Grid;

use super::gate::TickGate;
use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(rows: u32, cols: u32) -> SimulationCore {
    SimulationCore {
        grid: Grid::empty(rows, cols),
        gate: TickGate::new(),
        generation: 0,
        rng_state: DEFAULT_SEED,
        density: DEFAULT_DENSITY,
        tick_interval_ms: DEFAULT_TICK_INTERVAL_MS as u32,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Grid starts empty and paused even when a density is configured; the
/// page decides when to roll the first board and start the clock.
pub(super) fn from_config(config: &SimConfig) -> Result<SimulationCore, String> {
    let (rows, cols) = config.dimensions()?;
    let mut core = create_simulation_core(rows, cols);
    core.set_density(config.density);
    core.set_tick_interval_ms(config.tick_interval_ms);
    core.set_seed(config.seed);
    Ok(core)
}
