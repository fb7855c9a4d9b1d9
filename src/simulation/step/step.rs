use crate::grid::{CELL_ALIVE, CELL_DEAD};
use crate::systems::life;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(core: &mut SimulationCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.rows = core.grid.rows();
        core.perf_stats.cols = core.grid.cols();
        core.perf_stats.grid_size = core.grid.size() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let next = life::next_generation(&core.grid);

    if perf_on {
        let mut births = 0u32;
        let mut deaths = 0u32;
        for (before, after) in core.grid.cells().iter().zip(next.cells()) {
            match (*before, *after) {
                (CELL_DEAD, CELL_ALIVE) => births += 1,
                (CELL_ALIVE, CELL_DEAD) => deaths += 1,
                _ => {}
            }
        }
        core.perf_stats.births = births;
        core.perf_stats.deaths = deaths;
    }

    // The old generation is dropped only after the new one is complete;
    // snapshots cloned earlier stay valid either way.
    core.grid = next;
    core.generation += 1;

    if perf_on {
        core.perf_stats.population = core.grid.population();
        if let Some(t0) = step_start {
            core.perf_stats.step_ms = t0.elapsed_ms();
        }
    }
}
