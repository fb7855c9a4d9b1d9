use crate::grid::random::clamp_unit;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_density(core: &mut SimulationCore, density: f32) {
    core.density = clamp_unit(density);
}

pub(super) fn set_tick_interval_ms(core: &mut SimulationCore, ms: i32) {
    // Negative delays mean "as fast as the host allows", same as zero.
    core.tick_interval_ms = ms.max(0) as u32;
}

pub(super) fn set_seed(core: &mut SimulationCore, seed: u32) {
    // Zero is a fixed point of xorshift32.
    core.rng_state = if seed == 0 { 0x9E37_79B9 } else { seed };
}

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}
