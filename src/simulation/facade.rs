use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::domain::config::{check_dimensions, SimConfig};

#[cfg(target_arch = "wasm32")]
use super::chain::TickChain;
use super::perf_stats::PerfStats;
use super::SimulationCore;

/// JS-facing handle on one simulation. The core sits behind an
/// `Rc<RefCell>` because the tick chain's closure needs its own way in;
/// everything still runs on the one JS thread, so borrows never overlap.
#[wasm_bindgen]
pub struct Simulation {
    core: Rc<RefCell<SimulationCore>>,
    #[cfg(target_arch = "wasm32")]
    chain: Option<Rc<TickChain>>,
}

impl Simulation {
    fn from_core(core: SimulationCore) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            #[cfg(target_arch = "wasm32")]
            chain: None,
        }
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Create a paused simulation with an all-dead board.
    /// Negative dimensions are a caller bug and throw.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: i32, cols: i32) -> Result<Simulation, JsValue> {
        let (rows, cols) = check_dimensions(rows, cols).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(SimulationCore::new(rows, cols)))
    }

    /// Create from a JSON config object (camelCase keys, all optional).
    #[wasm_bindgen(js_name = newWithConfig)]
    pub fn new_with_config(json: &str) -> Result<Simulation, JsValue> {
        let config = SimConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let core = SimulationCore::from_config(&config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.borrow().rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.borrow().cols() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.borrow().generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.borrow().population() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.borrow().is_running() }

    #[wasm_bindgen(getter)]
    pub fn density(&self) -> f32 { self.core.borrow().density() }

    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 { self.core.borrow().tick_interval_ms() }

    /// Alive probability used by `randomize`, clamped into [0, 1].
    pub fn set_density(&mut self, density: f32) {
        self.core.borrow_mut().set_density(density);
    }

    /// Delay between ticks. Applies from the next arm; a tick already
    /// queued keeps the old delay. Negative values count as zero.
    pub fn set_tick_interval_ms(&mut self, ms: i32) {
        self.core.borrow_mut().set_tick_interval_ms(ms);
    }

    /// Reseed the RNG so the next `randomize` is reproducible.
    pub fn set_seed(&mut self, seed: u32) {
        self.core.borrow_mut().set_seed(seed);
    }

    /// Re-roll the whole board from the density knob. Does not touch
    /// the run state; a running simulation keeps ticking from the new
    /// board.
    pub fn randomize(&mut self) {
        self.core.borrow_mut().randomize();
    }

    /// Wipe the board and stop the run.
    pub fn clear(&mut self) {
        self.core.borrow_mut().clear();
        #[cfg(target_arch = "wasm32")]
        {
            self.chain = None;
        }
    }

    /// Paint one cell alive. Out-of-bounds coordinates are ignored.
    pub fn set_cell_alive(&mut self, row: i32, col: i32) {
        self.core.borrow_mut().set_cell_alive(row, col);
    }

    /// Erase one cell. Out-of-bounds coordinates are ignored.
    pub fn set_cell_dead(&mut self, row: i32, col: i32) {
        self.core.borrow_mut().set_cell_dead(row, col);
    }

    /// Paint a filled disc (brush).
    pub fn paint_cells_in_radius(&mut self, row: i32, col: i32, radius: i32) {
        self.core.borrow_mut().paint_cells_in_radius(row, col, radius);
    }

    /// Erase a filled disc.
    pub fn erase_cells_in_radius(&mut self, row: i32, col: i32, radius: i32) {
        self.core.borrow_mut().erase_cells_in_radius(row, col, radius);
    }

    /// Swap in a fresh all-dead board with new dimensions.
    /// Negative dimensions throw, same as the constructor.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), JsValue> {
        let (rows, cols) = check_dimensions(rows, cols).map_err(|e| JsValue::from_str(&e))?;
        self.core.borrow_mut().resize(rows, cols);
        Ok(())
    }

    /// Advance one generation by hand, running or not.
    pub fn step(&mut self) {
        self.core.borrow_mut().step();
    }

    /// Start ticking every `tick_interval_ms`. The first stepped
    /// generation lands one interval from now. No effect when already
    /// running.
    pub fn start(&mut self) {
        let Some(_epoch) = self.core.borrow_mut().resume() else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        {
            self.chain = Some(TickChain::start(Rc::clone(&self.core), _epoch));
        }
    }

    /// Stop ticking. Takes effect immediately: a tick already queued by
    /// the host fires into a closed gate and does nothing.
    pub fn stop(&mut self) {
        self.core.borrow_mut().halt();
        #[cfg(target_arch = "wasm32")]
        {
            self.chain = None;
        }
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.borrow().get_perf_stats()
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.borrow().cells_ptr()
    }

    /// Cell count of the board
    pub fn cells_len(&self) -> usize {
        self.core.borrow().cells_len()
    }

    /// Byte length of the cell array (one byte per cell)
    pub fn cells_len_bytes(&self) -> usize {
        self.core.borrow().cells_len()
    }
}
