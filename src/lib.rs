//! Lifeboard Engine - Conway's Game of Life in WASM
//!
//! The browser page owns all presentation (canvas, buttons, sliders) and
//! drives this crate through the `Simulation` facade. Cell state is read
//! zero-copy: JS wraps `cells_ptr()`/`cells_len()` in a `Uint8Array`
//! over wasm linear memory and repaints from it after every call.
//!
//! Layout:
//! - grid/        - Cell storage
//! - systems/     - The Life rule
//! - domain/      - Configuration
//! - simulation/  - Core, commands, ticker, facade

pub mod grid;
pub mod systems;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Lifeboard WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use grid::{Cell, Grid, CELL_ALIVE, CELL_DEAD};
pub use simulation::{PerfStats, Simulation, SimulationCore};
pub use systems::life::next_generation;

// Export cell constants for JS
#[wasm_bindgen]
pub fn cell_dead() -> u8 { CELL_DEAD }
#[wasm_bindgen]
pub fn cell_alive() -> u8 { CELL_ALIVE }
