use lifeboard_engine::{SimConfig, Simulation};

#[test]
fn facade_smoke_paint_step_render_path() {
    let mut sim = Simulation::new(16, 16).expect("dimensions are valid");
    assert_eq!(sim.rows(), 16);
    assert_eq!(sim.cols(), 16);
    assert!(!sim.running());

    // Blinker through the JS-facing API.
    sim.set_cell_alive(8, 7);
    sim.set_cell_alive(8, 8);
    sim.set_cell_alive(8, 9);
    assert_eq!(sim.population(), 3);

    sim.step();
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.population(), 3);

    // Render path: pointer + length describe one byte per cell.
    assert_eq!(sim.cells_len(), 256);
    assert_eq!(sim.cells_len_bytes(), 256);
    assert!(!sim.cells_ptr().is_null());
}

#[test]
fn config_json_uses_camel_case_and_fills_defaults() {
    let config = SimConfig::from_json(r#"{"rows": 12, "tickIntervalMs": 100}"#)
        .expect("config JSON should parse");
    assert_eq!(config.rows, 12);
    assert_eq!(config.cols, 60);
    assert_eq!(config.tick_interval_ms, 100);
    assert_eq!(config.density, 0.3);

    assert!(SimConfig::from_json("not json").is_err());
}

#[test]
fn facade_config_constructor_applies_the_board_shape() {
    let mut sim =
        Simulation::new_with_config(r#"{"rows": 10, "cols": 20, "seed": 9, "density": 0.8}"#)
            .expect("config should be valid");
    assert_eq!(sim.rows(), 10);
    assert_eq!(sim.cols(), 20);
    assert_eq!(sim.population(), 0);

    sim.randomize();
    assert!(sim.population() > 0);
    assert_eq!(sim.generation(), 0);
}

#[test]
fn start_stop_toggle_the_run_flag() {
    // Without a JS host there is no timer to arm; the flag and the
    // double-start rule still behave the same.
    let mut sim = Simulation::new(8, 8).expect("dimensions are valid");
    sim.start();
    assert!(sim.running());
    sim.start();
    assert!(sim.running());
    sim.stop();
    assert!(!sim.running());

    sim.start();
    sim.clear();
    assert!(!sim.running());
}

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(64, 64).expect("dimensions are valid");
    sim.enable_perf_metrics(true);
    sim.set_density(0.5);
    sim.set_seed(1234);
    sim.randomize();
    sim.step();
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 4096);
}

#[test]
fn resize_through_the_facade_swaps_the_board() {
    let mut sim = Simulation::new(4, 4).expect("dimensions are valid");
    sim.set_cell_alive(1, 1);
    sim.resize(6, 6).expect("dimensions are valid");
    assert_eq!(sim.rows(), 6);
    assert_eq!(sim.cells_len(), 36);
    assert_eq!(sim.population(), 0);
}
