use lifeboard_engine::systems::life::count_live_neighbors;
use lifeboard_engine::{next_generation, Grid};

#[test]
fn block_is_a_still_life() {
    let mut grid = Grid::empty(4, 4);
    grid.set_alive(1, 1);
    grid.set_alive(1, 2);
    grid.set_alive(2, 1);
    grid.set_alive(2, 2);

    let next = next_generation(&grid);
    assert_eq!(next, grid);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut grid = Grid::empty(3, 3);
    grid.set_alive(1, 0);
    grid.set_alive(1, 1);
    grid.set_alive(1, 2);

    let step1 = next_generation(&grid);
    assert!(step1.is_alive(0, 1));
    assert!(step1.is_alive(1, 1));
    assert!(step1.is_alive(2, 1));
    assert_eq!(step1.population(), 3);

    let step2 = next_generation(&step1);
    assert_eq!(step2, grid);
}

#[test]
fn empty_board_stays_empty() {
    let grid = Grid::empty(8, 8);
    let next = next_generation(&grid);
    assert_eq!(next.population(), 0);
    assert_eq!(next, grid);
}

#[test]
fn step_never_mutates_its_input() {
    let mut rng_state = 7u32;
    let grid = Grid::random(12, 12, 0.5, &mut rng_state);
    let before = grid.clone();
    let _ = next_generation(&grid);
    assert_eq!(grid, before);
}

#[test]
fn corner_cell_has_a_three_cell_neighborhood() {
    let mut grid = Grid::empty(4, 4);
    grid.set_alive(0, 1);
    grid.set_alive(1, 0);
    grid.set_alive(1, 1);
    assert_eq!(count_live_neighbors(&grid, 0, 0), 3);

    let next = next_generation(&grid);
    assert!(next.is_alive(0, 0), "corner birth from exactly 3 neighbors");
}

#[test]
fn edge_blinker_collapses_instead_of_wrapping() {
    // A vertical triple on the left edge of a 3x3 board. With wraparound
    // the column would oscillate; with clipped edges it collapses.
    let mut grid = Grid::empty(3, 3);
    grid.set_alive(0, 0);
    grid.set_alive(1, 0);
    grid.set_alive(2, 0);

    let next = next_generation(&grid);
    assert!(next.is_alive(1, 0));
    assert!(next.is_alive(1, 1));
    assert_eq!(next.population(), 2);
}

#[test]
fn with_cell_alive_returns_a_copy() {
    let grid = Grid::empty(4, 4);
    let painted = grid.with_cell_alive(2, 2);
    assert_eq!(grid.population(), 0);
    assert_eq!(painted.population(), 1);

    // Out of bounds: unchanged copy, no panic.
    let same = grid.with_cell_alive(9, 9);
    assert_eq!(same, grid);
}

#[test]
fn full_board_dies_back_to_its_corners() {
    let mut rng_state = 3u32;
    let grid = Grid::random(4, 4, 1.0, &mut rng_state);
    assert_eq!(grid.population(), 16);

    // Corners keep 3 neighbors and survive; everything else is
    // overpopulated.
    let next = next_generation(&grid);
    assert_eq!(next.population(), 4);
    assert!(next.is_alive(0, 0));
    assert!(next.is_alive(0, 3));
    assert!(next.is_alive(3, 0));
    assert!(next.is_alive(3, 3));
}

#[test]
fn zero_dimension_grids_step_without_panicking() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let grid = Grid::empty(rows, cols);
        let next = next_generation(&grid);
        assert_eq!(next.size(), 0);
        assert_eq!(next.population(), 0);
    }
}
