use super::{shift, Engine, LightEngine, NormalEngine, VectorizedEngine};
use crate::{neighbours::neighbours_at, Axis, Cell, CellView, ConfigError, Fate, Grid};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.35;

/// Fate of every cell must match the neighbours it has on the current field.
fn assert_fates_consistent(grid: &Grid<Cell>) {
    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            let cell = grid.get(x, y);
            let n = neighbours_at(grid, x, y);
            let expected = match (cell.alive, n) {
                (false, _) => None,
                (true, 0..=1) => Some(Fate::DiesIsolation),
                (true, 2..=3) => Some(Fate::Survives),
                (true, _) => Some(Fate::DiesOvercrowding),
            };
            assert_eq!(cell.fate, expected, "x={} y={} n={}\n{}", x, y, n, grid);
            if !cell.alive {
                assert_eq!(cell.age, 0, "dead cell with age at x={} y={}", x, y);
            }
        }
    }
}

#[test]
fn test_fates_follow_current_field() {
    for (w, h) in [(16, 16), (23, 7), (3, 3), (1, 5)] {
        let mut engine = NormalEngine::new(w, h, FILL_RATE, Some(SEED)).unwrap();
        engine.reset();
        assert!(engine.grid().cells().iter().all(|c| c.fate.is_none()));
        for _ in 0..20 {
            engine.step();
            assert_fates_consistent(engine.grid());
        }
    }
}

#[test]
fn test_fates_after_editing() {
    let mut engine = VectorizedEngine::new(12, 12, FILL_RATE, Some(SEED)).unwrap();
    engine.reset();
    engine.step();
    // stale counts must not leak into the next step
    for i in 0..12 {
        engine.set_cell(i, i, true);
        engine.set_cell(i, 11 - i, false);
    }
    let mut reference = NormalEngine::new(12, 12, FILL_RATE, None).unwrap();
    for (i, alive) in engine.alive_cells().into_iter().enumerate() {
        reference.set_cell(i as i64 % 12, i as i64 / 12, alive);
    }
    engine.step();
    reference.step();
    assert_eq!(engine.alive_cells(), reference.alive_cells());
    assert_fates_consistent(engine.grid());
}

#[test]
fn test_age_grows_while_alive() {
    let mut engine = NormalEngine::new(32, 32, FILL_RATE, Some(SEED)).unwrap();
    engine.reset();
    let mut prev = engine.grid().clone();
    for _ in 0..30 {
        engine.step();
        let curr = engine.grid();
        for (before, after) in prev.cells().iter().zip(curr.cells()) {
            match (before.alive, after.alive) {
                (true, true) => assert_eq!(after.age, before.age + 1),
                (false, true) => assert_eq!(after.age, 0),
                (_, false) => assert_eq!(after.age, 0),
            }
        }
        prev = curr.clone();
    }
}

#[test]
fn test_block_ages() {
    let mut engine = NormalEngine::new(6, 6, 0.5, None).unwrap();
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        engine.set_cell(x, y, true);
    }
    engine.update(5);
    let cell = engine.cell_at(2, 2);
    assert_eq!(cell.age, Some(5));
    assert_eq!(cell.fate, Some(Fate::Survives));
    assert_eq!(engine.cell_at(0, 0).fate, None);
}

#[test]
fn test_generation_counter() {
    let mut engine = LightEngine::new(8, 8, FILL_RATE, Some(SEED)).unwrap();
    assert_eq!(engine.generation(), 1);
    engine.update(3);
    assert_eq!(engine.generation(), 4);
    engine.reset();
    assert_eq!(engine.generation(), 1);
    engine.step();
    assert!(engine.randomize(2.0).is_err());
    assert_eq!(engine.generation(), 2);
}

#[test]
fn test_set_cell_places_fresh_cell() {
    let mut engine = NormalEngine::new(6, 6, 0.5, None).unwrap();
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        engine.set_cell(x, y, true);
    }
    engine.update(2);
    assert_eq!(engine.cell_at(1, 1).age, Some(2));
    engine.set_cell(1, 1, true);
    assert_eq!(
        engine.cell_at(1, 1),
        CellView {
            alive: true,
            age: Some(0),
            fate: Some(Fate::Survives)
        }
    );
    engine.set_cell(-5, -5, false);
    assert_eq!(
        engine.cell_at(1, 1),
        CellView {
            alive: false,
            age: Some(0),
            fate: None
        }
    );
    assert_eq!(engine.cell_at(2, 2).fate, Some(Fate::Survives));
    assert_eq!(engine.cell_at(2, 2).age, Some(2));
}

#[test]
fn test_fates_right_after_editing() {
    let mut engine = NormalEngine::new(6, 6, 0.5, None).unwrap();
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        engine.set_cell(x, y, true);
    }
    assert_fates_consistent(engine.grid());
    engine.step();
    assert_eq!(engine.cell_at(1, 1).fate, Some(Fate::Survives));
    engine.set_cell(0, 0, true);
    engine.set_cell(0, 1, true);
    assert_eq!(engine.cell_at(1, 1).fate, Some(Fate::DiesOvercrowding));
    assert_fates_consistent(engine.grid());
    engine.set_cell(0, 0, false);
    assert_fates_consistent(engine.grid());
}

#[test]
fn test_fates_right_after_editing_narrow_tori() {
    for (w, h) in [(1, 1), (2, 2), (1, 4), (5, 2), (9, 9)] {
        let mut engine = VectorizedEngine::new(w, h, FILL_RATE, Some(SEED)).unwrap();
        engine.reset();
        engine.step();
        for i in 0..20 {
            engine.set_cell(i * 7 % 11, i * 3 % 5, i % 3 != 0);
            assert_fates_consistent(engine.grid());
        }
        let before = engine.grid().clone();
        engine.step();
        let mut reference = NormalEngine::new(w, h, FILL_RATE, None).unwrap();
        for y in 0..h as i64 {
            for x in 0..w as i64 {
                reference.set_cell(x, y, before.get(x, y).alive);
            }
        }
        reference.step();
        assert_eq!(engine.alive_cells(), reference.alive_cells(), "w={} h={}", w, h);
    }
}

#[test]
fn test_editing_after_reseed_waits_for_step() {
    let mut engine = NormalEngine::new(8, 8, FILL_RATE, Some(SEED)).unwrap();
    engine.reset();
    engine.set_cell(3, 3, true);
    assert_eq!(engine.cell_at(3, 3).fate, None);
    engine.step();
    assert_fates_consistent(engine.grid());
}

#[test]
fn test_shift_wraps_without_overflow() {
    assert_eq!(shift(3, 4, 5), 2);
    assert_eq!(shift(-1, 0, 5), 4);
    assert_eq!(
        shift(i64::MAX, usize::MAX, 7),
        ((i64::MAX as u128 + usize::MAX as u128) % 7) as i64
    );
    assert_eq!(shift(i64::MIN, 1, 3), (i64::MIN + 1).rem_euclid(3));
}

#[test]
fn test_place_rle_far_away() {
    let mut engine = LightEngine::new(5, 5, FILL_RATE, None).unwrap();
    engine
        .place_rle(i64::MAX, i64::MIN, b"x = 2, y = 1\nbo!")
        .unwrap();
    let (x, y) = ((i64::MAX as i128 + 1).rem_euclid(5), (i64::MIN as i128).rem_euclid(5));
    assert!(engine.cell_at(x as i64, y as i64).alive);
    assert_eq!(engine.population(), 1);
}

#[test]
fn test_typed_constructor_reports_real_size() {
    assert_eq!(
        NormalEngine::new(usize::MAX, 4, FILL_RATE, None).err(),
        Some(ConfigError::DimensionTooLarge {
            axis: Axis::Width,
            value: usize::MAX as u128
        })
    );
    assert!(LightEngine::new(4, 0, FILL_RATE, None).is_err());
}
