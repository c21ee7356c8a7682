//! B3/S23 transition and the bookkeeping derived from it.

use crate::{Cell, Fate};

/// Live neighbours needed for a dead cell to be born.
const BIRTH: u8 = 3;
/// Range of live neighbours that keeps a live cell alive.
const SURVIVAL_MIN: u8 = 2;
const SURVIVAL_MAX: u8 = 3;

/// State of a cell on the next generation.
#[inline]
pub fn next_alive(alive: bool, neighbours: u8) -> bool {
    if alive {
        (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbours)
    } else {
        neighbours == BIRTH
    }
}

/// Forecast for a cell with the given number of live neighbours.
///
/// Dead cells have no fate, even those about to be born.
#[inline]
pub fn fate(alive: bool, neighbours: u8) -> Option<Fate> {
    if !alive {
        None
    } else if neighbours < SURVIVAL_MIN {
        Some(Fate::DiesIsolation)
    } else if neighbours > SURVIVAL_MAX {
        Some(Fate::DiesOvercrowding)
    } else {
        Some(Fate::Survives)
    }
}

/// Next generation of a full cell. The fate of the result is left empty;
/// it depends on the neighbours of the *next* generation.
#[inline]
pub fn next_cell(cell: Cell, neighbours: u8) -> Cell {
    let alive = next_alive(cell.alive, neighbours);
    let age = match (cell.alive, alive) {
        (true, true) => cell.age.saturating_add(1),
        _ => 0,
    };
    Cell {
        alive,
        age,
        fate: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        for n in 0..=8 {
            assert_eq!(next_alive(false, n), n == 3, "dead, n={}", n);
            assert_eq!(next_alive(true, n), n == 2 || n == 3, "alive, n={}", n);
        }
    }

    #[test]
    fn test_fate_table() {
        let expected = [
            Fate::DiesIsolation,
            Fate::DiesIsolation,
            Fate::Survives,
            Fate::Survives,
            Fate::DiesOvercrowding,
            Fate::DiesOvercrowding,
            Fate::DiesOvercrowding,
            Fate::DiesOvercrowding,
            Fate::DiesOvercrowding,
        ];
        for (n, fate_expected) in expected.into_iter().enumerate() {
            assert_eq!(fate(true, n as u8), Some(fate_expected));
            assert_eq!(fate(false, n as u8), None);
        }
    }

    #[test]
    fn test_age() {
        let old = Cell {
            alive: true,
            age: 7,
            fate: Some(Fate::Survives),
        };
        assert_eq!(next_cell(old, 2).age, 8);
        assert_eq!(next_cell(old, 1), Cell::DEAD);
        assert_eq!(next_cell(Cell::DEAD, 3), Cell::new(true));
        assert_eq!(next_cell(Cell::DEAD, 2), Cell::DEAD);
        let ancient = Cell { age: u32::MAX, ..old };
        assert_eq!(next_cell(ancient, 3).age, u32::MAX);
    }
}
