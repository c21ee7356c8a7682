//! Live-neighbour counting on the torus.
//!
//! Both strategies read only the grid they are given and write the count of
//! every cell (row-major) into `dst`, so the result never depends on cells
//! already updated in the same step.

mod scalar;
mod windowed;

pub use scalar::{neighbours_at, Scalar};
pub use windowed::Windowed;

use crate::{CellState, Grid};

/// Strategy for counting live Moore neighbours of every cell.
pub trait Counter: Default + Send {
    /// Whether whole rows are processed at once instead of single cells.
    const VECTORIZED: bool;

    /// Fills `dst` with the number of live neighbours (0..=8) of each cell.
    ///
    /// `dst.len()` must be equal to `width * height` of the grid.
    fn count<C: CellState>(&mut self, grid: &Grid<C>, dst: &mut [u8]);
}
