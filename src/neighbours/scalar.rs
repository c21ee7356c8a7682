use super::Counter;
use crate::{CellState, Grid};

/// Visits the 8 neighbours of every cell one by one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar;

impl Counter for Scalar {
    const VECTORIZED: bool = false;

    fn count<C: CellState>(&mut self, grid: &Grid<C>, dst: &mut [u8]) {
        let (w, h) = (grid.width(), grid.height());
        assert_eq!(dst.len(), w * h);
        let cells = grid.cells();
        let alive = |x: usize, y: usize| cells[x + y * w].is_alive() as u8;

        for y in 0..h {
            let y1 = if y == 0 { h - 1 } else { y - 1 };
            let y2 = if y == h - 1 { 0 } else { y + 1 };
            for x in 0..w {
                let x1 = if x == 0 { w - 1 } else { x - 1 };
                let x2 = if x == w - 1 { 0 } else { x + 1 };
                dst[x + y * w] = alive(x1, y1)
                    + alive(x, y1)
                    + alive(x2, y1)
                    + alive(x1, y)
                    + alive(x2, y)
                    + alive(x1, y2)
                    + alive(x, y2)
                    + alive(x2, y2);
            }
        }
    }
}

/// Number of live cells among the 8 toroidal neighbours of `(x, y)`.
pub fn neighbours_at<C: CellState>(grid: &Grid<C>, x: i64, y: i64) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) != (0, 0) && grid.get(x + dx, y + dy).is_alive() {
                count += 1;
            }
        }
    }
    count
}
