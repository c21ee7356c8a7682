use crate::{cell::CellState, Axis, ConfigError};

/// Rectangular field whose opposite edges are stitched together.
///
/// Cells are stored row-major; coordinates given to the accessors are
/// reduced modulo the side lengths, so any `i64` pair is a valid position.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<C> {
    cells: Vec<C>,
    width: usize,
    height: usize,
}

impl<C: CellState> Grid<C> {
    /// Creates an all-dead grid. Both sides must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        for (axis, side) in [(Axis::Width, width), (Axis::Height, height)] {
            if side == 0 {
                return Err(ConfigError::NonPositiveDimension { axis, value: 0 });
            }
            // coordinates are wrapped with `i64` arithmetic
            if i64::try_from(side).is_err() {
                return Err(ConfigError::DimensionTooLarge {
                    axis,
                    value: side as u128,
                });
            }
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::DimensionTooLarge {
                axis: Axis::Height,
                value: height as u128,
            });
        }
        Ok(Self::blank(width, height))
    }

    /// Same as [`Grid::new`] for sides already checked by [`crate::Config`].
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![C::default(); width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Maps arbitrary coordinates onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    pub fn get(&self, x: i64, y: i64) -> C {
        let (x, y) = self.wrap(x, y);
        self.cells[x + y * self.width]
    }

    pub fn set(&mut self, x: i64, y: i64, cell: C) {
        let (x, y) = self.wrap(x, y);
        self.cells[x + y * self.width] = cell;
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl<C: CellState> std::fmt::Display for Grid<C> {
    /// One text line per row, `#` for a live cell and `-` for a dead one.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "-" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
