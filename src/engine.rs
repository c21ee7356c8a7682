mod full;
mod light;
mod seeder;
mod variant;

#[cfg(test)]
mod tests;

pub use full::{FullEngine, NormalEngine, VectorizedEngine};
pub use light::{AliveEngine, LightEngine, VectorizedLightEngine};
pub use variant::Variant;

use crate::{parse_rle, CellView, ConfigError, ParseRleError};

/// Game of Life on a fixed-size torus.
///
/// This is everything a controller needs: it owns a `Box<dyn Engine>` and
/// never has to know which variant it got.
pub trait Engine: Send {
    fn variant(&self) -> Variant;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Number of the generation on the field, 1 after construction or a reseed.
    fn generation(&self) -> u64;

    /// Makes every cell alive with the given probability, independently.
    ///
    /// Age and fate are cleared, the generation counter goes back to 1.
    /// On error the field is left untouched.
    fn randomize(&mut self, probability: f64) -> Result<(), ConfigError>;

    /// Same as [`Engine::randomize`] with the probability given at construction.
    fn reset(&mut self);

    /// Advances the whole field by one generation.
    fn step(&mut self);

    /// State of the cell at `(x, y)`, coordinates are taken modulo the side lengths.
    fn cell_at(&self, x: i64, y: i64) -> CellView;

    /// Places a fresh cell at `(x, y)` (wrapped) with age 0.
    ///
    /// Engines that track fate reclassify the placed cell and its neighbours
    /// right away, unless the field was reseeded and not stepped since.
    fn set_cell(&mut self, x: i64, y: i64, alive: bool);

    /// Total number of alive cells in the field.
    fn population(&self) -> usize;

    /// Row-major states of all cells.
    fn alive_cells(&self) -> Vec<bool>;

    /// Steps `steps` times.
    fn update(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Sets the live cells of an RLE pattern with its top-left corner at `(x, y)`.
    ///
    /// Dead cells of the pattern do not overwrite the field.
    fn place_rle(&mut self, x: i64, y: i64, data: &[u8]) -> Result<(), ParseRleError> {
        let pattern = parse_rle(data)?;
        let (w, h) = (self.width(), self.height());
        for (dx, dy) in pattern.cells {
            self.set_cell(shift(x, dx, w), shift(y, dy, h), true);
        }
        Ok(())
    }
}

/// `base + delta` reduced modulo `side`.
fn shift(base: i64, delta: usize, side: usize) -> i64 {
    let side = side as u128;
    let base = base.rem_euclid(side as i64) as u128;
    // both terms are below `side`, which fits into `i64`
    ((base + delta as u128 % side) % side) as i64
}

/// Builds an all-dead engine of the given variant.
///
/// `width` and `height` must be positive, `probability` (used by
/// [`Engine::reset`]) must lie in `[0, 1]`.
pub fn new(
    variant: Variant,
    width: i64,
    height: i64,
    probability: f64,
) -> Result<Box<dyn Engine>, ConfigError> {
    Ok(crate::Config::new(variant, width, height, probability)?.build())
}
