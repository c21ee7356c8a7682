use crate::{CellState, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source of an engine together with its default fill rate.
pub(super) struct Seeder {
    rng: ChaCha8Rng,
    probability: f64,
}

impl Seeder {
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn new(seed: Option<u64>, probability: f64) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self { rng, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One draw per cell in row-major order, so engines seeded alike get
    /// identical fields whatever their cell type.
    pub fn fill<C: CellState>(
        &mut self,
        grid: &mut Grid<C>,
        probability: f64,
        make: impl Fn(bool) -> C,
    ) {
        for cell in grid.cells_mut() {
            *cell = make(self.rng.gen::<f64>() < probability);
        }
    }
}
