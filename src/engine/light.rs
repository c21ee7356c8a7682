use super::{seeder::Seeder, Engine, Variant};
use crate::{
    neighbours::{Counter, Scalar, Windowed},
    rules,
    utils::{check_probability, signed_dimension},
    Axis, CellState, CellView, Config, ConfigError, Grid,
};
use log::{debug, trace};

/// Engine that only knows whether cells are alive.
pub type LightEngine = AliveEngine<Scalar>;
/// [`LightEngine`] with row-wise neighbour counting.
pub type VectorizedLightEngine = AliveEngine<Windowed>;

/// Engine with one `bool` per cell, generic over the neighbour counting
/// strategy. `cell_at` never reports age or fate.
pub struct AliveEngine<K> {
    curr: Grid<bool>,
    next: Grid<bool>,
    neighbours: Vec<u8>,
    counter: K,
    seeder: Seeder,
    generation: u64,
}

impl<K: Counter> AliveEngine<K> {
    const VARIANT: Variant = if K::VECTORIZED {
        Variant::VectorizedLight
    } else {
        Variant::Light
    };

    /// Creates an all-dead field; `probability` is used by [`Engine::reset`].
    pub fn new(
        width: usize,
        height: usize,
        probability: f64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Config::new(
            Self::VARIANT,
            signed_dimension(Axis::Width, width)?,
            signed_dimension(Axis::Height, height)?,
            probability,
        )?;
        Ok(Self::from_config(&match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }))
    }

    pub(super) fn from_config(config: &Config) -> Self {
        let (w, h) = (config.width(), config.height());
        debug!("created {} engine {}x{}", Self::VARIANT, w, h);
        Self {
            curr: Grid::blank(w, h),
            next: Grid::blank(w, h),
            neighbours: vec![0; w * h],
            counter: K::default(),
            seeder: Seeder::new(config.seed(), config.probability()),
            generation: 1,
        }
    }

    /// Current field.
    pub fn grid(&self) -> &Grid<bool> {
        &self.curr
    }

    fn reseed(&mut self, probability: f64) {
        self.seeder.fill(&mut self.curr, probability, |alive| alive);
        self.generation = 1;
        debug!(
            "{} engine reseeded with probability {}: {} alive",
            Self::VARIANT,
            probability,
            self.curr.population()
        );
    }
}

impl<K: Counter> Engine for AliveEngine<K> {
    fn variant(&self) -> Variant {
        Self::VARIANT
    }

    fn width(&self) -> usize {
        self.curr.width()
    }

    fn height(&self) -> usize {
        self.curr.height()
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn randomize(&mut self, probability: f64) -> Result<(), ConfigError> {
        let probability = check_probability(probability)?;
        self.reseed(probability);
        Ok(())
    }

    fn reset(&mut self) {
        self.reseed(self.seeder.probability());
    }

    fn step(&mut self) {
        self.counter.count(&self.curr, &mut self.neighbours);
        for ((dst, &src), &n) in self
            .next
            .cells_mut()
            .iter_mut()
            .zip(self.curr.cells())
            .zip(&self.neighbours)
        {
            *dst = rules::next_alive(src, n);
        }
        std::mem::swap(&mut self.curr, &mut self.next);
        self.generation += 1;
        trace!(
            "{} engine at generation {}: {} alive",
            Self::VARIANT,
            self.generation,
            self.curr.population()
        );
    }

    fn cell_at(&self, x: i64, y: i64) -> CellView {
        self.curr.get(x, y).view()
    }

    fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.curr.set(x, y, alive);
    }

    fn population(&self) -> usize {
        self.curr.population()
    }

    fn alive_cells(&self) -> Vec<bool> {
        self.curr.cells().to_vec()
    }
}
