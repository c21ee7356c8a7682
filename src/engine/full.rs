use super::{seeder::Seeder, Engine, Variant};
use crate::{
    neighbours::{Counter, Scalar, Windowed},
    rules,
    utils::{check_probability, signed_dimension},
    Axis, Cell, CellState, CellView, Config, ConfigError, Grid,
};
use log::{debug, trace};

const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Engine that tracks age and fate of every cell.
pub type NormalEngine = FullEngine<Scalar>;
/// [`NormalEngine`] with row-wise neighbour counting.
pub type VectorizedEngine = FullEngine<Windowed>;

/// Engine with [`Cell`] storage, generic over the neighbour counting strategy.
///
/// After every step the fate of each live cell is classified from the
/// neighbour counts of the new field. Those counts are kept up to date by
/// [`Engine::set_cell`] and reused by the following step unless the field is
/// reseeded in between.
pub struct FullEngine<K> {
    curr: Grid<Cell>,
    next: Grid<Cell>,
    neighbours: Vec<u8>,
    /// `neighbours` holds the counts of `curr`
    counted: bool,
    counter: K,
    seeder: Seeder,
    generation: u64,
}

impl<K: Counter> FullEngine<K> {
    const VARIANT: Variant = if K::VECTORIZED {
        Variant::Vectorized
    } else {
        Variant::Normal
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
        let engine = Self {
            curr: Grid::blank(w, h),
            next: Grid::blank(w, h),
            neighbours: vec![0; w * h],
            counted: true,
            counter: K::default(),
            seeder: Seeder::new(config.seed(), config.probability()),
            generation: 1,
        };
        debug!("created {} engine {}x{}", engine.variant(), w, h);
        engine
    }

    /// Current field.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.curr
    }

    /// Applies a change of `delta` live cells at `(x, y)` to the cached
    /// counts and reclassifies the fates of the 3x3 block around it.
    ///
    /// A neighbour reached through several offsets (tori narrower than 3)
    /// gets the change once per offset, the same way a full count sees it.
    fn recount_around(&mut self, x: i64, y: i64, delta: i8) {
        let w = self.curr.width();
        if delta != 0 {
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                let (nx, ny) = self.curr.wrap(x + dx, y + dy);
                let n = &mut self.neighbours[nx + ny * w];
                *n = n.wrapping_add_signed(delta);
            }
        }
        for (dx, dy) in NEIGHBOUR_OFFSETS.into_iter().chain([(0, 0)]) {
            let (nx, ny) = self.curr.wrap(x + dx, y + dy);
            let i = nx + ny * w;
            let cell = &mut self.curr.cells_mut()[i];
            cell.fate = rules::fate(cell.alive, self.neighbours[i]);
        }
    }

    fn reseed(&mut self, probability: f64) {
        self.seeder.fill(&mut self.curr, probability, Cell::new);
        self.counted = false;
        self.generation = 1;
        debug!(
            "{} engine reseeded with probability {}: {} alive",
            self.variant(),
            probability,
            self.curr.population()
        );
    }
}

impl<K: Counter> Engine for FullEngine<K> {
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
        if !self.counted {
            self.counter.count(&self.curr, &mut self.neighbours);
        }
        for ((dst, &src), &n) in self
            .next
            .cells_mut()
            .iter_mut()
            .zip(self.curr.cells())
            .zip(&self.neighbours)
        {
            *dst = rules::next_cell(src, n);
        }
        std::mem::swap(&mut self.curr, &mut self.next);

        self.counter.count(&self.curr, &mut self.neighbours);
        for (cell, &n) in self.curr.cells_mut().iter_mut().zip(&self.neighbours) {
            cell.fate = rules::fate(cell.alive, n);
        }
        self.counted = true;
        self.generation += 1;
        trace!(
            "{} engine at generation {}: {} alive",
            self.variant(),
            self.generation,
            self.curr.population()
        );
    }

    fn cell_at(&self, x: i64, y: i64) -> CellView {
        self.curr.get(x, y).view()
    }

    fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        let was_alive = self.curr.get(x, y).alive;
        self.curr.set(x, y, Cell::new(alive));
        if self.counted {
            let (x, y) = self.curr.wrap(x, y);
            self.recount_around(x as i64, y as i64, alive as i8 - was_alive as i8);
        }
    }

    fn population(&self) -> usize {
        self.curr.population()
    }

    fn alive_cells(&self) -> Vec<bool> {
        self.curr.cells().iter().map(|c| c.alive).collect()
    }
}
