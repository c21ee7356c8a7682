/// Forecast of what happens to a live cell on the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fate {
    /// Fewer than two live neighbours.
    DiesIsolation,
    /// Two or three live neighbours.
    Survives,
    /// More than three live neighbours.
    DiesOvercrowding,
}

/// Cell of the engines that track age and fate.
///
/// A dead cell always has `age == 0` and `fate == None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// Generations the cell has been continuously alive, 0 on birth.
    pub age: u32,
    pub fate: Option<Fate>,
}

impl Cell {
    pub const DEAD: Self = Self {
        alive: false,
        age: 0,
        fate: None,
    };

    /// A cell that has just appeared, with no history and no forecast.
    pub const fn new(alive: bool) -> Self {
        Self {
            alive,
            age: 0,
            fate: None,
        }
    }
}

/// Storage type of a single grid site.
///
/// Light engines store `bool`, full engines store [`Cell`].
pub trait CellState: Copy + Default + PartialEq + std::fmt::Debug {
    fn is_alive(&self) -> bool;

    fn view(&self) -> CellView;
}

impl CellState for bool {
    fn is_alive(&self) -> bool {
        *self
    }

    fn view(&self) -> CellView {
        CellView {
            alive: *self,
            age: None,
            fate: None,
        }
    }
}

impl CellState for Cell {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn view(&self) -> CellView {
        CellView {
            alive: self.alive,
            age: Some(self.age),
            fate: self.fate,
        }
    }
}

/// What a controller gets back from [`crate::Engine::cell_at`].
///
/// `age` is `None` for engines that do not track it; `fate` is `None` for
/// dead cells and for engines that do not track it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub alive: bool,
    pub age: Option<u32>,
    pub fate: Option<Fate>,
}
