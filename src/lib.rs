//! Conway's Game of Life on a fixed-size torus.
//!
//! Four interchangeable engines implement [`Engine`]: they differ in whether
//! they track age and fate of cells ([`Variant::Normal`], [`Variant::Vectorized`])
//! or only whether cells are alive ([`Variant::Light`], [`Variant::VectorizedLight`]),
//! and in how live neighbours are counted (cell by cell or whole rows at once).
//! Given the same seed and the same calls they produce identical fields.
//!
//! ```
//! use gameoflife::{Config, Variant};
//!
//! let mut engine = Config::new(Variant::Vectorized, 64, 48, 0.3)?
//!     .with_seed(42)
//!     .build();
//! engine.reset();
//! engine.step();
//! let cell = engine.cell_at(-1, 100);
//! assert!(cell.age.is_some());
//! # Ok::<(), gameoflife::ConfigError>(())
//! ```
#![warn(clippy::all)]

mod cell;
mod engine;
mod grid;
pub mod neighbours;
pub mod rules;
mod utils;

pub use cell::{Cell, CellState, CellView, Fate};
pub use engine::{
    new, AliveEngine, Engine, FullEngine, LightEngine, NormalEngine, Variant, VectorizedEngine,
    VectorizedLightEngine,
};
pub use grid::Grid;
pub use utils::{parse_rle, Axis, Config, ConfigError, NiceInt, ParseRleError, RlePattern};
