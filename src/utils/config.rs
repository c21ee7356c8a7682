use super::{Axis, ConfigError};
use crate::{Engine, Variant};

/// Validated parameters of an engine.
///
/// Construction is the only place where invalid input is rejected; once a
/// `Config` exists, [`Config::build`] cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    variant: Variant,
    width: usize,
    height: usize,
    probability: f64,
    seed: Option<u64>,
}

impl Config {
    /// `width` and `height` must be positive, `probability` must lie in `[0, 1]`.
    pub fn new(
        variant: Variant,
        width: i64,
        height: i64,
        probability: f64,
    ) -> Result<Self, ConfigError> {
        let width = check_dimension(Axis::Width, width)?;
        let height = check_dimension(Axis::Height, height)?;
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::DimensionTooLarge {
                axis: Axis::Height,
                value: height as u128,
            });
        }
        Ok(Self {
            variant,
            width,
            height,
            probability: check_probability(probability)?,
            seed: None,
        })
    }

    /// Makes every `randomize` of the built engine reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates an all-dead engine of the configured variant.
    pub fn build(&self) -> Box<dyn Engine> {
        self.variant.build(self)
    }
}

pub(crate) fn check_dimension(axis: Axis, value: i64) -> Result<usize, ConfigError> {
    if value < 1 {
        return Err(ConfigError::NonPositiveDimension { axis, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::DimensionTooLarge {
        axis,
        value: value as u128,
    })
}

/// Converts a typed side length for [`Config::new`].
pub(crate) fn signed_dimension(axis: Axis, side: usize) -> Result<i64, ConfigError> {
    i64::try_from(side).map_err(|_| ConfigError::DimensionTooLarge {
        axis,
        value: side as u128,
    })
}

pub(crate) fn check_probability(probability: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(ConfigError::ProbabilityOutOfRange(probability))
    }
}
