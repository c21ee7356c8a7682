use super::{Engine, LightEngine, NormalEngine, VectorizedEngine, VectorizedLightEngine};
use crate::{Config, ConfigError};
use std::{fmt, str::FromStr};

/// Which engine implementation to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Scalar counting, tracks age and fate.
    #[default]
    Normal,
    /// Scalar counting, alive state only.
    Light,
    /// Row-wise counting, tracks age and fate.
    Vectorized,
    /// Row-wise counting, alive state only.
    VectorizedLight,
}

impl Variant {
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::Light,
        Self::Vectorized,
        Self::VectorizedLight,
    ];

    /// Name accepted by [`Variant::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Light => "light",
            Self::Vectorized => "vectorized",
            Self::VectorizedLight => "vectorized-light",
        }
    }

    /// Whether engines of this variant report age and fate.
    pub fn tracks_history(self) -> bool {
        matches!(self, Self::Normal | Self::Vectorized)
    }

    pub(crate) fn build(self, config: &Config) -> Box<dyn Engine> {
        match self {
            Self::Normal => Box::new(NormalEngine::from_config(config)),
            Self::Light => Box::new(LightEngine::from_config(config)),
            Self::Vectorized => Box::new(VectorizedEngine::from_config(config)),
            Self::VectorizedLight => Box::new(VectorizedLightEngine::from_config(config)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or(ConfigError::UnknownVariant(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        assert_eq!(" Vectorized-Light ".parse::<Variant>(), Ok(Variant::VectorizedLight));
        assert_eq!(
            "numpy".parse::<Variant>(),
            Err(ConfigError::UnknownVariant("numpy".to_string()))
        );
    }

    #[test]
    fn test_build_matches_variant() {
        for variant in Variant::ALL {
            let engine = Config::new(variant, 7, 5, 0.5).unwrap().build();
            assert_eq!(engine.variant(), variant);
            assert_eq!((engine.width(), engine.height()), (7, 5));
            assert_eq!(engine.cell_at(0, 0).age.is_some(), variant.tracks_history());
        }
    }
}
