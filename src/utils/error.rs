use thiserror::Error;

/// Invalid construction parameters of an engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{axis} must be positive, got {value}")]
    NonPositiveDimension { axis: Axis, value: i64 },
    #[error("{axis} {value} does not fit into memory")]
    DimensionTooLarge { axis: Axis, value: u128 },
    #[error("probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("unknown engine variant {0:?}")]
    UnknownVariant(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

/// Malformed RLE pattern text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRleError {
    #[error("missing `x = .., y = ..` header line")]
    MissingHeader,
    #[error("number at byte {0} is too large")]
    BadNumber(usize),
    #[error("unexpected symbol {symbol:?} at byte {pos}")]
    UnexpectedSymbol { symbol: char, pos: usize },
    #[error("cell ({x}, {y}) lies outside of the {width}x{height} bounding box")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
