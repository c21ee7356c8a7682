mod config;
mod error;
mod format_int;
mod parse_rle;

pub(crate) use config::{check_probability, signed_dimension};
pub use config::Config;
pub use error::{Axis, ConfigError, ParseRleError};
pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, RlePattern};
