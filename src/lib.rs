pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{defaults::DefaultParameters, toml_config::TomlConfig};
pub use crate::core::{engine::ComparisonEngine, pi::MachinPi, precision::PrecisionContext};
pub use domain::decimal::Decimal;
pub use domain::digits::DigitString;
pub use domain::model::{ComparisonRow, OutputFormat, Report, RoundingMode, VolumeTable};
pub use utils::error::{PiError, Result};
