pub mod approx;
pub mod engine;
pub mod pi;
pub mod precision;
pub mod report;
pub mod volume;

pub use crate::domain::model::{ComparisonRow, Report, VolumeTable};
pub use crate::domain::ports::{ApproximationPolicy, ConfigProvider, PiSource};
pub use crate::utils::error::Result;
