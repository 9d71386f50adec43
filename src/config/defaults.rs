use crate::domain::decimal::Decimal;
use crate::domain::model::RoundingMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_parameters, Validate};

pub const DEFAULT_RADIUS: i64 = 5;
pub const DEFAULT_HEIGHT: i64 = 10;
pub const DEFAULT_DECIMALS: [usize; 4] = [20, 40, 60, 100];
/// Enough for 100 decimals plus the 50-digit margin.
pub const DEFAULT_WORKING_DIGITS: usize = 150;
pub const DEFAULT_PRECISION_MARGIN: usize = 50;

/// The built-in run: radius 5, height 10, decimals 20/40/60/100 at 150 digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParameters;

impl ConfigProvider for DefaultParameters {
    fn radius(&self) -> Decimal {
        Decimal::from_integer(DEFAULT_RADIUS)
    }

    fn height(&self) -> Decimal {
        Decimal::from_integer(DEFAULT_HEIGHT)
    }

    fn decimals(&self) -> &[usize] {
        &DEFAULT_DECIMALS
    }

    fn working_digits(&self) -> usize {
        DEFAULT_WORKING_DIGITS
    }

    fn precision_margin(&self) -> usize {
        DEFAULT_PRECISION_MARGIN
    }

    fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::default()
    }
}

impl Validate for DefaultParameters {
    fn validate(&self) -> Result<()> {
        validate_parameters(self)
    }
}
