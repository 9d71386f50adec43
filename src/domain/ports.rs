use crate::core::precision::PrecisionContext;
use crate::domain::decimal::Decimal;
use crate::domain::digits::DigitString;
use crate::domain::model::RoundingMode;
use crate::utils::error::Result;

/// Parameters of one comparison run.
pub trait ConfigProvider {
    fn radius(&self) -> Decimal;
    fn height(&self) -> Decimal;
    fn decimals(&self) -> &[usize];
    /// Significant digits every high-precision value in the run is held to.
    fn working_digits(&self) -> usize;
    /// Extra digits required beyond the largest decimal count.
    fn precision_margin(&self) -> usize;
    fn rounding_mode(&self) -> RoundingMode;
}

pub trait PiSource {
    /// Pi correct to the working precision of `ctx`. The context may be
    /// widened internally but must be back at its entry precision on return.
    fn pi(&self, ctx: &mut PrecisionContext) -> Result<Decimal>;
}

/// Derives an N-decimal approximation from a full-precision digit string.
pub trait ApproximationPolicy {
    fn label(&self) -> &'static str;
    fn approximate(&self, value: &DigitString, decimals: usize) -> Result<DigitString>;
}
