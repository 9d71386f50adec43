use crate::core::precision::PrecisionContext;
use crate::domain::decimal::{pow10, Decimal};
use crate::domain::ports::PiSource;
use crate::utils::error::{PiError, Result};
use num::{BigInt, Zero};

/// Extra digits carried while summing the series, dropped afterwards.
const GUARD_DIGITS: usize = 10;
const PI_INTEGER_DIGITS: usize = 1;

/// Pi from Machin's formula, `16·atan(1/5) − 4·atan(1/239)`, in scaled
/// integer arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MachinPi;

impl MachinPi {
    /// Digits after the point that pi carries at the precision of `ctx`.
    pub fn fraction_digits(ctx: &PrecisionContext) -> usize {
        ctx.digits().saturating_sub(PI_INTEGER_DIGITS)
    }
}

/// `atan(1/x) × unity`, truncated term by term.
fn arctan_inv(x: u32, unity: &BigInt) -> BigInt {
    let x = BigInt::from(x);
    let x_squared = &x * &x;

    let mut power = unity / &x;
    let mut sum = power.clone();
    let mut k: u64 = 1;
    loop {
        power /= &x_squared;
        if power.is_zero() {
            break;
        }
        let term = &power / BigInt::from(2 * k + 1);
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }
    sum
}

impl PiSource for MachinPi {
    fn pi(&self, ctx: &mut PrecisionContext) -> Result<Decimal> {
        if ctx.digits() < PI_INTEGER_DIGITS {
            return Err(PiError::InsufficientPrecision {
                required: PI_INTEGER_DIGITS,
                available: ctx.digits(),
            });
        }
        let target = Self::fraction_digits(ctx);

        let (scaled, scale) = {
            let working = ctx.digits();
            let guard = ctx.scoped(working + GUARD_DIGITS);
            let scale = Self::fraction_digits(&guard);
            let unity = pow10(scale);
            let pi = BigInt::from(16) * arctan_inv(5, &unity) - BigInt::from(4) * arctan_inv(239, &unity);
            (pi, scale)
        };

        // 捨去保護位數
        let mantissa = scaled / pow10(scale - target);
        tracing::debug!("pi computed to {} fractional digits", target);
        Ok(Decimal::new(mantissa, target))
    }
}
