use crate::domain::digits::DigitString;
use crate::domain::model::RoundingMode;
use crate::domain::ports::ApproximationPolicy;
use crate::utils::error::{PiError, Result};

/// Keeps the first `places` fractional digits and drops the rest.
/// The last kept digit is never adjusted.
pub fn truncate_digits(value: &DigitString, places: usize) -> Result<DigitString> {
    if places > value.places() {
        return Err(PiError::InsufficientPrecision {
            required: places,
            available: value.places(),
        });
    }
    Ok(DigitString::from_trusted(
        value.is_negative(),
        value.integer(),
        &value.fraction()[..places],
    ))
}

/// Rounds to `places` fractional digits using the whole discarded tail,
/// carrying into the integer part when needed (`9.96 -> 10.0`).
///
/// Works on the magnitude; the sign is reattached afterwards, so both modes
/// are symmetric around zero.
pub fn round_digits(value: &DigitString, places: usize, mode: RoundingMode) -> Result<DigitString> {
    let kept = truncate_digits(value, places)?;
    let tail = &value.fraction()[places..];

    let last_kept = kept
        .fraction()
        .bytes()
        .last()
        .or_else(|| kept.integer().bytes().last())
        .unwrap_or(b'0');

    if !rounds_up(last_kept, tail, mode) {
        return Ok(kept);
    }
    Ok(increment_last_place(&kept, value.is_negative()))
}

fn rounds_up(last_kept: u8, tail: &str, mode: RoundingMode) -> bool {
    let mut bytes = tail.bytes();
    match bytes.next() {
        None => false,
        Some(first) if first > b'5' => true,
        Some(first) if first < b'5' => false,
        Some(_) => {
            if bytes.any(|b| b != b'0') {
                return true;
            }
            // 剛好一半
            match mode {
                RoundingMode::HalfAwayFromZero => true,
                RoundingMode::HalfEven => (last_kept - b'0') % 2 == 1,
            }
        }
    }
}

/// Adds one unit in the last place, propagating the carry leftward across
/// the decimal point and growing the integer part if it overflows.
/// `negative` is passed separately because a kept prefix of zeros has
/// already lost its sign.
fn increment_last_place(value: &DigitString, negative: bool) -> DigitString {
    let mut int_len = value.integer().len();
    let mut digits: Vec<u8> = value
        .integer()
        .bytes()
        .chain(value.fraction().bytes())
        .collect();

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }

    if carry {
        digits.insert(0, b'1');
        int_len += 1;
    }

    // 只含 ASCII 數字
    let text = String::from_utf8_lossy(&digits);
    let (integer, fraction) = text.split_at(int_len);
    DigitString::from_trusted(negative, integer, fraction)
}

/// Truncation policy: digit-level slicing, no rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncator;

impl ApproximationPolicy for Truncator {
    fn label(&self) -> &'static str {
        "truncation"
    }

    fn approximate(&self, value: &DigitString, decimals: usize) -> Result<DigitString> {
        truncate_digits(value, decimals)
    }
}

/// Rounding policy with a fixed tie-breaking mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rounder {
    mode: RoundingMode,
}

impl Rounder {
    pub fn new(mode: RoundingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RoundingMode {
        self.mode
    }
}

impl ApproximationPolicy for Rounder {
    fn label(&self) -> &'static str {
        "rounding"
    }

    fn approximate(&self, value: &DigitString, decimals: usize) -> Result<DigitString> {
        round_digits(value, decimals, self.mode)
    }
}
