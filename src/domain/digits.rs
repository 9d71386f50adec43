use crate::utils::error::{PiError, Result};
use std::fmt;
use std::str::FromStr;

/// Canonical fixed-point digit sequence: sign, integer digits, fractional digits.
///
/// The integer part never carries leading zeros (a lone `0` is kept) and a
/// value whose digits are all zero is never negative. The fractional part is
/// kept verbatim, trailing zeros included, because its length is the number
/// of decimal places the value is known to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString {
    negative: bool,
    integer: String,
    fraction: String,
}

impl DigitString {
    /// Builds a digit string from raw ASCII digit runs.
    pub fn new(negative: bool, integer: &str, fraction: &str) -> Result<Self> {
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(PiError::ParseError {
                input: format!("{}.{}", integer, fraction),
                reason: "only ASCII digits are allowed".to_string(),
            });
        }
        Ok(Self::from_trusted(negative, integer, fraction))
    }

    // 呼叫端已確認只含數字
    pub(crate) fn from_trusted(negative: bool, integer: &str, fraction: &str) -> Self {
        let trimmed = integer.trim_start_matches('0');
        let integer = if trimmed.is_empty() { "0" } else { trimmed };
        let is_zero = integer == "0" && fraction.bytes().all(|b| b == b'0');

        Self {
            negative: negative && !is_zero,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer(&self) -> &str {
        &self.integer
    }

    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    /// Number of digits after the decimal point.
    pub fn places(&self) -> usize {
        self.fraction.len()
    }

    /// Extends the fractional part with zeros up to `places` digits.
    /// Never shortens it.
    pub fn padded(&self, places: usize) -> Self {
        if places <= self.fraction.len() {
            return self.clone();
        }
        let mut fraction = self.fraction.clone();
        fraction.extend(std::iter::repeat('0').take(places - self.fraction.len()));
        Self {
            negative: self.negative,
            integer: self.integer.clone(),
            fraction,
        }
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl FromStr for DigitString {
    type Err = PiError;

    /// Accepts `[+-]digits[.digits]`. Exponents, a bare point and empty
    /// parts are rejected so the digit count is always explicit.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| PiError::ParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            Some(_) => (false, trimmed),
            None => return Err(invalid("empty input")),
        };

        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => {
                if fraction.is_empty() {
                    return Err(invalid("missing digits after decimal point"));
                }
                (integer, fraction)
            }
            None => (body, ""),
        };

        if integer.is_empty() {
            return Err(invalid("missing integer digits"));
        }

        Self::new(negative, integer, fraction).map_err(|_| invalid("unexpected character"))
    }
}
