use crate::core::approx::round_digits;
use crate::domain::digits::DigitString;
use crate::domain::model::RoundingMode;
use crate::utils::error::{PiError, Result};
use num::bigint::Sign;
use num::{BigInt, Signed, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Exact fixed-point number: `mantissa × 10^-scale`.
///
/// Multiplication and subtraction are exact; the scale of a product is the
/// sum of the operand scales, so no digit is ever dropped on the way to a
/// volume. Equality and ordering compare values, not representations:
/// `1.5 == 1.50`.
#[derive(Debug, Clone)]
pub struct Decimal {
    mantissa: BigInt,
    scale: usize,
}

pub(crate) fn pow10(exp: usize) -> BigInt {
    num::pow(BigInt::from(10u32), exp)
}

impl Decimal {
    pub fn new(mantissa: BigInt, scale: usize) -> Self {
        Self { mantissa, scale }
    }

    pub fn from_integer(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Digits after the decimal point in this representation.
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.scale)
    }

    /// Same value at a larger scale. A smaller target is ignored.
    pub fn rescaled(&self, scale: usize) -> Self {
        if scale <= self.scale {
            return self.clone();
        }
        Self::new(&self.mantissa * pow10(scale - self.scale), scale)
    }

    pub fn from_digits(digits: &DigitString) -> Self {
        let joined = format!("{}{}", digits.integer(), digits.fraction());
        // DigitString 只含 ASCII 數字
        let magnitude = BigInt::parse_bytes(joined.as_bytes(), 10).unwrap_or_default();
        let mantissa = if digits.is_negative() { -magnitude } else { magnitude };
        Self::new(mantissa, digits.places())
    }

    pub fn to_digits(&self) -> DigitString {
        let mut magnitude = self.mantissa.magnitude().to_string();
        if magnitude.len() <= self.scale {
            let pad = self.scale + 1 - magnitude.len();
            magnitude.insert_str(0, &"0".repeat(pad));
        }
        let (integer, fraction) = magnitude.split_at(magnitude.len() - self.scale);
        DigitString::from_trusted(self.mantissa.sign() == Sign::Minus, integer, fraction)
    }

    /// Renders exactly `places` fractional digits: zero-padded when the value
    /// has fewer, rounded with `mode` when it has more.
    pub fn format_fixed(&self, places: usize, mode: RoundingMode) -> Result<String> {
        let digits = self.to_digits();
        let fixed = if digits.places() <= places {
            digits.padded(places)
        } else {
            round_digits(&digits, places, mode)?
        };
        Ok(fixed.to_string())
    }

    fn aligned(&self, other: &Self) -> (BigInt, BigInt, usize) {
        let scale = self.scale.max(other.scale);
        (
            self.rescaled(scale).mantissa,
            other.rescaled(scale).mantissa,
            scale,
        )
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_digits(), f)
    }
}

impl FromStr for Decimal {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self> {
        let digits: DigitString = s.parse()?;
        Ok(Self::from_digits(&digits))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Decimal::new(lhs + rhs, scale)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Decimal::new(lhs - rhs, scale)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or a string holding one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Decimal, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Decimal, E> {
        Ok(Decimal::from_integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Decimal, E> {
        Ok(Decimal::new(BigInt::from(v), 0))
    }

    // f64 的 Display 不會輸出指數形式
    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("non-finite number {}", v)));
        }
        v.to_string().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_exact_product_keeps_every_digit() {
        let pi = dec("3.14159265358979323846");
        let volume = &(&pi * &dec("25")) * &dec("10");
        assert_eq!(volume.scale(), 20);
        assert_eq!(volume.to_string(), "785.39816339744830961500");
    }

    #[test]
    fn test_value_equality_ignores_scale() {
        assert_eq!(dec("1.5"), dec("1.50000"));
        assert!(dec("0.09") < dec("0.1"));
        assert!(dec("-2") < dec("-1.999"));
    }

    #[test]
    fn test_subtraction_and_abs() {
        let diff = &dec("3.14") - &dec("3.1416");
        assert_eq!(diff.to_string(), "-0.0016");
        assert_eq!(diff.abs().to_string(), "0.0016");
        assert_eq!(&diff + &dec("3.1416"), dec("3.14"));
    }

    #[test]
    fn test_small_values_render_leading_zeros() {
        let tiny = Decimal::new(BigInt::from(25), 5);
        assert_eq!(tiny.to_string(), "0.00025");
        let negative = Decimal::new(BigInt::from(-7), 3);
        assert_eq!(negative.to_string(), "-0.007");
    }

    #[test]
    fn test_format_fixed_pads_without_exponent() {
        let tiny = Decimal::new(BigInt::from(25), 39);
        let text = tiny.format_fixed(100, RoundingMode::HalfAwayFromZero).unwrap();
        let (_, fraction) = text.split_once('.').unwrap();
        assert_eq!(fraction.len(), 100);
        assert!(!text.contains('e'));
        assert_eq!(&fraction[..39], &format!("{}25", "0".repeat(37)));
    }

    #[test]
    fn test_format_fixed_rounds_excess_digits() {
        let text = dec("0.125").format_fixed(2, RoundingMode::HalfAwayFromZero).unwrap();
        assert_eq!(text, "0.13");
        let text = dec("0.125").format_fixed(2, RoundingMode::HalfEven).unwrap();
        assert_eq!(text, "0.12");
    }

    #[test]
    fn test_deserialize_from_toml_values() {
        #[derive(Deserialize)]
        struct Holder {
            a: Decimal,
            b: Decimal,
            c: Decimal,
        }
        let holder: Holder = toml::from_str("a = 5\nb = \"2.50\"\nc = 0.25").unwrap();
        assert_eq!(holder.a, dec("5"));
        assert_eq!(holder.b.to_string(), "2.50");
        assert_eq!(holder.c, dec("0.25"));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&dec("785.125")).unwrap();
        assert_eq!(json, "\"785.125\"");
    }
}
