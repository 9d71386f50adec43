use crate::domain::decimal::Decimal;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PiError, Result};
use std::collections::HashSet;

/// Smallest number of digits kept beyond the largest decimal count.
pub const MIN_PRECISION_MARGIN: usize = 50;
pub const MAX_WORKING_DIGITS: usize = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_positive_decimal(field_name: &str, value: &Decimal) -> Result<()> {
    if !value.is_positive() {
        return Err(PiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique(field_name: &str, values: &[usize]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(PiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

/// `working_digits >= max(decimals) + margin`, checked before any pi value
/// is derived.
pub fn validate_precision_budget(working_digits: usize, decimals: &[usize], margin: usize) -> Result<()> {
    let largest = decimals.iter().copied().max().unwrap_or(0);
    let required = largest + margin;
    if working_digits < required {
        return Err(PiError::InsufficientPrecision {
            required,
            available: working_digits,
        });
    }
    Ok(())
}

/// Full startup check shared by every parameter source.
pub fn validate_parameters<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_positive_decimal("cylinder.radius", &config.radius())?;
    validate_positive_decimal("cylinder.height", &config.height())?;

    let decimals = config.decimals();
    if decimals.is_empty() {
        return Err(PiError::ConfigValidationError {
            field: "comparison.decimals".to_string(),
            message: "At least one decimal count is required".to_string(),
        });
    }
    for n in decimals {
        validate_positive_number("comparison.decimals", *n, 1)?;
    }
    validate_unique("comparison.decimals", decimals)?;

    validate_range("precision.digits", config.working_digits(), 2, MAX_WORKING_DIGITS)?;
    validate_positive_number("precision.margin", config.precision_margin(), MIN_PRECISION_MARGIN)?;
    validate_precision_budget(config.working_digits(), decimals, config.precision_margin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("precision.margin", 50, 50).is_ok());
        assert!(validate_positive_number("precision.margin", 49, 50).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("comparison.decimals", &[20, 40, 60, 100]).is_ok());
        assert!(validate_unique("comparison.decimals", &[20, 40, 20]).is_err());
    }

    #[test]
    fn test_validate_positive_decimal() {
        assert!(validate_positive_decimal("cylinder.radius", &"0.5".parse().unwrap()).is_ok());
        assert!(validate_positive_decimal("cylinder.radius", &Decimal::zero()).is_err());
        assert!(validate_positive_decimal("cylinder.radius", &"-1".parse().unwrap()).is_err());
    }

    #[test]
    fn test_precision_budget() {
        assert!(validate_precision_budget(150, &[20, 40, 60, 100], 50).is_ok());

        let err = validate_precision_budget(149, &[20, 40, 60, 100], 50).unwrap_err();
        assert!(matches!(
            err,
            PiError::InsufficientPrecision {
                required: 150,
                available: 149
            }
        ));
    }
}
