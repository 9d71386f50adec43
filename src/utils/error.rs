use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Insufficient precision: {required} digits required, {available} available")]
    InsufficientPrecision { required: usize, available: usize },

    #[error("Invalid decimal '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Precision,
    Parsing,
    Io,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PiError::IoError(_) => ErrorCategory::Io,
            PiError::SerializationError(_) => ErrorCategory::Internal,
            PiError::ConfigValidationError { .. } | PiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PiError::InsufficientPrecision { .. } => ErrorCategory::Precision,
            PiError::ParseError { .. } => ErrorCategory::Parsing,
            PiError::ProcessingError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Precision | ErrorCategory::Parsing => {
                ErrorSeverity::High
            }
            ErrorCategory::Io | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file against the documented keys and ranges",
            ErrorCategory::Precision => {
                "Raise precision.digits or lower the largest comparison.decimals value"
            }
            ErrorCategory::Parsing => "Write decimals as plain digits, e.g. \"2.5\" (no exponents)",
            ErrorCategory::Io => "Make sure the file exists and is readable",
            ErrorCategory::Internal => "Re-run with --verbose and report the log output",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PiError::InsufficientPrecision { required, available } => format!(
                "Working precision is too low: {} digits needed but only {} configured",
                required, available
            ),
            PiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PiError::ConfigValidationError { field, message } => {
                format!("Could not use configuration '{}': {}", field, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_errors_are_high_severity() {
        let err = PiError::InsufficientPrecision {
            required: 150,
            available: 120,
        };
        assert_eq!(err.category(), ErrorCategory::Precision);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("150"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: PiError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
