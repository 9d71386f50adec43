use crate::config::defaults::{
    DefaultParameters, DEFAULT_DECIMALS, DEFAULT_PRECISION_MARGIN, DEFAULT_WORKING_DIGITS,
};
use crate::domain::decimal::Decimal;
use crate::domain::model::RoundingMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PiError, Result};
use crate::utils::validation::{validate_parameters, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides of the built-in run. Every table and key may be
/// omitted; missing values fall back to [`DefaultParameters`].
///
/// ```toml
/// [cylinder]
/// radius = "2.5"
/// height = 10
///
/// [precision]
/// digits = 200
/// margin = 50
///
/// [comparison]
/// decimals = [20, 40, 60, 100, 140]
/// rounding = "half-even"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub cylinder: Option<CylinderConfig>,
    pub precision: Option<PrecisionConfig>,
    pub comparison: Option<ComparisonConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CylinderConfig {
    pub radius: Option<Decimal>,
    pub height: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrecisionConfig {
    pub digits: Option<usize>,
    pub margin: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub decimals: Option<Vec<usize>>,
    pub rounding: Option<RoundingMode>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PI_DIGITS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PiError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn radius(&self) -> Decimal {
        self.cylinder
            .as_ref()
            .and_then(|c| c.radius.clone())
            .unwrap_or_else(|| DefaultParameters.radius())
    }

    fn height(&self) -> Decimal {
        self.cylinder
            .as_ref()
            .and_then(|c| c.height.clone())
            .unwrap_or_else(|| DefaultParameters.height())
    }

    fn decimals(&self) -> &[usize] {
        self.comparison
            .as_ref()
            .and_then(|c| c.decimals.as_deref())
            .unwrap_or(&DEFAULT_DECIMALS)
    }

    fn working_digits(&self) -> usize {
        self.precision
            .as_ref()
            .and_then(|p| p.digits)
            .unwrap_or(DEFAULT_WORKING_DIGITS)
    }

    fn precision_margin(&self) -> usize {
        self.precision
            .as_ref()
            .and_then(|p| p.margin)
            .unwrap_or(DEFAULT_PRECISION_MARGIN)
    }

    fn rounding_mode(&self) -> RoundingMode {
        self.comparison
            .as_ref()
            .and_then(|c| c.rounding)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_parameters(self)
    }
}
