//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ReportConfig;
use crate::constants::{CONFIG_FILE_NAME, MAX_REPORT_PRECISION};
use crate::errors::ConfigError;
use crate::tracing::fields::CONFIG_TARGET;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`SDT_*`)
/// 3. Project config (`sdt.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SdtConfig {
    pub report: ReportConfig,
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub report_precision: Option<usize>,
    pub report_include_counts: Option<bool>,
}

impl SdtConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `sdt.toml` is not an error; defaults are used.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(
                target: CONFIG_TARGET,
                path = %project_config_path.display(),
                "merged project config"
            );
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SdtConfig) -> Result<(), ConfigError> {
        if let Some(precision) = config.report.precision {
            if precision > MAX_REPORT_PRECISION {
                return Err(ConfigError::ValidationFailed {
                    field: "report.precision".to_string(),
                    message: format!("must be at most {MAX_REPORT_PRECISION}"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut SdtConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: SdtConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut SdtConfig, other: &SdtConfig) {
        if other.report.precision.is_some() {
            base.report.precision = other.report.precision;
        }
        if other.report.include_counts.is_some() {
            base.report.include_counts = other.report.include_counts;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SDT_REPORT_PRECISION`, `SDT_REPORT_INCLUDE_COUNTS`.
    fn apply_env_overrides(config: &mut SdtConfig) -> Result<(), ConfigError> {
        if let Some(v) = parse_env::<usize>("SDT_REPORT_PRECISION")? {
            config.report.precision = Some(v);
        }
        if let Some(v) = parse_env::<bool>("SDT_REPORT_INCLUDE_COUNTS")? {
            config.report.include_counts = Some(v);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut SdtConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.report_precision {
            config.report.precision = Some(v);
        }
        if let Some(v) = overrides.report_include_counts {
            config.report.include_counts = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an env var. Unset is `Ok(None)`; unparsable is an error.
fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("{val:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}
