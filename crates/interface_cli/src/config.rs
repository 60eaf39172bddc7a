//! CLI configuration

use serde::Deserialize;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Pretty-print the JSON report
    pub pretty: bool,
    /// Convert full-width digits and symbols in phone, postal code, and
    /// email before validating
    pub normalize_half_width: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            pretty: false,
            normalize_half_width: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `ENROLLMENT_CLI_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("pretty", defaults.pretty)?
            .set_default("normalize_half_width", defaults.normalize_half_width)?
            .add_source(config::Environment::with_prefix("ENROLLMENT_CLI").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.pretty);
        assert!(!config.normalize_half_width);
    }
}
