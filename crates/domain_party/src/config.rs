//! Validation rule configuration

use serde::{Deserialize, Serialize};

use core_kernel::temporal::DateRange;

use crate::error::EnrollmentError;

/// Tunable parameters of the field schemas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Earliest accepted birth year (inclusive)
    pub birth_year_min: i32,
    /// Latest accepted birth year (inclusive)
    pub birth_year_max: i32,
    /// Text shown in place of an absent date
    pub date_placeholder: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            birth_year_min: 1925,
            birth_year_max: 2025,
            date_placeholder: "未入力".to_string(),
        }
    }
}

impl RuleConfig {
    /// Creates a configuration with the given birth year bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the bounds are inverted or not
    /// representable as calendar dates.
    pub fn new(birth_year_min: i32, birth_year_max: i32) -> Result<Self, EnrollmentError> {
        let config = Self {
            birth_year_min,
            birth_year_max,
            ..Self::default()
        };
        config.ensure_consistent()?;
        Ok(config)
    }

    /// Loads configuration from `ENROLLMENT_*` environment variables
    ///
    /// Unset variables keep their default values, e.g.
    /// `ENROLLMENT_BIRTH_YEAR_MIN=1930` only moves the lower bound.
    pub fn from_env() -> Result<Self, EnrollmentError> {
        let defaults = Self::default();
        let config: Self = config::Config::builder()
            .set_default("birth_year_min", i64::from(defaults.birth_year_min))?
            .set_default("birth_year_max", i64::from(defaults.birth_year_max))?
            .set_default("date_placeholder", defaults.date_placeholder)?
            .add_source(config::Environment::with_prefix("ENROLLMENT").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.ensure_consistent()?;
        Ok(config)
    }

    /// Birth dates accepted by the range rule
    pub fn birth_range(&self) -> Result<DateRange, EnrollmentError> {
        Ok(DateRange::from_years(self.birth_year_min, self.birth_year_max)?)
    }

    fn ensure_consistent(&self) -> Result<(), EnrollmentError> {
        if self.birth_year_min > self.birth_year_max {
            return Err(EnrollmentError::invalid_configuration(format!(
                "birth_year_min {} is after birth_year_max {}",
                self.birth_year_min, self.birth_year_max
            )));
        }
        let years = 1000..=9999;
        if !years.contains(&self.birth_year_min) || !years.contains(&self.birth_year_max) {
            return Err(EnrollmentError::invalid_configuration(
                "birth year bounds must be four-digit years",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = RuleConfig::default();
        assert_eq!(config.birth_year_min, 1925);
        assert_eq!(config.birth_year_max, 2025);
        assert!(config.ensure_consistent().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = RuleConfig::new(2025, 1925);
        assert!(matches!(result, Err(EnrollmentError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_short_year_rejected() {
        let result = RuleConfig::new(900, 2025);
        assert!(matches!(result, Err(EnrollmentError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_birth_range() {
        let range = RuleConfig::default().birth_range().unwrap();
        assert_eq!(range.start.to_string(), "1925-01-01");
        assert_eq!(range.end.to_string(), "2025-12-31");
    }
}
