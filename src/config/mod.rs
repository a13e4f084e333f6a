//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `RANKGATE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_MAX_CORRECTION_ATTEMPTS, DEFAULT_MIN_WORD_COUNT, DEFAULT_RANKING_THRESHOLD,
};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RANKGATE_*` overrides on top of defaults.
/// The status thresholds are deliberately *not* configurable: they are fixed
/// policy shared by the scorer and the corrector (see [`crate::constants`]).
#[derive(Debug, Clone)]
pub struct Config {
    /// Correction cycles allowed per article before human escalation. Default: `3`.
    pub max_correction_attempts: u32,

    /// Minimum visible-body word count considered adequate. Default: `300`.
    pub min_word_count: usize,

    /// Average ranking position below which a historical outcome counts as
    /// "good" during training. Default: `10.0`.
    pub ranking_threshold: f64,

    /// Host treated as internal when classifying absolute links
    /// (e.g. `example.com`). Default: unset (all absolute links are external).
    pub internal_domain: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_correction_attempts: DEFAULT_MAX_CORRECTION_ATTEMPTS,
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            ranking_threshold: DEFAULT_RANKING_THRESHOLD,
            internal_domain: None,
        }
    }
}

impl Config {
    const ENV_MAX_ATTEMPTS: &'static str = "RANKGATE_MAX_CORRECTION_ATTEMPTS";
    const ENV_MIN_WORD_COUNT: &'static str = "RANKGATE_MIN_WORD_COUNT";
    const ENV_RANKING_THRESHOLD: &'static str = "RANKGATE_RANKING_THRESHOLD";
    const ENV_INTERNAL_DOMAIN: &'static str = "RANKGATE_INTERNAL_DOMAIN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_correction_attempts =
            Self::parse_u32_from_env(Self::ENV_MAX_ATTEMPTS, defaults.max_correction_attempts)?;
        let min_word_count =
            Self::parse_usize_from_env(Self::ENV_MIN_WORD_COUNT, defaults.min_word_count)?;
        let ranking_threshold =
            Self::parse_f64_from_env(Self::ENV_RANKING_THRESHOLD, defaults.ranking_threshold);
        let internal_domain = Self::parse_optional_string_from_env(Self::ENV_INTERNAL_DOMAIN);

        let config = Self {
            max_correction_attempts,
            min_word_count,
            ranking_threshold,
            internal_domain,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates basic invariants.
    ///
    /// Rejecting bad bounds here keeps the scorer and corrector free of
    /// defensive checks: an engine is only ever constructed from a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_correction_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts {
                value: self.max_correction_attempts,
            });
        }

        if self.min_word_count == 0 {
            return Err(ConfigError::InvalidMinWordCount {
                value: self.min_word_count,
            });
        }

        if !self.ranking_threshold.is_finite() || self.ranking_threshold <= 0.0 {
            return Err(ConfigError::InvalidRankingThreshold {
                value: self.ranking_threshold,
            });
        }

        if let Some(ref domain) = self.internal_domain {
            if domain.is_empty() || domain.contains("://") || domain.contains('/') {
                return Err(ConfigError::InvalidInternalDomain {
                    value: domain.clone(),
                });
            }
        }

        Ok(())
    }

    fn parse_u32_from_env(var_name: &'static str, default: u32) -> Result<u32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(var_name: &str, default: f64) -> f64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
