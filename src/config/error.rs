//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    ParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The attempt cap must allow at least one correction cycle.
    #[error("invalid max correction attempts {value}: must be at least 1")]
    InvalidMaxAttempts { value: u32 },

    /// The adequate-word-count floor cannot be zero.
    #[error("invalid minimum word count {value}: must be at least 1")]
    InvalidMinWordCount { value: usize },

    /// The ranking threshold must be a positive, finite position.
    #[error("invalid ranking threshold {value}: must be finite and positive")]
    InvalidRankingThreshold { value: f64 },

    /// The internal domain must be a bare host, not a URL.
    #[error("invalid internal domain '{value}': expected a bare hostname")]
    InvalidInternalDomain { value: String },
}
