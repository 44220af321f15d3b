//! Error handling for ledger-config
//!
//! Configuration errors are raised synchronously, either by the validating
//! constructor (`ClientConfig::new`) or by the layered loader. They are never
//! caught or translated inside this crate; callers receive them unchanged.

use thiserror::Error;

/// Configuration-related errors
///
/// `InvalidOperator` and `InvalidBaseUrl` come from field validation; the
/// remaining variants come from the loading pipeline (file discovery, parsing,
/// environment overrides).
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Operator credentials missing or unusable
    #[error("Invalid operator: {reason}")]
    InvalidOperator { reason: String },

    /// Base URL missing, empty, or not an http(s) address
    #[error("Invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Environment variable error
    #[error("Environment variable error for {var}: {details}")]
    EnvironmentError { var: String, details: String },
}

impl ConfigurationError {
    /// Create an invalid-operator error
    pub fn invalid_operator(reason: impl Into<String>) -> Self {
        Self::InvalidOperator {
            reason: reason.into(),
        }
    }

    /// Create an invalid-base-URL error
    pub fn invalid_base_url(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
