//! # Client Configuration
//!
//! The canonical configuration shape for a ledger network client, plus the
//! validating constructor that gate-checks raw values before they reach the
//! client runtime.

pub mod loader;
mod traits;

pub use traits::ConfigValidation;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use utoipa::ToSchema;

use crate::environment::NetworkEnvironment;
use crate::error::ConfigurationError;
use crate::operator::Operator;

/// Client configuration for a ledger network connection
///
/// This is the single canonical definition of the shape: producers may build
/// it through [`ClientConfig::new`], deserialize it from a file or the
/// environment, or construct it literally. Consumers accept the shape itself;
/// they do not care which path produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientConfig {
    /// Whether the client is permitted to operate
    ///
    /// Not part of the constructor signature and never validated; callers set
    /// the field directly after construction.
    #[serde(default)]
    #[schema(example = false)]
    pub enabled: bool,

    /// Network environment to connect to
    ///
    /// Stored as given; membership in the well-known set is not checked here.
    #[schema(value_type = String, example = "testnet")]
    pub environment: NetworkEnvironment,

    /// Operator credentials authorizing network operations
    pub operator: Operator,

    /// Root address for all client API calls
    #[schema(example = "https://testnet.mirrornode.hedera.com")]
    pub base_url: String,
}

impl ClientConfig {
    /// Build a validated configuration from raw values
    ///
    /// Checks run in a fixed order: `operator` presence first, then the
    /// `base_url` format. When both are invalid the operator error is the one
    /// surfaced. `environment` is accepted unconditionally. `enabled` starts
    /// out `false`; set the field directly to change it.
    ///
    /// Validation is shallow on purpose: the operator's account identifier
    /// and key encoding belong to the network client, and the base URL is
    /// only required to be a non-empty `http`-prefixed string.
    pub fn new(
        environment: NetworkEnvironment,
        operator: Option<Operator>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let operator = operator
            .ok_or_else(|| ConfigurationError::invalid_operator("operator credentials are required"))?;

        let base_url = base_url.into();
        check_base_url(&base_url)?;

        Ok(Self {
            enabled: false,
            environment,
            operator,
            base_url,
        })
    }

    /// Load configuration from file and environment, then validate it
    ///
    /// Non-fatal findings from [`ConfigValidation::warnings`] are logged and
    /// do not fail the load.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let config: Self = match config_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::load_config()?,
        };

        config.validate()?;
        for warning in config.warnings() {
            warn!("configuration warning: {warning}");
        }

        Ok(config)
    }

    /// Generate an example configuration file
    pub fn generate_example() -> Result<String, ConfigurationError> {
        let config = Self {
            enabled: true,
            environment: NetworkEnvironment::Testnet,
            operator: Operator::new("0.0.123456", "302e020100300506032b6570..."),
            base_url: "https://testnet.mirrornode.hedera.com".to_string(),
        };
        toml::to_string_pretty(&config).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }
}

/// Loader base layer only: an empty operator passes the shallow presence
/// check, but the empty base URL fails validation unless a file or the
/// environment supplies one.
impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            environment: NetworkEnvironment::Testnet,
            operator: Operator::new("", ""),
            base_url: String::new(),
        }
    }
}

impl ConfigValidation for ClientConfig {
    type Error = ConfigurationError;

    fn validate(&self) -> Result<(), Self::Error> {
        check_base_url(&self.base_url)
    }

    fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.base_url.starts_with("http://") {
            warnings.push(format!(
                "base URL {} uses plain HTTP; credentials and queries are sent unencrypted",
                self.base_url
            ));
        }

        if self.enabled {
            if let NetworkEnvironment::Custom(name) = &self.environment {
                warnings.push(format!(
                    "client is enabled against custom environment '{name}'"
                ));
            }
        }

        warnings
    }
}

fn check_base_url(base_url: &str) -> Result<(), ConfigurationError> {
    if base_url.is_empty() {
        return Err(ConfigurationError::invalid_base_url(
            base_url,
            "base URL cannot be empty",
        ));
    }

    if !base_url.starts_with("http") {
        return Err(ConfigurationError::invalid_base_url(
            base_url,
            "base URL must start with 'http'",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Operator {
        Operator::new("0.0.123456", "302e020100300506032b6570")
    }

    #[test]
    fn test_valid_construction_preserves_fields() {
        let config = ClientConfig::new(
            NetworkEnvironment::Testnet,
            Some(operator()),
            "https://api.example.com",
        )
        .unwrap();

        assert_eq!(config.environment, NetworkEnvironment::Testnet);
        assert_eq!(config.operator, operator());
        assert_eq!(config.base_url, "https://api.example.com");
        assert!(!config.enabled);
    }

    #[test]
    fn test_enabled_is_set_after_construction() {
        let mut config =
            ClientConfig::new(NetworkEnvironment::Mainnet, Some(operator()), "http://x").unwrap();
        config.enabled = true;
        assert!(config.enabled);
    }

    #[test]
    fn test_missing_operator_fails() {
        let err = ClientConfig::new(NetworkEnvironment::Testnet, None, "https://api.example.com")
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOperator { .. }));
    }

    #[test]
    fn test_empty_base_url_fails() {
        let err =
            ClientConfig::new(NetworkEnvironment::Testnet, Some(operator()), "").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_base_url_fails() {
        for bad in ["ftp://api.example.com", "example.com", "wss://node:443"] {
            let err =
                ClientConfig::new(NetworkEnvironment::Testnet, Some(operator()), bad).unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidBaseUrl { .. }));
        }
    }

    #[test]
    fn test_operator_is_checked_before_base_url() {
        let err = ClientConfig::new(NetworkEnvironment::Testnet, None, "").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOperator { .. }));
    }

    #[test]
    fn test_operator_check_is_shallow() {
        // Empty credential fields still pass; their formats are owned by the
        // network client, not the configuration layer.
        let config = ClientConfig::new(
            NetworkEnvironment::Testnet,
            Some(Operator::new("", "")),
            "http://x",
        )
        .unwrap();
        assert_eq!(config.operator.account_id, "");
    }

    #[test]
    fn test_environment_is_never_validated() {
        let config = ClientConfig::new(
            NetworkEnvironment::Custom("definitely-not-a-network".to_string()),
            Some(operator()),
            "https://api.example.com",
        )
        .unwrap();
        assert_eq!(
            config.environment,
            NetworkEnvironment::Custom("definitely-not-a-network".to_string())
        );
    }

    #[test]
    fn test_validate_reapplies_base_url_rules() {
        let mut config =
            ClientConfig::new(NetworkEnvironment::Testnet, Some(operator()), "http://x").unwrap();
        assert!(config.validate().is_ok());

        config.base_url = "gopher://x".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_warnings_are_non_fatal() {
        let mut config = ClientConfig::new(
            NetworkEnvironment::Custom("devnet-3".to_string()),
            Some(operator()),
            "http://127.0.0.1:5551",
        )
        .unwrap();
        config.enabled = true;

        assert!(config.validate().is_ok());
        let warnings = config.warnings();
        assert!(warnings.iter().any(|w| w.contains("plain HTTP")));
        assert!(warnings.iter().any(|w| w.contains("devnet-3")));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = ClientConfig::new(
            NetworkEnvironment::Previewnet,
            Some(operator()),
            "https://previewnet.mirrornode.hedera.com",
        )
        .unwrap();

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: ClientConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_generate_example_is_parseable() {
        let example = ClientConfig::generate_example().unwrap();
        let config: ClientConfig = toml::from_str(&example).unwrap();
        assert!(config.validate().is_ok());
    }
}
