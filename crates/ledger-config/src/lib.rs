//! # Ledger Config
//!
//! Validated client configuration for services that talk to a ledger network.
//! This crate provides the canonical configuration shape consumed by client
//! runtimes: an enablement flag, a network environment selector, operator
//! credentials, and the base URL of the API endpoint.
//!
//! ## Key Features
//! - `ClientConfig` with a validating constructor (`ClientConfig::new`)
//! - Opaque `Operator` credentials with key redaction in debug output
//! - `NetworkEnvironment` covering the well-known networks plus custom ones
//! - Layered configuration loading (defaults, TOML file, environment variables)
//! - OpenAPI schema metadata for documentation generators
//!
//! ## Design Principles
//! - One canonical data definition; any value deserializing into the shape is
//!   accepted wherever the config is consumed
//! - Validation happens once, at construction or load time
//! - Shallow checks only: operator internals and environment membership are
//!   owned by the network client, not by this crate

pub mod config;
pub mod environment;
pub mod error;
pub mod operator;

// Re-export commonly used types at the crate root for convenience
pub use config::loader::{self, LoadOptions};
pub use config::{ClientConfig, ConfigValidation};
pub use environment::NetworkEnvironment;
pub use error::ConfigurationError;
pub use operator::Operator;

/// Version of the ledger-config crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
