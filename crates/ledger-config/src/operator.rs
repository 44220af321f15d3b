//! Operator credentials
//!
//! The operator identifies the account and signing key used to authorize
//! operations against the network. The record is treated opaquely by the
//! configuration layer: presence is checked, field contents are not. Account
//! identifier and key formats are owned by the network client.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Account and signing key used to authorize network operations
///
/// `Debug` output redacts the private key so credentials cannot leak through
/// logs or error messages that format the configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Operator {
    /// Account identifier on the ledger network
    #[schema(example = "0.0.123456")]
    pub account_id: String,

    /// Encoded private key for the account
    #[schema(example = "302e020100300506032b657004220420...")]
    pub private_key: String,
}

impl Operator {
    /// Create operator credentials
    pub fn new(account_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.account_id)
    }
}
