//! Network environment selector
//!
//! The set of deployment targets is owned by the network, not by this crate:
//! the well-known environments get named variants, and anything else is
//! carried through unchanged as `Custom`. Parsing therefore never fails and
//! the configuration layer performs no membership check.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named deployment target of the ledger network
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkEnvironment {
    /// Production network
    Mainnet,
    /// Public test network
    Testnet,
    /// Preview network for pre-release features
    Previewnet,
    /// Any other environment, stored verbatim (e.g. a local devnet)
    Custom(String),
}

impl NetworkEnvironment {
    /// Canonical lowercase name of the environment
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
            Self::Custom(name) => name,
        }
    }

    /// Well-known public mirror endpoint for the environment, if one exists
    ///
    /// Custom environments have no default; callers must supply a base URL.
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some("https://mainnet-public.mirrornode.hedera.com"),
            Self::Testnet => Some("https://testnet.mirrornode.hedera.com"),
            Self::Previewnet => Some("https://previewnet.mirrornode.hedera.com"),
            Self::Custom(_) => None,
        }
    }
}

impl From<&str> for NetworkEnvironment {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "mainnet" => Self::Mainnet,
            "testnet" => Self::Testnet,
            "previewnet" => Self::Previewnet,
            _ => Self::Custom(value.to_string()),
        }
    }
}

impl FromStr for NetworkEnvironment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for NetworkEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for NetworkEnvironment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkEnvironment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}
