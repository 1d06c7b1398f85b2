//! IP to organization lookups against internet registries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{ReconError, ReconResult};

/// Looks up the network or organization name registered for an address.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Name of the network owning `ip`.
    ///
    /// A response without a usable name is an error
    /// ([`ReconError::MissingNetworkName`]), so callers only have to handle
    /// one failure path.
    async fn network_name(&self, ip: IpAddr) -> ReconResult<String>;
}

/// Available registry backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryBackend {
    /// RDAP over HTTPS
    #[default]
    Rdap,
    /// Classic WHOIS on port 43
    Whois,
}

impl FromStr for RegistryBackend {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rdap" => Ok(Self::Rdap),
            "whois" => Ok(Self::Whois),
            _ => Err(ReconError::Registry(format!(
                "unknown registry backend: {s} (valid: rdap, whois)"
            ))),
        }
    }
}

impl std::fmt::Display for RegistryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rdap => write!(f, "rdap"),
            Self::Whois => write!(f, "whois"),
        }
    }
}

/// Normalize a raw name from a registry answer, rejecting blanks.
pub(crate) fn clean_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}
