//! The report row.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::hostname::split_hostname;

/// Placeholder IP address for hostnames that did not resolve
pub const UNRESOLVED: &str = "Unresolved";

/// Placeholder organization when the registry has no answer
pub const UNKNOWN_HOST: &str = "Unknown";

/// CSV header row, in column order
pub const CSV_HEADER: [&str; 4] = ["Domain", "Subdomain", "IP Address", "Host"];

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Registered domain (last two labels)
    #[serde(rename = "Domain")]
    pub domain: String,

    /// Leading labels, empty for the apex
    #[serde(rename = "Subdomain")]
    pub subdomain: String,

    /// Resolved address literal or [`UNRESOLVED`]
    #[serde(rename = "IP Address")]
    pub ip_address: String,

    /// Owning organization or [`UNKNOWN_HOST`]
    #[serde(rename = "Host")]
    pub host: String,
}

/// Deduplication key: every field of a [`ResultRecord`].
pub type RecordKey = (String, String, String, String);

impl ResultRecord {
    /// Record for a resolved address, with the hostname split into parts.
    #[must_use]
    pub fn resolved(hostname: &str, ip: IpAddr, host: impl Into<String>) -> Self {
        let parts = split_hostname(hostname);
        Self {
            domain: parts.domain,
            subdomain: parts.subdomain,
            ip_address: ip.to_string(),
            host: host.into(),
        }
    }

    /// Placeholder record for a hostname with no addresses.
    ///
    /// The hostname is not split: `domain` carries it whole.
    #[must_use]
    pub fn unresolved(hostname: &str) -> Self {
        Self {
            domain: hostname.to_string(),
            subdomain: String::new(),
            ip_address: UNRESOLVED.to_string(),
            host: UNKNOWN_HOST.to_string(),
        }
    }

    /// Whether this is an unresolved placeholder.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.ip_address == UNRESOLVED
    }

    /// The 4-tuple used for exact deduplication.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        (
            self.domain.clone(),
            self.subdomain.clone(),
            self.ip_address.clone(),
            self.host.clone(),
        )
    }

    /// The hostname this record was built from.
    #[must_use]
    pub fn hostname(&self) -> String {
        if self.subdomain.is_empty() {
            self.domain.clone()
        } else {
            format!("{}.{}", self.subdomain, self.domain)
        }
    }
}
