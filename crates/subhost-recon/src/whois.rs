//! WHOIS lookup integration using whois-rust.

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ReconError, ReconResult};
use crate::registry::{clean_name, RegistryLookup};

/// Network fields of a WHOIS answer for an address
#[derive(Debug, Clone, Default)]
pub struct WhoisNetwork {
    /// Raw WHOIS response
    pub raw: String,
    /// `NetName` (ARIN) or `netname` (RIPE, APNIC, AFRINIC)
    pub net_name: Option<String>,
    /// `OrgName` (ARIN) or `org-name` (RIPE)
    pub org_name: Option<String>,
    /// `owner` (LACNIC)
    pub owner: Option<String>,
    /// First `descr` line
    pub description: Option<String>,
}

impl WhoisNetwork {
    /// Best available name, in the order net name, organization, owner,
    /// description
    #[must_use]
    pub fn network_name(&self) -> Option<&str> {
        self.net_name
            .as_deref()
            .or(self.org_name.as_deref())
            .or(self.owner.as_deref())
            .or(self.description.as_deref())
    }
}

/// WHOIS client
pub struct WhoisClient {
    whois: Arc<whois_rust::WhoIs>,
}

impl WhoisClient {
    /// Create a new WHOIS client
    pub fn new() -> ReconResult<Self> {
        // Load from embedded server list; IP queries go to ARIN and follow
        // referrals from there
        let whois = whois_rust::WhoIs::from_string(include_str!("whois_servers.json"))
            .map_err(|e| ReconError::Registry(e.to_string()))?;
        Ok(Self {
            whois: Arc::new(whois),
        })
    }

    /// Lookup WHOIS information for an IP address
    ///
    /// The port-43 exchange is blocking and runs on tokio's blocking pool.
    pub async fn lookup_ip(&self, ip: IpAddr) -> ReconResult<WhoisNetwork> {
        let options = whois_rust::WhoIsLookupOptions::from_string(ip.to_string())
            .map_err(|e| ReconError::Registry(e.to_string()))?;
        let whois = Arc::clone(&self.whois);
        let raw = tokio::task::spawn_blocking(move || whois.lookup(options))
            .await
            .map_err(|e| ReconError::Registry(format!("WHOIS task failed: {e}")))?
            .map_err(|e| ReconError::Registry(e.to_string()))?;

        Ok(parse_whois_response(&raw))
    }
}

#[async_trait]
impl RegistryLookup for WhoisClient {
    async fn network_name(&self, ip: IpAddr) -> ReconResult<String> {
        let network = self.lookup_ip(ip).await?;
        debug!(%ip, net_name = ?network.net_name, org_name = ?network.org_name, "WHOIS network");
        network
            .network_name()
            .map(String::from)
            .ok_or_else(|| ReconError::MissingNetworkName(ip.to_string()))
    }
}

/// Parse raw WHOIS response into structured data
///
/// A `NetRange`/`inetnum`/`inet6num` line opens a new network block. Registries
/// list the covering allocation first and the most specific assignment last,
/// so each new block replaces the names of the one before it. Within a block
/// the first value of each field is kept.
fn parse_whois_response(raw: &str) -> WhoisNetwork {
    let mut info = WhoisNetwork {
        raw: raw.to_string(),
        ..WhoisNetwork::default()
    };
    let mut in_block = false;

    // Simple line-based parsing
    for line in raw.lines() {
        let line = line.trim();
        if line.starts_with('%') || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase();
            if matches!(key.as_str(), "netrange" | "inetnum" | "inet6num") {
                if in_block {
                    info.net_name = None;
                    info.org_name = None;
                    info.owner = None;
                    info.description = None;
                }
                in_block = true;
                continue;
            }
            let Some(value) = clean_name(value) else {
                continue;
            };

            let slot = match key.as_str() {
                "netname" => &mut info.net_name,
                "orgname" | "org-name" => &mut info.org_name,
                "owner" => &mut info.owner,
                "descr" => &mut info.description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
    }

    info
}
