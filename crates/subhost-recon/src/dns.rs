//! Hostname to address resolution.

use async_trait::async_trait;
use std::collections::HashSet;
use std::net::IpAddr;
use tracing::debug;

use crate::error::{ReconError, ReconResult};

/// Resolves a hostname to its addresses.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Distinct addresses for `hostname`, both families, first-seen order.
    ///
    /// An empty vector means the name exists but has no addresses; callers
    /// treat it the same as an error.
    async fn resolve(&self, hostname: &str) -> ReconResult<Vec<IpAddr>>;
}

/// Drop repeated addresses, keeping the first occurrence of each.
pub fn distinct(addrs: impl IntoIterator<Item = IpAddr>) -> Vec<IpAddr> {
    let mut seen = HashSet::new();
    addrs.into_iter().filter(|ip| seen.insert(*ip)).collect()
}

/// The platform resolver (`getaddrinfo`), as used by the standard library
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Create a system resolver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, hostname: &str) -> ReconResult<Vec<IpAddr>> {
        // Port 0 for lookup; getaddrinfo returns one entry per socket type,
        // hence the dedup
        let addrs = tokio::net::lookup_host((hostname, 0))
            .await
            .map_err(|e| ReconError::Dns(format!("{hostname}: {e}")))?;

        let ips = distinct(addrs.map(|a| a.ip()));
        debug!(hostname, count = ips.len(), "resolved via system resolver");
        Ok(ips)
    }
}

/// Resolver built on hickory, configured from the system resolver settings
#[cfg(feature = "hickory")]
pub struct HickoryResolver {
    inner: hickory_resolver::TokioResolver,
}

#[cfg(feature = "hickory")]
impl HickoryResolver {
    /// Create a resolver from `/etc/resolv.conf` (or the platform equivalent)
    pub fn from_system_conf() -> ReconResult<Self> {
        let inner = hickory_resolver::TokioResolver::builder_tokio()
            .map_err(|e| ReconError::Dns(format!("failed to create resolver: {e}")))?
            .build();
        Ok(Self { inner })
    }
}

#[cfg(feature = "hickory")]
#[async_trait]
impl HostResolver for HickoryResolver {
    async fn resolve(&self, hostname: &str) -> ReconResult<Vec<IpAddr>> {
        let lookup = self
            .inner
            .lookup_ip(hostname)
            .await
            .map_err(|e| ReconError::Dns(format!("{hostname}: {e}")))?;

        let ips = distinct(lookup.iter());
        debug!(hostname, count = ips.len(), "resolved via hickory");
        Ok(ips)
    }
}
