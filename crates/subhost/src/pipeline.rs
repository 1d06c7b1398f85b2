//! The four-stage run: discover, load, resolve and attribute, aggregate.

use std::net::IpAddr;
use std::path::Path;
use subhost_core::{ResultRecord, Result, UNKNOWN_HOST};
use subhost_recon::discovery::DiscoveryTool;
use subhost_recon::dns::HostResolver;
use subhost_recon::domains::load_domains;
use subhost_recon::registry::RegistryLookup;
use tracing::{debug, info, warn};

use crate::aggregate::aggregate;

/// A registry lookup that fell back to [`UNKNOWN_HOST`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    /// Address that was looked up
    pub ip: IpAddr,
    /// Why the lookup produced no name
    pub reason: String,
}

/// Output of the resolution stage, before aggregation
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// One record per (hostname, address), or one placeholder per
    /// unresolved hostname, in processing order
    pub records: Vec<ResultRecord>,
    /// Hostnames that yielded no addresses
    pub unresolved: Vec<String>,
    /// Lookups replaced by the sentinel
    pub lookup_failures: Vec<LookupFailure>,
}

/// Result of a full run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Hostnames that were processed, target included
    pub hostnames: Vec<String>,
    /// Deduplicated records sorted by host
    pub records: Vec<ResultRecord>,
    /// Hostnames that yielded no addresses
    pub unresolved: Vec<String>,
    /// Lookups replaced by the sentinel
    pub lookup_failures: Vec<LookupFailure>,
}

/// Sequential pipeline over injectable collaborators
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    discovery: &'a dyn DiscoveryTool,
    resolver: &'a dyn HostResolver,
    registry: &'a dyn RegistryLookup,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline from its three collaborators
    #[must_use]
    pub fn new(
        discovery: &'a dyn DiscoveryTool,
        resolver: &'a dyn HostResolver,
        registry: &'a dyn RegistryLookup,
    ) -> Self {
        Self {
            discovery,
            resolver,
            registry,
        }
    }

    /// Stage 1: run the discovery tool, writing to `subdomains_file`.
    pub async fn discover(&self, domain: &str, subdomains_file: &Path) -> Result<()> {
        self.discovery.run(domain, subdomains_file).await?;
        Ok(())
    }

    /// Stage 2: read the discovered hostnames, with `domain` appended if absent.
    pub async fn load(&self, subdomains_file: &Path, domain: &str) -> Result<Vec<String>> {
        Ok(load_domains(subdomains_file, domain).await?)
    }

    /// Stage 3: resolve every hostname and attribute every address, one at a
    /// time. Never fails; per-item errors become sentinel values.
    pub async fn resolve_all(&self, hostnames: &[String]) -> Resolution {
        let mut resolution = Resolution::default();
        for hostname in hostnames {
            self.resolve_hostname(hostname, &mut resolution).await;
        }
        resolution
    }

    async fn resolve_hostname(&self, hostname: &str, out: &mut Resolution) {
        info!("Processing domain: {}", hostname);

        let ips = match self.resolver.resolve(hostname).await {
            Ok(ips) if !ips.is_empty() => ips,
            Ok(_) => {
                warn!("Resolution error for domain: {} (no addresses)", hostname);
                Self::push_unresolved(hostname, out);
                return;
            }
            Err(e) => {
                warn!("Resolution error for domain: {}", hostname);
                debug!(hostname, error = %e, "resolution failed");
                Self::push_unresolved(hostname, out);
                return;
            }
        };

        for ip in ips {
            let host = self.host_for(ip, out).await;
            out.records.push(ResultRecord::resolved(hostname, ip, host));
        }
    }

    fn push_unresolved(hostname: &str, out: &mut Resolution) {
        out.records.push(ResultRecord::unresolved(hostname));
        out.unresolved.push(hostname.to_string());
    }

    async fn host_for(&self, ip: IpAddr, out: &mut Resolution) -> String {
        match self.registry.network_name(ip).await {
            Ok(name) => name,
            Err(e) => {
                debug!(%ip, error = %e, "registry lookup failed, using {}", UNKNOWN_HOST);
                out.lookup_failures.push(LookupFailure {
                    ip,
                    reason: e.to_string(),
                });
                UNKNOWN_HOST.to_string()
            }
        }
    }

    /// Run stages 1 to 3 and aggregate. Nothing is written to disk here;
    /// export is left to the caller.
    pub async fn run(&self, domain: &str, subdomains_file: &Path) -> Result<PipelineReport> {
        self.discover(domain, subdomains_file).await?;
        let hostnames = self.load(subdomains_file, domain).await?;
        debug!(count = hostnames.len(), "hostnames to process");

        let resolution = self.resolve_all(&hostnames).await;
        let raw = resolution.records.len();
        let records = aggregate(resolution.records);
        debug!(raw, kept = records.len(), "aggregated records");

        Ok(PipelineReport {
            hostnames,
            records,
            unresolved: resolution.unresolved,
            lookup_failures: resolution.lookup_failures,
        })
    }
}
