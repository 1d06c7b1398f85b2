//! End-to-end pipeline runs against in-memory collaborators.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Mutex;

use subhost::recon::discovery::DiscoveryTool;
use subhost::recon::dns::HostResolver;
use subhost::recon::registry::RegistryLookup;
use subhost::recon::{ReconError, ReconResult};
use subhost::{export_csv, Pipeline, ResultRecord, SubhostError, UNKNOWN_HOST, UNRESOLVED};

/// Writes a fixed hostname list instead of enumerating anything
struct FixtureDiscovery {
    contents: &'static str,
    calls: Mutex<Vec<String>>,
}

impl FixtureDiscovery {
    fn new(contents: &'static str) -> Self {
        Self {
            contents,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DiscoveryTool for FixtureDiscovery {
    async fn run(&self, domain: &str, output_file: &Path) -> ReconResult<()> {
        self.calls.lock().unwrap().push(domain.to_string());
        std::fs::write(output_file, self.contents).unwrap();
        Ok(())
    }
}

/// Discovery that fails the way a missing script does
struct MissingTool;

#[async_trait]
impl DiscoveryTool for MissingTool {
    async fn run(&self, _domain: &str, _output_file: &Path) -> ReconResult<()> {
        Err(ReconError::ToolNotFound("Sublist3r/sublist3r.py".into()))
    }
}

/// Discovery that succeeds without writing the file
struct SilentTool;

#[async_trait]
impl DiscoveryTool for SilentTool {
    async fn run(&self, _domain: &str, _output_file: &Path) -> ReconResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct MapResolver(HashMap<&'static str, Vec<IpAddr>>);

impl MapResolver {
    fn with(mut self, host: &'static str, ips: &[&str]) -> Self {
        self.0
            .insert(host, ips.iter().map(|ip| ip.parse().unwrap()).collect());
        self
    }
}

#[async_trait]
impl HostResolver for MapResolver {
    async fn resolve(&self, hostname: &str) -> ReconResult<Vec<IpAddr>> {
        self.0
            .get(hostname)
            .cloned()
            .ok_or_else(|| ReconError::Dns(format!("{hostname}: not found")))
    }
}

#[derive(Default)]
struct MapRegistry {
    names: HashMap<IpAddr, &'static str>,
    queried: Mutex<Vec<IpAddr>>,
}

impl MapRegistry {
    fn with(mut self, ip: &str, name: &'static str) -> Self {
        self.names.insert(ip.parse().unwrap(), name);
        self
    }
}

#[async_trait]
impl RegistryLookup for MapRegistry {
    async fn network_name(&self, ip: IpAddr) -> ReconResult<String> {
        self.queried.lock().unwrap().push(ip);
        self.names
            .get(&ip)
            .map(|n| (*n).to_string())
            .ok_or_else(|| ReconError::MissingNetworkName(ip.to_string()))
    }
}

#[tokio::test]
async fn full_run_produces_sorted_deduplicated_report() {
    let dir = tempfile::tempdir().unwrap();
    let subdomains = dir.path().join("subdomains.txt");

    let discovery = FixtureDiscovery::new(
        "www.example.com\n\napi.example.com\nwww.example.com\ngone.example.com\n",
    );
    let resolver = MapResolver::default()
        .with("www.example.com", &["93.184.216.34"])
        .with("api.example.com", &["10.0.0.1", "10.0.0.2"])
        .with("example.com", &["93.184.216.34"]);
    let registry = MapRegistry::default()
        .with("93.184.216.34", "EDGECAST")
        .with("10.0.0.1", "ACME-NET");

    let pipeline = Pipeline::new(&discovery, &resolver, &registry);
    let report = pipeline.run("example.com", &subdomains).await.unwrap();

    assert_eq!(*discovery.calls.lock().unwrap(), ["example.com"]);
    assert_eq!(
        report.hostnames,
        [
            "www.example.com",
            "api.example.com",
            "www.example.com",
            "gone.example.com",
            "example.com"
        ]
    );

    let rows: Vec<(&str, &str, &str, &str)> = report
        .records
        .iter()
        .map(|r| {
            (
                r.domain.as_str(),
                r.subdomain.as_str(),
                r.ip_address.as_str(),
                r.host.as_str(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        [
            ("example.com", "api", "10.0.0.1", "ACME-NET"),
            ("example.com", "www", "93.184.216.34", "EDGECAST"),
            ("example.com", "", "93.184.216.34", "EDGECAST"),
            ("example.com", "api", "10.0.0.2", "Unknown"),
            ("gone.example.com", "", "Unresolved", "Unknown"),
        ]
    );

    assert_eq!(report.unresolved, ["gone.example.com"]);
    assert_eq!(report.lookup_failures.len(), 1);
    assert_eq!(report.lookup_failures[0].ip, "10.0.0.2".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn unresolved_hostname_is_never_looked_up() {
    let resolver = MapResolver::default().with("empty.example.com", &[]);
    let registry = MapRegistry::default();
    let pipeline = Pipeline::new(&SilentTool, &resolver, &registry);

    let hostnames = vec![
        "missing.example.com".to_string(),
        "empty.example.com".to_string(),
    ];
    let resolution = pipeline.resolve_all(&hostnames).await;

    assert_eq!(
        resolution.records,
        vec![
            ResultRecord::unresolved("missing.example.com"),
            ResultRecord::unresolved("empty.example.com"),
        ]
    );
    for record in &resolution.records {
        assert_eq!(record.ip_address, UNRESOLVED);
        assert_eq!(record.host, UNKNOWN_HOST);
        assert_eq!(record.subdomain, "");
    }
    assert!(registry.queried.lock().unwrap().is_empty());
}

#[tokio::test]
async fn one_record_per_resolved_address() {
    let resolver = MapResolver::default().with("cdn.example.com", &["1.1.1.1", "2606:4700::1", "1.0.0.1"]);
    let registry = MapRegistry::default()
        .with("1.1.1.1", "CLOUDFLARENET")
        .with("2606:4700::1", "CLOUDFLARENET")
        .with("1.0.0.1", "CLOUDFLARENET");
    let pipeline = Pipeline::new(&SilentTool, &resolver, &registry);

    let resolution = pipeline.resolve_all(&["cdn.example.com".to_string()]).await;

    assert_eq!(resolution.records.len(), 3);
    assert!(resolution
        .records
        .iter()
        .all(|r| r.hostname() == "cdn.example.com" && r.host == "CLOUDFLARENET"));
    assert_eq!(registry.queried.lock().unwrap().len(), 3);
    assert!(resolution.lookup_failures.is_empty());
}

#[tokio::test]
async fn target_already_listed_is_not_duplicated() {
    let dir = tempfile::tempdir().unwrap();
    let subdomains = dir.path().join("subdomains.txt");
    let discovery = FixtureDiscovery::new("sub1.example.com\nexample.com\n");
    let resolver = MapResolver::default();
    let registry = MapRegistry::default();

    let pipeline = Pipeline::new(&discovery, &resolver, &registry);
    pipeline.discover("example.com", &subdomains).await.unwrap();
    let hostnames = pipeline.load(&subdomains, "example.com").await.unwrap();

    assert_eq!(hostnames, ["sub1.example.com", "example.com"]);
}

#[tokio::test]
async fn missing_tool_aborts_before_anything_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let subdomains = dir.path().join("subdomains.txt");
    let resolver = MapResolver::default();
    let registry = MapRegistry::default();

    let pipeline = Pipeline::new(&MissingTool, &resolver, &registry);
    let err = pipeline.run("example.com", &subdomains).await.unwrap_err();

    assert!(err.is_setup_error());
    assert!(err.to_string().contains("Sublist3r/sublist3r.py"));
    assert!(!subdomains.exists());
}

#[tokio::test]
async fn missing_domain_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let subdomains = dir.path().join("subdomains.txt");
    let resolver = MapResolver::default();
    let registry = MapRegistry::default();

    let pipeline = Pipeline::new(&SilentTool, &resolver, &registry);
    let err = pipeline.run("example.com", &subdomains).await.unwrap_err();

    assert!(matches!(err, SubhostError::DomainList(_)));
}

#[tokio::test]
async fn duplicate_rows_are_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let subdomains = dir.path().join("subdomains.txt");
    let output = dir.path().join("host_results.csv");

    let discovery = FixtureDiscovery::new("example.com\nexample.com\n");
    let resolver = MapResolver::default().with("example.com", &["1.2.3.4"]);
    let registry = MapRegistry::default().with("1.2.3.4", "ACME");

    let pipeline = Pipeline::new(&discovery, &resolver, &registry);
    let report = pipeline.run("example.com", &subdomains).await.unwrap();
    export_csv(&report.records, &output).unwrap();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "Domain,Subdomain,IP Address,Host\nexample.com,,1.2.3.4,ACME\n");
}
