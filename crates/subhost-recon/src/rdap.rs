//! RDAP (RFC 7480-7484) IP network lookups.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ReconError, ReconResult};
use crate::registry::{clean_name, RegistryLookup};

/// ARIN's RDAP service; it redirects addresses managed by other registries
pub const DEFAULT_BASE_URL: &str = "https://rdap.arin.net/registry";

const RDAP_ACCEPT: &str = "application/rdap+json, application/json";

/// The part of an RDAP `ip network` object we read
#[derive(Debug, Deserialize)]
struct IpNetwork {
    name: Option<String>,
    handle: Option<String>,
}

/// RDAP client for IP network lookups
#[derive(Debug, Clone)]
pub struct RdapClient {
    http: HttpClient,
    base_url: String,
}

impl RdapClient {
    /// Create a client against [`DEFAULT_BASE_URL`]
    pub fn new() -> ReconResult<Self> {
        RdapClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> RdapClientBuilder {
        RdapClientBuilder::new()
    }

    fn ip_url(&self, ip: IpAddr) -> ReconResult<Url> {
        let raw = format!("{}/ip/{ip}", self.base_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| ReconError::Registry(format!("invalid RDAP URL {raw}: {e}")))
    }
}

#[async_trait]
impl RegistryLookup for RdapClient {
    async fn network_name(&self, ip: IpAddr) -> ReconResult<String> {
        let url = self.ip_url(ip)?;
        debug!(url = %url, "RDAP request");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, RDAP_ACCEPT)
            .send()
            .await
            .map_err(|e| ReconError::Registry(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                warn!(%ip, "rate limited by RDAP server");
            }
            return Err(ReconError::Registry(format!(
                "RDAP server returned HTTP {} for {ip}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReconError::Registry(e.to_string()))?;

        parse_network_name(&body, ip)
    }
}

/// Extract the network name from an RDAP `ip network` response body.
pub fn parse_network_name(body: &str, ip: IpAddr) -> ReconResult<String> {
    let network: IpNetwork = serde_json::from_str(body)
        .map_err(|e| ReconError::Registry(format!("malformed RDAP response for {ip}: {e}")))?;

    match network.name.as_deref().and_then(clean_name) {
        Some(name) => {
            debug!(%ip, name = %name, handle = ?network.handle, "RDAP network");
            Ok(name)
        }
        None => Err(ReconError::MissingNetworkName(ip.to_string())),
    }
}

/// Builder for configuring an [`RdapClient`]
pub struct RdapClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for RdapClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RdapClientBuilder {
    /// Create a builder with default settings and no request timeout
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("subhost/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> ReconResult<RdapClient> {
        let mut builder = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ReconError::Registry(format!("failed to build HTTP client: {e}")))?;

        Ok(RdapClient {
            http,
            base_url: self.base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::Ipv4Addr;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const IP: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

    async fn client_for(server: &MockServer) -> RdapClient {
        RdapClient::builder().base_url(server.uri()).build().unwrap()
    }

    #[test]
    fn parses_network_name() {
        let body = r#"{"objectClassName":"ip network","handle":"NET-8-8-8-0-2","name":"GOGL"}"#;
        assert_eq!(parse_network_name(body, IP).unwrap(), "GOGL");
    }

    #[test]
    fn missing_name_is_reported() {
        let body = r#"{"objectClassName":"ip network","handle":"NET-1"}"#;
        assert!(matches!(
            parse_network_name(body, IP),
            Err(ReconError::MissingNetworkName(_))
        ));

        let blank = r#"{"name":"  "}"#;
        assert!(matches!(
            parse_network_name(blank, IP),
            Err(ReconError::MissingNetworkName(_))
        ));
    }

    #[test]
    fn malformed_body_is_reported() {
        assert!(matches!(
            parse_network_name("<html>oops</html>", IP),
            Err(ReconError::Registry(_))
        ));
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = RdapClient::builder()
            .base_url("https://rdap.example.net/registry/")
            .build()
            .unwrap();
        let v6: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(
            client.ip_url(v6).unwrap().as_str(),
            "https://rdap.example.net/registry/ip/2001:db8::1"
        );
    }

    #[tokio::test]
    async fn looks_up_network_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip/8.8.8.8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objectClassName": "ip network",
                "handle": "NET-8-8-8-0-2",
                "startAddress": "8.8.8.0",
                "endAddress": "8.8.8.255",
                "name": "GOGL"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let name = client_for(&server).await.network_name(IP).await.unwrap();
        assert_eq!(name, "GOGL");
    }

    #[tokio::test]
    async fn follows_registry_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip/8.8.8.8"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/ripe/ip/8.8.8.8", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ripe/ip/8.8.8.8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "EXAMPLE-NET" })))
            .mount(&server)
            .await;

        let name = client_for(&server).await.network_name(IP).await.unwrap();
        assert_eq!(name, "EXAMPLE-NET");
    }

    #[tokio::test]
    async fn http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).await.network_name(IP).await.unwrap_err();
        match err {
            ReconError::Registry(msg) => assert!(msg.contains("404")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
