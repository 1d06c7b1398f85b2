//! Loading the hostname list written by the discovery tool.

use std::path::Path;
use tracing::debug;

use crate::error::{ReconError, ReconResult};

/// File the discovery tool writes to, relative to the working directory
pub const SUBDOMAINS_FILE: &str = "subdomains.txt";

/// Read the hostname list at `path` and make sure `target` is part of it.
///
/// Lines are trimmed and blank lines dropped. File order is kept and
/// duplicates are not removed.
pub async fn load_domains(path: &Path, target: &str) -> ReconResult<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReconError::DomainList {
            path: path.to_path_buf(),
            source,
        })?;

    let mut domains = parse_domain_list(&contents);
    debug!(path = %path.display(), count = domains.len(), "loaded domain list");

    ensure_target(&mut domains, target);
    Ok(domains)
}

/// Split file contents into trimmed, non-empty lines.
#[must_use]
pub fn parse_domain_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Append `target` unless an identical entry is already present.
pub fn ensure_target(domains: &mut Vec<String>, target: &str) {
    if !domains.iter().any(|d| d == target) {
        domains.push(target.to_string());
    }
}
