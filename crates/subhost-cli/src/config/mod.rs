//! Configuration management.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use subhost::recon::discovery::{DEFAULT_RUNTIME, DEFAULT_SCRIPT_PATH};
use subhost::recon::registry::RegistryBackend;

use crate::cli::args::Cli;

/// Report path used when none is configured
pub const DEFAULT_OUTPUT: &str = "host_results.csv";

/// Available DNS resolvers.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Platform resolver (getaddrinfo)
    #[default]
    System,
    /// hickory, configured from the system resolver settings
    Hickory,
}

/// CLI configuration file.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the discovery script
    pub sublist3r_path: Option<PathBuf>,

    /// Report path
    pub output: Option<PathBuf>,

    /// Interpreter for the discovery script
    pub runtime: Option<String>,

    /// Registry backend
    pub registry: Option<RegistryBackend>,

    /// DNS resolver
    pub resolver: Option<ResolverBackend>,

    /// RDAP base URL
    pub rdap_url: Option<String>,

    /// Per-request registry timeout; no timeout when unset
    pub registry_timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path, if the platform has a config
    /// directory for the current user.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("rs", "subhost", "subhost")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, if present.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::path().as_deref())
    }

    /// Load `path` when it exists; no path or no file means defaults.
    fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective settings for one run: flag, then config file, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub domain: String,
    pub sublist3r_path: PathBuf,
    pub output: PathBuf,
    pub runtime: String,
    pub registry: RegistryBackend,
    pub resolver: ResolverBackend,
    pub rdap_url: Option<String>,
    pub registry_timeout: Option<Duration>,
}

impl Settings {
    /// Merge command-line flags over the config file.
    #[must_use]
    pub fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            domain: cli.domain,
            sublist3r_path: cli
                .sublist3r_path
                .or(config.sublist3r_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_PATH)),
            output: cli
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            runtime: cli
                .runtime
                .or(config.runtime)
                .unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
            registry: cli.registry.or(config.registry).unwrap_or_default(),
            resolver: cli.resolver.or(config.resolver).unwrap_or_default(),
            rdap_url: config.rdap_url,
            registry_timeout: config.registry_timeout_secs.map(Duration::from_secs),
        }
    }
}
