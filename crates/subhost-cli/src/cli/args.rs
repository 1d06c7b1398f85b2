//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use subhost::recon::registry::RegistryBackend;

use crate::config::ResolverBackend;

/// Subdomain enumeration and WHOIS lookup tool
///
/// Runs Sublist3r against DOMAIN, resolves every discovered hostname,
/// looks up the organization owning each address and writes a CSV report
/// sorted by organization.
#[derive(Parser, Debug)]
#[command(name = "subhost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target domain to enumerate subdomains for
    pub domain: String,

    /// Path to the sublist3r.py script [default: Sublist3r/sublist3r.py]
    #[arg(long = "sublist3r-path", value_name = "PATH")]
    pub sublist3r_path: Option<PathBuf>,

    /// Output CSV file for results [default: host_results.csv]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Interpreter used to launch the discovery script [default: python]
    #[arg(long, value_name = "CMD")]
    pub runtime: Option<String>,

    /// Registry used to attribute addresses (rdap, whois) [default: rdap]
    #[arg(long, value_name = "BACKEND")]
    pub registry: Option<RegistryBackend>,

    /// DNS resolver [default: system]
    #[arg(long, value_enum)]
    pub resolver: Option<ResolverBackend>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "SUBHOST_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
