//! Map a domain's subdomains to addresses and owning organizations.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use subhost::{export_csv, Pipeline};
//! use subhost::recon::{discovery::Sublist3r, dns::SystemResolver, rdap::RdapClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> subhost::Result<()> {
//!     let discovery = Sublist3r::new("Sublist3r/sublist3r.py");
//!     let resolver = SystemResolver::new();
//!     let registry = RdapClient::new()?;
//!
//!     let pipeline = Pipeline::new(&discovery, &resolver, &registry);
//!     let report = pipeline.run("example.com", Path::new("subdomains.txt")).await?;
//!
//!     export_csv(&report.records, Path::new("host_results.csv"))?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - rustls, WHOIS and hickory backends
//! - `rustls` - Use rustls for RDAP over HTTPS (recommended)
//! - `native-tls` - Use system native TLS
//! - `whois` - Enable the port-43 WHOIS registry backend
//! - `hickory` - Enable the hickory DNS resolver backend

#![doc(html_root_url = "https://docs.rs/subhost/0.1.0")]

pub mod aggregate;
pub mod export;
pub mod pipeline;

// Re-export core types
pub use subhost_core::*;

pub use aggregate::{aggregate, dedup, sort_by_host};
pub use export::{export_csv, write_csv};
pub use pipeline::{LookupFailure, Pipeline, PipelineReport, Resolution};

pub use subhost_recon as recon;

// Re-export runtime for convenience
pub use tokio;
