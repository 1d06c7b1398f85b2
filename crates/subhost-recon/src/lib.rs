//! External collaborators of the subhost pipeline.
//!
//! Each stage that talks to something outside the process sits behind a
//! trait so the pipeline can be driven by fakes in tests:
//!
//! - [`discovery::DiscoveryTool`]: subdomain enumeration subprocess
//! - [`dns::HostResolver`]: name to address resolution
//! - [`registry::RegistryLookup`]: IP to organization lookup
//!
//! The domain list loader in [`domains`] reads what the discovery tool wrote.

#![doc(html_root_url = "https://docs.rs/subhost-recon/0.1.0")]

mod error;

pub mod discovery;
pub mod dns;
pub mod domains;
pub mod rdap;
pub mod registry;

#[cfg(feature = "whois")]
pub mod whois;

pub use error::{ReconError, ReconResult};
