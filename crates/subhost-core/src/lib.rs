//! Core types for the subhost subdomain and registry mapper.
//!
//! This crate provides the foundational types shared by every stage:
//!
//! - **Types**: [`ResultRecord`], the row written to the report, and
//!   [`HostnameParts`], the subdomain/registered-domain split
//! - **Errors**: the top-level [`SubhostError`]
//!
//! # Example
//!
//! ```rust
//! use subhost_core::{split_hostname, ResultRecord};
//!
//! let parts = split_hostname("a.b.example.com");
//! assert_eq!(parts.subdomain, "a.b");
//! assert_eq!(parts.domain, "example.com");
//!
//! let record = ResultRecord::unresolved("gone.example.com");
//! assert_eq!(record.ip_address, "Unresolved");
//! ```

#![doc(html_root_url = "https://docs.rs/subhost-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, SubhostError};
pub use types::*;
