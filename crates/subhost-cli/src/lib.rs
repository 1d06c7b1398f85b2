//! # subhost-cli
//!
//! Command-line front end for the subhost pipeline.
//!
//! ## Features
//!
//! - **Discovery**: runs Sublist3r (or any script with the same `-d`/`-o` interface)
//! - **Resolution**: system resolver or hickory
//! - **Attribution**: RDAP by default, WHOIS on request
//! - **Report**: deduplicated CSV sorted by organization

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
