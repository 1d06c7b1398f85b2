use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for subhost operations
pub type Result<T> = std::result::Result<T, SubhostError>;

/// Errors that can end a subhost run
#[derive(Error, Debug)]
pub enum SubhostError {
    /// The discovery tool script does not exist
    #[error("'{}' not found", .0.display())]
    ToolNotFound(PathBuf),

    /// The discovery tool could not be launched or exited unsuccessfully
    #[error("an error occurred while running the discovery tool: {0}")]
    ToolFailed(String),

    /// The discovered domain list could not be read
    #[error("failed to read domain list: {0}")]
    DomainList(String),

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// Registry (RDAP/WHOIS) lookup failed
    #[error("registry lookup failed: {0}")]
    Registry(String),

    /// Invalid IP address format
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl SubhostError {
    /// Returns true for failures of the discovery stage, which abort the run
    /// before anything is written
    ///
    /// A `DomainList` error is just as fatal but happens after the tool ran,
    /// so it is not counted here.
    #[must_use]
    pub const fn is_setup_error(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::ToolFailed(_))
    }

    /// Returns true if the error only affects a single hostname or IP and is
    /// normally replaced by a sentinel value
    #[must_use]
    pub const fn is_per_item(&self) -> bool {
        matches!(self, Self::Dns(_) | Self::Registry(_) | Self::InvalidIp(_))
    }
}
