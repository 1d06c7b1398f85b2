use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from reconnaissance tools
#[derive(Error, Debug)]
pub enum ReconError {
    /// Discovery tool script missing
    #[error("'{}' not found", .0.display())]
    ToolNotFound(PathBuf),

    /// Discovery runtime could not be started
    #[error("failed to launch {program}: {source}")]
    Spawn {
        /// Program that was launched
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Discovery tool exited unsuccessfully
    #[error("discovery tool exited with {status}")]
    ToolFailed {
        /// Exit status reported by the child
        status: ExitStatus,
    },

    /// Domain list file unreadable
    #[error("{}: {}", .path.display(), .source)]
    DomainList {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// DNS resolution error
    #[error("DNS error: {0}")]
    Dns(String),

    /// Registry (RDAP/WHOIS) error
    #[error("registry error: {0}")]
    Registry(String),

    /// Registry answered without a network or organization name
    #[error("no network name in registry response for {0}")]
    MissingNetworkName(String),

    /// Invalid IP address
    #[error("invalid IP address: {0}")]
    InvalidIp(String),
}

impl From<ReconError> for subhost_core::SubhostError {
    fn from(err: ReconError) -> Self {
        match err {
            ReconError::ToolNotFound(path) => Self::ToolNotFound(path),
            e @ (ReconError::Spawn { .. } | ReconError::ToolFailed { .. }) => {
                Self::ToolFailed(e.to_string())
            }
            e @ ReconError::DomainList { .. } => Self::DomainList(e.to_string()),
            ReconError::Dns(msg) => Self::Dns(msg),
            e @ (ReconError::Registry(_) | ReconError::MissingNetworkName(_)) => {
                Self::Registry(e.to_string())
            }
            ReconError::InvalidIp(ip) => Self::InvalidIp(ip),
        }
    }
}
