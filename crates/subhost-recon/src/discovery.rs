//! Subdomain discovery through an external enumeration tool.
//!
//! The tool is treated as opaque: it receives the target domain and an output
//! path, and is expected to write one hostname per line to that path.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{ReconError, ReconResult};

/// Interpreter used to launch the tool when none is configured
pub const DEFAULT_RUNTIME: &str = "python";

/// Script location used when none is configured
pub const DEFAULT_SCRIPT_PATH: &str = "Sublist3r/sublist3r.py";

/// A subdomain enumeration step that writes its findings to a file.
#[async_trait]
pub trait DiscoveryTool: Send + Sync {
    /// Enumerate subdomains of `domain`, writing them to `output_file`.
    ///
    /// Returns once the tool has finished. Whether the file was actually
    /// produced is left to the caller.
    async fn run(&self, domain: &str, output_file: &Path) -> ReconResult<()>;
}

/// Sublist3r, launched as `<runtime> <script> -d <domain> -o <output>`.
#[derive(Debug, Clone)]
pub struct Sublist3r {
    runtime: String,
    script_path: PathBuf,
}

impl Default for Sublist3r {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_PATH)
    }
}

impl Sublist3r {
    /// Create a launcher for the script at `script_path`
    #[must_use]
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            script_path: script_path.into(),
        }
    }

    /// Set the interpreter
    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Path to the script
    #[must_use]
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Whether the script exists as a regular file
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.script_path.is_file()
    }

    fn command(&self, domain: &str, output_file: &Path) -> Command {
        let mut cmd = Command::new(&self.runtime);
        cmd.arg(&self.script_path)
            .arg("-d")
            .arg(domain)
            .arg("-o")
            .arg(output_file)
            .stdin(Stdio::null());
        cmd
    }
}

#[async_trait]
impl DiscoveryTool for Sublist3r {
    async fn run(&self, domain: &str, output_file: &Path) -> ReconResult<()> {
        if !self.is_available() {
            return Err(ReconError::ToolNotFound(self.script_path.clone()));
        }

        info!("Running Sublist3r for domain: {}", domain);
        debug!(
            runtime = %self.runtime,
            script = %self.script_path.display(),
            output = %output_file.display(),
            "spawning discovery tool"
        );

        // stdout/stderr stay attached to the terminal so the tool's own
        // progress output is visible
        let status = self
            .command(domain, output_file)
            .status()
            .await
            .map_err(|source| ReconError::Spawn {
                program: self.runtime.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ReconError::ToolFailed { status });
        }

        debug!(%status, "discovery tool finished");
        Ok(())
    }
}
