//! subhost - map a domain's subdomains to addresses and owning organizations.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    subhost_cli::run().await
}
