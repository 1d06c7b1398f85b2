//! CLI argument parsing and the top-level run.

pub mod args;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use std::path::Path;
use subhost::recon::discovery::Sublist3r;
use subhost::recon::dns::{HickoryResolver, HostResolver, SystemResolver};
use subhost::recon::domains::SUBDOMAINS_FILE;
use subhost::recon::rdap::RdapClient;
use subhost::recon::registry::{RegistryBackend, RegistryLookup};
use subhost::recon::whois::WhoisClient;
use subhost::{export_csv, Pipeline};
use tracing::debug;

use crate::config::{Config, ResolverBackend, Settings};
use crate::{logging, output};

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, !cli.no_color);

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let settings = Settings::resolve(cli, config);
    debug!(?settings, "effective settings");

    execute(&settings).await
}

/// Build the collaborators described by `settings`, run the pipeline and
/// write the report.
pub async fn execute(settings: &Settings) -> Result<()> {
    let discovery = Sublist3r::new(&settings.sublist3r_path).runtime(&settings.runtime);

    let resolver: Box<dyn HostResolver> = match settings.resolver {
        ResolverBackend::System => Box::new(SystemResolver::new()),
        ResolverBackend::Hickory => Box::new(HickoryResolver::from_system_conf()?),
    };

    let registry: Box<dyn RegistryLookup> = match settings.registry {
        RegistryBackend::Rdap => {
            let mut builder = RdapClient::builder();
            if let Some(url) = &settings.rdap_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = settings.registry_timeout {
                builder = builder.timeout(timeout);
            }
            Box::new(builder.build()?)
        }
        RegistryBackend::Whois => Box::new(WhoisClient::new()?),
    };

    let pipeline = Pipeline::new(&discovery, resolver.as_ref(), registry.as_ref());
    let report = pipeline
        .run(&settings.domain, Path::new(SUBDOMAINS_FILE))
        .await?;

    export_csv(&report.records, &settings.output)?;
    output::print_summary(&report, &settings.output);

    Ok(())
}
