//! Subcommand implementations.

pub mod devices;
pub mod history;
pub mod listen;
pub mod profile;
pub mod recording;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use doorbot::{Client, ClientConfig, Credentials};

use crate::cli::{Cli, Commands};

/// Build a library client from the global arguments.
pub fn build_client(cli: &Cli) -> Result<Client> {
    let username = cli
        .username
        .as_deref()
        .context("Missing --username (or RING_USERNAME)")?;
    let password = cli
        .password
        .as_deref()
        .context("Missing --password (or RING_PASSWORD)")?;

    let mut config = ClientConfig::default();
    if let Some(api_base) = &cli.api_base {
        config = config.with_api_base(api_base).context("Invalid API URL")?;
    }
    if let Some(oauth_base) = &cli.oauth_base {
        config = config
            .with_oauth_base(oauth_base)
            .context("Invalid OAuth URL")?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    debug!(api = %config.api_base(), oauth = %config.oauth_base(), "Client configured");

    Client::with_config(Credentials::new(username, password), config)
        .context("Failed to build client")
}

pub async fn handle(client: &Client, command: Commands) -> Result<()> {
    match command {
        Commands::Profile(args) => profile::run(client, args).await,
        Commands::Devices(args) => devices::run(client, args).await,
        Commands::History(args) => history::run(client, args).await,
        Commands::Recording(args) => recording::run(client, args).await,
        Commands::Listen(args) => listen::run(client, args).await,
    }
}
