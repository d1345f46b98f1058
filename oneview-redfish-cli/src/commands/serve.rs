use anyhow::{Context, Result};
use clap::Args;
use oneview_redfish::prelude::*;

use super::ConfigSource;

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Listen port, overrides service.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = args.source.load()?;
    if let Some(port) = args.port {
        config.service.port = port;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;

    let state = AppState::builder()
        .config(config.clone())
        .build()
        .context("Failed to configure the OneView client")?;

    Server::new(config).serve(router(state)).await?;

    Ok(())
}
