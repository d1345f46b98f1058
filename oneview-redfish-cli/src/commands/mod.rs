pub mod config;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use oneview_redfish::config::Config;
use std::path::PathBuf;

/// Where to read configuration from
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Configuration file; skips the default search path
    #[arg(short, long, value_name = "FILE", env = "ONEVIEW_REDFISH_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    pub fn load(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => Config::load().context("Failed to load configuration"),
        }
    }
}
