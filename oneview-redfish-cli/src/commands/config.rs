use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use oneview_redfish::config::Config;

use super::ConfigSource;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Load and validate the configuration
    Check {
        #[command(flatten)]
        source: ConfigSource,
    },
    /// Print the effective configuration as TOML, password redacted
    Show {
        #[command(flatten)]
        source: ConfigSource,
    },
}

pub fn execute(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Check { source } => check(&source),
        ConfigCommands::Show { source } => show(&source),
    }
}

fn check(source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    config.validate().context("Invalid configuration")?;

    println!("{} Configuration is valid", "✓".green().bold());
    println!();
    println!("  {} {}", "Service:".bold(), config.service.name);
    println!("  {} {}", "Port:".bold(), config.service.port);
    println!("  {} {}", "Log level:".bold(), config.service.log_level);
    println!("  {} {}", "OneView:".bold(), config.oneview.url);
    println!("  {} {}", "User:".bold(), config.oneview.username);
    println!("  {} {}", "API version:".bold(), config.oneview.api_version);
    if config.oneview.accept_invalid_certs {
        println!(
            "  {}",
            "TLS certificate verification is disabled".yellow()
        );
    }

    Ok(())
}

fn show(source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    print!("{}", render(&config)?);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(&config.redacted()).context("Failed to render configuration")
}
