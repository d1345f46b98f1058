use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use commands::config::ConfigCommands;
use commands::serve::ServeArgs;

/// oneview-redfish - Redfish API for HPE OneView
#[derive(Parser)]
#[command(name = "oneview-redfish")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Redfish service
    Serve(ServeArgs),
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Config { command } => commands::config::execute(command),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            std::process::exit(1);
        }
    }
}
