use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::content::ContentFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio CLI - inspect the PortfolioOS content and configuration", long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled-in portfolio content
    Content {
        #[arg(long, value_enum, default_value_t = ContentFormat::Json)]
        format: ContentFormat,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = folio_execution::logging::init_stderr_logging("warn") {
        eprintln!("Logging disabled: {}", e);
    }

    match cli.command {
        Commands::Content { format } => commands::content::print(format)?,
        Commands::Config { action } => {
            let service = commands::config::service(cli.config)?;
            match action {
                ConfigAction::Path => commands::config::path(&service),
                ConfigAction::Show => commands::config::show(&service)?,
                ConfigAction::Init { force } => commands::config::init(&service, force)?,
            }
        }
    }

    Ok(())
}
