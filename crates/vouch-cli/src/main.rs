// crates/vouch-cli/src/main.rs
//
// CLI entrypoint for the Vouch trust engine.
//
// Initializes tracing, loads configuration, and dispatches to the verify,
// normalize, and whois subcommands.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::normalize::NormalizeCmd;
use commands::verify::VerifyCmd;
use commands::whois::WhoisCmd;
use config::VouchConfig;

/// Vouch: check whether a company domain looks legitimate.
#[derive(Parser, Debug)]
#[command(
    name = "vouch",
    version = "0.1.0",
    about = "Domain trust verification from DNS, website and WHOIS signals"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.vouch/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Score an email address, URL, or domain.
    Verify(VerifyCmd),

    /// Print the canonical domain for an identifier.
    Normalize(NormalizeCmd),

    /// Show registrar, creation and expiry dates from WHOIS.
    Whois(WhoisCmd),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = config::expand_tilde(&cli.config);
    let loaded = VouchConfig::load(&config_path);
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => VouchConfig::default(),
    };

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Ok(_) => tracing::debug!("Loaded configuration from {}", config_path),
        Err(e) if std::path::Path::new(&config_path).exists() => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
        Err(_) => tracing::debug!("No config at {}. Using defaults.", config_path),
    }

    match &cli.command {
        Commands::Verify(cmd) => commands::verify::run(cmd, &config).await?,
        Commands::Normalize(cmd) => commands::normalize::run(cmd)?,
        Commands::Whois(cmd) => commands::whois::run(cmd, &config).await?,
    }

    Ok(())
}
