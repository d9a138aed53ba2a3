//! CLI module for the disposable email blocker
//!
//! Subcommands:
//! - `serve`: HTTP server with the gated registration route
//! - `check`: evaluate a single address and print the outcome

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Disposable Email Blocker - rejects registrations from throwaway email domains
#[derive(Parser)]
#[command(name = "disposable-email-blocker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Check one email address against the verification API
    Check(check::CheckArgs),
}

/// Load `.env` and layered configuration, then install logging
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}
