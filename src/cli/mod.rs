//! CLI module
//!
//! Subcommands:
//! - `serve`: run the tarot API server
//! - `check-catalog`: validate a catalog file and exit

pub mod catalog;
pub mod serve;

use clap::{Parser, Subcommand};

/// Calma tarot engine - reading eligibility and card selection service
#[derive(Parser)]
#[command(name = "calma-tarot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Validate a card catalog file and exit
    CheckCatalog(catalog::CheckCatalogArgs),
}
