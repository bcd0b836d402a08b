//! CLI argument definitions using clap
//!
//! Commands:
//! - socioforms validate <entity> [input] [--update]
//! - socioforms map <entity> [input]
//! - socioforms submit <entity> [input] --url <endpoint>
//! - socioforms entities
//! - socioforms hash-password

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// socioforms - form validation and persistence mapping for a
/// cooperative membership system
#[derive(Parser, Debug)]
#[command(name = "socioforms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a form candidate against an entity's rule table
    Validate {
        /// Entity name (see `entities`)
        entity: String,

        /// Path to a JSON candidate, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Apply partial-update semantics (every field optional)
        #[arg(long)]
        update: bool,
    },

    /// Validate a candidate and print the persistence-shaped record
    Map {
        /// Entity name (see `entities`)
        entity: String,

        /// Path to a JSON candidate, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Validate, map and POST the record to a registration endpoint
    Submit {
        /// Entity name (see `entities`)
        entity: String,

        /// Path to a JSON candidate, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Registration endpoint URL
        #[arg(long)]
        url: String,
    },

    /// List the entities known to the registry
    Entities,

    /// Hash a password read from stdin
    HashPassword,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
