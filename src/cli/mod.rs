//! CLI module
//!
//! Command-line interface for:
//! - validate: check a form candidate against an entity's rule table
//! - map: validate then print the persistence-shaped record
//! - submit: validate, map and POST the record to an endpoint
//! - entities: list the registered entities
//! - hash-password: hash a password read from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{entities, map, run, run_command, submit, validate};
pub use errors::{CliError, CliResult};
pub use io::{read_candidate, write_json};
