//! CLI command implementations
//!
//! Every command builds on the same pipeline: read a candidate, look
//! its entity up in the registry, validate, and (for map/submit) run
//! the persistence mapping. Validation failures print one line per
//! offending field, matching how the UI surfaces them inline.

use serde_json::Value;
use std::path::Path;

use crate::auth;
use crate::schema::{Mode, Registry, RegistryError};
use crate::submit::submit_record;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_candidate, write_json};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let registry = Registry::bootstrap();
    run_command(&registry, cli.command)
}

/// Dispatches an already-parsed command.
pub fn run_command(registry: &Registry, command: Command) -> CliResult<()> {
    match command {
        Command::Validate { entity, input, update } => {
            validate(registry, &entity, &input, update)
        }
        Command::Map { entity, input } => map(registry, &entity, &input),
        Command::Submit { entity, input, url } => submit(registry, &entity, &input, &url),
        Command::Entities => entities(registry),
        Command::HashPassword => hash_password(),
    }
}

/// Checks a candidate against an entity's rule table.
pub fn validate(registry: &Registry, entity: &str, input: &Path, update: bool) -> CliResult<()> {
    let candidate = read_candidate(input)?;
    let mode = if update { Mode::Update } else { Mode::Create };

    match registry.validate(entity, &candidate, mode) {
        Ok(()) => {
            println!("ok");
            Ok(())
        }
        Err(err) => Err(report_validation(err)),
    }
}

/// Validates a create candidate and prints its persisted shape.
pub fn map(registry: &Registry, entity: &str, input: &Path) -> CliResult<()> {
    let candidate = read_candidate(input)?;
    let record = pipeline(registry, entity, &candidate)?;
    write_json(&record)
}

/// Validates, maps and POSTs a record to the registration endpoint.
pub fn submit(registry: &Registry, entity: &str, input: &Path, url: &str) -> CliResult<()> {
    let candidate = read_candidate(input)?;
    let record = pipeline(registry, entity, &candidate)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let client = reqwest::Client::new();
    let outcome = runtime.block_on(submit_record(&client, url, &record))?;

    println!("{}", outcome.message());
    if outcome.is_saved() {
        Ok(())
    } else {
        Err(CliError::SubmissionRejected)
    }
}

/// Lists the registered entity names.
pub fn entities(registry: &Registry) -> CliResult<()> {
    for name in registry.names() {
        println!("{}", name);
    }
    Ok(())
}

/// Hashes a password read from stdin (first line, newline stripped).
fn hash_password() -> CliResult<()> {
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .map_err(|source| CliError::Io { path: "<stdin>".to_string(), source })?;
    let password = password.trim_end_matches(['\n', '\r']);

    match auth::hash_password(password) {
        Some(hash) => {
            println!("{}", hash);
            Ok(())
        }
        None => Err(CliError::HashingFailed),
    }
}

fn pipeline(registry: &Registry, entity: &str, candidate: &Value) -> CliResult<Value> {
    registry
        .validate_and_map(entity, candidate)
        .map_err(report_validation)
}

/// Prints per-field messages to stderr; other registry errors pass
/// through untouched.
fn report_validation(err: RegistryError) -> CliError {
    match err {
        RegistryError::Validation(err) => {
            for (field, message) in err.fields() {
                eprintln!("{}: {}", field, message);
            }
            CliError::ValidationFailed { fields: err.len() }
        }
        other => other.into(),
    }
}
