//! CLI input/output helpers

use serde_json::Value;
use std::io::Read;
use std::path::Path;

use super::errors::{CliError, CliResult};

/// Reads a JSON candidate from a file, or from stdin when the path is
/// '-'.
pub fn read_candidate(path: &Path) -> CliResult<Value> {
    let display = path.display().to_string();

    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Io { path: "<stdin>".to_string(), source })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Io { path: display.clone(), source })?
    };

    serde_json::from_str(&raw).map_err(|source| CliError::Json { path: display, source })
}

/// Pretty-prints a JSON value to stdout.
pub fn write_json(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_candidate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"username\": \"ana\"}}").unwrap();

        let value = read_candidate(file.path()).unwrap();
        assert_eq!(value["username"], "ana");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = read_candidate(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = read_candidate(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }
}
