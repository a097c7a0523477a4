pub mod output;

use crate::core::{AuditInput, Result, ShipgateError};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| ShipgateError::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content)
        .map_err(|e| ShipgateError::file_system("Failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| ShipgateError::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}

/// Parse an audit document (phase outcomes plus top-level critical issues).
pub fn parse_audit_input(contents: &str, path: Option<&Path>) -> Result<AuditInput> {
    serde_json::from_str(contents).map_err(|source| ShipgateError::Input {
        path: path.map(Path::to_path_buf),
        source,
    })
}

pub fn load_audit_input(path: &Path) -> Result<AuditInput> {
    let contents = read_file(path)?;
    let input = parse_audit_input(&contents, Some(path))?;
    tracing::debug!(
        path = %path.display(),
        phases = input.phases.len(),
        critical_issues = input.critical_issues.len(),
        "Loaded audit input"
    );
    Ok(input)
}
