//! Error types for the IO, configuration and CLI edges.
//!
//! The evaluation pipeline itself never fails; these errors only arise while
//! reading inputs, loading configuration or writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shipgate operations
#[derive(Debug, Error)]
pub enum ShipgateError {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Findings document could not be parsed
    #[error("Invalid findings input{}: {source}", path_suffix(.path))]
    Input {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error in {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration values are out of range
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// CLI argument errors
    #[error("Invalid argument --{arg}: {message}")]
    Cli { arg: String, message: String },

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl ShipgateError {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn cli(arg: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Cli {
            arg: arg.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this by changing inputs or flags
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Input { .. } | Self::ConfigParse { .. } | Self::Validation(_) | Self::Cli { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ShipgateError>;
