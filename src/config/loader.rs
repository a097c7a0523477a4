use std::fs;
use std::path::{Path, PathBuf};

use super::core::ShipgateConfig;
use super::validation::validate_config;
use crate::core::{Result, ShipgateError};

pub const CONFIG_FILE_NAME: &str = ".shipgate.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str, path: &Path) -> Result<ShipgateConfig> {
    let config =
        toml::from_str::<ShipgateConfig>(contents).map_err(|source| ShipgateError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load an explicitly requested config file; any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<ShipgateConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ShipgateError::file_system("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents, path)?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Try loading config from a discovered path, logging and skipping bad files
fn try_load_config_from_path(config_path: &Path) -> Option<ShipgateConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.shipgate.toml`.
pub fn discover_config(start: PathBuf) -> ShipgateConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ShipgateConfig::default()
        })
}

/// Load config from the working directory hierarchy, or defaults.
pub fn load_config() -> ShipgateConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ShipgateConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[capacity]\ntarget_users = 300\n",
        )
        .unwrap();
        let nested = root.path().join("app").join("src");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.capacity.target_users, 300);
    }

    #[test]
    fn test_discover_config_skips_invalid_file() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[capacity]\ntarget_users = 0\n",
        )
        .unwrap();

        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config, ShipgateConfig::default());
    }

    #[test]
    fn test_load_config_from_path_reports_parse_errors() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("bad.toml");
        fs::write(&path, "[capacity\n").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, ShipgateError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let err = load_config_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ShipgateError::FileSystem { .. }));
    }
}
