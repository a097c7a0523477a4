use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Write the default configuration into `dir`, returning the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from_path, ShipgateConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_default_config() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        assert_eq!(load_config_from_path(&path).unwrap(), ShipgateConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "# custom\n").unwrap();

        let err = init_config_in(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_config_in(dir.path(), true).unwrap();
        let contents = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(contents, DEFAULT_CONFIG_TOML);
    }
}
