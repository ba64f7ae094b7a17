use crate::error::{DrdError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "drd.toml";

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_TYPE_TABLE: &str = "Entity Types-Grid view.csv";
pub const DEFAULT_SUBTYPE_TABLE: &str = "Entity sub-type-Grid view.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_dir: PathBuf,
    pub french: FrenchConfig,
}

/// Locations of the type and sub-type translation tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrenchConfig {
    pub type_table: PathBuf,
    pub subtype_table: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            french: FrenchConfig::default(),
        }
    }
}

impl Default for FrenchConfig {
    fn default() -> Self {
        Self {
            type_table: PathBuf::from(DEFAULT_TYPE_TABLE),
            subtype_table: PathBuf::from(DEFAULT_SUBTYPE_TABLE),
        }
    }
}

impl Config {
    /// Loads `drd.toml` from the working directory, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            DrdError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
