use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    utils::paths::{app_data_dir, config_file_in, default_ledger_file_in},
};

pub const DEFAULT_MIN_ACCOUNTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
    pub min_accounts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: None,
            min_accounts: DEFAULT_MIN_ACCOUNTS,
        }
    }
}

/// Reads `config.json` from the application directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = config_file_in(&base);
        Self { base, path }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.min_accounts = config.min_accounts.max(1);
        Ok(config)
    }

    /// Where the ledger lives. Relative paths are taken from the app directory.
    pub fn ledger_path(&self, config: &Config) -> PathBuf {
        match &config.ledger_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => self.base.join(file),
            None => default_ledger_file_in(&self.base),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
