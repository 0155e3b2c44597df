use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".bank_sim";
const LEDGER_FILE: &str = "accounts.txt";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "bank_sim.log";

/// Application data directory: `BANK_SIM_HOME` when set, else `~/.bank_sim`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BANK_SIM_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn default_ledger_file_in(base: &Path) -> PathBuf {
    base.join(LEDGER_FILE)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn log_file_in(base: &Path) -> PathBuf {
    base.join(LOG_FILE)
}
