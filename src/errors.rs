use std::io;

use thiserror::Error;

/// Failures while reading or writing the persisted ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed ledger at line {line}: `{content}` is not a number")]
    Malformed { line: usize, content: String },
    #[error("Balance of account {account} would overflow")]
    Overflow { account: usize },
}

/// Rejected user-typed amount. Recovered inside the numeric entry prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid entry: `{0}`")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}
