#![doc(test(attr(deny(warnings))))]

//! Bank Sim is a keyboard-driven terminal menu over a small ledger of account
//! balances: pick an account, check its balance, deposit or withdraw, and
//! have the ledger written back to disk when you leave.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Sim tracing initialized.");
    });
}
