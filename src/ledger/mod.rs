//! Account balances held in memory and persisted as one number per line.

mod store;

pub use store::{format_balance, LedgerStore};
