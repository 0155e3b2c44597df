use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
};

use tracing::info;

use crate::{errors::LedgerError, utils::persistence::write_atomic};

/// Ordered account balances. Index `k` is presented as "Account k+1".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    balances: Vec<f64>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_balances(balances: Vec<f64>) -> Self {
        Self { balances }
    }

    /// Reads one balance per line. A single line that is not a finite number
    /// rejects the whole ledger.
    pub fn load<R: Read>(reader: R) -> Result<Self, LedgerError> {
        let mut balances = Vec::new();
        for (index, line) in BufReader::new(reader).split(b'\n').enumerate() {
            let line = line?;
            let malformed = || LedgerError::Malformed {
                line: index + 1,
                content: String::from_utf8_lossy(&line).trim().to_string(),
            };
            let text = std::str::from_utf8(&line).map_err(|_| malformed())?;
            match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => balances.push(value),
                _ => return Err(malformed()),
            }
        }
        Ok(Self { balances })
    }

    /// Loads the ledger stored at `path`. A missing file is an empty ledger.
    pub fn load_from_path(path: &Path) -> Result<Self, LedgerError> {
        match File::open(path) {
            Ok(file) => {
                let store = Self::load(file)?;
                info!(path = %path.display(), accounts = store.count(), "ledger loaded");
                Ok(store)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no ledger file yet, starting empty");
                Ok(Self::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn count(&self) -> usize {
        self.balances.len()
    }

    /// Pads with zero-balance accounts until at least `minimum` exist.
    pub fn ensure_minimum(&mut self, minimum: usize) {
        if self.balances.len() < minimum {
            self.balances.resize(minimum, 0.0);
        }
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> f64 {
        match self.balances.get(index) {
            Some(balance) => *balance,
            None => panic!(
                "account index {index} out of range ({} accounts)",
                self.count()
            ),
        }
    }

    /// Applies `delta` to the balance at `index` and returns the new balance.
    /// A result that is no longer finite is refused and leaves the balance as
    /// it was, since it could not be written back.
    #[track_caller]
    pub fn adjust(&mut self, index: usize, delta: f64) -> Result<f64, LedgerError> {
        let count = self.count();
        let Some(balance) = self.balances.get_mut(index) else {
            panic!("account index {index} out of range ({count} accounts)");
        };
        let updated = *balance + delta;
        if !updated.is_finite() {
            return Err(LedgerError::Overflow { account: index + 1 });
        }
        *balance = updated;
        Ok(updated)
    }

    pub fn balances(&self) -> &[f64] {
        &self.balances
    }

    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), LedgerError> {
        for balance in &self.balances {
            writeln!(writer, "{}", format_balance(*balance))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the file at `path` through a staged temporary file, so a
    /// failed write never leaves a half-written ledger behind.
    pub fn save_to_path(&self, path: &Path) -> Result<(), LedgerError> {
        let mut buffer = Vec::new();
        self.save(&mut buffer)?;
        write_atomic(path, &buffer)?;
        info!(path = %path.display(), accounts = self.count(), "ledger saved");
        Ok(())
    }
}

/// Shortest text that parses back to the same value (`100.0`, `-25.0`, `0.1`).
pub fn format_balance(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_minimum_pads_with_zero_balances() {
        let mut store = LedgerStore::from_balances(vec![50.0]);
        store.ensure_minimum(3);
        assert_eq!(store.balances(), &[50.0, 0.0, 0.0]);
    }

    #[test]
    fn ensure_minimum_is_idempotent_and_never_shrinks() {
        let mut store = LedgerStore::from_balances(vec![1.0, 2.0, 3.0, 4.0]);
        store.ensure_minimum(3);
        assert_eq!(store.count(), 4);

        let mut empty = LedgerStore::new();
        empty.ensure_minimum(3);
        empty.ensure_minimum(3);
        empty.ensure_minimum(2);
        assert_eq!(empty.count(), 3);
    }

    #[test]
    fn adjust_allows_negative_balances() {
        let mut store = LedgerStore::from_balances(vec![50.0]);
        assert_eq!(store.adjust(0, -75.0).unwrap(), -25.0);
        assert_eq!(store.get(0), -25.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        LedgerStore::from_balances(vec![1.0]).get(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn adjust_out_of_range_panics() {
        let _ = LedgerStore::new().adjust(0, 1.0);
    }

    #[test]
    fn adjust_refuses_overflow_and_keeps_balance() {
        let mut store = LedgerStore::from_balances(vec![1.7e308]);
        let err = store.adjust(0, 1.7e308).unwrap_err();
        assert!(matches!(err, LedgerError::Overflow { account: 1 }));
        assert_eq!(store.get(0), 1.7e308);
        assert_eq!(store.adjust(0, -1.7e308).unwrap(), 0.0);
    }

    #[test]
    fn load_reports_invalid_utf8_as_malformed() {
        let err = LedgerStore::load(&b"1.0\n\xff\xfe\n"[..]).unwrap_err();
        match err {
            LedgerError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "\u{fffd}\u{fffd}");
            }
            other => panic!("expected malformed ledger, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_first_malformed_line() {
        let err = LedgerStore::load("1.5\n2\nabc\n4\n".as_bytes()).unwrap_err();
        match err {
            LedgerError::Malformed { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected malformed ledger, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_blank_and_non_finite_lines() {
        assert!(LedgerStore::load("1.0\n\n2.0\n".as_bytes()).is_err());
        assert!(LedgerStore::load("inf\n".as_bytes()).is_err());
        assert!(LedgerStore::load("NaN\n".as_bytes()).is_err());
    }

    #[test]
    fn load_accepts_empty_input_and_crlf() {
        assert_eq!(LedgerStore::load("".as_bytes()).unwrap().count(), 0);
        let store = LedgerStore::load("10.25\r\n-3\r\n".as_bytes()).unwrap();
        assert_eq!(store.balances(), &[10.25, -3.0]);
    }

    #[test]
    fn save_writes_one_value_per_line_in_index_order() {
        let store = LedgerStore::from_balances(vec![0.0, 100.0, -25.5]);
        let mut out = Vec::new();
        store.save(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.0\n100.0\n-25.5\n");
    }

    #[test]
    fn formatting_is_stable_after_one_pass() {
        for value in [0.1 + 0.2, 1.0 / 3.0, -1234.5678, 1e16, 0.0] {
            let once = format_balance(value);
            let reparsed: f64 = once.parse().unwrap();
            assert_eq!(reparsed, value);
            assert_eq!(format_balance(reparsed), once);
        }
    }
}
