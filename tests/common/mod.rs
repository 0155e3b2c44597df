#![allow(dead_code)]

use std::{fs, path::PathBuf};

use bank_sim::{
    cli::{ui::navigation::NavKey, ui::test_mode::ScriptedTerminal, Session},
    ledger::LedgerStore,
};
use tempfile::TempDir;

/// A session over a scripted terminal whose ledger lives in a temp dir.
pub struct SessionHarness {
    pub dir: TempDir,
    pub ledger_path: PathBuf,
}

impl SessionHarness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ledger_path = dir.path().join("accounts.txt");
        Self { dir, ledger_path }
    }

    /// Seeds the ledger file with raw text.
    pub fn with_ledger_text(self, text: &str) -> Self {
        fs::write(&self.ledger_path, text).expect("seed ledger file");
        self
    }

    pub fn session(&self, keys: Vec<NavKey>, lines: &[&str]) -> Session<ScriptedTerminal> {
        let ledger = LedgerStore::load_from_path(&self.ledger_path).expect("load ledger");
        let terminal = ScriptedTerminal::new(keys, lines.iter().copied());
        Session::new(terminal, ledger, self.ledger_path.clone())
    }

    pub fn saved_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.ledger_path)
            .expect("read saved ledger")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn reload(&self) -> LedgerStore {
        LedgerStore::load_from_path(&self.ledger_path).expect("reload ledger")
    }
}

pub fn transcript_contains(terminal: &ScriptedTerminal, needle: &str) -> bool {
    terminal.transcript().iter().any(|line| line.contains(needle))
}

pub fn count_lines_containing(terminal: &ScriptedTerminal, needle: &str) -> usize {
    terminal
        .transcript()
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}
