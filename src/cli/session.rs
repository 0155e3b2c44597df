//! Top-level navigation: account menu, per-account action menu, and the
//! balance/deposit/withdraw screens, with the ledger saved on the way out.

use std::{io, path::PathBuf};

use tracing::{debug, error, info, warn};

use crate::cli::terminal::Terminal;
use crate::cli::ui::{
    entry::{EntryMode, NumericEntry},
    menu::SelectionMenu,
    prompt::{NavResult, Prompt},
};
use crate::config::DEFAULT_MIN_ACCOUNTS;
use crate::errors::SessionError;
use crate::ledger::{format_balance, LedgerStore};

const ACCOUNT_HEADER: &str = "Please select an account:";
const ACCOUNT_PREFIX: &str = "Account";
const CONTINUE_HINT: &str = "Press any key to continue";

/// Entries of the per-account menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl LoginAction {
    pub const ALL: [LoginAction; 4] = [
        LoginAction::CheckBalance,
        LoginAction::Deposit,
        LoginAction::Withdraw,
        LoginAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LoginAction::CheckBalance => "Check balance",
            LoginAction::Deposit => "Deposit",
            LoginAction::Withdraw => "Withdraw",
            LoginAction::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Screens of the session. The `usize` is the bound account index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AccountSelect,
    LoginSelect(usize),
    CheckBalance(usize),
    Deposit(usize),
    Withdraw(usize),
    Exit,
}

/// Owns the ledger for the lifetime of the program and walks the user
/// through the screens on `terminal`.
pub struct Session<T: Terminal> {
    terminal: T,
    ledger: LedgerStore,
    ledger_path: PathBuf,
    min_accounts: usize,
}

impl<T: Terminal> Session<T> {
    pub fn new(terminal: T, ledger: LedgerStore, ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            terminal,
            ledger,
            ledger_path: ledger_path.into(),
            min_accounts: DEFAULT_MIN_ACCOUNTS,
        }
    }

    pub fn with_min_accounts(mut self, min_accounts: usize) -> Self {
        self.min_accounts = min_accounts.max(1);
        self
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_parts(self) -> (T, LedgerStore) {
        (self.terminal, self.ledger)
    }

    /// Runs until the user leaves, then saves the ledger. The save happens
    /// on every path out, including terminal failures; a terminal error is
    /// reported ahead of a save error.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let outcome = self.drive();
        let saved = self.ledger.save_to_path(&self.ledger_path);
        if let Err(err) = outcome {
            if let Err(save_err) = saved {
                error!(
                    error = %save_err,
                    path = %self.ledger_path.display(),
                    "ledger save failed after a terminal error, changes are lost"
                );
            }
            return Err(err.into());
        }
        saved?;
        Ok(())
    }

    fn drive(&mut self) -> io::Result<()> {
        let mut state = SessionState::AccountSelect;
        while state != SessionState::Exit {
            state = self.step(state)?;
            debug!(?state, "session transition");
        }
        Ok(())
    }

    /// Runs the screen for `state` and returns the state that follows it.
    pub fn step(&mut self, state: SessionState) -> io::Result<SessionState> {
        match state {
            SessionState::AccountSelect => self.account_select(),
            SessionState::LoginSelect(account) => self.login_select(account),
            SessionState::CheckBalance(account) => self.check_balance(account),
            SessionState::Deposit(account) => self.apply_entry(account, EntryMode::Deposit),
            SessionState::Withdraw(account) => self.apply_entry(account, EntryMode::Withdraw),
            SessionState::Exit => Ok(SessionState::Exit),
        }
    }

    fn account_select(&mut self) -> io::Result<SessionState> {
        self.ledger.ensure_minimum(self.min_accounts);
        let Some(menu) = SelectionMenu::numbered(ACCOUNT_PREFIX, self.ledger.count()) else {
            return Ok(SessionState::Exit);
        };

        let mut prompt = Prompt::from(menu.with_header(ACCOUNT_HEADER));
        match prompt.run(&mut self.terminal)? {
            NavResult::Selected(account) => Ok(SessionState::LoginSelect(account)),
            _ => Ok(SessionState::Exit),
        }
    }

    fn login_select(&mut self, account: usize) -> io::Result<SessionState> {
        let labels = LoginAction::ALL.iter().map(|action| action.label());
        let Some(menu) = SelectionMenu::labeled(labels) else {
            return Ok(SessionState::Exit);
        };

        let header = format!("Welcome to account: {}", account + 1);
        let mut prompt = Prompt::from(menu.with_header(header));
        let next = match prompt.run(&mut self.terminal)? {
            NavResult::Selected(index) => match LoginAction::from_index(index) {
                Some(LoginAction::CheckBalance) => SessionState::CheckBalance(account),
                Some(LoginAction::Deposit) => SessionState::Deposit(account),
                Some(LoginAction::Withdraw) => SessionState::Withdraw(account),
                Some(LoginAction::Exit) | None => SessionState::AccountSelect,
            },
            _ => SessionState::Exit,
        };
        Ok(next)
    }

    fn check_balance(&mut self, account: usize) -> io::Result<SessionState> {
        let balance = self.ledger.get(account);
        self.terminal.clear_screen()?;
        self.terminal
            .render_line(&format!("Welcome to account: {}", account + 1))?;
        self.terminal
            .render_line(&format!("Balance: {}", format_balance(balance)))?;
        self.terminal.render_line(CONTINUE_HINT)?;

        match self.terminal.read_key()? {
            Some(_) => Ok(SessionState::LoginSelect(account)),
            None => {
                warn!("input exhausted on the balance screen, leaving");
                Ok(SessionState::Exit)
            }
        }
    }

    fn apply_entry(&mut self, account: usize, mode: EntryMode) -> io::Result<SessionState> {
        let mut prompt = Prompt::from(NumericEntry::new(mode));
        loop {
            let amount = match prompt.run(&mut self.terminal)? {
                NavResult::Entered(amount) => amount,
                _ => return Ok(SessionState::Exit),
            };
            let delta = match mode {
                EntryMode::Deposit => amount,
                EntryMode::Withdraw => -amount,
            };
            // withdrawals are not floored at zero
            match self.ledger.adjust(account, delta) {
                Ok(balance) => {
                    info!(account = account + 1, mode = mode.verb(), amount, balance, "balance updated");
                    return Ok(SessionState::LoginSelect(account));
                }
                Err(err) => {
                    debug!(error = %err, mode = mode.verb(), "amount refused");
                    prompt.mark_invalid();
                }
            }
        }
    }
}
