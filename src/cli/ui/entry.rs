use std::io;

use colored::Colorize;
use tracing::debug;

use crate::cli::terminal::Terminal;
use crate::cli::ui::prompt::NavResult;
use crate::errors::AmountError;

const INVALID_BANNER: &str = "Invalid entry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Deposit,
    Withdraw,
}

impl EntryMode {
    pub fn verb(self) -> &'static str {
        match self {
            EntryMode::Deposit => "deposit",
            EntryMode::Withdraw => "withdraw",
        }
    }
}

/// Line-at-a-time amount prompt. Keeps asking until the text is a number.
#[derive(Debug, Clone)]
pub struct NumericEntry {
    mode: EntryMode,
    invalid: bool,
}

impl NumericEntry {
    pub fn new(mode: EntryMode) -> Self {
        Self {
            mode,
            invalid: false,
        }
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Whether the previous attempt was rejected.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Flags the accepted amount as unusable so the next render asks again.
    pub fn mark_invalid(&mut self) {
        self.invalid = true;
    }

    pub fn handle_line(&mut self, text: &str) -> NavResult {
        match parse_amount(text) {
            Ok(amount) => {
                self.invalid = false;
                NavResult::Entered(amount)
            }
            Err(err) => {
                debug!(error = %err, mode = self.mode.verb(), "amount rejected");
                self.invalid = true;
                NavResult::StillActive
            }
        }
    }

    pub fn render<T: Terminal + ?Sized>(&self, terminal: &mut T) -> io::Result<()> {
        if self.invalid {
            terminal.render_line(&INVALID_BANNER.red().to_string())?;
        }
        terminal.render_line(&format!(
            "How much would you like to {}?",
            self.mode.verb()
        ))
    }
}

/// Accepts an optional sign, digits and an optional fractional part
/// (`12`, `-3.5`, `.5`, `5.`), ignoring surrounding whitespace.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let invalid = || AmountError::Invalid(text.to_string());
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}
