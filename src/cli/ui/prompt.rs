use std::io;

use tracing::warn;

use crate::cli::terminal::Terminal;
use crate::cli::ui::entry::NumericEntry;
use crate::cli::ui::menu::SelectionMenu;
use crate::cli::ui::navigation::NavKey;

/// Outcome of feeding one input to a prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavResult {
    /// Redraw and wait for the next input.
    StillActive,
    Selected(usize),
    Entered(f64),
    Cancelled,
}

impl NavResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, NavResult::StillActive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Key,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(NavKey),
    Line(String),
}

/// One interactive screen: draw, consume an input, repeat until a result.
#[derive(Debug, Clone)]
pub enum Prompt {
    Menu(SelectionMenu),
    Entry(NumericEntry),
}

impl Prompt {
    pub fn input_kind(&self) -> InputKind {
        match self {
            Prompt::Menu(_) => InputKind::Key,
            Prompt::Entry(_) => InputKind::Line,
        }
    }

    pub fn render<T: Terminal + ?Sized>(&self, terminal: &mut T) -> io::Result<()> {
        match self {
            Prompt::Menu(menu) => menu.render(terminal),
            Prompt::Entry(entry) => entry.render(terminal),
        }
    }

    pub fn handle_input(&mut self, input: Input) -> NavResult {
        match (self, input) {
            (Prompt::Menu(menu), Input::Key(key)) => menu.handle_key(key),
            (Prompt::Entry(entry), Input::Line(line)) => entry.handle_line(&line),
            _ => NavResult::StillActive,
        }
    }

    /// Rejects a value the caller could not apply. Menus are unaffected.
    pub fn mark_invalid(&mut self) {
        if let Prompt::Entry(entry) = self {
            entry.mark_invalid();
        }
    }

    /// Drives the prompt until it yields a terminal result. Running out of
    /// input counts as `Cancelled`.
    pub fn run<T: Terminal + ?Sized>(&mut self, terminal: &mut T) -> io::Result<NavResult> {
        loop {
            terminal.clear_screen()?;
            self.render(terminal)?;

            let input = match self.input_kind() {
                InputKind::Key => terminal.read_key()?.map(Input::Key),
                InputKind::Line => terminal.read_line()?.map(Input::Line),
            };
            let Some(input) = input else {
                warn!("input exhausted before the prompt finished, treating as cancel");
                return Ok(NavResult::Cancelled);
            };

            let result = self.handle_input(input);
            if result.is_terminal() {
                return Ok(result);
            }
        }
    }
}

impl From<SelectionMenu> for Prompt {
    fn from(menu: SelectionMenu) -> Self {
        Prompt::Menu(menu)
    }
}

impl From<NumericEntry> for Prompt {
    fn from(entry: NumericEntry) -> Self {
        Prompt::Entry(entry)
    }
}
