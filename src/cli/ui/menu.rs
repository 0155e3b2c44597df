use std::io;

use crate::cli::terminal::Terminal;
use crate::cli::ui::navigation::NavKey;
use crate::cli::ui::prompt::NavResult;

const HIGHLIGHT: &str = "-> ";
const NORMAL: &str = "   ";
const CANCEL_KEY: char = 'q';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOptions {
    /// `count` rows labelled `<prefix> 1` .. `<prefix> count`.
    Numbered { prefix: String, count: usize },
    Labeled(Vec<String>),
}

impl MenuOptions {
    pub fn len(&self) -> usize {
        match self {
            MenuOptions::Numbered { count, .. } => *count,
            MenuOptions::Labeled(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self, index: usize) -> String {
        match self {
            MenuOptions::Numbered { prefix, .. } => format!("{} {}", prefix, index + 1),
            MenuOptions::Labeled(labels) => labels[index].clone(),
        }
    }
}

/// Cursor-driven list of choices. Up and Down wrap around, Enter selects,
/// `q` cancels.
#[derive(Debug, Clone)]
pub struct SelectionMenu {
    options: MenuOptions,
    header: Vec<String>,
    cursor: usize,
}

impl SelectionMenu {
    /// Returns `None` for an empty option list; a menu always has a row to
    /// point at.
    pub fn new(options: MenuOptions) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            header: Vec::new(),
            cursor: 0,
        })
    }

    pub fn numbered(prefix: impl Into<String>, count: usize) -> Option<Self> {
        Self::new(MenuOptions::Numbered {
            prefix: prefix.into(),
            count,
        })
    }

    pub fn labeled<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MenuOptions::Labeled(
            labels.into_iter().map(Into::into).collect(),
        ))
    }

    /// Adds a line drawn above the options on every render.
    pub fn with_header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.cursor = index.min(self.options.len() - 1);
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn handle_key(&mut self, key: NavKey) -> NavResult {
        let len = self.options.len();
        match key {
            NavKey::Up => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
                NavResult::StillActive
            }
            NavKey::Down => {
                self.cursor = (self.cursor + 1) % len;
                NavResult::StillActive
            }
            NavKey::Enter => NavResult::Selected(self.cursor),
            NavKey::Char(CANCEL_KEY) => NavResult::Cancelled,
            _ => NavResult::StillActive,
        }
    }

    /// Header lines followed by one row per option, the cursor row marked.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header.clone();
        for index in 0..self.options.len() {
            let pointer = if index == self.cursor {
                HIGHLIGHT
            } else {
                NORMAL
            };
            lines.push(format!("{pointer}{}", self.options.label(index)));
        }
        lines
    }

    pub fn render<T: Terminal + ?Sized>(&self, terminal: &mut T) -> io::Result<()> {
        for line in self.lines() {
            terminal.render_line(&line)?;
        }
        Ok(())
    }
}
