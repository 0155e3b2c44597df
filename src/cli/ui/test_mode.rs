use std::{collections::VecDeque, env, io};

use crate::cli::terminal::Terminal;
use crate::cli::ui::navigation::{parse_key_token, NavKey};

pub const KEYS_ENV: &str = "BANK_SIM_TEST_KEYS";
pub const LINES_ENV: &str = "BANK_SIM_TEST_LINES";

/// A [`Terminal`] replaying queued keys and lines and recording what was drawn.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<NavKey>,
    lines: VecDeque<String>,
    transcript: Vec<String>,
    screen_start: usize,
    clears: usize,
    echo: bool,
}

impl ScriptedTerminal {
    pub fn new<K, L>(keys: K, lines: L) -> Self
    where
        K: IntoIterator<Item = NavKey>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            keys: keys.into_iter().collect(),
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builds the script from `BANK_SIM_TEST_KEYS` (comma separated key
    /// tokens) and `BANK_SIM_TEST_LINES` (`|` separated lines). Everything
    /// drawn is echoed to stdout.
    pub fn from_env() -> Self {
        let keys = env::var(KEYS_ENV)
            .map(|raw| parse_key_sequence(&raw))
            .unwrap_or_default();
        let lines = env::var(LINES_ENV)
            .map(|raw| parse_line_sequence(&raw))
            .unwrap_or_default();
        Self {
            keys,
            lines,
            echo: true,
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Lines drawn since the last screen clear.
    pub fn screen(&self) -> &[String] {
        &self.transcript[self.screen_start..]
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.screen_start = self.transcript.len();
        if self.echo {
            println!();
        }
        Ok(())
    }

    fn render_line(&mut self, text: &str) -> io::Result<()> {
        if self.echo {
            println!("{text}");
        }
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<NavKey>> {
        Ok(self.keys.pop_front())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if self.echo {
            if let Some(line) = &line {
                println!("> {line}");
            }
        }
        Ok(line)
    }
}

pub fn is_enabled() -> bool {
    env::var_os(KEYS_ENV).is_some() || env::var_os(LINES_ENV).is_some()
}

fn parse_key_sequence(raw: &str) -> VecDeque<NavKey> {
    raw.split(',').filter_map(parse_key_token).collect()
}

fn parse_line_sequence(raw: &str) -> VecDeque<String> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            match trimmed.to_ascii_uppercase().as_str() {
                "" => None,
                "<EMPTY>" | "<BLANK>" => Some(String::new()),
                _ => Some(trimmed.to_string()),
            }
        })
        .collect()
}
