//! Terminal driver used by the prompts: clear, draw a line, read a key or a
//! line of text. The production driver runs crossterm in raw mode; scripted
//! drivers live in [`crate::cli::ui::test_mode`].

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};
use tracing::warn;

use crate::cli::ui::navigation::NavKey;

/// The I/O surface every prompt draws on.
///
/// Reads return `Ok(None)` once the input stream is exhausted (end of a
/// script, Ctrl-C or Ctrl-D on a real terminal).
pub trait Terminal {
    fn clear_screen(&mut self) -> io::Result<()>;
    fn render_line(&mut self, text: &str) -> io::Result<()>;
    fn read_key(&mut self) -> io::Result<Option<NavKey>>;
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Something that can switch the terminal into an input mode and back.
pub trait ModeControl {
    fn enter(&mut self) -> io::Result<()>;
    fn restore(&mut self) -> io::Result<()>;
}

/// Holds a [`ModeControl`] in its entered state and restores it exactly once,
/// either explicitly or when dropped (including while unwinding).
pub struct ModeGuard<M: ModeControl> {
    mode: M,
    active: bool,
}

impl<M: ModeControl> ModeGuard<M> {
    pub fn activate(mut mode: M) -> io::Result<Self> {
        if let Err(err) = mode.enter() {
            // enter may have half-succeeded
            let _ = mode.restore();
            return Err(err);
        }
        Ok(Self { mode, active: true })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        if self.active {
            if let Err(err) = self.mode.restore() {
                warn!(error = %err, "failed to restore terminal mode");
            }
            self.active = false;
        }
    }
}

impl<M: ModeControl> Drop for ModeGuard<M> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Raw keyboard mode with a hidden cursor.
pub struct RawMode;

impl ModeControl for RawMode {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        io::stdout().execute(cursor::Hide)?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        let shown = io::stdout().execute(cursor::Show).map(|_| ());
        terminal::disable_raw_mode()?;
        shown
    }
}

pub struct CrosstermTerminal {
    stdout: Stdout,
    guard: ModeGuard<RawMode>,
}

impl CrosstermTerminal {
    /// Enters raw mode. It is left again when the terminal is closed or dropped.
    pub fn open() -> io::Result<Self> {
        let guard = ModeGuard::activate(RawMode)?;
        Ok(Self {
            stdout: io::stdout(),
            guard,
        })
    }

    pub fn close(mut self) {
        self.guard.deactivate();
    }

    fn redraw_input(&mut self, buffer: &str) -> io::Result<()> {
        self.stdout.queue(cursor::MoveToColumn(0))?;
        self.stdout.queue(terminal::Clear(ClearType::CurrentLine))?;
        write!(self.stdout, "> {}", buffer)?;
        self.stdout.flush()
    }

    fn newline(&mut self) -> io::Result<()> {
        write!(self.stdout, "\r\n")?;
        self.stdout.flush()
    }
}

impl Terminal for CrosstermTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()
    }

    fn render_line(&mut self, text: &str) -> io::Result<()> {
        // raw mode does not translate \n
        write!(self.stdout, "{}\r\n", text)?;
        self.stdout.flush()
    }

    fn read_key(&mut self) -> io::Result<Option<NavKey>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(&key) {
                        return Ok(None);
                    }
                    return Ok(Some(NavKey::from(key.code)));
                }
                _ => continue,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        self.redraw_input(&buffer)?;

        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };

            if is_interrupt(&key) {
                self.newline()?;
                return Ok(None);
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if matches!(key.code, KeyCode::Char('u') | KeyCode::Char('U')) {
                    buffer.clear();
                    self.redraw_input(&buffer)?;
                }
                continue;
            }

            match key.code {
                KeyCode::Enter => {
                    self.newline()?;
                    return Ok(Some(buffer));
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    self.redraw_input(&buffer)?;
                }
                KeyCode::Delete => {
                    buffer.clear();
                    self.redraw_input(&buffer)?;
                }
                KeyCode::Char(ch) => {
                    buffer.push(ch);
                    self.redraw_input(&buffer)?;
                }
                _ => {}
            }
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D')
        )
}
