pub mod paths;
pub mod persistence;

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    sync::{Mutex, Once},
};

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber. Logs are appended to
/// `bank_sim.log` in the application directory, because the raw-mode screen
/// cannot host them; stderr is used only when that file cannot be opened.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bank_sim=warn"));

        let log_path = paths::log_file_in(&paths::app_data_dir());
        let (writer, ansi) = match open_log_file(&log_path) {
            Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
            Err(_) => (BoxMakeWriter::new(io::stderr), true),
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .try_init();
    });
}

/// Opens `path` for appending, creating it and its parent directory.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_is_created_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = paths::log_file_in(&dir.path().join("home"));

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
