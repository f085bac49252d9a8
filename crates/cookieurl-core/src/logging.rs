//! Logging init: append to a file under the XDG state dir, falling back to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid. The binary target's
/// crate name is `cookieurl`, so CLI events carry `cookieurl::...` targets.
const DEFAULT_FILTER: &str = "info,cookieurl_core=debug,cookieurl=debug";

/// Where log lines end up after [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// Per-event writer: a clone of the log file handle, or stderr if cloning failed.
enum LogWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedLogFile(fs::File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/cookieurl/cookieurl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cookieurl")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("cookieurl")
        .join("cookieurl.log"))
}

fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Logs go to the state-dir file when it can be
/// opened, otherwise to stderr so the CLI still runs with an unwritable home.
pub fn init() -> LogSink {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);

    match open_log_file() {
        Ok((path, file)) => {
            builder
                .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
                .init();
            tracing::info!("cookieurl logging initialized at {}", path.display());
            LogSink::File(path)
        }
        Err(err) => {
            builder.with_writer(io::stderr).init();
            tracing::warn!("log file unavailable ({err:#}); logging to stderr");
            LogSink::Stderr
        }
    }
}
