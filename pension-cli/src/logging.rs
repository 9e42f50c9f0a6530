use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Timestamps records in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped, so
///   stdout stays clean for the report.
/// - File: appended to when `log_file` is given, never colored.
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match log_file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTimer)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(make_filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_timer_writes_rfc3339_like_stamp() {
        let mut stamp = String::new();

        LocalTimer
            .format_time(&mut Writer::new(&mut stamp))
            .expect("should format");

        // e.g. 2025-01-01T09:30:00.123+01:00
        assert_eq!(stamp.len(), 29);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
    }

    #[test]
    fn open_log_file_creates_missing_file() {
        let path =
            std::env::temp_dir().join(format!("pension-cli-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        open_log_file(&path).expect("should create");

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn open_log_file_reports_missing_directory() {
        let err = open_log_file(Path::new("/this/path/does/not/exist/run.log")).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }
}
