//! Process-wide logger for the `contour` binary.
//!
//! Library crates only use the `log` macros; this module installs the
//! `log::Log` implementation that receives them. Lines go to stderr and,
//! once a log file is attached, to that file as well:
//!
//! ```text
//! [1718031234.123456] [WARN ] [contour_config::reader] profiles.main.bell.volume: ...
//! ```
//!
//! The level comes from the `--log-level` flag, then `RUST_LOG`, then `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct Logger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(record: &Record<'_>) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        let _ = std::io::stderr().write_all(line.as_bytes());
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Pick the effective level: explicit override, then `RUST_LOG`, then `warn`.
pub fn resolve_level(cli_level: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| env.and_then(|value| LevelFilter::from_str(value.trim()).ok()))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the logger. Later calls keep the first logger.
pub fn init(cli_level: Option<LevelFilter>) {
    let env = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, env.as_deref());

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        file: Mutex::new(None),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

/// Mirror all further log lines to `path` (appending).
pub fn attach_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Some(logger) = LOGGER.get() {
        *logger.file.lock() = Some(file);
        log::info!("Logging to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_precedence() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Trace), Some("error")),
            LevelFilter::Trace
        );
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(None, Some("nonsense")), DEFAULT_LEVEL);
        assert_eq!(resolve_level(None, None), DEFAULT_LEVEL);
    }

    #[test]
    fn test_line_format() {
        let line = format_line(
            &Record::builder()
                .level(log::Level::Warn)
                .target("contour_config::reader")
                .args(format_args!("bad value"))
                .build(),
        );
        assert!(line.ends_with("] [WARN ] [contour_config::reader] bad value\n"));
        assert!(line.starts_with('['));
    }
}
