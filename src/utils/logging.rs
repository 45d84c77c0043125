//! `log` backend that writes to the browser console.
//!
//! Installing the logger is idempotent; later calls only adjust the level.

use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

use crate::error::PageError;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALLED: OnceCell<()> = OnceCell::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}

pub fn parse_level(level: &str) -> Result<LevelFilter, PageError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| PageError::Logging(format!("unsupported log level `{}`", level)))
}

pub fn init_logging(level: &str) -> Result<(), PageError> {
    let filter = parse_level(level)?;
    INSTALLED.get_or_try_init(|| {
        log::set_logger(&LOGGER).map_err(|e| PageError::Logging(e.to_string()))
    })?;
    log::set_max_level(filter);
    Ok(())
}
