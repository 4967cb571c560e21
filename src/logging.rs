//! `log` backend that writes to the browser console (stderr off the web).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// "[LEVEL target] message"
pub fn format_record(level: Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {}] {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        match record.level() {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}
