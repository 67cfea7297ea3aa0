//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the devtools console,
//! routed to `console.error` / `console.warn` / ... by level so the browser
//! filters work as expected.
//!
//! Outside `wasm32` the sink swallows records, which keeps native unit tests
//! of logging code quiet.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Only the first call wins; later calls return the `SetLoggerError`
/// from `log` and leave the installed logger untouched.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render a record as a single console line: `[LEVEL target] message`
pub fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::debug_1(&value),
        Level::Trace => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}
