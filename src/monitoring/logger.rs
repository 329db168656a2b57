//! Logging to the browser console with a structured line format.

use std::sync::Once;

static INIT: Once = Once::new();

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup)
    pub fn init() {
        INIT.call_once(|| {
            Self::info("Frontend logging initialized");
        });
    }

    /// Log an info message
    pub fn info(msg: &str) {
        Self::log_with_level("INFO", msg);
    }

    /// Log a warning message
    pub fn warn(msg: &str) {
        Self::log_with_level("WARN", msg);
    }

    /// Log an error message
    pub fn error(msg: &str) {
        Self::log_with_level("ERROR", msg);
    }

    /// Log with level and timestamp
    fn log_with_level(level: &str, msg: &str) {
        let line = format!("[{}] {} - {}", Self::timestamp(), level, msg);

        match level {
            "ERROR" => web_sys::console::error_1(&line.into()),
            "WARN" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }
}
