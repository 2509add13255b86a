//! Logging of statistics with a configurable prefix, so the lines can be told apart from the rest
//! of the output.
use std::fmt::Display;

use once_cell::sync::OnceCell;

static STATISTIC_PREFIX: OnceCell<&'static str> = OnceCell::new();

/// Enable statistic logging with the given line prefix. Only the first configuration takes effect.
pub fn configure(log_statistics: bool, prefix: &'static str) {
    if log_statistics {
        let _ = STATISTIC_PREFIX.set(prefix);
    }
}

/// Logs the statistic `name` with `value` in the format `PREFIX NAME=VALUE`, if statistic
/// logging is configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(prefix) = STATISTIC_PREFIX.get() {
        println!("{prefix}{name}={value}");
    }
}
