#![deny(missing_docs)]

//! Defines the output format of traces and events produced by `tracing`
//! for the mevn binary and the libraries it links.

mod formatter;

use std::str::FromStr;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber that writes to stderr.
///
/// By default no logs are printed. `info` and quieter levels use a compact
/// single-line format, `debug` adds timestamps and targets and `trace`
/// additionally tags every line with its thread id.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        formatter::install(level, formatter::Verbosity::for_level(level));
    }
}

/// Parses a level name, ignoring case. Unknown names yield `None`.
pub fn parse_level(raw: &str) -> Option<Level> {
    Level::from_str(raw.trim()).ok()
}
