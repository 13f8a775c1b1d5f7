use std::io;

use tracing_subscriber::fmt;

use crate::Level;

/// How much context each log line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verbosity {
    Compact,
    Full,
    Threaded,
}

impl Verbosity {
    pub(crate) fn for_level(level: Level) -> Self {
        if level >= Level::TRACE {
            Verbosity::Threaded
        } else if level >= Level::DEBUG {
            Verbosity::Full
        } else {
            Verbosity::Compact
        }
    }
}

pub(crate) fn install(level: Level, verbosity: Verbosity) {
    let ansi = std::env::var_os("NO_COLOR").is_none();
    match verbosity {
        Verbosity::Compact => {
            let format = fmt::format().without_time().with_target(false).compact();
            fmt()
                .with_max_level(level)
                .with_ansi(ansi)
                .event_format(format)
                .with_writer(io::stderr)
                .init();
        }
        Verbosity::Full => fmt()
            .with_max_level(level)
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .init(),
        Verbosity::Threaded => fmt()
            .with_max_level(level)
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .with_thread_ids(true)
            .init(),
    }
}
