//! User-facing log output
//!
//! Every component takes an explicit [`Logger`] instead of writing to a
//! process-wide default. A [`LogSink`] only has to implement `log`; the
//! error, warning and debug channels fall back to it when not overridden.

use std::sync::Arc;

/// Destination for log messages
pub trait LogSink: Send + Sync {
    /// Normal output
    fn log(&self, message: &str);

    fn error(&self, message: &str) {
        self.log(message);
    }

    fn warn(&self, message: &str) {
        self.log(message);
    }

    fn debug(&self, message: &str) {
        self.log(message);
    }
}

/// Writes normal output to stdout and everything else to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn debug(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Forwards messages to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Logger handed to every component; debug output is dropped unless verbose
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    verbose: bool,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>, verbose: bool) -> Self {
        Self { sink, verbose }
    }

    /// Logger printing to the terminal
    pub fn console(verbose: bool) -> Self {
        Self::new(Arc::new(ConsoleSink), verbose)
    }

    pub fn log(&self, message: impl AsRef<str>) {
        self.sink.log(message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.sink.error(message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.sink.warn(message.as_ref());
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbose {
            self.sink.debug(message.as_ref());
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Level {
        Log,
        Error,
        Warn,
        Debug,
    }

    /// Records every message with the channel it arrived on
    #[derive(Clone, Default)]
    pub struct MemorySink {
        entries: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl MemorySink {
        pub fn logger(&self, verbose: bool) -> Logger {
            Logger::new(Arc::new(self.clone()), verbose)
        }

        pub fn entries(&self) -> Vec<(Level, String)> {
            self.entries.lock().unwrap().clone()
        }

        pub fn messages(&self, level: Level) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m)
                .collect()
        }

        fn push(&self, level: Level, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    impl LogSink for MemorySink {
        fn log(&self, message: &str) {
            self.push(Level::Log, message);
        }

        fn error(&self, message: &str) {
            self.push(Level::Error, message);
        }

        fn warn(&self, message: &str) {
            self.push(Level::Warn, message);
        }

        fn debug(&self, message: &str) {
            self.push(Level::Debug, message);
        }
    }
}
