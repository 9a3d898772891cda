//! Severity-routed logging behind a sink seam, plus tracing initialization.
//!
//! [`Logger`] routes each call to the severity-matching method of a
//! [`LogSink`]. Debug lines are suppressed entirely when the debug flag is
//! off: no sink call is made and the label producer is never invoked.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log severity. [`LogLevel::Log`] is the catch-all routed to the default
/// sink; adapters mapping foreign severity strings collapse unknown values
/// to it at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Log,
}

/// Output seam for [`Logger`]; one method per severity. Implementations map
/// to an actual backend (tracing in production, a recorder in tests).
pub trait LogSink: Send + Sync {
    fn debug(&self, label: &str, message: &str);
    fn info(&self, label: &str, message: &str);
    fn warn(&self, label: &str, message: &str);
    fn error(&self, label: &str, message: &str);
    /// Default sink, used for [`LogLevel::Log`].
    fn log(&self, label: &str, message: &str);
}

/// Production sink: routes to the `tracing` macros.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, label: &str, message: &str) {
        tracing::debug!(label = %label, "{}", message);
    }

    fn info(&self, label: &str, message: &str) {
        tracing::info!(label = %label, "{}", message);
    }

    fn warn(&self, label: &str, message: &str) {
        tracing::warn!(label = %label, "{}", message);
    }

    fn error(&self, label: &str, message: &str) {
        tracing::error!(label = %label, "{}", message);
    }

    fn log(&self, label: &str, message: &str) {
        tracing::info!(label = %label, "{}", message);
    }
}

/// Routes messages to a [`LogSink`] by severity.
pub struct Logger {
    debug_enabled: bool,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Logger backed by [`TracingSink`].
    pub fn new(debug_enabled: bool) -> Self {
        Self::with_sink(debug_enabled, Arc::new(TracingSink))
    }

    /// Logger with a custom sink (tests use a recording sink).
    pub fn with_sink(debug_enabled: bool, sink: Arc<dyn LogSink>) -> Self {
        Self {
            debug_enabled,
            sink,
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Emits `(label(), message)` on the sink method matching `level`.
    ///
    /// `LogLevel::Debug` with debug disabled is a complete no-op: the sink
    /// receives nothing and `label` is not called.
    pub fn log<F>(&self, level: LogLevel, message: &str, label: F)
    where
        F: FnOnce() -> String,
    {
        match level {
            LogLevel::Debug => {
                if self.debug_enabled {
                    self.sink.debug(&label(), message);
                }
            }
            LogLevel::Info => self.sink.info(&label(), message),
            LogLevel::Warn => self.sink.warn(&label(), message),
            LogLevel::Error => self.sink.error(&label(), message),
            LogLevel::Log => self.sink.log(&label(), message),
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// Console output with level and target; log level from `RUST_LOG`
/// (e.g. `info`, `debug`), default `info`. Load `.env` before calling,
/// otherwise `RUST_LOG` from the file is not picked up.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Records every sink call as (sink name, label, message).
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(&'static str, String, String)>>,
    }

    impl RecordingSink {
        fn calls(&self) -> Vec<(&'static str, String, String)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, sink: &'static str, label: &str, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((sink, label.to_string(), message.to_string()));
        }
    }

    impl LogSink for RecordingSink {
        fn debug(&self, label: &str, message: &str) {
            self.record("debug", label, message);
        }
        fn info(&self, label: &str, message: &str) {
            self.record("info", label, message);
        }
        fn warn(&self, label: &str, message: &str) {
            self.record("warn", label, message);
        }
        fn error(&self, label: &str, message: &str) {
            self.record("error", label, message);
        }
        fn log(&self, label: &str, message: &str) {
            self.record("log", label, message);
        }
    }

    fn logger_with_recorder(debug_enabled: bool) -> (Logger, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let logger = Logger::with_sink(debug_enabled, sink.clone());
        (logger, sink)
    }

    #[test]
    fn test_routes_each_level_to_matching_sink() {
        let (logger, sink) = logger_with_recorder(true);

        logger.log(LogLevel::Debug, "d", || "L".to_string());
        logger.log(LogLevel::Info, "i", || "L".to_string());
        logger.log(LogLevel::Warn, "w", || "L".to_string());
        logger.log(LogLevel::Error, "e", || "L".to_string());
        logger.log(LogLevel::Log, "l", || "L".to_string());

        let calls = sink.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0].0, "debug");
        assert_eq!(calls[1].0, "info");
        assert_eq!(calls[2].0, "warn");
        assert_eq!(calls[3].0, "error");
        assert_eq!(calls[4].0, "log");
    }

    #[test]
    fn test_passes_label_and_message() {
        let (logger, sink) = logger_with_recorder(false);

        logger.log(LogLevel::Info, "hello", || "[label]".to_string());

        let calls = sink.calls();
        assert_eq!(calls, vec![("info", "[label]".to_string(), "hello".to_string())]);
    }

    #[test]
    fn test_debug_suppressed_when_disabled() {
        let (logger, sink) = logger_with_recorder(false);
        let label_called = AtomicBool::new(false);

        logger.log(LogLevel::Debug, "suppressed", || {
            label_called.store(true, Ordering::SeqCst);
            "L".to_string()
        });

        assert!(sink.calls().is_empty());
        assert!(!label_called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_debug_emitted_when_enabled() {
        let (logger, sink) = logger_with_recorder(true);

        logger.log(LogLevel::Debug, "visible", || "L".to_string());

        assert_eq!(sink.calls().len(), 1);
        assert_eq!(sink.calls()[0].0, "debug");
    }
}
