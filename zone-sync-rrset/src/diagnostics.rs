//! Diagnostic emission for non-fatal conversion conditions.
//!
//! Conversions never abort on a diagnostic: a missing identifier during
//! extraction or a TTL conflict during merge is reported to the sink the
//! caller passes in, and processing continues. Passing the sink explicitly
//! (instead of a process-global logger) keeps the conversions pure and lets
//! tests assert on exactly what was emitted.

use std::sync::Mutex;

/// Receiver for non-fatal conversion warnings.
///
/// Implementations must be fire-and-forget: `warn` returns nothing and must
/// not block or fail in a way the conversion can observe.
pub trait DiagnosticSink: Send + Sync {
    /// Report one formatted warning message.
    fn warn(&self, message: &str);
}

/// Sink that forwards warnings to the `log` facade at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Sink that buffers warnings in memory, for deterministic assertions in
/// tests and for callers that surface conversion diagnostics elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages collected so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Whether no warnings have been collected.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().map(|m| m.is_empty()).unwrap_or(true)
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
