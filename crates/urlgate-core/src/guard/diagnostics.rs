//! Best-effort diagnostic side channel for rejections.

use std::sync::Mutex;

/// One rejection, as sent to a [`DiagnosticSink`] before the error is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
    pub value: String,
    pub field: Option<String>,
}

/// Receives a record for every rejection. Not part of the success/failure contract.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &Rejection);
}

/// Default sink: a `tracing` error event under the `urlgate::guard` target,
/// with the record's message as the event message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &Rejection) {
        match &event.field {
            Some(field) => tracing::error!(
                target: "urlgate::guard",
                field = %field,
                value = %event.value,
                "{}",
                event.message
            ),
            None => tracing::error!(
                target: "urlgate::guard",
                value = %event.value,
                "{}",
                event.message
            ),
        }
    }
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: &Rejection) {}
}

/// Keeps records in memory; for tests and embedding hosts that batch reports.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Rejection>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Rejection> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: &Rejection) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
