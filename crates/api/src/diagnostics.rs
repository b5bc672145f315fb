use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A single human-readable progress or failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Write-only sink for progress and failure messages.
///
/// Adapters never read diagnostics back and never change behavior based on
/// them; the sink exists so resolution logic itself stays side-effect-free.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that discards everything.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Collecting sink, for embedders that surface messages in their own UI and
/// for asserting on emitted diagnostics in tests.
#[derive(Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().expect("lock poisoned").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.message.clone())
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.entries.lock().expect("lock poisoned").push(Diagnostic {
            severity,
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
