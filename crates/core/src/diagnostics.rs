use jarscope_api::DiagnosticSink;

/// Sink that forwards messages to the active `tracing` subscriber. Real
/// embedders pair this with `logging::init_logging`.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
