pub mod diagnostics;
pub mod error;
pub mod models;
pub mod resolver;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, NullSink, Severity};
pub use error::ResolveError;
pub use models::{ExternalConfig, Purpose};
pub use resolver::DependencyResolver;
