use thiserror::Error;

/// Failure modes of an external dependency resolution run.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("descriptor error: {0}")]
    Descriptor(String),
    #[error("resolution failed: {0}")]
    Resolution(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
