use crate::error::ResolveError;
use std::path::{Path, PathBuf};

/// External dependency resolver collaborator.
///
/// Implementations run the actual build tool's resolution step (which may hit
/// the network and block for its full duration) and report the resolved
/// artifact files on the local filesystem. Adapters own request construction
/// and result interpretation; a failing resolution is caught at the adapter
/// boundary and degrades the affected purpose to an empty set.
pub trait DependencyResolver: Send + Sync {
    /// Resolve the artifacts reachable through `scopes`.
    ///
    /// `descriptor` points at an explicit build descriptor (a POM or an ivy
    /// file); `None` leaves descriptor discovery to the resolver's own
    /// conventions.
    fn resolve_dependencies(
        &self,
        base_dir: &Path,
        descriptor: Option<&Path>,
        scopes: &[&str],
    ) -> Result<Vec<PathBuf>, ResolveError>;
}
