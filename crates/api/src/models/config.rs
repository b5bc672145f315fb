use crate::models::Purpose;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Resolved build configuration of a single project, as seen by a downstream
/// analysis consumer.
///
/// Every path in every field refers to a location that existed on disk at the
/// moment of construction. The three dependency sets are computed
/// independently per purpose and may overlap. The value is produced once per
/// `resolve` call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalConfig {
    /// Project identifier, when the build metadata declares one.
    pub project_name: Option<String>,
    /// Canonical source directories matching the build system's layout
    /// conventions.
    pub source_roots: BTreeSet<PathBuf>,
    /// Dependency archives on the compile classpath.
    pub compile_deps: BTreeSet<PathBuf>,
    /// Dependency archives on the runtime classpath.
    pub runtime_deps: BTreeSet<PathBuf>,
    /// Dependency archives on the test classpath.
    pub test_deps: BTreeSet<PathBuf>,
    /// Compiled-output directory, when it already exists on disk.
    pub target: Option<PathBuf>,
}

impl ExternalConfig {
    pub fn deps_for(&self, purpose: Purpose) -> &BTreeSet<PathBuf> {
        match purpose {
            Purpose::Compile => &self.compile_deps,
            Purpose::Runtime => &self.runtime_deps,
            Purpose::Test => &self.test_deps,
        }
    }
}
