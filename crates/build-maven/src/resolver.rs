use crate::scopes;
use jarscope_api::{DependencyResolver, DiagnosticSink, ExternalConfig, Purpose};
use jarscope_core::probe;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Maven-style adapter.
///
/// Replays Maven's directory conventions and scope closures against an
/// injected resolver; one resolver call per purpose, each against the
/// project's `pom.xml`.
pub struct MavenConfigResolver<'a> {
    resolver: &'a dyn DependencyResolver,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> MavenConfigResolver<'a> {
    pub fn new(
        resolver: &'a dyn DependencyResolver,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            resolver,
            diagnostics,
        }
    }

    pub fn resolve(&self, base_dir: &Path) -> ExternalConfig {
        let source_roots = probe::existing_of(base_dir, probe::CONVENTIONAL_SOURCE_ROOTS);
        let pom = base_dir.join("pom.xml");

        let compile_deps = self.resolve_purpose(base_dir, &pom, Purpose::Compile);
        let runtime_deps = self.resolve_purpose(base_dir, &pom, Purpose::Runtime);
        let test_deps = self.resolve_purpose(base_dir, &pom, Purpose::Test);

        let target = probe::existing_dir(&base_dir.join("target/classes"));

        ExternalConfig {
            project_name: None,
            source_roots,
            compile_deps,
            runtime_deps,
            test_deps,
            target,
        }
    }

    /// A failed resolution degrades this purpose to an empty set; the other
    /// purposes and the source roots are unaffected.
    fn resolve_purpose(&self, base_dir: &Path, pom: &Path, purpose: Purpose) -> BTreeSet<PathBuf> {
        self.diagnostics
            .info(&format!("Resolving Maven {purpose} dependencies..."));
        match self
            .resolver
            .resolve_dependencies(base_dir, Some(pom), scopes::scopes_for(purpose))
        {
            Ok(artifacts) => probe::existing_files(artifacts),
            Err(err) => {
                self.diagnostics.error(&format!(
                    "Maven {purpose} dependency resolution failed: {err}"
                ));
                BTreeSet::new()
            }
        }
    }
}
