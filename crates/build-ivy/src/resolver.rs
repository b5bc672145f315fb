use jarscope_api::{DependencyResolver, DiagnosticSink, ExternalConfig, Purpose};
use jarscope_core::probe;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Scope every purpose falls back to when no explicit scope name was
/// configured for it.
pub const DEFAULT_SCOPE: &str = "default";

/// Caller-side Ivy configuration.
///
/// Ivy has no fixed scope vocabulary, so the mapping from purpose to scope is
/// 1:1 and caller-supplied. An absent override means the purpose is served by
/// the shared [`DEFAULT_SCOPE`] resolution.
#[derive(Debug, Clone, Default)]
pub struct IvyOptions {
    /// Explicit ivy descriptor file. `None` leaves descriptor discovery to
    /// the resolver's own conventions.
    pub ivy_file: Option<PathBuf>,
    pub compile_scope: Option<String>,
    pub runtime_scope: Option<String>,
    pub test_scope: Option<String>,
}

impl IvyOptions {
    pub fn scope_override(&self, purpose: Purpose) -> Option<&str> {
        match purpose {
            Purpose::Compile => self.compile_scope.as_deref(),
            Purpose::Runtime => self.runtime_scope.as_deref(),
            Purpose::Test => self.test_scope.as_deref(),
        }
    }
}

/// Ivy-style adapter.
pub struct IvyConfigResolver<'a> {
    resolver: &'a dyn DependencyResolver,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> IvyConfigResolver<'a> {
    pub fn new(
        resolver: &'a dyn DependencyResolver,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            resolver,
            diagnostics,
        }
    }

    pub fn resolve(&self, base_dir: &Path, options: &IvyOptions) -> ExternalConfig {
        let source_roots = probe::existing_of(base_dir, probe::CONVENTIONAL_SOURCE_ROOTS);
        let descriptor = options.ivy_file.as_deref();

        // The default scope backs every purpose without an override, so it is
        // resolved once up front and shared.
        let default_deps = self.resolve_scope(base_dir, descriptor, DEFAULT_SCOPE);
        let deps_for = |purpose: Purpose| match options.scope_override(purpose) {
            Some(scope) => self.resolve_scope(base_dir, descriptor, scope),
            None => default_deps.clone(),
        };

        let compile_deps = deps_for(Purpose::Compile);
        let runtime_deps = deps_for(Purpose::Runtime);
        let test_deps = deps_for(Purpose::Test);

        ExternalConfig {
            project_name: None,
            source_roots,
            compile_deps,
            runtime_deps,
            test_deps,
            target: None,
        }
    }

    fn resolve_scope(
        &self,
        base_dir: &Path,
        descriptor: Option<&Path>,
        scope: &str,
    ) -> BTreeSet<PathBuf> {
        self.diagnostics
            .info(&format!("Resolving Ivy dependencies for scope '{scope}'..."));
        match self.resolver.resolve_dependencies(base_dir, descriptor, &[scope]) {
            Ok(artifacts) => probe::existing_files(artifacts),
            Err(err) => {
                self.diagnostics
                    .error(&format!("Ivy resolution for scope '{scope}' failed: {err}"));
                BTreeSet::new()
            }
        }
    }
}
