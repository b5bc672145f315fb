use jarscope_api::{DependencyResolver, MemorySink, NullSink, ResolveError};
use jarscope_core::canonical;
use jarscope_ivy::{IvyConfigResolver, IvyOptions};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

struct RecordedCall {
    descriptor: Option<PathBuf>,
    scopes: Vec<String>,
}

/// Maps scope names to resolved jars; unknown scopes fail resolution.
struct ScopedStubResolver {
    by_scope: HashMap<String, Vec<PathBuf>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScopedStubResolver {
    fn new(by_scope: HashMap<String, Vec<PathBuf>>) -> Self {
        Self {
            by_scope,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

impl DependencyResolver for ScopedStubResolver {
    fn resolve_dependencies(
        &self,
        _base_dir: &Path,
        descriptor: Option<&Path>,
        scopes: &[&str],
    ) -> Result<Vec<PathBuf>, ResolveError> {
        self.calls.lock().expect("lock poisoned").push(RecordedCall {
            descriptor: descriptor.map(|p| p.to_path_buf()),
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
        });

        let scope = scopes[0];
        self.by_scope
            .get(scope)
            .cloned()
            .ok_or_else(|| ResolveError::Resolution(format!("unknown configuration '{scope}'")))
    }
}

fn fixture_with_jars(names: &[&str]) -> (tempfile::TempDir, HashMap<String, Vec<PathBuf>>) {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("src/main/scala")).unwrap();
    std::fs::create_dir_all(temp.path().join("src/test/java")).unwrap();

    let mut by_scope = HashMap::new();
    for name in names {
        let jar = temp.path().join(format!("cache/{name}.jar"));
        std::fs::create_dir_all(jar.parent().unwrap()).unwrap();
        std::fs::File::create(&jar).unwrap();
        by_scope.insert(name.to_string(), vec![jar]);
    }
    (temp, by_scope)
}

#[test]
fn test_no_overrides_resolve_default_exactly_once() {
    let (temp, by_scope) = fixture_with_jars(&["default"]);
    let default_jar = canonical(&by_scope["default"][0]);
    let stub = ScopedStubResolver::new(by_scope);
    let sink = NullSink;

    let config = IvyConfigResolver::new(&stub, &sink).resolve(temp.path(), &IvyOptions::default());

    assert_eq!(stub.call_count(), 1);
    {
        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls[0].scopes, ["default"]);
        assert_eq!(calls[0].descriptor, None);
    }
    for deps in [&config.compile_deps, &config.runtime_deps, &config.test_deps] {
        assert_eq!(deps.iter().cloned().collect::<Vec<_>>(), vec![default_jar.clone()]);
    }
    let expected_roots: std::collections::BTreeSet<_> = [
        canonical(&temp.path().join("src/main/scala")),
        canonical(&temp.path().join("src/test/java")),
    ]
    .into_iter()
    .collect();
    assert_eq!(config.source_roots, expected_roots);
    assert_eq!(config.target, None);
    assert_eq!(config.project_name, None);
}

#[test]
fn test_override_resolves_configured_scope_and_keeps_fallback() {
    let (temp, by_scope) = fixture_with_jars(&["default", "deploy"]);
    let default_jar = canonical(&by_scope["default"][0]);
    let deploy_jar = canonical(&by_scope["deploy"][0]);
    let stub = ScopedStubResolver::new(by_scope);
    let sink = NullSink;

    let options = IvyOptions {
        runtime_scope: Some("deploy".to_string()),
        ..Default::default()
    };
    let config = IvyConfigResolver::new(&stub, &sink).resolve(temp.path(), &options);

    // One call for the shared default, one for the runtime override.
    assert_eq!(stub.call_count(), 2);
    assert_eq!(config.compile_deps.iter().cloned().collect::<Vec<_>>(), vec![default_jar.clone()]);
    assert_eq!(config.runtime_deps.iter().cloned().collect::<Vec<_>>(), vec![deploy_jar]);
    assert_eq!(config.test_deps.iter().cloned().collect::<Vec<_>>(), vec![default_jar]);
}

#[test]
fn test_ivy_file_override_reaches_the_resolver() {
    let (temp, by_scope) = fixture_with_jars(&["default"]);
    let stub = ScopedStubResolver::new(by_scope);
    let sink = NullSink;

    let ivy_file = temp.path().join("ivy-custom.xml");
    let options = IvyOptions {
        ivy_file: Some(ivy_file.clone()),
        ..Default::default()
    };
    IvyConfigResolver::new(&stub, &sink).resolve(temp.path(), &options);

    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls[0].descriptor.as_deref(), Some(ivy_file.as_path()));
}

#[test]
fn test_failed_scope_degrades_to_empty_sets() {
    // Only "deploy" is known to the stub, so the default scope fails.
    let (temp, by_scope) = fixture_with_jars(&["deploy"]);
    let stub = ScopedStubResolver::new(by_scope);
    let sink = MemorySink::new();

    let options = IvyOptions {
        runtime_scope: Some("deploy".to_string()),
        ..Default::default()
    };
    let config = IvyConfigResolver::new(&stub, &sink).resolve(temp.path(), &options);

    assert!(config.compile_deps.is_empty());
    assert!(!config.runtime_deps.is_empty());
    assert!(config.test_deps.is_empty());
    assert_eq!(config.source_roots.len(), 2);

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("default"));
}
