//! Convention-based (sbt-style) adapter.
//!
//! No external resolver is involved: dependency discovery is entirely
//! filesystem-convention-based, keyed on the Scala version declared in
//! `project/build.properties`. A subproject shares its parent's metadata and
//! boot libraries.

use crate::scopes;
use jarscope_api::{DiagnosticSink, ExternalConfig, Purpose};
use jarscope_core::{probe, properties};
use std::path::{Path, PathBuf};

/// Version assumed when `build.scala.versions` is missing from the metadata.
pub const DEFAULT_SCALA_VERSION: &str = "2.8.0";

const BUILD_PROPERTIES: &str = "project/build.properties";
const VERSION_KEY: &str = "build.scala.versions";
const NAME_KEY: &str = "project.name";

struct BuildMetadata {
    properties_file: PathBuf,
    subproject: bool,
}

pub struct SbtConfigResolver<'a> {
    diagnostics: &'a dyn DiagnosticSink,
    default_scala_version: String,
}

impl<'a> SbtConfigResolver<'a> {
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self::with_default_version(diagnostics, DEFAULT_SCALA_VERSION)
    }

    /// Overrides the fallback Scala version used when the metadata omits
    /// `build.scala.versions`.
    pub fn with_default_version(
        diagnostics: &'a dyn DiagnosticSink,
        version: impl Into<String>,
    ) -> Self {
        Self {
            diagnostics,
            default_scala_version: version.into(),
        }
    }

    pub fn resolve(&self, base_dir: &Path) -> ExternalConfig {
        let source_roots = probe::existing_of(base_dir, probe::CONVENTIONAL_SOURCE_ROOTS);

        // Without build metadata the result degrades to source roots only.
        let Some(metadata) = locate_build_metadata(base_dir) else {
            self.diagnostics.error("Could not locate build.properties file!");
            return ExternalConfig {
                source_roots,
                ..Default::default()
            };
        };

        let props = match properties::load(&metadata.properties_file) {
            Ok(props) => props,
            Err(err) => {
                self.diagnostics.error(&format!(
                    "Could not read {}: {err}",
                    metadata.properties_file.display()
                ));
                return ExternalConfig {
                    source_roots,
                    ..Default::default()
                };
            }
        };

        let version = props
            .get(VERSION_KEY)
            .cloned()
            .unwrap_or_else(|| self.default_scala_version.clone());
        let project_name = props.get(NAME_KEY).cloned();

        self.diagnostics.info(&format!(
            "Resolving sbt library conventions against Scala {version}..."
        ));

        let deps = |purpose: Purpose| {
            let candidates = library_roots(&version, metadata.subproject, scopes::scopes_for(purpose));
            let existing = probe::existing_of(base_dir, &candidates);
            probe::expand_jars(&existing)
        };
        let compile_deps = deps(Purpose::Compile);
        let runtime_deps = deps(Purpose::Runtime);
        let test_deps = deps(Purpose::Test);

        let target = probe::existing_dir(&base_dir.join(format!("scala_{version}")).join("classes"));

        ExternalConfig {
            project_name,
            source_roots,
            compile_deps,
            runtime_deps,
            test_deps,
            target,
        }
    }
}

/// Main project metadata sits at `project/build.properties`; a subproject
/// shares its parent's, one level up.
fn locate_build_metadata(base_dir: &Path) -> Option<BuildMetadata> {
    let main = base_dir.join(BUILD_PROPERTIES);
    if main.is_file() {
        return Some(BuildMetadata {
            properties_file: main,
            subproject: false,
        });
    }
    let shared = base_dir.join("..").join(BUILD_PROPERTIES);
    if shared.is_file() {
        return Some(BuildMetadata {
            properties_file: shared,
            subproject: true,
        });
    }
    None
}

/// Candidate library directories for one purpose, relative to the project
/// root: the unmanaged `lib`, the sbt boot libraries (parent-relative for a
/// subproject), and one managed directory per configuration name.
pub fn library_roots(scala_version: &str, subproject: bool, scope_names: &[&str]) -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("lib")];

    let boot = if subproject {
        format!("../project/boot/scala-{scala_version}/lib")
    } else {
        format!("project/boot/scala-{scala_version}/lib")
    };
    roots.push(PathBuf::from(boot));

    for scope in scope_names {
        roots.push(PathBuf::from(format!(
            "lib_managed/scala_{scala_version}/{scope}"
        )));
    }
    roots
}
