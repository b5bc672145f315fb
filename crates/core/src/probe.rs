//! Filesystem probe.
//!
//! Everything an adapter asks the filesystem is funneled through here:
//! existence filtering of candidate directories, canonicalization, and
//! recursive archive discovery under a set of roots.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source directories every supported build system lays out the same way.
pub const CONVENTIONAL_SOURCE_ROOTS: [&str; 4] = [
    "src/main/scala",
    "src/main/java",
    "src/test/scala",
    "src/test/java",
];

/// Standardizes a path to ensure consistency across different OS platforms
/// and symlinks.
pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Filters `candidates` (relative to `base_dir`) down to the ones that exist,
/// in canonical absolute form. Absent candidates are routine and are dropped
/// silently.
pub fn existing_of<I, P>(base_dir: &Path, candidates: I) -> BTreeSet<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .map(|relative| base_dir.join(relative.as_ref()))
        .filter(|path| path.exists())
        .map(|path| canonical(&path))
        .collect()
}

/// Canonical form of `path` when it is an existing directory.
pub fn existing_dir(path: &Path) -> Option<PathBuf> {
    path.is_dir().then(|| canonical(path))
}

/// Canonical forms of the given paths that are regular files on disk.
/// Resolver output passes through here before it enters a config.
pub fn existing_files<I>(paths: I) -> BTreeSet<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter(|path| path.is_file())
        .map(|path| canonical(&path))
        .collect()
}

/// Default archive predicate: a `.jar` or `.zip` extension.
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jar") || ext.eq_ignore_ascii_case("zip"))
}

/// Recursively collects every regular file under `roots` that satisfies
/// `matches`. Non-existent roots are skipped; overlapping roots collapse via
/// set semantics.
pub fn expand_archives<'a, I, F>(roots: I, matches: F) -> BTreeSet<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
    F: Fn(&Path) -> bool,
{
    let mut archives = BTreeSet::new();
    for root in roots {
        if !root.exists() {
            continue;
        }
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && matches(entry.path()) {
                archives.insert(canonical(entry.path()));
            }
        }
    }
    archives
}

/// `expand_archives` with the default jar/zip predicate.
pub fn expand_jars<'a, I>(roots: I) -> BTreeSet<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    expand_archives(roots, is_archive)
}
