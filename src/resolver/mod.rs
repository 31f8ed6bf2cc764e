//! File and label resolution
//!
//! Maps the labels used in bundle specs (plain paths or glob patterns)
//! to the concrete files they designate. The planner enforces the
//! "exactly one file" constraint on top of these results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

/// Resolves a label to the set of files it designates.
///
/// Paths in the result are relative to the project root.
pub trait FileResolver {
    fn resolve(&self, label: &str) -> Vec<PathBuf>;
}

/// Filesystem-backed resolver rooted at the project directory
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    /// Create a resolver rooted at the given project directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn resolve_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        let set = GlobSetBuilder::new().add(glob).build()?;

        let mut matches = Vec::new();
        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(p) => p,
                Err(_) => continue,
            };
            if set.is_match(relative) {
                matches.push(relative.to_path_buf());
            }
        }
        matches.sort();
        Ok(matches)
    }
}

impl FileResolver for FsResolver {
    fn resolve(&self, label: &str) -> Vec<PathBuf> {
        debug!("Resolving label '{}'", label);

        // Glob patterns match against the whole tree
        if label.contains('*') || label.contains('?') || label.contains('[') {
            return self.resolve_glob(label).unwrap_or_default();
        }

        // Plain path: resolves to itself iff the file exists
        let candidate = self.root.join(label);
        if candidate.is_file() {
            vec![PathBuf::from(label)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.js"), "export default 1;\n").unwrap();
        fs::write(dir.path().join("src/util.js"), "export const u = 2;\n").unwrap();
        fs::write(dir.path().join("src/style.css"), "body {}\n").unwrap();
        dir
    }

    #[test]
    fn test_plain_path_resolves_to_one_file() {
        let dir = project();
        let resolver = FsResolver::new(dir.path());

        assert_eq!(
            resolver.resolve("src/main.js"),
            vec![PathBuf::from("src/main.js")]
        );
    }

    #[test]
    fn test_missing_path_resolves_to_nothing() {
        let dir = project();
        let resolver = FsResolver::new(dir.path());

        assert!(resolver.resolve("src/missing.js").is_empty());
    }

    #[test]
    fn test_glob_matches_multiple_files() {
        let dir = project();
        let resolver = FsResolver::new(dir.path());

        let matched = resolver.resolve("src/*.js");
        assert_eq!(
            matched,
            vec![PathBuf::from("src/main.js"), PathBuf::from("src/util.js")]
        );
    }

    #[test]
    fn test_glob_skips_non_matching_files() {
        let dir = project();
        let resolver = FsResolver::new(dir.path());

        let matched = resolver.resolve("src/*.css");
        assert_eq!(matched, vec![PathBuf::from("src/style.css")]);
    }
}
