// src/resolver.rs

//! Include path resolution
//!
//! Given an include-file name and the directory of the file that mentions
//! it, finds where that file actually lives inside the bundle and expresses
//! its path relative to a fixed base directory, always with forward-slash
//! separators.
//!
//! Resolution walks upward from the searching file's directory toward the
//! base: at each level the directory itself is checked first, then its
//! transitive subdirectories. When several candidates share a name, the
//! closer ancestor level wins, and within one level the first hit in
//! traversal order wins. The order below one level is not a stable contract.

use crate::config::BundleConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves include names to base-relative paths
pub struct PathResolver<'a> {
    config: &'a BundleConfig,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self { config }
    }

    /// Resolve `file_name` starting from `search_dir`, relative to `base_dir`.
    ///
    /// Names in the no-resolve set are returned verbatim without touching the
    /// filesystem. A name found directly inside `base_dir` resolves to itself
    /// with no directory prefix. Otherwise the upward walk runs from
    /// `search_dir` (inclusive) to `base_dir` (exclusive); reaching the base
    /// without a hit is a fatal [`Error::IncludeNotFound`].
    pub fn resolve(&self, file_name: &str, search_dir: &Path, base_dir: &Path) -> Result<String> {
        if self.config.no_resolve.contains(file_name) {
            return Ok(file_name.to_string());
        }
        if base_dir.join(file_name).is_file() {
            return Ok(file_name.to_string());
        }

        let mut dir = search_dir;
        while dir != base_dir && dir.starts_with(base_dir) {
            let direct = dir.join(file_name);
            if direct.is_file() {
                return relative_to(&direct, base_dir);
            }
            if let Some(found) = deep_find(dir, file_name)? {
                return relative_to(&found, base_dir);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        Err(Error::IncludeNotFound {
            name: file_name.to_string(),
            search_dir: search_dir.to_path_buf(),
            base_dir: base_dir.to_path_buf(),
        })
    }
}

/// Search for `file_name` directly inside any transitive subdirectory of
/// `dir` (not `dir` itself). First hit in traversal order wins.
fn deep_find(dir: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let candidate = entry.path().join(file_name);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Express `path` relative to `base` with forward-slash separators.
fn relative_to(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is outside {}", path.display(), base.display()),
        )
    })?;
    Ok(forward_slashes(relative))
}

/// Join path components with `/` regardless of host conventions.
pub fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_no_resolve_passthrough() {
        let temp = TempDir::new().unwrap();
        let config = BundleConfig::default();
        let resolver = PathResolver::new(&config);

        // Nothing named FreeRTOS.h exists anywhere, yet resolution succeeds.
        let resolved = resolver
            .resolve("FreeRTOS.h", temp.path(), temp.path())
            .unwrap();
        assert_eq!(resolved, "FreeRTOS.h");
    }

    #[test]
    fn test_base_dir_hit_has_no_prefix() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        touch(&base.join("common.h"));
        fs::create_dir_all(base.join("deep/dir")).unwrap();

        let config = BundleConfig::default();
        let resolver = PathResolver::new(&config);
        let resolved = resolver
            .resolve("common.h", &base.join("deep/dir"), base)
            .unwrap();
        assert_eq!(resolved, "common.h");
    }

    #[test]
    fn test_parent_level_wins_over_deep_search() {
        // lib/transport/tcp.h vs a same-named file reachable only by deep
        // search: the closer ancestor level must win.
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("lib");
        touch(&base.join("transport/tcp.h"));
        touch(&base.join("transport/posix/tcp_posix.h"));

        let config = BundleConfig::default();
        let resolver = PathResolver::new(&config);
        let resolved = resolver
            .resolve("tcp.h", &base.join("transport/posix"), &base)
            .unwrap();
        assert_eq!(resolved, "transport/tcp.h");
    }

    #[test]
    fn test_deep_search_descends_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("lib");
        touch(&base.join("a/b/util.h"));
        touch(&base.join("a/main.c"));

        let config = BundleConfig::default();
        let resolver = PathResolver::new(&config);
        let resolved = resolver.resolve("util.h", &base.join("a"), &base).unwrap();
        assert_eq!(resolved, "a/b/util.h");
    }

    #[test]
    fn test_unresolvable_name_fails() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("lib");
        fs::create_dir_all(base.join("a")).unwrap();

        let config = BundleConfig::default();
        let resolver = PathResolver::new(&config);
        let err = resolver
            .resolve("missing.h", &base.join("a"), &base)
            .unwrap_err();
        assert!(matches!(err, Error::IncludeNotFound { ref name, .. } if name == "missing.h"));
    }
}
