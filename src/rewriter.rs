// src/rewriter.rs

//! Include directive rewriting
//!
//! Scans the copied source files for quoted `#include "..."` lines and
//! rewrites each to the path the resolver produces, so every include stays
//! valid under the flattened bundle layout. Non-matching lines are preserved
//! byte-for-byte. The first unresolvable include aborts the whole pass; a
//! partially-rewritten tree is reported as a hard failure of the run.

use crate::config::BundleConfig;
use crate::error::Result;
use crate::resolver::PathResolver;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

static INCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*#\s*include\s*"([^"]+)"\s*$"#).unwrap());

/// Rewrites include directives across a copied subtree
pub struct IncludeRewriter<'a> {
    config: &'a BundleConfig,
    resolver: PathResolver<'a>,
}

impl<'a> IncludeRewriter<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self {
            config,
            resolver: PathResolver::new(config),
        }
    }

    /// Rewrite every source file under `dest` in place, resolving each quoted
    /// include against `base_dir`. Returns the number of directives rewritten.
    pub fn rewrite_tree(&self, dest: &Path, base_dir: &Path) -> Result<usize> {
        let mut rewritten = 0;

        for entry in WalkDir::new(dest) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !self.config.rewrite_sources.is_match(&name) {
                continue;
            }
            rewritten += self.rewrite_file(entry.path(), base_dir)?;
        }

        Ok(rewritten)
    }

    /// Rewrite one file; returns how many directives changed. Files with no
    /// quoted includes are left untouched on disk.
    fn rewrite_file(&self, path: &Path, base_dir: &Path) -> Result<usize> {
        let text = fs::read_to_string(path)?;
        let search_dir = path.parent().unwrap_or(base_dir);

        let mut output = String::with_capacity(text.len());
        let mut rewritten = 0;

        for raw_line in text.split_inclusive('\n') {
            let line = raw_line.trim_end_matches('\n').trim_end_matches('\r');
            match INCLUDE_RE.captures(line) {
                Some(caps) => {
                    let resolved = self.resolver.resolve(&caps[1], search_dir, base_dir)?;
                    output.push_str("#include \"");
                    output.push_str(&resolved);
                    output.push('"');
                    if raw_line.ends_with('\n') {
                        output.push('\n');
                    }
                    rewritten += 1;
                }
                None => output.push_str(raw_line),
            }
        }

        if rewritten > 0 {
            debug!("Rewrote {} include(s) in {}", rewritten, path.display());
            fs::write(path, output)?;
        }

        Ok(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_include_pattern_tolerates_leading_whitespace() {
        assert!(INCLUDE_RE.is_match("#include \"a.h\""));
        assert!(INCLUDE_RE.is_match("  # include \"a/b.h\""));
        assert!(!INCLUDE_RE.is_match("#include <vector>"));
        assert!(!INCLUDE_RE.is_match("// #include \"a.h\" trailing"));
    }

    #[test]
    fn test_rewrite_preserves_non_include_lines() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("src");
        touch(&base.join("vendor/helper.h"), "");
        touch(
            &base.join("vendor/impl/lib.cpp"),
            "// header comment\n#include \"helper.h\"\nint x;  // trailing\n",
        );

        let config = BundleConfig::default();
        let rewriter = IncludeRewriter::new(&config);
        let count = rewriter.rewrite_tree(&base.join("vendor"), &base).unwrap();

        assert_eq!(count, 1);
        let text = fs::read_to_string(base.join("vendor/impl/lib.cpp")).unwrap();
        assert_eq!(
            text,
            "// header comment\n#include \"vendor/helper.h\"\nint x;  // trailing\n"
        );
    }

    #[test]
    fn test_doc_files_are_not_rewritten() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("src");
        touch(&base.join("vendor/README.md"), "#include \"nowhere.h\"\n");

        let config = BundleConfig::default();
        let rewriter = IncludeRewriter::new(&config);
        let count = rewriter.rewrite_tree(&base.join("vendor"), &base).unwrap();

        assert_eq!(count, 0);
        let text = fs::read_to_string(base.join("vendor/README.md")).unwrap();
        assert_eq!(text, "#include \"nowhere.h\"\n");
    }

    #[test]
    fn test_unresolved_include_aborts_pass() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("src");
        touch(&base.join("vendor/lib.c"), "#include \"ghost.h\"\n");

        let config = BundleConfig::default();
        let rewriter = IncludeRewriter::new(&config);
        let err = rewriter
            .rewrite_tree(&base.join("vendor"), &base)
            .unwrap_err();

        assert!(matches!(err, Error::IncludeNotFound { ref name, .. } if name == "ghost.h"));
        // The file on disk is untouched: the failure happened before any write.
        let text = fs::read_to_string(base.join("vendor/lib.c")).unwrap();
        assert_eq!(text, "#include \"ghost.h\"\n");
    }
}
