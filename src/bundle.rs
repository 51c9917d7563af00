// src/bundle.rs

//! Bundle orchestration
//!
//! Sequences the whole repackaging run: replace the two managed subtrees
//! under `<out>/src/` with freshly filtered copies, rewrite third-party
//! includes against the flattened layout, and regenerate the umbrella
//! header. Each managed subtree is deleted in its entirety before its copy;
//! there is no incremental merge. There is also no transactional rollback: a
//! failure partway leaves the destination partially rebuilt, and the next
//! successful run's delete-then-recreate is the way back to consistency.

use crate::config::BundleConfig;
use crate::copier::{copy_filtered, prune_empty_dirs};
use crate::error::Result;
use crate::filter::TreeFilter;
use crate::headers;
use crate::rewriter::IncludeRewriter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Counts gathered across one run, for the command layer's summary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundleReport {
    /// Files copied into the library subtree
    pub library_files: usize,
    /// Files copied into the third-party subtree
    pub third_party_files: usize,
    /// Include directives rewritten in the third-party subtree
    pub includes_rewritten: usize,
    /// Headers aggregated into the umbrella header
    pub headers_aggregated: usize,
}

/// One repackaging run from a repository root into an output directory
pub struct Bundler {
    repo_root: PathBuf,
    out_dir: PathBuf,
    config: BundleConfig,
}

impl Bundler {
    pub fn new(
        repo_root: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        config: BundleConfig,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            out_dir: out_dir.into(),
            config,
        }
    }

    /// Run the full pipeline: library copy, third-party copy plus rewrite,
    /// umbrella header.
    pub fn run(&self) -> Result<BundleReport> {
        let src_dir = self.out_dir.join("src");
        fs::create_dir_all(&src_dir)?;

        let mut report = BundleReport::default();

        // Library subtree: copied as-is, includes intentionally untouched.
        // Library sources already use base-relative include paths.
        report.library_files = self.replace_subtree(&self.config.library_dir, &src_dir)?;

        // Third-party subtree: copied, then rewritten so its includes stay
        // valid relative to <out>/src.
        report.third_party_files = self.replace_subtree(&self.config.third_party_dir, &src_dir)?;
        let rewriter = IncludeRewriter::new(&self.config);
        report.includes_rewritten =
            rewriter.rewrite_tree(&src_dir.join(&self.config.third_party_dir), &src_dir)?;
        info!("Rewrote {} include directive(s)", report.includes_rewritten);

        // Umbrella header over the freshly copied library subtree, so every
        // emitted include resolves inside the bundle.
        report.headers_aggregated = headers::generate(
            &src_dir.join(&self.config.library_dir),
            &src_dir.join(&self.config.umbrella_header),
            &src_dir,
        )?;
        info!(
            "Aggregated {} header(s) into {}",
            report.headers_aggregated, self.config.umbrella_header
        );

        Ok(report)
    }

    /// Delete any previous managed copy of `name` under `src_dir`, then copy
    /// it fresh from the repository through the filter and prune directories
    /// the filter emptied. Returns the number of files copied.
    fn replace_subtree(&self, name: &str, src_dir: &Path) -> Result<usize> {
        let source = self.repo_root.join(name);
        let dest = src_dir.join(name);

        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }

        let filter = TreeFilter::new(&self.config);
        let copied = copy_filtered(&source, &dest, &filter)?;
        prune_empty_dirs(&dest)?;
        info!("Copied {} file(s) into {}", copied, dest.display());

        Ok(copied)
    }
}
