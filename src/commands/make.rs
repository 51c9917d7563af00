// src/commands/make.rs
//! Bundle build command

use aether_bundle::config::{BundleConfig, detect_repo_root};
use aether_bundle::{Bundler, Error};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Build the Arduino library bundle under `out`.
pub fn cmd_make(out: &Path, repo: Option<&Path>) -> Result<()> {
    let config = BundleConfig::default();

    let repo_root = match repo {
        Some(path) => path.to_path_buf(),
        None => autodetect_root(&config).context("Failed to locate the repository root")?,
    };

    info!("Repository root: {}", repo_root.display());
    info!("Building Arduino library in {}", out.display());

    let bundler = Bundler::new(&repo_root, out, config);
    let report = bundler
        .run()
        .with_context(|| format!("Failed to build bundle in {}", out.display()))?;

    println!(
        "Bundle built in {}: {} library file(s), {} third-party file(s), \
         {} include(s) rewritten, {} header(s) aggregated",
        out.display(),
        report.library_files,
        report.third_party_files,
        report.includes_rewritten,
        report.headers_aggregated,
    );
    Ok(())
}

/// Auto-detection strategy for the repository root: walk upward from the
/// executable's directory, then from the current working directory, looking
/// for an ancestor containing the library marker subdirectory.
fn autodetect_root(config: &BundleConfig) -> Result<PathBuf> {
    let mut starts: Vec<PathBuf> = Vec::new();
    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        starts.push(dir.to_path_buf());
    }
    let cwd = env::current_dir()?;
    starts.push(cwd.clone());

    for start in &starts {
        if let Some(root) = detect_repo_root(start, &config.library_dir) {
            return Ok(root);
        }
    }
    Err(Error::RootNotFound(cwd).into())
}
