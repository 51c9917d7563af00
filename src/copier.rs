// src/copier.rs

//! Filtered tree copy and empty-directory pruning
//!
//! Mirrors a source subtree into a destination through the copy filter, then
//! removes directories the filter left empty. Replace-not-merge semantics are
//! owned by the orchestrator: the destination must not contain a previous
//! copy when this runs.

use crate::error::Result;
use crate::filter::TreeFilter;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Recursively copy `src` into `dest`, consulting the filter for every entry
/// before copying a file or descending into a directory.
///
/// Returns the number of files copied. The source tree is never mutated.
/// Entries that are neither files nor directories (symlinks, devices) are
/// skipped.
pub fn copy_filtered(src: &Path, dest: &Path, filter: &TreeFilter) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;

        if !filter.should_copy(&name, file_type.is_dir()) {
            debug!("Filtered out: {}", entry.path().display());
            continue;
        }

        if file_type.is_dir() {
            copied += copy_filtered(&entry.path(), &dest.join(&name), filter)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), dest.join(&name))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove every directory under `root` that is empty, bottom-up.
///
/// Children are visited before their parents, so a directory emptied by the
/// removal of its own empty children is itself removed in the same pass.
/// `root` itself is kept even when empty.
pub fn prune_empty_dirs(root: &Path) -> Result<usize> {
    let mut pruned = 0;

    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if fs::read_dir(entry.path())?.next().is_none() {
            debug!("Pruning empty directory: {}", entry.path().display());
            fs::remove_dir(entry.path())?;
            pruned += 1;
        }
    }

    Ok(pruned)
}
