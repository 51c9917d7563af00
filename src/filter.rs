// src/filter.rs

//! Copy filter predicate
//!
//! Decides, per directory entry, whether it belongs in the output bundle.
//! Pure predicate with no side effects: the recursive copy in
//! [`crate::copier`] consults it at every level, so a directory admitted
//! here still has its children re-filtered one level down.

use crate::config::BundleConfig;

/// Name-based copy filter for one bundling run
pub struct TreeFilter<'a> {
    config: &'a BundleConfig,
}

impl<'a> TreeFilter<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self { config }
    }

    /// Whether an entry with this name should be copied into the bundle.
    ///
    /// Deny always wins over allow: an exact deny-list match (case-sensitive)
    /// excludes the entry regardless of type. Otherwise directories are
    /// eligible for descent, and files must match the allow pattern.
    pub fn should_copy(&self, name: &str, is_dir: bool) -> bool {
        if self.config.deny.contains(name) {
            return false;
        }
        if is_dir {
            return true;
        }
        self.config.allow.is_match(name)
    }
}
