// src/error.rs

//! Error types for the bundle engine
//!
//! Library code returns `crate::Result`; the CLI layer wraps these in
//! `anyhow` with additional context. The engine is fail-fast: no error is
//! recovered locally, and a failed run may leave the destination partially
//! rebuilt. The next successful run's delete-then-recreate step is the only
//! way back to a consistent state.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the bundle engine
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failures (copy, remove, read, write); propagated unmodified
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failure
    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A quoted include name could not be located between the searching
    /// file's directory and the base directory. Fatal to the whole rewrite
    /// pass: a bundle with broken includes is worse than an aborted run.
    #[error("include \"{name}\" not found between {search_dir} and {base_dir}")]
    IncludeNotFound {
        name: String,
        search_dir: PathBuf,
        base_dir: PathBuf,
    },

    /// Repository root auto-detection exhausted every candidate
    #[error("no repository root with a library subdirectory found above {0}")]
    RootNotFound(PathBuf),
}
