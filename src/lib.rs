// src/lib.rs

//! Aether Arduino library bundler
//!
//! Repackages the nested Aether client repository into the flattened layout
//! a third-party package manager expects, while keeping every relative
//! include reference valid under the new directory tree.
//!
//! # Architecture
//!
//! - Filtered copy: two managed subtrees (`aether/`, `third_party/`) are
//!   deleted and recreated under `<out>/src/` on every run, never merged
//! - Include rewriting: quoted `#include "..."` directives in the
//!   third-party copy are resolved and rewritten relative to `<out>/src/`
//! - Umbrella header: a single generated header includes every library
//!   header, grouped by directory inside one include guard
//! - Fail-fast: an unresolvable include aborts the run; nothing is papered
//!   over, since a bundle with broken includes is worse than no bundle

pub mod bundle;
pub mod cache;
pub mod config;
pub mod copier;
mod error;
pub mod filter;
pub mod headers;
pub mod resolver;
pub mod rewriter;

pub use bundle::{BundleReport, Bundler};
pub use config::{BundleConfig, detect_repo_root};
pub use error::{Error, Result};
pub use filter::TreeFilter;
pub use resolver::PathResolver;
pub use rewriter::IncludeRewriter;
