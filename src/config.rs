// src/config.rs

//! Bundle configuration
//!
//! All filter and resolution policy is explicit caller-supplied state rather
//! than module-wide constants, so tests can override any piece of it. The
//! defaults reproduce the shipped Arduino library layout: copy `aether/` and
//! `third_party/` into `<out>/src/`, keep only source/header/doc files, and
//! leave well-known system and vendor includes untouched.

use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File names eligible for copying: a stem of word characters, hyphens or
/// underscores, either extensionless or with a known source/header/doc
/// extension.
const ALLOW_PATTERN: &str = r"^[\w-]+($|\.(h|hpp|hh|c|cpp|cc|md)$)";

/// File names subject to include rewriting (extension required; doc files
/// and extensionless names are copied but never rewritten).
const REWRITE_PATTERN: &str = r"^[\w-]+\.(h|hpp|hh|c|cpp|cc)$";

/// Exact names never copied, regardless of type or extension.
const DENY_NAMES: &[&str] = &[
    ".git",
    ".github",
    "test",
    "tests",
    "testdata",
    "c-ares",
    "docs",
    "extras",
    "example",
    "examples",
    "Makefile",
    "makefile",
    "ini.h",
    "unit_tests_runner.c",
    "unit_tests_runner.cpp",
    "unit_tests_runner.h",
    "tz.cpp",
    "Unity",
];

/// Include names exempt from resolution. These are system or toolchain
/// headers that exist nowhere in the repository and must pass through
/// verbatim.
const NO_RESOLVE_NAMES: &[&str] = &[
    "unity.h",
    "unity_config.h",
    "randombytes_internal.h",
    "stm32f4xx.h",
    "stm32l4xx_hal_rng.h",
    "etl_profile.h",
    "stdint.h",
    "FreeRTOS.h",
];

/// Policy for one bundling run
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Allow pattern for copied file names
    pub allow: Regex,
    /// Exact names always excluded; deny wins over allow
    pub deny: HashSet<String>,
    /// Include names passed through without resolution
    pub no_resolve: HashSet<String>,
    /// File names whose include directives get rewritten
    pub rewrite_sources: Regex,
    /// Name of the primary library subtree under the repository root
    pub library_dir: String,
    /// Name of the third-party subtree under the repository root
    pub third_party_dir: String,
    /// File name of the generated umbrella header
    pub umbrella_header: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        // The patterns are compile-time constants, so construction cannot
        // fail at runtime.
        Self {
            allow: Regex::new(ALLOW_PATTERN).unwrap(),
            deny: DENY_NAMES.iter().map(|s| (*s).to_string()).collect(),
            no_resolve: NO_RESOLVE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            rewrite_sources: Regex::new(REWRITE_PATTERN).unwrap(),
            library_dir: "aether".to_string(),
            third_party_dir: "third_party".to_string(),
            umbrella_header: "aether_headers.h".to_string(),
        }
    }
}

/// Find the repository root by walking upward from `start`, returning the
/// first ancestor (inclusive) that contains a `marker` subdirectory.
///
/// This is the pluggable auto-detection strategy behind the optional
/// `--repo` argument; an explicit flag always wins over detection.
pub fn detect_repo_root(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}
