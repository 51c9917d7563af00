// src/commands/seed_cache.rs
//! Build-cache seed command

use aether_bundle::cache;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Convert a flat record file into a CMake cache seed script.
pub fn cmd_seed_cache(input: &Path, output: Option<&Path>) -> Result<()> {
    match output {
        Some(output) => {
            let records = cache::convert_file(input, output)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
            println!(
                "Wrote {} cache record(s) to {}",
                records,
                output.display()
            );
        }
        None => {
            let text = fs::read_to_string(input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            print!("{}", cache::convert(&text));
        }
    }
    Ok(())
}
