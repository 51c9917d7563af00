// src/cli.rs
//! CLI definitions for aether-bundle
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aether-bundle")]
#[command(author = "Aethernet Contributors")]
#[command(version)]
#[command(about = "Repackage the Aether client repository into a flattened Arduino library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the Arduino library bundle
    Make {
        /// Output directory for the Arduino library
        #[arg(short, long)]
        out: PathBuf,

        /// Repository root; auto-detected from the executable's location or
        /// the current directory when omitted
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// Convert NAME:TYPE=VALUE records into a CMake cache seed script
    SeedCache {
        /// Input file with one record per line
        input: PathBuf,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
