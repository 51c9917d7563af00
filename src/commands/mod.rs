// src/commands/mod.rs
//! Command handlers for the aether-bundle CLI

mod make;
mod seed_cache;

pub use make::cmd_make;
pub use seed_cache::cmd_seed_cache;
