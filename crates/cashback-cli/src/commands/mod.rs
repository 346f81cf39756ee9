//! CLI subcommands.

pub mod classify;
pub mod config;
pub mod extract;
