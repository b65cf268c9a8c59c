//! Subcommand implementations.

pub mod common;
pub mod preview;
pub mod run;
