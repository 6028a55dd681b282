// file: src/cli/mod.rs
// version: 1.0.0
// guid: 08b5d3f9-6a17-4c82-95ed-2f4a60c8b1d3

//! Command line interface for the shell executor

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::run_command;
