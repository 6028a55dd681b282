// file: src/lib.rs
// version: 1.0.0
// guid: 7b2e9f40-1c6a-4d83-b5f1-028a4c9e6d37

//! # Shell Executor
//!
//! Walks a directory tree, discovers Python files, extracts the shell
//! commands each file declares in a top-level `CMDS` list, and executes
//! them through the system shell. Dry-run mode reports the commands
//! without invoking anything.

pub mod cli;
pub mod error;
pub mod executor;
pub mod logging;
pub mod module;
pub mod report;
pub mod scanner;

pub use error::{Result, ShellExecError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
