// file: src/logging/mod.rs
// version: 1.0.0
// guid: d31b8e6f-0c52-47a9-b4e7-68f2a1d5c093

//! Logging system for the shell executor

pub mod logger;

pub use logger::init_logger;
