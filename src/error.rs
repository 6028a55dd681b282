// file: src/error.rs
// version: 1.0.0
// guid: 3f6c2a91-8d4e-4b57-9a02-c1e5f7d83b64

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ShellExecError>;

/// Error types for the shell executor
#[derive(Error, Debug)]
pub enum ShellExecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Module error: {0}")]
    Module(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShellExecError {
    /// Create a new scan error
    pub fn scan(msg: impl Into<String>) -> Self {
        Self::Scan(msg.into())
    }

    /// Create a new module error
    pub fn module(msg: impl Into<String>) -> Self {
        Self::Module(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
