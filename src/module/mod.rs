// file: src/module/mod.rs
// version: 1.0.0
// guid: c15e83b7-4a9f-4d20-b6e8-d72f90a1c453

//! Command module loading
//!
//! A command module is a Python file that declares the shell commands it
//! wants run in a top-level `CMDS` list of string literals. The list is
//! extracted statically; the file is never executed.

pub mod parser;

use crate::scanner::PyFile;
use crate::{Result, ShellExecError};
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Matcher for a top-level `CMDS` binding, compiled once per process
static CMDS_RE: OnceLock<Regex> = OnceLock::new();

/// A loaded command module: the source file plus its extracted commands
#[derive(Debug, Clone)]
pub struct CommandModule {
    source: PathBuf,
    cmds: Vec<String>,
}

impl CommandModule {
    /// Load a command module from a discovered Python file.
    ///
    /// Fails if the file cannot be read or does not carry a well-formed
    /// top-level `CMDS` list; callers are expected to skip the file in
    /// that case rather than abort the run.
    pub fn load(pyfile: &PyFile) -> Result<Self> {
        let source = pyfile.path();
        let content = fs::read_to_string(&source).map_err(|e| {
            ShellExecError::module(format!("failed to read [{}]: {}", source.display(), e))
        })?;

        let cmds = extract_cmds(&content).map_err(|e| {
            ShellExecError::module(format!("[{}]: {}", source.display(), e))
        })?;
        debug!("Found CMDS {:?} in [{}]", cmds, source.display());

        Ok(Self { source, cmds })
    }

    /// Path of the file the commands came from
    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    /// Extracted commands, in declaration order
    pub fn cmds(&self) -> &[String] {
        &self.cmds
    }
}

/// Extract the top-level `CMDS` string list from Python source text
fn extract_cmds(content: &str) -> std::result::Result<Vec<String>, String> {
    let re =
        CMDS_RE.get_or_init(|| Regex::new(r"(?m)^CMDS\s*=\s*\[").expect("CMDS pattern is valid"));

    let mat = re
        .find(content)
        .ok_or_else(|| "CMDS list not found".to_string())?;

    // The match ends one past the opening bracket
    parser::parse_string_list(&content[mat.end() - 1..])
}
