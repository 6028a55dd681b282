// file: src/cli/args.rs
// version: 1.0.0
// guid: 4a7f2c6b-d850-4391-ae16-93c0e5b8f247

//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shellexecutor")]
#[command(about = "Execute shell commands from py files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Root directory to search for py files
    pub rootdir: PathBuf,

    /// Enable debug mode
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// List commands without executing them
    #[arg(short = 't', long)]
    pub dry_run: bool,
}
