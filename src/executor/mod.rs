// file: src/executor/mod.rs
// version: 1.0.0
// guid: 91c4f7a3-2b8d-4e65-a019-7d3c58e6b2f4

//! Shell command execution

use crate::report::{ExecOutcome, ExecStatus};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Executes extracted commands through the system shell
pub struct CommandExecutor {
    dry_run: bool,
}

impl CommandExecutor {
    /// Create an executor; in dry-run mode no subprocess is ever spawned
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether this executor is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run a single command via `sh -c`, capturing stdout and stderr.
    ///
    /// A nonzero exit code yields a `Failed` outcome with the captured
    /// output; failure to spawn the shell at all also yields `Failed`,
    /// with the OS error text in the stderr slot. Neither aborts the run.
    pub async fn execute(&self, command: &str) -> ExecOutcome {
        if self.dry_run {
            return ExecOutcome::dry_run();
        }

        debug!("Spawning shell for [{}]", command);
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => {
                let status = if output.status.success() {
                    ExecStatus::Success
                } else {
                    ExecStatus::Failed
                };
                ExecOutcome {
                    status,
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
            Err(err) => ExecOutcome {
                status: ExecStatus::Failed,
                stdout: String::new(),
                stderr: err.to_string(),
            },
        }
    }
}
