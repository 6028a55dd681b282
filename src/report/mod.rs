// file: src/report/mod.rs
// version: 1.0.0
// guid: 5d28c6e1-7f94-4a3b-8e50-b1a9d4f06c72

//! Run accounting: per-command records, deduplication and the final summary

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome status for a single command occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecStatus {
    Success,
    Failed,
    Skipped,
    DryRun,
}

impl fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExecStatus::Success => "SUCCESS",
            ExecStatus::Failed => "FAILED",
            ExecStatus::Skipped => "SKIPPED",
            ExecStatus::DryRun => "DRY_RUN",
        };
        f.write_str(s)
    }
}

/// Raw result of running (or not running) one command
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    pub status: ExecStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutcome {
    /// Outcome for a command reported in dry-run mode
    pub fn dry_run() -> Self {
        Self {
            status: ExecStatus::DryRun,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Outcome for a command skipped because it already ran this run
    pub fn skipped() -> Self {
        Self {
            status: ExecStatus::Skipped,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// One recorded command occurrence: which file declared it, at which index,
/// and what happened to it
#[derive(Debug, Clone, Serialize)]
pub struct ExecRecord {
    pub command: String,
    pub source: PathBuf,
    pub index: usize,
    pub status: ExecStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Accumulated state of a whole run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub files_scanned: usize,
    pub modules_skipped: usize,
    pub records: Vec<ExecRecord>,
    #[serde(skip)]
    executed: HashSet<String>,
}

impl RunReport {
    /// Start a new report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
            files_scanned: 0,
            modules_skipped: 0,
            records: Vec::new(),
            executed: HashSet::new(),
        }
    }

    /// Whether this exact command string was already executed (or dry-run)
    /// earlier in the run
    pub fn already_executed(&self, command: &str) -> bool {
        self.executed.contains(command)
    }

    /// Record one command occurrence
    pub fn record(
        &mut self,
        command: &str,
        source: &Path,
        index: usize,
        outcome: ExecOutcome,
    ) -> &ExecRecord {
        if outcome.status != ExecStatus::Skipped {
            self.executed.insert(command.to_string());
        }
        self.records.push(ExecRecord {
            command: command.to_string(),
            source: source.to_path_buf(),
            index,
            status: outcome.status,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        });
        self.records.last().unwrap()
    }

    /// Count records with the given status
    pub fn count(&self, status: ExecStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// Mark the run complete
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// One-line human summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} file(s) scanned, {} module(s) skipped, {} command(s) recorded: {} succeeded, {} failed, {} skipped, {} dry-run",
            self.files_scanned,
            self.modules_skipped,
            self.records.len(),
            self.count(ExecStatus::Success),
            self.count(ExecStatus::Failed),
            self.count(ExecStatus::Skipped),
            self.count(ExecStatus::DryRun),
        )
    }

    /// Pretty JSON rendering of the full report
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> ExecOutcome {
        ExecOutcome {
            status: ExecStatus::Success,
            stdout: "ok\n".to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_record_and_count() {
        // Arrange
        let mut report = RunReport::new(false);
        let source = Path::new("/tmp/a.py");

        // Act
        report.record("echo a", source, 0, success());
        report.record("false", source, 1, ExecOutcome {
            status: ExecStatus::Failed,
            stdout: String::new(),
            stderr: "boom".to_string(),
        });

        // Assert
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.count(ExecStatus::Success), 1);
        assert_eq!(report.count(ExecStatus::Failed), 1);
    }

    #[test]
    fn test_dedup_tracks_executed_commands() {
        // Arrange
        let mut report = RunReport::new(false);
        let source = Path::new("/tmp/a.py");

        // Act
        report.record("echo a", source, 0, success());

        // Assert
        assert!(report.already_executed("echo a"));
        assert!(!report.already_executed("echo b"));
    }

    #[test]
    fn test_skipped_record_does_not_mark_executed() {
        // Arrange
        let mut report = RunReport::new(false);
        let source = Path::new("/tmp/a.py");

        // Act
        report.record("echo a", source, 0, ExecOutcome::skipped());

        // Assert
        assert!(!report.already_executed("echo a"));
    }

    #[test]
    fn test_dry_run_counts_as_executed_for_dedup() {
        // Arrange
        let mut report = RunReport::new(true);
        let source = Path::new("/tmp/a.py");

        // Act
        report.record("echo a", source, 0, ExecOutcome::dry_run());

        // Assert
        assert!(report.already_executed("echo a"));
    }

    #[test]
    fn test_summary_mentions_all_buckets() {
        // Arrange
        let mut report = RunReport::new(false);
        report.files_scanned = 2;
        let source = Path::new("/tmp/a.py");
        report.record("echo a", source, 0, success());
        report.record("echo a", source, 1, ExecOutcome::skipped());
        report.finish();

        // Act
        let summary = report.summary();

        // Assert
        assert!(summary.contains("2 file(s) scanned"));
        assert!(summary.contains("1 succeeded"));
        assert!(summary.contains("1 skipped"));
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_report_serializes_to_json() {
        // Arrange
        let mut report = RunReport::new(true);
        report.record("echo a", Path::new("/tmp/a.py"), 0, ExecOutcome::dry_run());

        // Act
        let json = report.to_pretty_json().unwrap();

        // Assert
        assert!(json.contains("\"DRY_RUN\""));
        assert!(json.contains("\"echo a\""));
    }
}
