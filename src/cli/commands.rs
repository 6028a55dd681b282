// file: src/cli/commands.rs
// version: 1.0.0
// guid: b6e09a54-3d7c-48f1-82b5-fa614d2c7e98

//! Command implementations for the CLI

use crate::executor::CommandExecutor;
use crate::module::CommandModule;
use crate::report::{ExecOutcome, ExecStatus, RunReport};
use crate::scanner::PyFileScanner;
use crate::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Walk `rootdir`, extract commands from every discovered Python file and
/// execute them (or report them, in dry-run mode).
///
/// Module-level failures skip the file; command-level failures are recorded
/// in the report. Only walk errors abort the run.
pub async fn run_command(rootdir: &Path, dry_run: bool) -> Result<RunReport> {
    if dry_run {
        info!("== Dry-run mode enabled. Commands will NOT be executed ==");
    }

    let scanner = PyFileScanner::new();
    let pyfiles = scanner.scan(rootdir)?;

    let executor = CommandExecutor::new(dry_run);
    let mut report = RunReport::new(dry_run);
    report.files_scanned = pyfiles.len();

    for pyfile in &pyfiles {
        debug!(">> Found [{}] in [{}]", pyfile.name, pyfile.dir.display());

        let module = match CommandModule::load(pyfile) {
            Ok(module) => module,
            Err(err) => {
                warn!(
                    "Failed to load module [{}] from [{}]. Skipped: {}",
                    pyfile.name,
                    pyfile.dir.display(),
                    err
                );
                report.modules_skipped += 1;
                continue;
            }
        };

        for (n_cmd, cmd) in module.cmds().iter().enumerate() {
            debug!("Executing [{}] from [{}]", cmd, pyfile.name);

            // A command string already executed earlier in the run is not
            // executed again
            if report.already_executed(cmd) {
                report.record(cmd, module.source(), n_cmd, ExecOutcome::skipped());
                info!(
                    "Skipped cmd [{}] from [{}] number [{}]. Command already executed.",
                    cmd,
                    module.source().display(),
                    n_cmd
                );
                continue;
            }

            let outcome = executor.execute(cmd).await;
            let record = report.record(cmd, module.source(), n_cmd, outcome);

            if record.status == ExecStatus::DryRun {
                info!(
                    "Executed cmd [{}] from [{}] number [{}] status [{}]",
                    cmd,
                    module.source().display(),
                    n_cmd,
                    record.status
                );
            } else {
                info!(
                    "Executed cmd [{}] from [{}] number [{}] status [{}]\n\tstdout [{}] stderr [{}]",
                    cmd,
                    module.source().display(),
                    n_cmd,
                    record.status,
                    record.stdout.trim(),
                    record.stderr.trim()
                );
            }
        }
    }

    report.finish();
    info!("{}", report.summary());
    debug!("Run report:\n{}", report.to_pretty_json()?);

    Ok(report)
}
