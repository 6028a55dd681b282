// file: src/scanner/mod.rs
// version: 1.0.0
// guid: a94d71c8-5e2b-4f06-8c3d-96b0e1f2a785

//! Python file discovery

use crate::{Result, ShellExecError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A discovered Python file, split into its directory and file name the way
/// the execution log reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyFile {
    pub dir: PathBuf,
    pub name: String,
}

impl PyFile {
    /// Full path to the file
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Recursive scanner for `.py` files under a root path
pub struct PyFileScanner {
    follow_links: bool,
}

impl PyFileScanner {
    /// Create a scanner with default settings (symlinks are followed, so a
    /// symlinked file or directory is treated as a regular one)
    pub fn new() -> Self {
        Self { follow_links: true }
    }

    /// Discover `.py` files under `root` in deterministic order.
    ///
    /// If `root` is itself a `.py` file it is the only result. Entries that
    /// are neither files nor directories are skipped, as are subtrees the
    /// process cannot read; any other I/O failure during the walk is fatal.
    pub fn scan(&self, root: &Path) -> Result<Vec<PyFile>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    match err.io_error().map(std::io::Error::kind) {
                        Some(ErrorKind::NotFound) => {
                            debug!("Warn: file not found for [{}]. Skipped", path);
                            continue;
                        }
                        Some(ErrorKind::PermissionDenied) => {
                            debug!("Warn: permission denied for [{}]. Skipped", path);
                            continue;
                        }
                        _ => {
                            return Err(ShellExecError::scan(format!(
                                "failed to walk [{}]: {}",
                                path, err
                            )));
                        }
                    }
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                debug!(
                    "Warn: [{}] is not a valid file or directory. Skipped",
                    entry.path().display()
                );
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(".py") {
                debug!(
                    "Warn: [{}] is not a valid file or directory. Skipped",
                    entry.path().display()
                );
                continue;
            }

            let dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            files.push(PyFile { dir, name });
        }

        debug!("Discovered {} python file(s) under [{}]", files.len(), root.display());
        Ok(files)
    }
}

impl Default for PyFileScanner {
    fn default() -> Self {
        Self::new()
    }
}
