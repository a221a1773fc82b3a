use crate::agents::pom_scanner::PomScannerAgent;
use crate::config::UpdaterConfig;
use crate::error::{PomError, Result};
use crate::utils::verbose;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a run rewrites files or only reports what would change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Write,
    DryRun,
}

/// A file that could not be processed during a `keep_going` run.
#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a run over the tree.
#[derive(Debug, Default, Serialize)]
pub struct UpdateReport {
    /// Number of `pom.xml` files examined
    pub visited: usize,
    /// Files whose content changed (or would change in a dry run)
    pub modified: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl UpdateReport {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// PomUpdater applies the replacement table to every `pom.xml` under the root
pub struct PomUpdater {
    config: UpdaterConfig,
    keep_going: bool,
}

impl PomUpdater {
    pub fn new(config: UpdaterConfig) -> Self {
        Self {
            config,
            keep_going: false,
        }
    }

    /// Log and continue on per-file I/O errors instead of aborting the run.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Walks the tree and processes each `pom.xml` in discovery order.
    ///
    /// `on_modified` is invoked as soon as a file is found to change, before it
    /// is rewritten and before the next file is read.
    pub fn run<F>(&self, mode: RunMode, mut on_modified: F) -> Result<UpdateReport>
    where
        F: FnMut(&Path),
    {
        let mut report = UpdateReport::default();
        let scanner = PomScannerAgent::new(&self.config.root);

        for path in scanner.scan() {
            report.visited += 1;

            match self.process_file(&path, mode, &mut on_modified) {
                Ok(true) => report.modified.push(path),
                Ok(false) => verbose!("Unchanged: {}", path.display()),
                Err(e) if self.keep_going => {
                    verbose!("Continuing after failure: {}", e);
                    report.failures.push(FileFailure {
                        path,
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Returns whether the file's content changed. Writes only in `RunMode::Write`.
    fn process_file<F>(&self, path: &Path, mode: RunMode, on_modified: &mut F) -> Result<bool>
    where
        F: FnMut(&Path),
    {
        let original = fs::read_to_string(path).map_err(|e| PomError::read(path, e))?;
        let updated = self.config.replacements.apply(&original);

        if updated == original {
            return Ok(false);
        }

        on_modified(path);

        if mode == RunMode::Write {
            fs::write(path, updated).map_err(|e| PomError::write(path, e))?;
        }

        Ok(true)
    }
}
