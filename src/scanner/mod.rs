//! Directory traversal and aggregation.
//!
//! [`Scanner::analyze`] walks a tree, drops pruned directories and excluded files,
//! estimates tokens for everything else and folds the results into [`Statistics`].

mod observer;
mod rules;

pub use observer::{Notice, PrintObserver, ScanObserver};
pub use rules::{SkipReason, SkipRules};

use ignore::WalkBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::estimator::ExtensionTable;
use crate::models::{FileRecord, Statistics};
use crate::utils::file_extension;

pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Scanner {
    table: ExtensionTable,
    rules: SkipRules,
    max_file_size_mb: u64,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE_MB)
    }
}

impl Scanner {
    pub fn new(max_file_size_mb: u64) -> Self {
        Self {
            table: ExtensionTable::default(),
            rules: SkipRules::default(),
            max_file_size_mb,
        }
    }

    pub fn with_table(mut self, table: ExtensionTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_rules(mut self, rules: SkipRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Walk `root` and aggregate token estimates for every eligible file.
    ///
    /// Only a missing or non-directory `root` is an error. Per-file problems are
    /// counted in the statistics and reported through `observer`.
    pub fn analyze(&self, root: &Path, observer: &mut dyn ScanObserver) -> Result<Statistics> {
        check_root(root)?;

        let mut stats = Statistics::new();

        let rules = self.rules.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if entry.depth() > 0 && is_dir && rules.prune_dir(entry.path()) {
                    debug!(path = %entry.path().display(), "pruning directory");
                    return false;
                }
                true
            });

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }

            if file_type.is_symlink() {
                // Symlinked directories are listed but never entered
                if fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
                    continue;
                }
            } else if !file_type.is_file() {
                debug!(path = %entry.path().display(), "skipping special file");
                stats.record_skip();
                continue;
            }

            self.process_file(root, entry.path(), &mut stats, observer);
        }

        debug!(
            files = stats.total_files,
            skipped = stats.skipped_files,
            errors = stats.errors,
            tokens = stats.total_tokens,
            "scan finished"
        );
        Ok(stats)
    }

    fn process_file(
        &self,
        root: &Path,
        path: &Path,
        stats: &mut Statistics,
        observer: &mut dyn ScanObserver,
    ) {
        let relative_path = relative_display(root, path);

        match self.read_file(path, &relative_path) {
            Ok(record) => {
                stats.record_file(record, file_extension(path).as_deref());
            }
            Err(FileOutcome::Skipped(reason)) => {
                debug!(path = %relative_path, ?reason, "skipping file");
                if let SkipReason::TooLarge { size } = reason {
                    observer.notice(&Notice::LargeFile {
                        path: &relative_path,
                        size,
                    });
                }
                stats.record_skip();
            }
            Err(FileOutcome::Failed(error)) => {
                observer.notice(&Notice::ReadError {
                    path: &relative_path,
                    error: &error,
                });
                stats.record_error();
            }
        }

        observer.file_visited(&relative_path);
    }

    /// Apply the skip rules in order, then read and estimate.
    fn read_file(
        &self,
        path: &Path,
        relative_path: &str,
    ) -> std::result::Result<FileRecord, FileOutcome> {
        if let Some(reason) = self.rules.classify(path) {
            return Err(FileOutcome::Skipped(reason));
        }

        let size = fs::metadata(path).map_err(FileOutcome::Failed)?.len();
        if size > self.max_file_size_bytes() {
            return Err(FileOutcome::Skipped(SkipReason::TooLarge { size }));
        }

        let bytes = fs::read(path).map_err(FileOutcome::Failed)?;
        Ok(FileRecord::from_bytes(
            relative_path,
            &bytes,
            size,
            file_extension(path).as_deref(),
            &self.table,
        ))
    }
}

enum FileOutcome {
    Skipped(SkipReason),
    Failed(std::io::Error),
}

/// Fail unless `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Scan `root` with the built-in tables, printing notices to stdout.
pub fn analyze(root: &Path, max_file_size_mb: u64) -> Result<Statistics> {
    Scanner::new(max_file_size_mb).analyze(root, &mut PrintObserver)
}
