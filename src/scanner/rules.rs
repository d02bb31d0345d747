use globset::GlobSet;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::estimator::normalize_extension;
use crate::utils::{build_globset, file_extension, is_hidden, should_ignore};

lazy_static! {
    // Version control, dependency installs and build output
    static ref DEFAULT_SKIP_DIRS: Vec<&'static str> = vec![
        ".git", "__pycache__", "node_modules", ".idea", ".vscode", "venv", "env", ".env",
        "dist", "build", "target", ".next", "coverage", ".pytest_cache", ".mypy_cache",
        "vendor",
    ];

    // Binary, media, archive, document and database formats
    static ref DEFAULT_SKIP_EXTENSIONS: Vec<&'static str> = vec![
        ".pyc", ".pyo", ".so", ".dll", ".dylib", ".exe", ".bin",
        ".jpg", ".jpeg", ".png", ".gif", ".ico", ".svg", ".webp",
        ".mp3", ".mp4", ".avi", ".mov", ".wav", ".flac",
        ".zip", ".tar", ".gz", ".rar", ".7z",
        ".pdf", ".doc", ".docx", ".xls", ".xlsx",
        ".db", ".sqlite", ".sqlite3",
    ];
}

/// Why a file was left out of the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Extension,
    Ignored,
    TooLarge { size: u64 },
}

/// Directory pruning and per-file exclusion rules.
#[derive(Debug, Clone)]
pub struct SkipRules {
    skip_dirs: HashSet<String>,
    skip_extensions: HashSet<String>,
    ignore: GlobSet,
}

impl Default for SkipRules {
    fn default() -> Self {
        Self::empty()
            .with_skip_dirs(DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()))
            .with_skip_extensions(DEFAULT_SKIP_EXTENSIONS.iter().copied())
    }
}

impl SkipRules {
    /// No pruned directories and no skipped extensions. Hidden files are still skipped.
    pub fn empty() -> Self {
        Self {
            skip_dirs: HashSet::new(),
            skip_extensions: HashSet::new(),
            ignore: GlobSet::empty(),
        }
    }

    pub fn with_skip_dirs(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        self.skip_dirs.extend(dirs);
        self
    }

    pub fn with_skip_extensions<'a>(mut self, extensions: impl IntoIterator<Item = &'a str>) -> Self {
        self.skip_extensions
            .extend(extensions.into_iter().filter_map(normalize_extension));
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore = build_globset(patterns)?;
        Ok(self)
    }

    pub fn is_skip_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }

    pub fn is_skip_extension(&self, extension: &str) -> bool {
        normalize_extension(extension).is_some_and(|ext| self.skip_extensions.contains(&ext))
    }

    /// Whether traversal should stay out of this directory entirely.
    pub fn prune_dir(&self, path: &Path) -> bool {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.is_skip_dir(&name) || should_ignore(path, &self.ignore, true)
    }

    /// Name-based checks, applied before the file is touched.
    pub fn classify(&self, path: &Path) -> Option<SkipReason> {
        let name = path.file_name().unwrap_or_default().to_string_lossy();

        if is_hidden(&name) {
            return Some(SkipReason::Hidden);
        }

        if file_extension(path).is_some_and(|ext| self.is_skip_extension(&ext)) {
            return Some(SkipReason::Extension);
        }

        if should_ignore(path, &self.ignore, false) {
            return Some(SkipReason::Ignored);
        }

        None
    }
}
