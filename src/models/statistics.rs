use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::FileRecord;
use crate::estimator::normalize_extension;

/// How many of the largest files are retained.
pub const TOP_FILES_LIMIT: usize = 20;

/// Bucket for files without an extension.
pub const NO_EXTENSION_KEY: &str = ".no_ext";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub files: usize,
    pub chars: usize,
    pub tokens: usize,
}

/// Aggregate result of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_files: usize,
    pub skipped_files: usize,
    pub errors: usize,
    pub total_chars: usize,
    pub total_tokens: usize,
    pub by_extension: BTreeMap<String, ExtensionStats>,
    /// Largest files by estimated tokens, descending. Ties are ordered by path.
    pub largest_files: Vec<FileRecord>,
}

fn rank(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.tokens.cmp(&a.tokens).then_with(|| a.path.cmp(&b.path))
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a successfully read file into the totals.
    pub fn record_file(&mut self, record: FileRecord, extension: Option<&str>) {
        self.total_chars += record.chars;
        self.total_tokens += record.tokens;
        self.total_files += 1;

        let key = extension
            .and_then(normalize_extension)
            .unwrap_or_else(|| NO_EXTENSION_KEY.to_string());
        let ext_stats = self.by_extension.entry(key).or_default();
        ext_stats.files += 1;
        ext_stats.chars += record.chars;
        ext_stats.tokens += record.tokens;

        let pos = self
            .largest_files
            .partition_point(|existing| rank(existing, &record) != Ordering::Greater);
        if pos < TOP_FILES_LIMIT {
            self.largest_files.insert(pos, record);
            self.largest_files.truncate(TOP_FILES_LIMIT);
        }
    }

    pub fn record_skip(&mut self) {
        self.skipped_files += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// The `n` largest files, capped at [`TOP_FILES_LIMIT`].
    pub fn top_files(&self, n: usize) -> &[FileRecord] {
        &self.largest_files[..n.min(self.largest_files.len())]
    }

    /// Extension buckets sorted by tokens descending, then by extension.
    pub fn extensions_by_tokens(&self) -> Vec<(&str, &ExtensionStats)> {
        let mut entries: Vec<_> = self
            .by_extension
            .iter()
            .map(|(ext, stats)| (ext.as_str(), stats))
            .collect();
        entries.sort_by(|a, b| b.1.tokens.cmp(&a.1.tokens).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Share of `tokens` in the overall total, as a percentage.
    pub fn share_of_total(&self, tokens: usize) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        tokens as f64 / self.total_tokens as f64 * 100.0
    }

    pub fn usage_percent(&self, token_limit: usize) -> f64 {
        if token_limit == 0 {
            return 0.0;
        }
        self.total_tokens as f64 / token_limit as f64 * 100.0
    }

    pub fn exceeds(&self, token_limit: usize) -> bool {
        self.total_tokens > token_limit
    }
}
