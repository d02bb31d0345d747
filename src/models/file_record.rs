use serde::Serialize;

use crate::estimator::ExtensionTable;

/// One successfully read file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub chars: usize,
    pub tokens: usize,
    pub size: u64,
}

impl FileRecord {
    /// Decode `bytes` as text and estimate its tokens.
    ///
    /// `extension` is the raw file extension, without or with the leading dot.
    pub fn from_bytes(
        path: impl Into<String>,
        bytes: &[u8],
        size: u64,
        extension: Option<&str>,
        table: &ExtensionTable,
    ) -> Self {
        let chars = count_text_chars(bytes);
        Self {
            path: path.into(),
            chars,
            tokens: table.estimate(chars, extension),
            size,
        }
    }
}

/// Count characters the way a text-mode reader sees them.
///
/// Invalid UTF-8 sequences are dropped and a `\r\n` pair counts as a single newline.
pub fn count_text_chars(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut prev_cr = false;
    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            if !(prev_cr && ch == '\n') {
                count += 1;
            }
            prev_cr = ch == '\r';
        }
    }
    count
}
