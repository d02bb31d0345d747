use std::fmt;
use std::io;

use crate::formatters::format_size;

/// Something the user should see while the scan is still running.
#[derive(Debug)]
pub enum Notice<'a> {
    LargeFile { path: &'a str, size: u64 },
    ReadError { path: &'a str, error: &'a io::Error },
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LargeFile { path, size } => {
                write!(f, "Skipping large file: {} ({})", path, format_size(*size))
            }
            Notice::ReadError { path, error } => write!(f, "Error reading {}: {}", path, error),
        }
    }
}

/// Receives scan progress. Implementations decide where notices go.
pub trait ScanObserver {
    fn notice(&mut self, notice: &Notice<'_>);

    /// Called after every file entry, whatever its outcome.
    fn file_visited(&mut self, _path: &str) {}
}

/// Prints notices to stdout as they happen.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintObserver;

impl ScanObserver for PrintObserver {
    fn notice(&mut self, notice: &Notice<'_>) {
        println!("{}", notice);
    }
}

/// Collects rendered notices, for callers that report them later.
impl ScanObserver for Vec<String> {
    fn notice(&mut self, notice: &Notice<'_>) {
        self.push(notice.to_string());
    }
}
