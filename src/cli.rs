use clap::Parser;
use std::path::PathBuf;

use crate::models::{OutputFormat, TOP_FILES_LIMIT};
use crate::scanner::DEFAULT_MAX_FILE_SIZE_MB;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "token-estimator",
    about = "Estimate token count for all files in a directory",
    version
)]
pub struct Cli {
    /// Directory to analyze
    pub directory: PathBuf,

    /// Token limit to compare against
    #[arg(long = "limit", default_value_t = 200_000, value_parser = parse_positive)]
    pub limit: usize,

    /// Maximum file size in MB to process
    #[arg(
        long = "max-file-size",
        default_value_t = DEFAULT_MAX_FILE_SIZE_MB,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_file_size: u64,

    /// Extra glob patterns to ignore, matched against file and directory names
    #[arg(long = "ignore")]
    pub ignore_patterns: Vec<String>,

    /// Config file with extra multipliers and skip lists
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of largest files to list (at most 20)
    #[arg(long = "top", default_value_t = 10, value_parser = parse_top)]
    pub top: usize,

    /// Number of extensions to list in the breakdown
    #[arg(long = "extensions", default_value_t = 15)]
    pub extensions: usize,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log scan decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_top(s: &str) -> Result<usize, String> {
    let n = parse_positive(s)?;
    if n > TOP_FILES_LIMIT {
        return Err(format!("must be at most {}", TOP_FILES_LIMIT));
    }
    Ok(n)
}
