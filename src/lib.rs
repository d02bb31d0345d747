use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;
pub mod error;
pub mod estimator;
pub mod formatters;
pub mod models;
pub mod scanner;
pub mod utils;

pub use error::Error;

use crate::formatters::{render_json, render_report, ReportOptions, ReportSink};
use crate::models::OutputFormat;
use crate::scanner::{Notice, ScanObserver, Scanner};
use crate::utils::load_config;

/// Spinner on stderr; notices are printed with it suspended so lines never interleave.
struct ConsoleObserver {
    progress: ProgressBar,
    notices_to_stderr: bool,
    visited: usize,
}

impl ConsoleObserver {
    fn new(show_progress: bool, notices_to_stderr: bool) -> Self {
        let progress = if show_progress {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Scanning directories...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress,
            notices_to_stderr,
            visited: 0,
        }
    }

    fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl ScanObserver for ConsoleObserver {
    fn notice(&mut self, notice: &Notice<'_>) {
        let line = notice.to_string();
        let to_stderr = self.notices_to_stderr;
        self.progress.suspend(|| {
            if to_stderr {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        });
    }

    fn file_visited(&mut self, path: &str) {
        self.visited += 1;
        if self.visited % 100 == 0 {
            self.progress
                .set_message(format!("Scanning: {} ({} files)", path, self.visited));
        }
    }
}

fn print_preamble(directory: &Path, max_file_size_mb: u64) {
    let shown = std::path::absolute(directory).unwrap_or_else(|_| directory.to_path_buf());
    println!("Analyzing directory: {}", shown.display());
    println!("Skipping files larger than {}MB", max_file_size_mb);
    println!("{}", "-".repeat(80));
}

pub fn run(cli: &cli::Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let scanner = Scanner::new(cli.max_file_size)
        .with_table(config.extension_table())
        .with_rules(config.skip_rules(&cli.ignore_patterns)?);

    let json = cli.format == OutputFormat::Json;

    crate::scanner::check_root(&cli.directory)?;
    if !json {
        print_preamble(&cli.directory, cli.max_file_size);
    }

    let show_progress = !cli.quiet && atty::is(atty::Stream::Stderr);
    let mut observer = ConsoleObserver::new(show_progress, json);
    let result = scanner.analyze(&cli.directory, &mut observer);
    observer.finish();
    let stats = result?;

    info!(
        files = stats.total_files,
        tokens = stats.total_tokens,
        "analysis complete"
    );

    let report = match cli.format {
        OutputFormat::Json => render_json(&stats, cli.limit)?,
        OutputFormat::Text => render_report(
            &stats,
            &ReportOptions {
                token_limit: cli.limit,
                top_files: cli.top,
                top_extensions: cli.extensions,
            },
        ),
    };

    let mut sink = ReportSink::create(cli.output.as_deref())?;
    sink.write_report(&report)?;
    if !sink.is_stdout() {
        if let Some(path) = &cli.output {
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}
