use comfy_table::{CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::fmt::{self, Write};
use thousands::Separable;

use super::format_size;
use crate::models::Statistics;

const RULE_WIDTH: usize = 80;
const MAX_PATH_WIDTH: usize = 47;
const PATH_TAIL: usize = 44;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub token_limit: usize,
    /// Rows in the largest-files table
    pub top_files: usize,
    /// Rows in the per-extension table
    pub top_extensions: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            token_limit: 200_000,
            top_files: 10,
            top_extensions: 15,
        }
    }
}

/// Shorten long paths to `...` plus their last characters.
pub fn truncate_path(path: &str) -> String {
    let len = path.chars().count();
    if len <= MAX_PATH_WIDTH {
        return path.to_string();
    }
    let tail: String = path.chars().skip(len - PATH_TAIL).collect();
    format!("...{}", tail)
}

fn numeric_table(header: Vec<&str>, right_aligned: &[usize]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    for &index in right_aligned {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn write_report(
    out: &mut impl Write,
    stats: &Statistics,
    options: &ReportOptions,
) -> fmt::Result {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let limit = options.token_limit;

    writeln!(out, "\n{heavy}\nANALYSIS SUMMARY\n{heavy}")?;

    writeln!(out, "\nTotal files analyzed: {}", stats.total_files.separate_with_commas())?;
    writeln!(out, "Files skipped: {}", stats.skipped_files.separate_with_commas())?;
    writeln!(out, "Errors encountered: {}", stats.errors.separate_with_commas())?;

    writeln!(out, "\nTotal characters: {}", stats.total_chars.separate_with_commas())?;
    writeln!(out, "Estimated tokens: {}", stats.total_tokens.separate_with_commas())?;
    writeln!(out, "Token limit: {}", limit.separate_with_commas())?;

    writeln!(
        out,
        "\nUsage: {:.1}% of {} token limit",
        stats.usage_percent(limit),
        limit.separate_with_commas()
    )?;
    if stats.exceeds(limit) {
        writeln!(
            out,
            "⚠️  WARNING: Exceeds token limit by {} tokens!",
            (stats.total_tokens - limit).separate_with_commas()
        )?;
    } else {
        writeln!(
            out,
            "✓ Fits within token limit with {} tokens to spare",
            (limit - stats.total_tokens).separate_with_commas()
        )?;
    }

    writeln!(out, "\n{light}\nBREAKDOWN BY FILE TYPE\n{light}")?;
    let mut table = numeric_table(
        vec!["Extension", "Files", "Characters", "Est. Tokens", "% of Total"],
        &[1, 2, 3, 4],
    );
    for (ext, ext_stats) in stats
        .extensions_by_tokens()
        .into_iter()
        .take(options.top_extensions)
    {
        table.add_row(vec![
            ext.to_string(),
            ext_stats.files.separate_with_commas(),
            ext_stats.chars.separate_with_commas(),
            ext_stats.tokens.separate_with_commas(),
            format!("{:.1}%", stats.share_of_total(ext_stats.tokens)),
        ]);
    }
    writeln!(out, "{table}")?;

    let largest = stats.top_files(options.top_files);
    if !largest.is_empty() {
        writeln!(out, "\n{light}\nLARGEST FILES BY TOKEN COUNT\n{light}")?;
        let mut table = numeric_table(
            vec!["File Path", "Size", "Est. Tokens", "% of Total"],
            &[1, 2, 3],
        );
        for file in largest {
            table.add_row(vec![
                truncate_path(&file.path),
                format_size(file.size),
                file.tokens.separate_with_commas(),
                format!("{:.1}%", stats.share_of_total(file.tokens)),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    Ok(())
}

/// A rendered view of the statistics, formatted on demand.
pub struct Report<'a> {
    pub stats: &'a Statistics,
    pub options: &'a ReportOptions,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.stats, self.options)
    }
}

pub fn render_report(stats: &Statistics, options: &ReportOptions) -> String {
    Report { stats, options }.to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    token_limit: usize,
    usage_percent: f64,
    exceeds_limit: bool,
    #[serde(flatten)]
    statistics: &'a Statistics,
}

pub fn render_json(stats: &Statistics, token_limit: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        token_limit,
        usage_percent: stats.usage_percent(token_limit),
        exceeds_limit: stats.exceeds(token_limit),
        statistics: stats,
    })
}
