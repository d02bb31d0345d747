#[cfg(test)]
mod tests {
    use token_estimator::formatters::{
        format_size, render_json, render_report, truncate_path, Report, ReportOptions,
    };
    use token_estimator::models::{FileRecord, Statistics};

    fn sample_stats() -> Statistics {
        let mut stats = Statistics::new();
        stats.record_file(
            FileRecord {
                path: "src/main.py".to_string(),
                chars: 8_000,
                tokens: 1_500,
                size: 8_000,
            },
            Some("py"),
        );
        stats.record_file(
            FileRecord {
                path: "README.md".to_string(),
                chars: 4_000,
                tokens: 500,
                size: 4_100,
            },
            Some("md"),
        );
        stats.record_skip();
        stats
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(10 * 1024 * 1024 + 1), "10.0 MB");
    }

    #[test]
    fn test_truncate_path() {
        assert_eq!(truncate_path("src/lib.rs"), "src/lib.rs");

        let exact = "a".repeat(47);
        assert_eq!(truncate_path(&exact), exact);

        let long = format!("{}/{}", "d".repeat(40), "f".repeat(20));
        let shortened = truncate_path(&long);
        assert_eq!(shortened.chars().count(), 47);
        assert!(shortened.starts_with("..."));
        assert!(shortened.ends_with(&"f".repeat(20)));
    }

    #[test]
    fn test_report_within_limit() {
        let report = render_report(&sample_stats(), &ReportOptions::default());

        assert!(report.contains("ANALYSIS SUMMARY"));
        assert!(report.contains("Total files analyzed: 2"));
        assert!(report.contains("Files skipped: 1"));
        assert!(report.contains("Errors encountered: 0"));
        assert!(report.contains("Total characters: 12,000"));
        assert!(report.contains("Estimated tokens: 2,000"));
        assert!(report.contains("Token limit: 200,000"));
        assert!(report.contains("Usage: 1.0% of 200,000 token limit"));
        assert!(report.contains("✓ Fits within token limit with 198,000 tokens to spare"));
        assert!(report.contains("BREAKDOWN BY FILE TYPE"));
        assert!(report.contains(".py"));
        assert!(report.contains("75.0%"));
        assert!(report.contains("LARGEST FILES BY TOKEN COUNT"));
        assert!(report.contains("src/main.py"));
    }

    #[test]
    fn test_report_over_limit() {
        let options = ReportOptions {
            token_limit: 1_000,
            ..ReportOptions::default()
        };
        let report = render_report(&sample_stats(), &options);

        assert!(report.contains("Usage: 200.0% of 1,000 token limit"));
        assert!(report.contains("WARNING: Exceeds token limit by 1,000 tokens!"));
    }

    #[test]
    fn test_report_respects_row_limits() {
        let options = ReportOptions {
            top_files: 1,
            top_extensions: 1,
            ..ReportOptions::default()
        };
        let report = render_report(&sample_stats(), &options);

        assert!(report.contains("src/main.py"));
        assert!(!report.contains("README.md"));
        assert!(!report.contains(".md"));
    }

    #[test]
    fn test_empty_report_has_no_largest_files_section() {
        let report = render_report(&Statistics::new(), &ReportOptions::default());
        assert!(report.contains("Usage: 0.0% of 200,000 token limit"));
        assert!(!report.contains("LARGEST FILES BY TOKEN COUNT"));
    }

    #[test]
    fn test_report_display_matches_rendered_text() {
        let stats = sample_stats();
        let options = ReportOptions::default();
        let report = Report {
            stats: &stats,
            options: &options,
        };

        let mut streamed = String::new();
        std::fmt::Write::write_fmt(&mut streamed, format_args!("{report}")).unwrap();

        assert_eq!(streamed, render_report(&stats, &options));
        assert!(streamed.ends_with('\n'));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample_stats(), 4_000).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["token_limit"], 4_000);
        assert_eq!(value["usage_percent"], 50.0);
        assert_eq!(value["exceeds_limit"], false);
        assert_eq!(value["total_files"], 2);
        assert_eq!(value["skipped_files"], 1);
        assert_eq!(value["by_extension"][".py"]["tokens"], 1_500);
        assert_eq!(value["largest_files"][0]["path"], "src/main.py");
    }
}
