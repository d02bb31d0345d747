mod report;
mod size;
mod writer;

pub use report::{render_json, render_report, truncate_path, write_report, Report, ReportOptions};
pub use size::format_size;
pub use writer::ReportSink;
