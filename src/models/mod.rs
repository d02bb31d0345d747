mod file_record;
mod output_format;
mod statistics;

pub use file_record::{count_text_chars, FileRecord};
pub use output_format::OutputFormat;
pub use statistics::{ExtensionStats, Statistics, NO_EXTENSION_KEY, TOP_FILES_LIMIT};
