const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable byte size with one decimal, e.g. `1.5 KB`.
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}
