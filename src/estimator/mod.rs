use lazy_static::lazy_static;
use std::collections::HashMap;

/// Assumed average line width used to turn characters into lines.
pub const CHARS_PER_LINE: usize = 80;
/// Assumed average characters per token for unknown file types.
pub const CHARS_PER_TOKEN: f64 = 3.5;
/// Flat safety factor applied to the fallback estimate.
pub const FALLBACK_MULTIPLIER: f64 = 1.2;

// Estimated tokens per 80-character line, by language family
lazy_static! {
    static ref DEFAULT_MULTIPLIERS: HashMap<&'static str, usize> = {
        let mut m = HashMap::new();
        m.insert(".py", 15);
        m.insert(".js", 18);
        m.insert(".jsx", 18);
        m.insert(".ts", 18);
        m.insert(".tsx", 18);
        m.insert(".java", 22);
        m.insert(".c", 20);
        m.insert(".cpp", 20);
        m.insert(".cs", 22);
        m.insert(".go", 16);
        m.insert(".rs", 18);
        m.insert(".rb", 16);
        m.insert(".php", 20);
        m.insert(".swift", 20);
        m.insert(".kt", 22);
        m.insert(".html", 12);
        m.insert(".css", 12);
        m.insert(".scss", 12);
        m.insert(".json", 15);
        m.insert(".xml", 15);
        m.insert(".yaml", 12);
        m.insert(".yml", 12);
        m.insert(".md", 10);
        m.insert(".txt", 8);
        m.insert(".sh", 15);
        m.insert(".sql", 15);
        m
    };
}

/// Normalise an extension to the table's key form: lowercase with a leading dot.
///
/// Accepts both `"rs"` and `".RS"`. Returns `None` for an empty extension.
pub fn normalize_extension(extension: &str) -> Option<String> {
    let trimmed = extension.trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Per-extension multipliers used by [`ExtensionTable::estimate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    multipliers: HashMap<String, usize>,
}

impl ExtensionTable {
    /// An empty table; every file goes through the fallback heuristic.
    pub fn empty() -> Self {
        Self {
            multipliers: HashMap::new(),
        }
    }

    /// Add or replace a multiplier. The extension may be given with or without a dot.
    pub fn insert(&mut self, extension: &str, multiplier: usize) {
        if let Some(key) = normalize_extension(extension) {
            self.multipliers.insert(key, multiplier);
        }
    }

    pub fn with(mut self, extension: &str, multiplier: usize) -> Self {
        self.insert(extension, multiplier);
        self
    }

    pub fn multiplier(&self, extension: &str) -> Option<usize> {
        normalize_extension(extension).and_then(|key| self.multipliers.get(&key).copied())
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    pub fn estimate(&self, char_count: usize, extension: Option<&str>) -> usize {
        match extension.and_then(|ext| self.multiplier(ext)) {
            Some(multiplier) => (char_count / CHARS_PER_LINE) * multiplier,
            None => fallback_estimate(char_count),
        }
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self {
            multipliers: DEFAULT_MULTIPLIERS
                .iter()
                .map(|(ext, m)| (ext.to_string(), *m))
                .collect(),
        }
    }
}

/// Character-based estimate for file types without a multiplier.
pub fn fallback_estimate(char_count: usize) -> usize {
    let base_tokens = char_count as f64 / CHARS_PER_TOKEN;
    (base_tokens * FALLBACK_MULTIPLIER) as usize
}

/// Estimate tokens with the built-in multiplier table.
pub fn estimate(char_count: usize, extension: Option<&str>) -> usize {
    DEFAULT_TABLE.estimate(char_count, extension)
}

lazy_static! {
    static ref DEFAULT_TABLE: ExtensionTable = ExtensionTable::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("rs"), Some(".rs".to_string()));
        assert_eq!(normalize_extension(".PY"), Some(".py".to_string()));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_lines_are_floored_before_multiplying() {
        // 159 chars is one line, not 1.99
        assert_eq!(estimate(159, Some(".py")), 15);
        assert_eq!(estimate(160, Some(".py")), 30);
        assert_eq!(estimate(79, Some(".java")), 0);
    }

    #[test]
    fn test_custom_table_overrides_default() {
        let table = ExtensionTable::empty().with("py", 100);
        assert_eq!(table.estimate(80, Some(".py")), 100);
        assert_eq!(table.estimate(80, Some(".rs")), fallback_estimate(80));
    }
}
