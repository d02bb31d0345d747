#[cfg(test)]
mod tests {
    use token_estimator::estimator::{self, ExtensionTable};

    #[test]
    fn test_zero_chars_is_zero_tokens() {
        assert_eq!(estimator::estimate(0, None), 0);
        assert_eq!(estimator::estimate(0, Some(".py")), 0);
        assert_eq!(estimator::estimate(0, Some(".unknown")), 0);
    }

    #[test]
    fn test_fallback_formula() {
        for char_count in (0..5000).step_by(7) {
            let expected = (char_count as f64 / 3.5 * 1.2) as usize;
            assert_eq!(estimator::estimate(char_count, None), expected);
            assert_eq!(estimator::estimate(char_count, Some(".toml")), expected);
        }
        // 350 chars -> 100 base tokens -> 120
        assert_eq!(estimator::estimate(350, Some(".lock")), 120);
    }

    #[test]
    fn test_table_formula() {
        let table = ExtensionTable::default();
        for ext in [".py", ".java", ".md", ".txt", ".rs"] {
            let multiplier = table.multiplier(ext).unwrap();
            for char_count in (0..5000).step_by(13) {
                assert_eq!(
                    estimator::estimate(char_count, Some(ext)),
                    (char_count / 80) * multiplier
                );
            }
        }
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(estimator::estimate(800, Some(".PY")), 150);
        assert_eq!(estimator::estimate(800, Some("Py")), 150);
        assert_eq!(estimator::estimate(800, Some(".Java")), 220);
    }

    #[test]
    fn test_default_multipliers() {
        let table = ExtensionTable::default();
        assert_eq!(table.len(), 26);
        assert_eq!(table.multiplier(".py"), Some(15));
        assert_eq!(table.multiplier(".kt"), Some(22));
        assert_eq!(table.multiplier(".txt"), Some(8));
        assert_eq!(table.multiplier(".toml"), None);
    }

    #[test]
    fn test_short_files_in_table_estimate_to_zero() {
        assert_eq!(estimator::estimate(79, Some(".py")), 0);
        assert_eq!(estimator::estimate(80, Some(".py")), 15);
    }
}
