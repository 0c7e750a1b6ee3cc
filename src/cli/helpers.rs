//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a rating for display: whole numbers without a decimal point,
/// everything else as-is ("15" rather than "15.0", but "0.9" stays "0.9").
pub fn format_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Format an optional rating, with "-" standing in for absent values.
pub fn format_opt(value: Option<f64>) -> String {
    value.map(format_num).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        // Multibyte names must not be split mid-character
        assert_eq!(truncate_str("食品级硅胶软管", 10), "食品级硅胶软管");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_format_num() {
        assert_eq!(format_num(15.0), "15");
        assert_eq!(format_num(0.9), "0.9");
        assert_eq!(format_num(-40.0), "-40");
    }

    #[test]
    fn test_format_opt() {
        assert_eq!(format_opt(Some(0.9)), "0.9");
        assert_eq!(format_opt(None), "-");
    }
}
