//! Line-level parsing of the dotenv format.
//!
//! Responsibilities:
//! - Classify raw lines (blank, comment, malformed, entry).
//! - Split entries at the first `=` and strip one symmetric quote layer.
//!
//! Does NOT handle:
//! - Applying entries to a store or the overwrite policy (see loader.rs).
//!
//! Invariants:
//! - Only full-line comments exist; `#` after a value is literal content.
//! - Quote stripping is symmetric-only and removes exactly one layer.
//! - Keys are never empty; lines that would produce one are malformed.
//! - No multi-line values, no interpolation, no escape sequences.

/// Classification of one raw dotenv line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Empty once surrounding whitespace is removed.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    /// No `=` separator, or an empty key after trimming.
    Malformed,
    /// A key-value pair, trimmed and unquoted.
    Entry { key: String, value: String },
}

pub(crate) fn parse_line(raw: &str) -> LineKind {
    let content = raw.trim();
    if content.is_empty() {
        return LineKind::Blank;
    }
    if content.starts_with('#') {
        return LineKind::Comment;
    }
    let Some((key, value)) = content.split_once('=') else {
        return LineKind::Malformed;
    };
    let key = key.trim();
    if key.is_empty() {
        // The process environment cannot represent an empty variable name.
        return LineKind::Malformed;
    }
    LineKind::Entry {
        key: key.to_string(),
        value: strip_quotes(value.trim()).to_string(),
    }
}

/// Strip exactly one layer of symmetric `"` or `'` quoting.
///
/// Asymmetric or unmatched quote characters are left as literal text.
fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && matches!(first, '"' | '\'') => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

/// Parse dotenv text into key-value pairs without touching any store.
///
/// Blank lines, comments, and malformed lines are dropped. Duplicate keys
/// are kept in source order, so applying the pairs in order makes the last
/// occurrence win.
pub fn parse_str(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .filter_map(|line| match parse_line(line) {
            LineKind::Entry { key, value } => Some((key, value)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> LineKind {
        LineKind::Entry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_plain_entry_is_trimmed() {
        assert_eq!(parse_line("  HOST = localhost  "), entry("HOST", "localhost"));
    }

    #[test]
    fn test_split_at_first_equals() {
        assert_eq!(parse_line("TOKEN=abc=def"), entry("TOKEN", "abc=def"));
    }

    #[test]
    fn test_blank_and_whitespace_lines() {
        assert_eq!(parse_line(""), LineKind::Blank);
        assert_eq!(parse_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_full_line_comment() {
        assert_eq!(parse_line("# a comment"), LineKind::Comment);
        assert_eq!(parse_line("   # indented comment"), LineKind::Comment);
    }

    #[test]
    fn test_hash_after_value_is_literal() {
        assert_eq!(
            parse_line("KEY=value # not a comment"),
            entry("KEY", "value # not a comment")
        );
    }

    #[test]
    fn test_line_without_equals_is_malformed() {
        assert_eq!(parse_line("JUSTAWORD"), LineKind::Malformed);
    }

    #[test]
    fn test_empty_key_is_malformed() {
        assert_eq!(parse_line("=value"), LineKind::Malformed);
        assert_eq!(parse_line("   =value"), LineKind::Malformed);
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(parse_line("KEY="), entry("KEY", ""));
    }

    #[test]
    fn test_symmetric_double_quotes_stripped() {
        assert_eq!(parse_line("KEY=\"a value\""), entry("KEY", "a value"));
    }

    #[test]
    fn test_symmetric_single_quotes_stripped() {
        assert_eq!(parse_line("KEY='quoted'"), entry("KEY", "quoted"));
    }

    #[test]
    fn test_quotes_preserve_inner_whitespace() {
        assert_eq!(parse_line("KEY=\"  padded  \""), entry("KEY", "  padded  "));
    }

    #[test]
    fn test_unmatched_quote_is_literal() {
        assert_eq!(parse_line("KEY=\"abc"), entry("KEY", "\"abc"));
    }

    #[test]
    fn test_mixed_quotes_are_literal() {
        assert_eq!(parse_line("KEY=\"abc'"), entry("KEY", "\"abc'"));
    }

    #[test]
    fn test_only_one_quote_layer_stripped() {
        assert_eq!(parse_line("KEY=''inner''"), entry("KEY", "'inner'"));
    }

    #[test]
    fn test_lone_quote_value_is_literal() {
        assert_eq!(parse_line("KEY=\""), entry("KEY", "\""));
    }

    #[test]
    fn test_quoted_empty_value() {
        assert_eq!(parse_line("KEY=\"\""), entry("KEY", ""));
    }

    #[test]
    fn test_parse_str_drops_noise_and_keeps_order() {
        let source = "# seed values\nA=1\n\nB = 2\nnot-a-pair\nA=3\n";
        assert_eq!(
            parse_str(source),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "3".to_string()),
            ]
        );
    }
}
