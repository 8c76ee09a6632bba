//! String utilities for the domain layer.

/// One-line preview of user or server text for log output.
///
/// Collapses runs of whitespace (including newlines) to a single space and
/// cuts at `max_chars` characters, appending `...` when shortened.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_is_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("hello\n  world\t!", 40), "hello world !");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("hello world", 8), "hello...");
        // Multibyte characters count as one each
        assert_eq!(preview("日本語テスト文字列", 6), "日本語...");
    }
}
