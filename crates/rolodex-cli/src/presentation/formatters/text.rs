/// Make a user-supplied string safe to draw. Newlines and tabs collapse to a
/// single space; remaining control characters (including ANSI escape
/// introducers) are replaced so records cannot inject terminal sequences
/// into the display.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_passes_plain_text_through() {
        assert_eq!(sanitize("Alice 555-0100"), "Alice 555-0100");
    }

    #[test]
    fn sanitize_flattens_whitespace_controls() {
        assert_eq!(sanitize("a\nb\tc\r"), "a b c ");
    }

    #[test]
    fn sanitize_blocks_escape_sequences() {
        let hostile = "evil\x1b[31mred\x1b[0m";
        let clean = sanitize(hostile);
        assert!(!clean.contains('\x1b'));
        assert!(clean.contains("red"));
    }

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_marks_long_strings() {
        let out = truncate("abcdefghijklmnop", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
