//! Heading detection heuristics.

use super::FormatOptions;

/// Strip a leading Markdown ATX marker (`#` through `######` plus a space).
///
/// Lines without a marker are returned unchanged.
pub fn strip_heading_marker(line: &str) -> &str {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return line;
    }

    // '#' is one byte, so `hashes` is also a byte offset
    let rest = &line[hashes..];
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => rest.trim_start(),
        _ => line,
    }
}

/// Decide whether a (trimmed) line should be treated as a section heading.
///
/// A heading is short, has at least one letter, and does not end like a
/// sentence. `has_following_body` says whether any content follows the line,
/// either in its own block or in a later one; without it the line only
/// counts when `options.trailing_headings` is set.
pub fn looks_like_heading(line: &str, has_following_body: bool, options: &FormatOptions) -> bool {
    let line = if options.strip_markdown_markers {
        strip_heading_marker(line)
    } else {
        line
    };
    let line = line.trim();

    let Some(last) = line.chars().last() else {
        return false;
    };

    if options.is_terminal(last) {
        return false;
    }

    if line.chars().count() > options.max_heading_len {
        return false;
    }

    if !line.chars().any(char::is_alphabetic) {
        return false;
    }

    has_following_body || options.trailing_headings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn test_short_line_is_heading() {
        assert!(looks_like_heading("Introduction", true, &opts()));
        assert!(looks_like_heading("2. Related Work", true, &opts()));
    }

    #[test]
    fn test_terminal_punctuation_is_never_heading() {
        assert!(!looks_like_heading("This is a sentence.", true, &opts()));
        assert!(!looks_like_heading("First,", true, &opts()));
        assert!(!looks_like_heading("a; b;", false, &opts()));
    }

    #[test]
    fn test_long_line_is_not_heading() {
        let line = "a".repeat(61);
        assert!(!looks_like_heading(&line, true, &opts()));
        let line = "a".repeat(60);
        assert!(looks_like_heading(&line, true, &opts()));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 30 characters, 90 bytes
        let line = "가".repeat(30);
        assert!(looks_like_heading(&line, true, &opts()));
    }

    #[test]
    fn test_needs_a_letter() {
        assert!(!looks_like_heading("---", true, &opts()));
        assert!(!looks_like_heading("2024", true, &opts()));
        assert!(!looks_like_heading("", true, &opts()));
    }

    #[test]
    fn test_trailing_heading_toggle() {
        assert!(!looks_like_heading("Appendix", false, &opts()));
        assert!(looks_like_heading("Appendix", true, &opts()));
        let lenient = FormatOptions::new().with_trailing_headings(true);
        assert!(looks_like_heading("Appendix", false, &lenient));
    }

    #[test]
    fn test_markdown_marker() {
        assert_eq!(strip_heading_marker("## References"), "References");
        assert_eq!(strip_heading_marker("#hashtag"), "#hashtag");
        assert_eq!(strip_heading_marker("####### Seven"), "####### Seven");
        assert_eq!(strip_heading_marker("Plain"), "Plain");

        assert!(looks_like_heading("## Methods", true, &opts()));
        assert!(!looks_like_heading("# Done.", true, &opts()));
        assert!(!looks_like_heading("#", true, &opts()));
    }
}
