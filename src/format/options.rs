//! Formatting options and configuration.

/// Default maximum heading length in characters.
pub const DEFAULT_MAX_HEADING_LEN: usize = 60;

/// Default set of characters that mark a line as a sentence.
pub const DEFAULT_TERMINAL_PUNCTUATION: &[char] = &['.', ',', ';'];

/// Options controlling heading detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Longest line (in characters) still considered a heading
    pub max_heading_len: usize,

    /// A line ending in one of these is never a heading
    pub terminal_punctuation: Vec<char>,

    /// Treat a heading-like line with nothing after it as a heading (off by default)
    pub trailing_headings: bool,

    /// Strip leading Markdown `#` markers before evaluating a line
    pub strip_markdown_markers: bool,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_len(mut self, len: usize) -> Self {
        self.max_heading_len = len;
        self
    }

    /// Set the terminal punctuation set.
    pub fn with_terminal_punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.terminal_punctuation = chars.into_iter().collect();
        self
    }

    /// Enable or disable trailing headings.
    pub fn with_trailing_headings(mut self, enabled: bool) -> Self {
        self.trailing_headings = enabled;
        self
    }

    /// Enable or disable Markdown marker stripping.
    pub fn with_markdown_markers(mut self, strip: bool) -> Self {
        self.strip_markdown_markers = strip;
        self
    }

    /// Check whether a character ends a sentence.
    pub fn is_terminal(&self, c: char) -> bool {
        self.terminal_punctuation.contains(&c)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_heading_len: DEFAULT_MAX_HEADING_LEN,
            terminal_punctuation: DEFAULT_TERMINAL_PUNCTUATION.to_vec(),
            trailing_headings: false,
            strip_markdown_markers: true,
        }
    }
}
