//! Text cleanup pipeline for rendered output.
//!
//! The formatter passes text through untouched; cleanup is opt-in and runs
//! on the final rendered string.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization and whitespace only
    Minimal,
    /// Standard cleanup: NFC + ligatures + replacement characters + blank line limit
    #[default]
    Standard,
    /// Aggressive cleanup: also joins hyphenated words and drops private-use characters
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Join words hyphenated across a line break ("infor- mation")
    pub fix_hyphenation: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Collapse runs of three or more spaces
    pub normalize_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,

    /// Preserve YAML frontmatter during cleanup
    pub preserve_frontmatter: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            fix_hyphenation: false,
            remove_pua: false,
            remove_replacement_char: false,
            normalize_whitespace: true,
            max_consecutive_newlines: 0,
            preserve_frontmatter: true,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            fix_hyphenation: false,
            remove_pua: false,
            remove_replacement_char: true,
            normalize_whitespace: true,
            max_consecutive_newlines: 2,
            preserve_frontmatter: true,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            fix_hyphenation: true,
            remove_pua: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    hyphenation_regex: Regex,
    whitespace_regex: Regex,
    newline_regex: Option<Regex>,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        let newline_regex = match options.max_consecutive_newlines {
            0 => None,
            max => Some(Regex::new(&format!(r"\n{{{},}}", max as usize + 1)).unwrap()),
        };

        Self {
            hyphenation_regex: Regex::new(r"([A-Za-z])-(?:\n|[ ])\s*([a-z])").unwrap(),
            whitespace_regex: Regex::new(r"[ ]{3,}").unwrap(),
            newline_regex,
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
            options,
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let frontmatter = if self.options.preserve_frontmatter {
            split_frontmatter(text)
        } else {
            None
        };

        match frontmatter {
            Some((fm, content)) => format!("{}\n{}", fm, self.process_content(content)),
            None => self.process_content(text),
        }
    }

    fn process_content(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_pua {
            result = result.chars().filter(|c| !is_private_use(*c)).collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.fix_hyphenation {
            result = self
                .hyphenation_regex
                .replace_all(&result, "$1$2")
                .into_owned();
        }

        if self.options.normalize_whitespace {
            result = self.whitespace_regex.replace_all(&result, "  ").into_owned();
        }

        if let Some(ref re) = self.newline_regex {
            let replacement = "\n".repeat(self.options.max_consecutive_newlines as usize);
            result = re.replace_all(&result, replacement.as_str()).into_owned();
        }

        result.trim().to_string()
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let stripped = text.strip_prefix("---\n")?;
    let end_pos = stripped.find("\n---\n")?;
    let fm_end = 4 + end_pos + 5;
    Some((&text[..fm_end], &text[fm_end..]))
}

fn is_private_use(c: char) -> bool {
    let code = c as u32;
    (0xE000..=0xF8FF).contains(&code)
        || (0xF0000..=0xFFFFD).contains(&code)
        || (0x100000..=0x10FFFD).contains(&code)
}
