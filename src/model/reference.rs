//! Reference list entries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A single bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Citation label found at the start of the line (e.g. "1" for "[1] ...")
    pub label: Option<String>,

    /// Citation text without the label
    pub text: String,
}

impl Reference {
    /// Create an unlabeled reference.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    /// Create a reference with an explicit label.
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }

    /// Parse one line of a raw reference list.
    ///
    /// Returns `None` for blank lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(caps) = label_regex().captures(line) {
            let text = caps[2].trim();
            if !text.is_empty() {
                return Some(Self::labeled(&caps[1], text));
            }
        }

        Some(Self::new(line))
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label {
            Some(ref label) => write!(f, "[{}] {}", label, self.text),
            None => f.write_str(&self.text),
        }
    }
}

fn label_regex() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"^\[(\w{1,8})\]\s*(.*)$").expect("valid label regex"))
}

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(r"(?i)^(?:#{1,6}\s*)?(?:references|bibliography|works cited)\s*:?$")
            .expect("valid heading regex")
    })
}

/// Split a raw references string into entries, one per non-empty line.
///
/// "References" heading lines are skipped when they come first or carry a
/// Markdown `#` marker. Exact duplicates are dropped, keeping the first
/// occurrence.
pub fn parse_references(raw: &str) -> Vec<Reference> {
    let mut refs: Vec<Reference> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        let marked = trimmed.starts_with('#');
        if (refs.is_empty() || marked) && heading_regex().is_match(trimmed) {
            continue;
        }
        let Some(reference) = Reference::parse_line(trimmed) else {
            continue;
        };
        if refs.contains(&reference) {
            log::warn!("Skipping duplicate reference: {}", reference);
            continue;
        }
        refs.push(reference);
    }

    refs
}
