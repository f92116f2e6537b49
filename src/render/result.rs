//! Rendering result with metadata and statistics.

use crate::model::PaperMetadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a paper, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Paper metadata (copied from the source paper)
    pub metadata: PaperMetadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: PaperMetadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of section titles rendered
    pub heading_count: u32,

    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of reference entries rendered
    pub reference_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment reference count.
    pub fn add_reference(&mut self) {
        self.reference_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
