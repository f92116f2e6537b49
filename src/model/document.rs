//! Document-level types.

use serde::{Deserialize, Serialize};

/// A formatted document: an ordered sequence of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Create a document from a list of sections.
    ///
    /// Sections without a title and without paragraphs are dropped.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let mut doc = Self::new();
        for section in sections {
            doc.add_section(section);
        }
        doc
    }

    /// Append a section, skipping it when it carries nothing.
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of paragraphs across all sections.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Iterate over the titles of titled sections.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| s.title.as_deref())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A titled or titleless group of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, absent for an untitled leading block
    pub title: Option<String>,

    /// Paragraphs in source order
    pub paragraphs: Vec<String>,
}

impl Section {
    /// Create an untitled section.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Create a section with a title and no paragraphs yet.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            paragraphs: Vec::new(),
        }
    }

    /// Append a paragraph. Blank paragraphs are ignored.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.paragraphs.push(text);
        }
    }

    /// Builder-style variant of [`Section::add_paragraph`].
    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.add_paragraph(text);
        self
    }

    /// Check whether the section has neither a title nor paragraphs.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.paragraphs.is_empty()
    }

    /// Get plain text of the section (title line followed by paragraphs).
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.paragraphs.len() + 1);
        if let Some(ref title) = self.title {
            parts.push(title);
        }
        parts.extend(self.paragraphs.iter().map(String::as_str));
        parts.join("\n\n")
    }
}
