//! Paper-level types consumed by renderers.

use super::{Document, Reference, ReferenceStyle, Work};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete paper: metadata, formatted body, and references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Title, author, abstract
    pub metadata: PaperMetadata,

    /// Formatted body sections
    pub body: Document,

    /// Bibliography entries in display order
    pub references: Vec<Reference>,
}

impl Paper {
    /// Create a paper with only a body.
    pub fn from_document(body: Document) -> Self {
        Self {
            metadata: PaperMetadata::default(),
            body,
            references: Vec::new(),
        }
    }

    /// Set the paper title. Blank titles are ignored.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = non_blank(title.into());
        self
    }

    /// Set the author line. Blank authors are ignored.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.metadata.author = non_blank(author.into());
        self
    }

    /// Set the abstract. Blank abstracts are ignored.
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.metadata.abstract_text = non_blank(abstract_text.into());
        self
    }

    /// Set the references from a raw string, one entry per non-empty line.
    pub fn with_references(mut self, raw: &str) -> Self {
        self.references = super::parse_references(raw);
        self
    }

    /// Append structured works formatted in `style`.
    ///
    /// Entries whose citation text is already in the list are skipped.
    /// Numbered styles continue the numbering of the existing list.
    pub fn with_works(mut self, works: &[Work], style: ReferenceStyle) -> Self {
        for work in works {
            let text = work.format(style);
            if self.references.iter().any(|r| r.text == text) {
                log::debug!("Skipping already cited work: {}", work.title);
                continue;
            }
            let number = self.references.len() + 1;
            self.references.push(work.to_reference(style, number));
        }
        self
    }

    /// Set the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.metadata.created = Some(created);
        self
    }

    /// Check if the paper has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.metadata.title.is_none()
            && self.metadata.abstract_text.is_none()
            && self.body.is_empty()
            && self.references.is_empty()
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Paper metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
    /// Paper title
    pub title: Option<String>,

    /// Author line
    pub author: Option<String>,

    /// Abstract text
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl PaperMetadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self, sections: usize, references: usize) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push(format!("sections: {}", sections));
        lines.push(format!("references: {}", references));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use chrono::TimeZone;

    #[test]
    fn test_paper_builder() {
        let paper = Paper::from_document(Document::new())
            .with_title("  A Study  ")
            .with_author("")
            .with_references("One.\n\nTwo.");

        assert_eq!(paper.metadata.title.as_deref(), Some("A Study"));
        assert_eq!(paper.metadata.author, None);
        assert_eq!(paper.references.len(), 2);
        assert!(!paper.is_empty());
    }

    #[test]
    fn test_with_works() {
        let work = Work::new("Roots").with_authors(["Smith"]).with_year(2001);
        let paper = Paper::default()
            .with_references("[1] Earlier entry.")
            .with_works(&[work.clone(), work], ReferenceStyle::Ieee);

        assert_eq!(paper.references.len(), 2);
        assert_eq!(paper.references[1].label.as_deref(), Some("2"));
        assert_eq!(paper.references[1].text, "Smith, \"Roots,\" 2001.");
    }

    #[test]
    fn test_works_already_listed_are_skipped() {
        let work = Work::new("Roots").with_authors(["Smith"]).with_year(2001);
        let raw = work.format(ReferenceStyle::Apa);
        let paper = Paper::default()
            .with_references(&raw)
            .with_works(&[work], ReferenceStyle::Apa);
        assert_eq!(paper.references.len(), 1);
    }

    #[test]
    fn test_empty_paper() {
        assert!(Paper::default().is_empty());

        let body = Document::from_sections(vec![Section::titled("Only")]);
        assert!(!Paper::from_document(body).is_empty());
    }

    #[test]
    fn test_metadata_frontmatter() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let paper = Paper::default()
            .with_title("Say \"hi\"")
            .with_author("Jane Doe")
            .with_created(created);

        let yaml = paper.metadata.to_yaml_frontmatter(3, 2);
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Say \\\"hi\\\"\""));
        assert!(yaml.contains("author: \"Jane Doe\""));
        assert!(yaml.contains("created: 2024-03-01T12:00:00+00:00"));
        assert!(yaml.contains("sections: 3"));
        assert!(yaml.contains("references: 2"));
    }

    #[test]
    fn test_abstract_serialized_name() {
        let paper = Paper::default().with_abstract("Short summary.");
        let json = serde_json::to_string(&paper.metadata).unwrap();
        assert!(json.contains("\"abstract\":\"Short summary.\""));
    }
}
