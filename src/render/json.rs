//! JSON rendering for papers and documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Document, Paper};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a paper to JSON.
pub fn to_json(paper: &Paper, format: JsonFormat) -> Result<String> {
    serialize(paper, format)
}

/// Convert a bare document to JSON (`{"sections": [...]}`).
pub fn document_to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    #[test]
    fn test_to_json_pretty() {
        let body = Document::from_sections(vec![Section::titled("Intro").with_paragraph("Hello")]);
        let paper = Paper::from_document(body).with_title("Test");

        let json = to_json(&paper, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"paragraphs\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&Paper::default(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_document_to_json_round_trip() {
        let doc = Document::from_sections(vec![Section::untitled().with_paragraph("Body.")]);
        let json = document_to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
