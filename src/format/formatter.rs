//! Block classification and section assembly.

use super::blocks::split_blocks;
use super::heading::{looks_like_heading, strip_heading_marker};
use super::FormatOptions;
use crate::model::{Document, Section};

/// Format raw text into a document using default options.
///
/// # Example
///
/// ```
/// let doc = paperfmt::format("Introduction\n\nWe begin here.");
/// assert_eq!(doc.sections[0].title.as_deref(), Some("Introduction"));
/// assert_eq!(doc.sections[0].paragraphs, vec!["We begin here."]);
/// ```
pub fn format(raw_text: &str) -> Document {
    Formatter::default().format(raw_text)
}

/// Format raw text into a document with custom options.
pub fn format_with_options(raw_text: &str, options: &FormatOptions) -> Document {
    Formatter::new(options.clone()).format(raw_text)
}

/// Text formatter.
///
/// Stateless apart from its options; one instance can format any number of
/// inputs, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Get the formatter options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format raw text into a document. Never fails.
    pub fn format(&self, raw_text: &str) -> Document {
        let blocks = split_blocks(raw_text);
        let block_count = blocks.len();

        let mut doc = Document::new();
        let mut current: Option<Section> = None;

        for (idx, block) in blocks.iter().enumerate() {
            // A lone line is only a heading when more content follows,
            // unless it is the whole input.
            let has_following_body = block.len() > 1 || idx + 1 < block_count || block_count == 1;
            let first = block.first();

            if looks_like_heading(first, has_following_body, &self.options) {
                log::trace!("line {}: heading {:?}", block.start_line, first);
                if let Some(section) = current.take() {
                    doc.add_section(section);
                }
                let mut section = Section::titled(self.title_text(first));
                section.add_paragraph(join_lines(block.rest()));
                current = Some(section);
            } else {
                log::trace!(
                    "line {}: paragraph of {} line(s)",
                    block.start_line,
                    block.len()
                );
                current
                    .get_or_insert_with(Section::untitled)
                    .add_paragraph(join_lines(&block.lines));
            }
        }

        if let Some(section) = current {
            doc.add_section(section);
        }

        log::debug!(
            "Formatted {} block(s) into {} section(s), {} paragraph(s)",
            block_count,
            doc.section_count(),
            doc.paragraph_count()
        );

        doc
    }

    fn title_text(&self, line: &str) -> String {
        if self.options.strip_markdown_markers {
            strip_heading_marker(line).trim().to_string()
        } else {
            line.to_string()
        }
    }
}

/// Join trimmed lines into one paragraph, collapsing line breaks to spaces.
fn join_lines(lines: &[&str]) -> String {
    lines.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(format("").is_empty());
        assert!(format("   \n\n  ").is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let doc = format("Hello world.");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, None);
        assert_eq!(doc.sections[0].paragraphs, vec!["Hello world."]);
    }

    #[test]
    fn test_single_heading_line() {
        let doc = format("Conclusion");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title.as_deref(), Some("Conclusion"));
        assert!(doc.sections[0].paragraphs.is_empty());
    }

    #[test]
    fn test_heading_with_body_in_same_block() {
        let doc = format("Background\nEarlier work looked at\nthe same question.");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title.as_deref(), Some("Background"));
        assert_eq!(
            doc.sections[0].paragraphs,
            vec!["Earlier work looked at the same question."]
        );
    }

    #[test]
    fn test_leading_untitled_section() {
        let doc = format("Some preamble text.\n\nMethods\n\nWe did things.");
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].title, None);
        assert_eq!(doc.sections[0].paragraphs, vec!["Some preamble text."]);
        assert_eq!(doc.sections[1].title.as_deref(), Some("Methods"));
    }

    #[test]
    fn test_consecutive_headings() {
        let doc = format("Part One\n\nChapter 1\n\nText.");
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].title.as_deref(), Some("Part One"));
        assert!(doc.sections[0].paragraphs.is_empty());
        assert_eq!(doc.sections[1].paragraphs, vec!["Text."]);
    }

    #[test]
    fn test_markdown_marker_title() {
        let doc = format("## Results\n\nNumbers went up.");
        assert_eq!(doc.sections[0].title.as_deref(), Some("Results"));

        let raw = Formatter::new(FormatOptions::new().with_markdown_markers(false))
            .format("## Results\n\nNumbers went up.");
        assert_eq!(raw.sections[0].title.as_deref(), Some("## Results"));
    }

    #[test]
    fn test_trailing_line_is_paragraph() {
        let doc = format("Body text.\n\nSee also");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].paragraphs, vec!["Body text.", "See also"]);

        let options = FormatOptions::new().with_trailing_headings(true);
        let doc = format_with_options("Body text.\n\nSee also", &options);
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[1].title.as_deref(), Some("See also"));
        assert!(doc.sections[1].paragraphs.is_empty());
    }

    #[test]
    fn test_control_characters_pass_through() {
        let doc = format("Line with \u{7} bell and \u{0} nul.");
        assert_eq!(
            doc.sections[0].paragraphs,
            vec!["Line with \u{7} bell and \u{0} nul."]
        );
    }
}
