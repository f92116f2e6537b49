//! # paperfmt
//!
//! Plain-text to research-paper formatting library for Rust.
//!
//! This library turns a blob of text into titled sections and paragraphs,
//! wraps it into a paper with title, author, abstract and references, and
//! renders the result as Markdown, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use paperfmt::{format, render, Paper};
//!
//! fn main() -> paperfmt::Result<()> {
//!     let doc = format("Introduction\n\nThis is the first paragraph.");
//!     assert_eq!(doc.sections[0].title.as_deref(), Some("Introduction"));
//!
//!     let paper = Paper::from_document(doc).with_title("My Paper");
//!     let markdown = render::to_markdown(&paper, &render::RenderOptions::default())?;
//!     assert!(markdown.starts_with("# My Paper"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total formatter**: never fails, whatever the input
//! - **Tunable heading detection**: length and punctuation thresholds
//! - **Multiple output formats**: Markdown, plain text, JSON
//! - **Generation wizard**: state machine for remote paper generation
//! - **Parallel batch formatting**: uses Rayon for multiple files

pub mod error;
pub mod format;
pub mod model;
pub mod render;
pub mod wizard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use format::{format, format_with_options, looks_like_heading, FormatOptions, Formatter};
pub use model::{
    parse_references, Document, Paper, PaperMetadata, Reference, ReferenceStyle, Section, Work,
};
pub use render::{CleanupPreset, JsonFormat, RenderOptions, RenderResult, RenderStats};
pub use wizard::{PaperBackend, PaperRequest, Wizard, WizardState};

use rayon::prelude::*;
use std::path::Path;

/// Read a text file and format it.
///
/// # Example
///
/// ```no_run
/// let doc = paperfmt::format_file("draft.txt").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn format_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    format_file_with_options(path, &FormatOptions::default())
}

/// Read a text file and format it with custom options.
pub fn format_file_with_options<P: AsRef<Path>>(path: P, options: &FormatOptions) -> Result<Document> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(format_with_options(&text, options))
}

/// Read and format several files in parallel.
///
/// Results are returned in the same order as `paths`.
pub fn format_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &FormatOptions,
) -> Vec<Result<Document>> {
    let formatter = Formatter::new(options.clone());
    paths
        .par_iter()
        .map(|path| -> Result<Document> {
            let text = std::fs::read_to_string(path.as_ref())?;
            Ok(formatter.format(&text))
        })
        .collect()
}

/// Format text and render it as Markdown.
///
/// # Example
///
/// ```
/// let md = paperfmt::to_markdown("Methods\n\nWe counted.").unwrap();
/// assert_eq!(md, "## Methods\n\nWe counted.");
/// ```
pub fn to_markdown(text: &str) -> Result<String> {
    let paper = Paper::from_document(format(text));
    render::to_markdown(&paper, &RenderOptions::default())
}

/// Format text and render it as plain text.
pub fn to_text(text: &str, options: &RenderOptions) -> Result<String> {
    let paper = Paper::from_document(format(text));
    render::to_text(&paper, options)
}

/// Format text and render the document as JSON.
pub fn to_json(text: &str, json_format: JsonFormat) -> Result<String> {
    render::document_to_json(&format(text), json_format)
}

/// Builder for formatting and rendering papers.
///
/// # Example
///
/// ```
/// use paperfmt::Paperfmt;
///
/// let markdown = Paperfmt::new()
///     .with_title("On Soil")
///     .with_author("A. Researcher")
///     .with_references("Doe, J. (2020). Dirt.")
///     .format("Introduction\n\nSoil matters.")
///     .to_markdown()?;
/// assert!(markdown.contains("## References"));
/// # Ok::<(), paperfmt::Error>(())
/// ```
pub struct Paperfmt {
    format_options: FormatOptions,
    render_options: RenderOptions,
    title: Option<String>,
    author: Option<String>,
    abstract_text: Option<String>,
    references: Option<String>,
}

impl Paperfmt {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            format_options: FormatOptions::default(),
            render_options: RenderOptions::default(),
            title: None,
            author: None,
            abstract_text: None,
            references: None,
        }
    }

    /// Set format options.
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_len(mut self, len: usize) -> Self {
        self.format_options = self.format_options.with_max_heading_len(len);
        self
    }

    /// Set the paper title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author line.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the abstract.
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    /// Set the raw references string (one entry per line).
    pub fn with_references(mut self, raw: impl Into<String>) -> Self {
        self.references = Some(raw.into());
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Format text and return a result wrapper.
    pub fn format(self, text: &str) -> PaperfmtResult {
        let body = format_with_options(text, &self.format_options);
        self.finish(body)
    }

    /// Read a text file, format it, and return a result wrapper.
    pub fn format_file<P: AsRef<Path>>(self, path: P) -> Result<PaperfmtResult> {
        let body = format_file_with_options(path, &self.format_options)?;
        Ok(self.finish(body))
    }

    fn finish(self, body: Document) -> PaperfmtResult {
        let mut paper = Paper::from_document(body);
        if let Some(title) = self.title {
            paper = paper.with_title(title);
        }
        if let Some(author) = self.author {
            paper = paper.with_author(author);
        }
        if let Some(abstract_text) = self.abstract_text {
            paper = paper.with_abstract(abstract_text);
        }
        if let Some(ref raw) = self.references {
            paper = paper.with_references(raw);
        }

        PaperfmtResult {
            paper,
            render_options: self.render_options,
        }
    }
}

impl Default for Paperfmt {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of formatting a paper.
pub struct PaperfmtResult {
    /// The formatted paper
    pub paper: Paper,
    /// Render options to use
    render_options: RenderOptions,
}

impl PaperfmtResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.paper, &self.render_options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.paper, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.paper, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.paper, format)
    }

    /// Get the formatted body.
    pub fn document(&self) -> &Document {
        &self.paper.body
    }
}
