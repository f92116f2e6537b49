//! Markdown rendering for papers.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::{Paper, Reference, Section};

use super::{CleanupPipeline, RenderOptions, RenderResult, RenderStats};

/// Convert a paper to Markdown.
pub fn to_markdown(paper: &Paper, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(paper)
}

/// Convert a paper to Markdown with statistics.
pub fn to_markdown_with_stats(paper: &Paper, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(paper)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a paper to Markdown.
    pub fn render(mut self, paper: &Paper) -> Result<String> {
        self.render_internal(paper)
    }

    /// Render a paper to Markdown with statistics.
    pub fn render_with_stats(mut self, paper: &Paper) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(paper)?;

        Ok(RenderResult::new(
            content,
            paper.metadata.clone(),
            self.stats,
        ))
    }

    fn render_internal(&mut self, paper: &Paper) -> Result<String> {
        let body = self.render_body(paper);

        if self.options.collect_stats {
            self.stats.count_text(&body);
        }

        if !self.options.include_frontmatter {
            return Ok(body);
        }

        let frontmatter = paper
            .metadata
            .to_yaml_frontmatter(paper.body.section_count(), paper.references.len());
        Ok(format!("{}\n{}", frontmatter, body).trim().to_string())
    }

    /// Everything below the frontmatter, cleaned up and trimmed.
    fn render_body(&mut self, paper: &Paper) -> String {
        let mut output = String::new();

        self.render_front_matter(&mut output, paper);

        for section in &paper.body.sections {
            self.render_section(&mut output, section);
        }

        if self.options.include_references && !paper.references.is_empty() {
            self.render_references(&mut output, &paper.references);
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        output.trim().to_string()
    }

    fn render_front_matter(&mut self, output: &mut String, paper: &Paper) {
        let meta = &paper.metadata;

        if let Some(ref title) = meta.title {
            output.push_str("# ");
            output.push_str(&escape_markdown(title));
            output.push_str("\n\n");
        }

        if let Some(ref author) = meta.author {
            output.push('*');
            output.push_str(&escape_markdown(author));
            output.push_str("*\n\n");
        }

        if let Some(ref abstract_text) = meta.abstract_text {
            self.push_heading(output, &self.options.abstract_heading);
            output.push_str(&escape_block_start(abstract_text.trim()));
            output.push_str("\n\n");
        }
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        if self.options.collect_stats {
            self.stats.add_section();
        }

        if let Some(ref title) = section.title {
            if self.options.collect_stats {
                self.stats.add_heading();
            }
            self.push_heading(output, title);
        }

        for para in &section.paragraphs {
            if self.options.collect_stats {
                self.stats.add_paragraph();
            }
            output.push_str(&escape_block_start(para));
            output.push_str("\n\n");
        }
    }

    fn render_references(&mut self, output: &mut String, refs: &[Reference]) {
        self.push_heading(output, &self.options.references_heading);

        for (idx, reference) in refs.iter().enumerate() {
            if self.options.collect_stats {
                self.stats.add_reference();
            }
            output.push_str(&format!("{}. {}\n", idx + 1, reference));
        }
        output.push('\n');
    }

    fn push_heading(&self, output: &mut String, text: &str) {
        let prefix = "#".repeat(self.options.section_level() as usize);
        output.push_str(&prefix);
        output.push(' ');
        output.push_str(&escape_markdown(text));
        output.push_str("\n\n");
    }
}

/// Escape characters that would change the meaning of a heading or emphasis line.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_' | '`' | '[' | ']') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Escape a leading character that would turn a paragraph into a heading,
/// block quote, list item or thematic break.
fn escape_block_start(text: &str) -> Cow<'_, str> {
    match text.chars().next() {
        Some('#' | '>' | '-' | '+' | '*' | '=') => Cow::Owned(format!("\\{}", text)),
        Some(c) if c.is_ascii_digit() => {
            // Ordered list marker: up to nine digits, then '.' or ')'
            let digits = text.bytes().take_while(u8::is_ascii_digit).count();
            let rest = &text[digits..];
            if digits <= 9 && (rest.starts_with('.') || rest.starts_with(')')) {
                let after = &rest[1..];
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    return Cow::Owned(format!("{}\\{}", &text[..digits], rest));
                }
            }
            Cow::Borrowed(text)
        }
        _ => Cow::Borrowed(text),
    }
}
