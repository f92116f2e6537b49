//! Plain text rendering for papers.

use crate::error::Result;
use crate::model::Paper;

use super::{CleanupPipeline, RenderOptions};

/// Convert a paper to plain text.
///
/// Titles sit on their own lines; paragraphs are separated by blank lines
/// and hard-wrapped when `options.line_width` is non-zero.
pub fn to_text(paper: &Paper, options: &RenderOptions) -> Result<String> {
    let width = options.line_width as usize;
    let mut blocks: Vec<String> = Vec::new();
    let meta = &paper.metadata;

    if let Some(ref title) = meta.title {
        blocks.push(title.clone());
    }
    if let Some(ref author) = meta.author {
        blocks.push(author.clone());
    }
    if let Some(ref abstract_text) = meta.abstract_text {
        blocks.push(options.abstract_heading.clone());
        blocks.push(wrap(abstract_text.trim(), width));
    }

    for section in &paper.body.sections {
        if let Some(ref title) = section.title {
            blocks.push(title.clone());
        }
        for para in &section.paragraphs {
            blocks.push(wrap(para, width));
        }
    }

    if options.include_references && !paper.references.is_empty() {
        blocks.push(options.references_heading.clone());
        let list = paper
            .references
            .iter()
            .enumerate()
            .map(|(idx, r)| wrap(&format!("{}. {}", idx + 1, r), width))
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(list);
    }

    let mut output = blocks.join("\n\n");

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

/// Greedy word wrap by character count. Words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
