//! Assembly of confirmed sections into a paper.

use crate::format::{format, strip_heading_marker};
use crate::model::{Document, Paper, ReferenceStyle, Section, Work};

/// Build a paper from the confirmed `(name, content)` pairs.
///
/// `abstract` sections feed the metadata abstract and `references` sections
/// feed the reference list; every other section is formatted and placed
/// under its own name. Cited `works` are appended to the references in
/// `style`.
pub(crate) fn assemble(
    title: Option<String>,
    author: Option<&str>,
    confirmed: &[(String, String)],
    raw_references: &str,
    works: &[Work],
    style: ReferenceStyle,
) -> Paper {
    let mut body = Document::new();
    let mut abstract_text: Option<String> = None;
    let mut raw_refs = String::new();

    for (name, content) in confirmed {
        if name.eq_ignore_ascii_case("abstract") {
            abstract_text = Some(abstract_body(content));
            continue;
        }
        if name.eq_ignore_ascii_case("references") {
            raw_refs.push_str(content);
            raw_refs.push('\n');
            continue;
        }
        for section in sections_for(name, content) {
            body.add_section(section);
        }
    }

    raw_refs.push_str(raw_references);

    let mut paper = Paper::from_document(body)
        .with_references(&raw_refs)
        .with_works(works, style);
    if let Some(title) = title {
        paper = paper.with_title(title);
    }
    if let Some(author) = author {
        paper = paper.with_author(author);
    }
    if let Some(abstract_text) = abstract_text {
        paper = paper.with_abstract(abstract_text);
    }
    paper
}

/// Format one generated section and hang it under `name`.
///
/// Untitled leading paragraphs belong to `name`; a leading heading that
/// repeats `name` is folded into it; later headings become sub-sections.
fn sections_for(name: &str, content: &str) -> Vec<Section> {
    let doc = format(content);
    let mut sections = doc.sections.into_iter().peekable();
    let mut head = Section::titled(name);

    if let Some(first) = sections.peek() {
        let absorbs = match first.title {
            None => true,
            Some(ref title) => title.eq_ignore_ascii_case(name),
        };
        if absorbs {
            if let Some(first) = sections.next() {
                head.paragraphs = first.paragraphs;
            }
        }
    }

    let mut result = vec![head];
    result.extend(sections);
    result
}

/// Abstract text with a leading "Abstract" heading removed and paragraphs
/// joined by blank lines.
fn abstract_body(content: &str) -> String {
    let doc = format(content);
    doc.sections
        .iter()
        .flat_map(|s| {
            let heading = s
                .title
                .as_deref()
                .filter(|t| !strip_heading_marker(t).eq_ignore_ascii_case("abstract"));
            heading.into_iter().chain(s.paragraphs.iter().map(String::as_str))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
