//! Integration tests for the text formatter.

use paperfmt::{format, format_with_options, looks_like_heading, Document, FormatOptions, Section};

fn assert_no_blank_paragraphs(doc: &Document) {
    for section in &doc.sections {
        assert!(!section.is_empty(), "empty section emitted: {:?}", section);
        for para in &section.paragraphs {
            assert!(!para.trim().is_empty(), "blank paragraph in {:?}", section);
        }
    }
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(format(""), Document::new());
    assert_eq!(format("   \n\n  ").section_count(), 0);
    assert_eq!(format("\r\n\t\r\n").section_count(), 0);
}

#[test]
fn test_single_sentence() {
    let doc = format("Hello world.");
    assert_eq!(
        doc.sections,
        vec![Section::untitled().with_paragraph("Hello world.")]
    );
}

#[test]
fn test_introduction_methodology_example() {
    let input = "Introduction\n\
                 \n\
                 This is the first paragraph of the introduction.\n\
                 \n\
                 Methodology\n\
                 \n\
                 We used a mixed-methods approach.\n";

    let doc = format(input);
    assert_eq!(
        doc.sections,
        vec![
            Section::titled("Introduction")
                .with_paragraph("This is the first paragraph of the introduction."),
            Section::titled("Methodology").with_paragraph("We used a mixed-methods approach."),
        ]
    );
}

#[test]
fn test_terminal_punctuation_never_heading() {
    for line in ["This is a sentence.", "Short,", "List item;"] {
        let doc = format(&format!("{}\n\nMore text follows here.", line));
        assert_eq!(doc.sections[0].title, None, "{:?} treated as heading", line);
        assert_eq!(doc.sections[0].paragraphs[0], line);
    }
}

#[test]
fn test_paragraph_lines_are_joined() {
    let doc = format("The first line\n   continues here\nand ends here.\n");
    // First line is short and unpunctuated, so it becomes the title
    assert_eq!(doc.sections[0].title.as_deref(), Some("The first line"));
    assert_eq!(
        doc.sections[0].paragraphs,
        vec!["continues here and ends here."]
    );

    let doc = format("A sentence that wraps,\nacross two lines.");
    assert_eq!(doc.sections[0].title, None);
    assert_eq!(
        doc.sections[0].paragraphs,
        vec!["A sentence that wraps, across two lines."]
    );
}

#[test]
fn test_long_line_is_paragraph() {
    let long = "word ".repeat(20);
    let doc = format(long.trim());
    assert_eq!(doc.sections[0].title, None);
    assert_eq!(doc.sections[0].paragraphs.len(), 1);
}

#[test]
fn test_threshold_is_tunable() {
    let input = "A rather long heading line that exceeds twenty\n\nBody.";

    let doc = format(input);
    assert!(doc.sections[0].title.is_some());

    let options = FormatOptions::new().with_max_heading_len(20);
    let doc = format_with_options(input, &options);
    assert_eq!(doc.sections[0].title, None);
    assert_eq!(doc.sections[0].paragraphs.len(), 2);
}

#[test]
fn test_determinism() {
    let input = "Abstract\n\nSome words.\n\n# Intro\nMore words\nhere.\n\n\n\u{1F600} emoji line.";
    assert_eq!(format(input), format(input));
}

#[test]
fn test_unicode_passes_through() {
    let input = "Résumé des résultats\n\nLes données montrent une tendance claire, 日本語のテキスト.";
    let doc = format(input);
    assert_eq!(doc.sections[0].title.as_deref(), Some("Résumé des résultats"));
    assert_eq!(
        doc.sections[0].paragraphs,
        vec!["Les données montrent une tendance claire, 日本語のテキスト."]
    );
}

#[test]
fn test_no_blank_paragraphs_for_assorted_inputs() {
    let inputs = [
        "",
        "\n\n\n",
        "a",
        "a.\n\n\n\nb.",
        "Title\n\n\n",
        "   lead\n\t\n  trail   ",
        "\u{0}\u{1}\u{2}",
        "# \n\n##\n\n###### x",
        "line\r\nline\r\n\r\nnext.",
    ];
    for input in inputs {
        let doc = format(input);
        assert_no_blank_paragraphs(&doc);
    }
}

#[test]
fn test_very_long_input() {
    let block = "Section Heading\nSome body text that is a full sentence.\n\n";
    let input = block.repeat(2_000);
    let doc = format(&input);
    assert_eq!(doc.section_count(), 2_000);
    assert_eq!(doc.paragraph_count(), 2_000);
}

#[test]
fn test_heading_predicate_is_public() {
    let options = FormatOptions::default();
    assert!(looks_like_heading("Results", true, &options));
    assert!(!looks_like_heading("Results.", true, &options));
}

#[test]
fn test_content_is_preserved() {
    let input = "Preface text.\n\nChapter One\n\nIt was a dark night.\nRain fell.\n\nEnd";
    let doc = format(input);

    let words: Vec<&str> = input.split_whitespace().collect();
    let plain = doc.plain_text();
    let rebuilt: Vec<&str> = plain.split_whitespace().collect();
    assert_eq!(words, rebuilt);

    let last = doc.sections.last().unwrap();
    assert_eq!(last.title.as_deref(), Some("Chapter One"));
    assert_eq!(last.paragraphs, vec!["It was a dark night. Rain fell.", "End"]);
}

#[test]
fn test_trailing_heading_like_line_is_paragraph() {
    let doc = format("Introduction\n\nSome text here.\n\nSee appendix");
    assert_eq!(
        doc.sections,
        vec![Section::titled("Introduction")
            .with_paragraph("Some text here.")
            .with_paragraph("See appendix")]
    );

    // The whole input being one heading-like line is still a heading
    let doc = format("See appendix");
    assert_eq!(doc.sections, vec![Section::titled("See appendix")]);

    let options = FormatOptions::new().with_trailing_headings(true);
    let doc = format_with_options("Introduction\n\nSome text here.\n\nSee appendix", &options);
    assert_eq!(doc.section_count(), 2);
    assert_eq!(doc.sections[1], Section::titled("See appendix"));
}
