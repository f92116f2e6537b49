//! Benchmarks for paperfmt formatting performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks format and render synthetic drafts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic draft with the given number of sections.
fn create_test_draft(section_count: usize) -> String {
    let mut text = String::new();

    for i in 0..section_count {
        text.push_str(&format!("Section {}\n\n", i + 1));
        for j in 0..3 {
            text.push_str(&format!(
                "Paragraph {} of section {} has a few lines of text\n\
                 that wrap the way a plain-text draft usually does,\n\
                 and it ends with a full stop.\n\n",
                j + 1,
                i + 1
            ));
        }
    }

    text
}

/// Benchmark the heading predicate on its own.
fn bench_heading_detection(c: &mut Criterion) {
    let options = paperfmt::FormatOptions::default();

    c.bench_function("heading_candidate", |b| {
        b.iter(|| paperfmt::looks_like_heading(black_box("Related Work"), true, &options));
    });

    c.bench_function("heading_sentence", |b| {
        b.iter(|| {
            paperfmt::looks_like_heading(
                black_box("This line is a sentence and ends with a period."),
                true,
                &options,
            )
        });
    });
}

/// Benchmark formatting at various sizes.
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for section_count in [1, 10, 100].iter() {
        let draft = create_test_draft(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| paperfmt::format(black_box(&draft)));
        });
    }

    group.finish();
}

/// Benchmark formatting plus Markdown rendering.
fn bench_markdown(c: &mut Criterion) {
    let draft = create_test_draft(50);

    c.bench_function("markdown_50_sections", |b| {
        b.iter(|| {
            paperfmt::Paperfmt::new()
                .with_title("Benchmark Paper")
                .with_cleanup(paperfmt::CleanupPreset::Standard)
                .format(black_box(&draft))
                .to_markdown()
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_heading_detection,
    bench_formatting,
    bench_markdown,
);
criterion_main!(benches);
