use criterion::{Criterion, criterion_group, criterion_main};
use multiline_format_engine::{
    Formatter, MarkdownLineClassifier, Position, SectionCache, Selection, Style,
};
mod common;

fn whole_document(lines: &[&str]) -> Selection {
    let last = lines.len() - 1;
    Selection::new(Position::new(0, 0), Position::new(last, lines[last].len()))
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let content = common::generate_markdown_content(100);
    let lines = common::lines(&content);
    let classifier = MarkdownLineClassifier;
    group.bench_function("mixed_document", |b| {
        b.iter(|| {
            for line in &lines {
                std::hint::black_box(classifier.classify(std::hint::black_box(line)));
            }
        });
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.sample_size(20);

    let style = Style::cyan_highlight();
    let content = common::generate_markdown_content(100);
    let lines = common::lines(&content);
    let selection = whole_document(&lines);

    group.bench_function("whole_document", |b| {
        b.iter(|| {
            let patch = Formatter::new(&style).format(lines.as_slice(), selection);
            std::hint::black_box(patch);
        });
    });

    let cache = SectionCache::from_markdown(&content);
    group.bench_function("whole_document_with_structure", |b| {
        b.iter(|| {
            let patch = Formatter::new(&style)
                .with_structure(&cache)
                .format(lines.as_slice(), selection);
            std::hint::black_box(patch);
        });
    });

    // Selection at the end of the document pays for the context scan
    let last = lines.len() - 1;
    let tail = Selection::new(Position::new(last, 0), Position::new(last, lines[last].len()));
    group.bench_function("last_line_with_context_scan", |b| {
        b.iter(|| {
            let patch = Formatter::new(&style).format(lines.as_slice(), tail);
            std::hint::black_box(patch);
        });
    });

    let quotes = common::generate_nested_quotes(1000, 8);
    let quote_lines = common::lines(&quotes);
    let quote_selection = whole_document(&quote_lines);
    group.bench_function("nested_quotes", |b| {
        b.iter(|| {
            let patch = Formatter::new(&style).format(quote_lines.as_slice(), quote_selection);
            std::hint::black_box(patch);
        });
    });

    group.finish();
}

fn bench_section_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("from_markdown", |b| {
        b.iter(|| {
            let cache = SectionCache::from_markdown(std::hint::black_box(&content));
            std::hint::black_box(cache);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_format, bench_section_cache);
criterion_main!(benches);
