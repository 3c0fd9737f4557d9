//! # Structural Cache
//!
//! Pre-parsed top-level block boundaries for a document, the way an editor's
//! metadata cache exposes "sections". The formatter treats this as advisory:
//! the only verdict it honours is "this line is code", which stops code block
//! contents from being read as Markdown when the textual classifier alone
//! would be fooled (indented code with no blank line context, for example).

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Type tag of a top-level section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Paragraph,
    Heading,
    List,
    BlockQuote,
    /// Fenced or indented code block.
    Code,
    Table,
    ThematicBreak,
    Html,
    Other,
}

/// A top-level block spanning `start_line..=end_line` (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub start_line: usize,
    pub end_line: usize,
}

/// Advisory block-type lookup consumed by the formatter.
pub trait StructureSource {
    /// The kind of the block enclosing `line`, if known.
    fn block_kind(&self, line: usize) -> Option<SectionKind>;
}

/// Sorted, non-overlapping sections with binary-search lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCache {
    sections: Vec<Section>,
}

impl SectionCache {
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.start_line);
        Self { sections }
    }

    /// Builds the cache from a pulldown-cmark parse of `text`.
    pub fn from_markdown(text: &str) -> Self {
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        let line_of = |offset: usize| line_starts.partition_point(|&start| start <= offset) - 1;

        let mut sections = Vec::new();
        let mut depth = 0usize;
        for (event, range) in Parser::new_ext(text, parser_options()).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        sections.push(Section {
                            kind: section_kind(&tag),
                            start_line: line_of(range.start),
                            end_line: line_of(range.end.saturating_sub(1).max(range.start)),
                        });
                    }
                    depth += 1;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Rule if depth == 0 => sections.push(Section {
                    kind: SectionKind::ThematicBreak,
                    start_line: line_of(range.start),
                    end_line: line_of(range.start),
                }),
                _ => {}
            }
        }
        log::debug!("section cache built with {} sections", sections.len());
        Self::new(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Finds the section containing `line`.
    pub fn find(&self, line: usize) -> Option<&Section> {
        let idx = self.sections.partition_point(|s| s.end_line < line);
        self.sections
            .get(idx)
            .filter(|s| s.start_line <= line && line <= s.end_line)
    }
}

impl StructureSource for SectionCache {
    fn block_kind(&self, line: usize) -> Option<SectionKind> {
        self.find(line).map(|s| s.kind)
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
}

fn section_kind(tag: &Tag<'_>) -> SectionKind {
    match tag {
        Tag::Paragraph => SectionKind::Paragraph,
        Tag::Heading { .. } => SectionKind::Heading,
        Tag::BlockQuote(_) => SectionKind::BlockQuote,
        Tag::CodeBlock(_) => SectionKind::Code,
        Tag::List(_) => SectionKind::List,
        Tag::Table(_) => SectionKind::Table,
        Tag::HtmlBlock => SectionKind::Html,
        _ => SectionKind::Other,
    }
}
