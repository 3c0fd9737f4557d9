use crate::{
    editing::{EditorHost, LineSource, Patch, Position, Selection},
    parsing::{
        LineClass, LineKind, MarkdownLineClassifier,
        kinds::{BlockQuote, CodeFence, FenceMarker, OpenFence, Paragraph},
    },
    structure::{SectionKind, StructureSource},
    style::Style,
};

use super::{clip::Clip, output::OutputLines};

/// Containers nested deeper than this on one line are read as plain text.
pub const MAX_NESTING: usize = 100;

/// Line-by-line driver that places a style's wrappers around each run of
/// formattable text in a selection.
///
/// A `Formatter` is built for one operation and consumed by
/// [`Formatter::format`]; none of its state outlives that call.
///
/// ```
/// use multiline_format_engine::{Formatter, Position, Selection, Style};
///
/// let lines = ["# Title", "body text"];
/// let style = Style::new("<<", ">>");
/// let selection = Selection::new(Position::new(0, 0), Position::new(1, 9));
/// let patch = Formatter::new(&style).format(&lines, selection);
/// assert_eq!(patch.text, "# <<Title>>\n<<body text>>");
/// ```
pub struct Formatter<'a> {
    style: &'a Style,
    structure: Option<&'a dyn StructureSource>,
    scan_context: bool,
    classifier: MarkdownLineClassifier,
    out: OutputLines,
    /// The next formattable text starts a new run.
    preceded_by_break: bool,
    /// Blockquote depth seen so far on the current line.
    quote_depth: u8,
    /// Depth recorded at the last quote-level increase or blank line.
    previous_quote_depth: u8,
    fence: Option<OpenFence>,
    /// The previous line left paragraph text open, so an indented line
    /// continues it rather than starting a code block.
    lazy_text: bool,
    /// Inside a list item, where indentation belongs to the item.
    in_list: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(style: &'a Style) -> Self {
        Self {
            style,
            structure: None,
            scan_context: true,
            classifier: MarkdownLineClassifier,
            out: OutputLines::default(),
            preceded_by_break: true,
            quote_depth: 0,
            previous_quote_depth: 0,
            fence: None,
            lazy_text: false,
            in_list: false,
        }
    }

    /// Uses `structure` to mask lines it knows to be code.
    #[must_use]
    pub fn with_structure(mut self, structure: &'a dyn StructureSource) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Whether to read the lines above the selection first, so fences,
    /// quotes and lists that started earlier are known. On by default.
    #[must_use]
    pub fn with_context_scan(mut self, enabled: bool) -> Self {
        self.scan_context = enabled;
        self
    }

    /// Computes the replacement for `selection` without touching the document.
    pub fn format<D: LineSource + ?Sized>(mut self, doc: &D, selection: Selection) -> Patch {
        let Selection { from, to } = Selection::new(selection.from, selection.to);

        if from == to {
            return Patch {
                selection: Selection::cursor(from),
                text: format!("{}{}", self.style.left, self.style.right),
                cursor: Some(Position::new(from.line, from.ch + self.style.left.len())),
            };
        }

        if self.scan_context && from.line > 0 {
            for index in 0..from.line {
                let line = doc.line(index);
                self.push_line(index, &line, Clip::full(&line));
            }
            self.begin_selection();
        }

        for index in from.line..=to.line {
            let line = doc.line(index);
            let start = if index == from.line { from.ch } else { 0 };
            let end = if index == to.line { to.ch } else { line.len() };
            self.push_line(index, &line, Clip::new(start, end));
        }
        self.close_run();

        Patch {
            selection: Selection { from, to },
            text: self.out.join(),
            cursor: None,
        }
    }

    /// Formats the host's current selection and applies the result to it.
    pub fn format_selection<H: EditorHost + ?Sized>(self, host: &mut H) -> Patch {
        let selection = host.selection();
        let patch = self.format(&*host, selection);
        host.replace_selection(&patch.text);
        if let Some(cursor) = patch.cursor {
            host.set_cursor(cursor);
        }
        patch
    }

    /// Drops the context-scan output; state that describes the document
    /// (fences, quote depth, list context) carries over.
    fn begin_selection(&mut self) {
        self.out = OutputLines::default();
        self.preceded_by_break = true;
    }

    fn push_line(&mut self, index: usize, line: &str, clip: Clip) {
        let rendered = self.format_line(index, line, clip);
        self.out.push(rendered);
    }

    fn format_line(&mut self, index: usize, line: &str, clip: Clip) -> String {
        self.quote_depth = 0;

        if self.is_masked_code(index) {
            log::debug!("line {index}: code block per structure");
            return self.code_line(line, clip);
        }

        if let Some(fence) = self.fence {
            match BlockQuote::strip_depth(line, fence.quote_depth) {
                Some(offset) => {
                    if CodeFence::closes(&fence, &line[offset..]) {
                        log::debug!("line {index}: fence closed");
                        self.fence = None;
                    }
                    return self.code_line(line, clip);
                }
                None => {
                    log::debug!("line {index}: left quote level {}, fence ends", fence.quote_depth);
                    self.fence = None;
                }
            }
        }

        let class = self.classifier.classify(line);
        log::debug!("line {index}: {:?} prefix={:?}", class.kind, class.prefix);
        self.track_list_context(line, &class);
        self.process(line, clip, class, 0)
    }

    fn is_masked_code(&self, index: usize) -> bool {
        self.structure
            .is_some_and(|s| s.block_kind(index) == Some(SectionKind::Code))
    }

    fn track_list_context(&mut self, line: &str, class: &LineClass<'_>) {
        let at_margin = !line.starts_with(char::is_whitespace);
        match class.kind {
            LineKind::ListItem => self.in_list = true,
            LineKind::IndentedCode => {}
            LineKind::Paragraph if class.is_blank() => {}
            // Unindented text right after item text is a lazy continuation.
            LineKind::Paragraph => {
                if at_margin && !self.lazy_text {
                    self.in_list = false;
                }
            }
            LineKind::Heading { .. }
            | LineKind::ThematicBreak
            | LineKind::BlockQuote
            | LineKind::Fence(_) => {
                if at_margin {
                    self.in_list = false;
                }
            }
        }
    }

    fn process(&mut self, line: &str, clip: Clip, class: LineClass<'_>, depth: usize) -> String {
        let LineClass {
            kind,
            prefix,
            remainder,
        } = class;
        match kind {
            // Indentation inside a list item belongs to the item.
            LineKind::IndentedCode if self.in_list => self.nest(prefix, remainder, clip, depth),
            // Paragraph text cannot be interrupted by indented lines; no block
            // syntax starts here.
            LineKind::IndentedCode if self.lazy_text => {
                let (indent, text) = Paragraph::split(line);
                let text = self.paragraph(text, clip.shift(indent.len()));
                format!("{}{}", clip.apply(indent), text)
            }
            LineKind::IndentedCode => self.code_line(line, clip),
            LineKind::ThematicBreak => {
                log::debug!("thematic break");
                self.code_line(line, clip)
            }
            LineKind::Fence(marker) => self.open_fence(marker, line, clip),
            LineKind::Heading { level } => {
                log::debug!("heading level {level}");
                let text = self.heading(remainder, clip.shift(prefix.len()));
                format!("{}{}", clip.apply(prefix), text)
            }
            LineKind::ListItem => self.list_item(line, prefix, remainder, clip, depth),
            LineKind::BlockQuote => self.block_quote(line, prefix, remainder, clip, depth),
            LineKind::Paragraph => {
                let text = self.paragraph(remainder, clip.shift(prefix.len()));
                format!("{}{}", clip.apply(prefix), text)
            }
        }
    }

    /// Passes `prefix` through and processes `remainder` as a line of its own.
    fn nest(&mut self, prefix: &str, remainder: &str, clip: Clip, depth: usize) -> String {
        let depth = depth + 1;
        let class = if depth >= MAX_NESTING {
            let (p, r) = Paragraph::split(remainder);
            LineClass::new(LineKind::Paragraph, p, r)
        } else {
            self.classifier.classify_nested(remainder)
        };
        let text = self.process(remainder, clip.shift(prefix.len()), class, depth);
        format!("{}{}", clip.apply(prefix), text)
    }

    fn close_run(&mut self) {
        self.out.close_open_wrapper(&self.style.right);
    }

    /// Code and rules are copied verbatim and always end the current run.
    fn code_line(&mut self, line: &str, clip: Clip) -> String {
        self.close_run();
        self.preceded_by_break = true;
        self.lazy_text = false;
        clip.apply(line).to_string()
    }

    fn open_fence(&mut self, marker: FenceMarker, line: &str, clip: Clip) -> String {
        log::debug!("fence opened at quote level {}", self.quote_depth);
        self.fence = Some(OpenFence {
            marker,
            quote_depth: self.quote_depth,
        });
        self.code_line(line, clip)
    }

    /// Keeps fence tracking right for text that is emitted verbatim.
    fn note_skipped_fence(&mut self, text: &str) {
        if let Some((_, _, marker)) = CodeFence::split(text) {
            self.fence = Some(OpenFence {
                marker,
                quote_depth: self.quote_depth,
            });
        }
    }

    fn heading(&mut self, remainder: &str, clip: Clip) -> String {
        let selected = clip.apply(remainder);
        self.close_run();
        self.preceded_by_break = true;
        self.lazy_text = false;

        if self.style.skip_headings || selected.trim().is_empty() {
            return selected.to_string();
        }
        self.out.mark_formattable();
        format!("{}{}", self.style.left, selected)
    }

    fn list_item(
        &mut self,
        line: &str,
        prefix: &str,
        remainder: &str,
        clip: Clip,
        depth: usize,
    ) -> String {
        self.preceded_by_break = true;
        if self.style.skip_list_items {
            self.close_run();
            self.lazy_text = !remainder.trim().is_empty();
            self.note_skipped_fence(remainder);
            return clip.apply(line).to_string();
        }
        self.nest(prefix, remainder, clip, depth)
    }

    fn block_quote(
        &mut self,
        line: &str,
        prefix: &str,
        remainder: &str,
        clip: Clip,
        depth: usize,
    ) -> String {
        self.quote_depth = self.quote_depth.saturating_add(1);
        log::debug!(
            "blockquote level {} (previous {})",
            self.quote_depth,
            self.previous_quote_depth
        );
        self.enter_quote_level();

        if self.style.skip_blockquotes {
            let (nested, offset) = BlockQuote::strip_prefixes(remainder);
            for _ in 0..nested {
                self.quote_depth = self.quote_depth.saturating_add(1);
                self.enter_quote_level();
            }
            let content = &remainder[offset..];
            self.note_skipped_fence(content);
            self.preceded_by_break = true;
            self.lazy_text = !content.trim().is_empty();
            if !self.lazy_text {
                self.previous_quote_depth = self.quote_depth;
            }
            return clip.apply(line).to_string();
        }
        self.nest(prefix, remainder, clip, depth)
    }

    /// A deeper quote level starts a fresh block.
    fn enter_quote_level(&mut self) {
        if self.previous_quote_depth < self.quote_depth {
            self.close_run();
            self.preceded_by_break = true;
            self.previous_quote_depth = self.quote_depth;
        }
    }

    fn paragraph(&mut self, remainder: &str, clip: Clip) -> String {
        if remainder.is_empty() {
            self.close_run();
            self.preceded_by_break = true;
            self.previous_quote_depth = self.quote_depth;
            self.lazy_text = false;
            return String::new();
        }

        self.lazy_text = true;
        let selected = clip.apply(remainder);
        if selected.trim().is_empty() {
            return selected.to_string();
        }

        let mut text = String::with_capacity(self.style.left.len() + selected.len());
        if self.preceded_by_break {
            self.preceded_by_break = false;
            self.close_run();
            text.push_str(&self.style.left);
        }
        text.push_str(selected);
        self.out.mark_formattable();
        text
    }
}
