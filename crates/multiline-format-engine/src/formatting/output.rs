/// Output lines of one format operation plus the single open run.
///
/// `open` points at the output line that currently ends the open run and
/// will receive the right wrapper. [`OutputLines::close_open_wrapper`] is the
/// only code path that edits a line after it was pushed, which keeps "at most
/// one open run" a structural property.
#[derive(Debug, Default)]
pub struct OutputLines {
    lines: Vec<String>,
    open: Option<usize>,
}

impl OutputLines {
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Marks the line about to be pushed as the current end of the open run.
    pub fn mark_formattable(&mut self) {
        self.open = Some(self.lines.len());
    }

    pub fn has_open_run(&self) -> bool {
        self.open.is_some()
    }

    /// Closes the open run, inserting `right` before the trailing whitespace
    /// of its last formattable line. A no-op when nothing is open.
    pub fn close_open_wrapper(&mut self, right: &str) -> bool {
        let Some(index) = self.open.take() else {
            return false;
        };
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let content_end = line.trim_end().len();
        line.insert_str(content_end, right);
        log::debug!("closed run on output line {index}");
        true
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn join(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_without_open_run_is_noop() {
        let mut out = OutputLines::default();
        out.push("text".into());
        assert!(!out.close_open_wrapper("]"));
        assert_eq!(out.join(), "text");
    }

    #[test]
    fn close_goes_before_trailing_whitespace() {
        let mut out = OutputLines::default();
        out.mark_formattable();
        out.push("[text  ".into());
        assert!(out.close_open_wrapper("]"));
        assert_eq!(out.join(), "[text]  ");
        assert!(!out.has_open_run());
    }

    #[test]
    fn close_targets_marked_line_not_last_line() {
        let mut out = OutputLines::default();
        out.mark_formattable();
        out.push("[a".into());
        out.push(String::new());
        out.close_open_wrapper("]");
        assert_eq!(out.lines(), ["[a]", ""]);
    }
}
