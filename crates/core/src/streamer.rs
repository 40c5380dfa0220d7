//! Line-by-line reveal of canned command output.

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStreamer {
    lines: Vec<String>,
    revealed: usize,
}

impl OutputStreamer {
    /// Splits `output` on newlines; empty lines are real lines.
    pub fn new(output: &str) -> Self {
        Self {
            lines: output.split('\n').map(str::to_string).collect(),
            revealed: 0,
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn revealed_lines(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.lines.len()
    }

    /// Reveals the next line, returning it, or `None` when everything is shown.
    pub fn reveal_next(&mut self) -> Option<&str> {
        let line = self.lines.get(self.revealed)?;
        self.revealed += 1;
        Some(line.as_str())
    }

    /// The revealed lines joined with `\n`.
    pub fn revealed_text(&self) -> String {
        self.lines[..self.revealed].iter().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_whole_lines() {
        let mut streamer = OutputStreamer::new("one\ntwo\nthree");
        assert_eq!(streamer.total_lines(), 3);
        assert_eq!(streamer.revealed_text(), "");

        assert_eq!(streamer.reveal_next(), Some("one"));
        assert_eq!(streamer.revealed_text(), "one");

        assert_eq!(streamer.reveal_next(), Some("two"));
        assert_eq!(streamer.revealed_text(), "one\ntwo");

        assert_eq!(streamer.reveal_next(), Some("three"));
        assert!(streamer.is_complete());
        assert_eq!(streamer.reveal_next(), None);
        assert_eq!(streamer.revealed_text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_blank_lines_survive() {
        let mut streamer = OutputStreamer::new("a\n\n\nb");
        while streamer.reveal_next().is_some() {}

        assert_eq!(streamer.revealed_lines(), 4);
        assert_eq!(streamer.revealed_text(), "a\n\n\nb");
    }

    #[test]
    fn test_trailing_newline_is_an_empty_line() {
        let mut streamer = OutputStreamer::new("done\n");
        assert_eq!(streamer.total_lines(), 2);
        streamer.reveal_next();
        streamer.reveal_next();
        assert_eq!(streamer.revealed_text(), "done\n");
    }
}
