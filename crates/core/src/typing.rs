//! Replays a string as progressively longer prefixes.

/// Character-by-character replay of a command string.
///
/// Positions count characters, not bytes, so every prefix is valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSimulator {
    text: String,
    // Byte offset of the end of each prefix: boundaries[i] is the end of the i-char prefix.
    boundaries: Vec<usize>,
    position: usize,
}

impl TypingSimulator {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = std::iter::once(0)
            .chain(text.char_indices().map(|(offset, c)| offset + c.len_utf8()))
            .collect();

        Self {
            text,
            boundaries,
            position: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the full text.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn prefix(&self) -> &str {
        &self.text[..self.boundaries[self.position]]
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.len()
    }

    /// Types one more character. Returns `false` once the full text is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.position += 1;
        true
    }

    pub fn finish(&mut self) {
        self.position = self.len();
    }
}
