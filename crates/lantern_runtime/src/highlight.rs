//! Input highlighting for the terminal.

use std::borrow::Cow;

/// Colors a recognized verb phrase at the start of the line.
pub struct CommandHighlighter {
    /// Known phrases, longest first so "pick up" beats "pick".
    phrases: Vec<String>,
}

impl CommandHighlighter {
    /// Creates a highlighter for the given verb phrases.
    #[must_use]
    pub fn new(mut phrases: Vec<String>) -> Self {
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();
        Self { phrases }
    }

    /// Length of the verb phrase `line` starts with, if any.
    fn verb_len(&self, line: &str) -> Option<usize> {
        self.phrases
            .iter()
            .find(|phrase| {
                line.strip_prefix(phrase.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
            })
            .map(String::len)
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match self.verb_len(line) {
            Some(len) => Cow::Owned(format!("\x1b[36m{}\x1b[0m{}", &line[..len], &line[len..])),
            None => Cow::Borrowed(line),
        }
    }
}
