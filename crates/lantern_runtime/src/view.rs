//! A [`View`] for the terminal, reading input through the pipeline.

use std::io::{self, Stderr, Stdout, Write};

use lantern_world::View;

use crate::pipeline::InputPipeline;

/// Prints game output and reads lines from the [`InputPipeline`].
///
/// Messages go to `out`, errors to `err`. The prompt set by
/// [`View::present_prompt`] applies to the next read only.
pub struct PipelineView<W: Write = Stdout, E: Write = Stderr> {
    input: InputPipeline,
    out: W,
    err: E,
    default_prompt: String,
    next_prompt: Option<String>,
}

impl PipelineView {
    /// Creates a view writing to stdout and stderr.
    #[must_use]
    pub fn new(input: InputPipeline, prompt: impl Into<String>) -> Self {
        Self::with_writers(input, prompt, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> PipelineView<W, E> {
    /// Creates a view writing to the given streams.
    pub fn with_writers(input: InputPipeline, prompt: impl Into<String>, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            default_prompt: prompt.into(),
            next_prompt: None,
        }
    }

    /// The pipeline this view reads from.
    #[must_use]
    pub fn input(&self) -> &InputPipeline {
        &self.input
    }

    /// Consumes the view, returning its output streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> View for PipelineView<W, E> {
    fn present_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
        let _ = self.out.flush();
    }

    fn present_urgent(&mut self, message: &str) {
        let _ = writeln!(self.out, "! {message}");
        let _ = self.out.flush();
    }

    fn present_error(&mut self, message: &str) {
        let _ = writeln!(self.err, "ERROR: {message}");
        let _ = self.err.flush();
    }

    fn present_prompt(&mut self, prompt: &str) {
        self.next_prompt = Some(prompt.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        let prompt = self
            .next_prompt
            .take()
            .unwrap_or_else(|| self.default_prompt.clone());
        self.input.read_line(&prompt)
    }
}
