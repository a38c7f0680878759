//! The terminal side of the game: read a line whenever the game asks for one.

use lantern_foundation::Result;
use tracing::{debug, warn};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::pipeline::Frontend;

/// The producer loop.
///
/// Waits for the game thread to request a line, reads it with the editor's
/// prompt, and submits it. Ends when the pipeline shuts down or the editor
/// reports EOF or Ctrl+C, which shut the pipeline down.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Where lines go.
    frontend: Frontend,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(frontend: Frontend) -> Result<Self> {
        let editor = RustylineEditor::new(frontend.clone())?;
        Ok(Self::with_editor(editor, frontend))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, frontend: Frontend) -> Self {
        Self { editor, frontend }
    }

    /// Returns the pipeline frontend.
    #[must_use]
    pub const fn frontend(&self) -> &Frontend {
        &self.frontend
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails; the pipeline is shut down first.
    pub fn run(&mut self) -> Result<()> {
        while let Some(prompt) = self.frontend.next_prompt() {
            match self.editor.read_line(&prompt) {
                Ok(ReadResult::Line(line)) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    if !self.frontend.submit_line(line) {
                        warn!("line was not accepted");
                    }
                }
                Ok(ReadResult::Interrupted) => {
                    debug!("interrupted");
                    self.frontend.shutdown();
                }
                Ok(ReadResult::Eof) => {
                    debug!("end of input");
                    self.frontend.shutdown();
                }
                Err(e) => {
                    self.frontend.shutdown();
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
