//! Line editor abstraction for the terminal front end.
//!
//! The [`Repl`](crate::Repl) reads through a [`LineEditor`], so the rustyline
//! terminal editor and the script-file reader are interchangeable.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use lantern_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::CommandHighlighter;
use crate::pipeline::Frontend;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct LanternHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for LanternHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes whole command lines from the game's suggestions.
struct CommandCompleter {
    frontend: Frontend,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .frontend
            .suggest(&line[..pos])
            .into_iter()
            .map(|suggestion| Pair {
                display: suggestion.clone(),
                replacement: suggestion,
            })
            .collect();

        // Suggestions are whole lines, so they replace from the start.
        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<LanternHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a terminal editor completing against `frontend`.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(frontend: Frontend) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = LanternHelper {
            highlighter: CommandHighlighter::new(frontend.phrases()),
            completer: CommandCompleter { frontend },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Reads lines from a file or any buffered reader, echoing them after the
/// prompt so the transcript reads like a terminal session.
pub struct ScriptEditor<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    echo: W,
}

impl ScriptEditor<BufReader<File>> {
    /// Opens a script file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open script '{}': {e}", path.display())))?;
        Ok(Self::new(BufReader::new(file), io::stdout()))
    }
}

impl<R: BufRead, W: Write> ScriptEditor<R, W> {
    /// Reads from `reader`, echoing to `echo`.
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }

    /// Consumes the editor, returning the echo stream.
    pub fn into_echo(self) -> W {
        self.echo
    }
}

impl<R: BufRead, W: Write> LineEditor for ScriptEditor<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::io(format!("failed to read script: {e}")))?;
        if read == 0 {
            return Ok(ReadResult::Eof);
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        let _ = writeln!(self.echo, "{prompt}{line}");
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, _line: &str) {}
}
