//! Two-pattern verb matching.
//!
//! A verb is recognized by a loose *minimal* pattern and accepted only by a
//! strict *complete* pattern. Text that is exactly the bare verb earns a
//! diagnostic ("Take what?"); anything else that fails the complete pattern is
//! silently not ours.

use lantern_foundation::{Error, Result};
use regex::{Captures, Regex};

/// Outcome of matching text against a [`VerbPattern`].
#[derive(Debug)]
pub enum PatternMatch<'t> {
    /// The complete pattern matched; captures hold the arguments.
    Complete(Captures<'t>),
    /// Only the bare verb was given.
    Incomplete(&'static str),
    /// Not this verb.
    NoMatch,
}

/// A minimal/complete regex pair with the message shown for bare verbs.
#[derive(Clone, Debug)]
pub struct VerbPattern {
    minimal: Regex,
    complete: Regex,
    incomplete_message: &'static str,
}

impl VerbPattern {
    /// Compiles a pattern pair. Both patterns must match the entire input,
    /// so they are wrapped in `^(?:...)$` here.
    ///
    /// # Errors
    ///
    /// Returns an internal error if either pattern fails to compile.
    pub fn new(minimal: &str, complete: &str, incomplete_message: &'static str) -> Result<Self> {
        Ok(Self {
            minimal: compile(minimal)?,
            complete: compile(complete)?,
            incomplete_message,
        })
    }

    /// Matches `text` against the pair.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> PatternMatch<'t> {
        if let Some(captures) = self.complete.captures(text) {
            return PatternMatch::Complete(captures);
        }
        if self.minimal.is_match(text) {
            PatternMatch::Incomplete(self.incomplete_message)
        } else {
            PatternMatch::NoMatch
        }
    }

    /// The message shown when only the bare verb was typed.
    #[must_use]
    pub fn incomplete_message(&self) -> &'static str {
        self.incomplete_message
    }
}

/// Compiles `pattern` so that it must match the whole input.
///
/// # Errors
///
/// Returns an internal error if the pattern is not a valid regex.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|e| Error::internal(format!("invalid pattern `{pattern}`: {e}")))
}

/// Pushes each candidate that extends `prefix`.
///
/// Candidates equal to the prefix are skipped; there is nothing to complete.
pub fn add_if_starts_with<I>(out: &mut Vec<String>, prefix: &str, candidates: I)
where
    I: IntoIterator<Item = String>,
{
    out.extend(
        candidates
            .into_iter()
            .filter(|candidate| candidate.starts_with(prefix) && candidate.len() != prefix.len()),
    );
}
