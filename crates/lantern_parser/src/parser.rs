//! The capability interface every command parser provides.

use lantern_world::CompletionContext;

use crate::command::Command;

/// What a parser made of a line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line is a complete command.
    Command(Command),
    /// The verb was recognized but its arguments are missing.
    Incomplete(String),
    /// Not this parser's verb.
    NoMatch,
}

/// Turns text into commands for one verb family, and offers completions.
///
/// Parsers are immutable once registered and shared across threads.
pub trait CommandParser: Send + Sync {
    /// Short name listed in help.
    fn name(&self) -> &str;

    /// One-line description listed in help.
    fn description(&self) -> &str;

    /// Literal phrases registered once into the completion index.
    fn direct_completions(&self) -> &[&str];

    /// Full-line completions that need world knowledge.
    ///
    /// Only consulted when no direct completion matches `text`.
    fn contextual_completions(&self, _ctx: &CompletionContext, _text: &str, _out: &mut Vec<String>) {}

    /// Parses a full line of input.
    fn parse(&self, text: &str) -> ParseOutcome;
}
