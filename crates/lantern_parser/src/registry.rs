//! The ordered parser list and the shared completion index.

use std::fmt;

use lantern_foundation::{CompletionTrie, Result};
use lantern_world::CompletionContext;
use tracing::debug;

use crate::command::Command;
use crate::parser::{CommandParser, ParseOutcome};
use crate::verbs::Verb;

/// What the registry made of a line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A parser accepted the line.
    Command(Command),
    /// No parser accepted it, but one recognized the bare verb.
    Incomplete(String),
    /// Nothing recognized the line.
    Unknown,
}

/// Parsers in priority order plus the completion index built from them.
///
/// Built once at startup, then shared read-only.
pub struct CommandRegistry {
    parsers: Vec<Box<dyn CommandParser>>,
    trie: CompletionTrie,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            trie: CompletionTrie::new(),
        }
    }

    /// Creates a registry holding every built-in verb.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a verb pattern fails to compile.
    pub fn standard() -> Result<Self> {
        let verbs = Verb::all()?;
        Ok(Self::with_parsers(
            verbs.into_iter().map(|verb| Box::new(verb) as Box<dyn CommandParser>),
        ))
    }

    /// Creates a registry from parsers in priority order.
    #[must_use]
    pub fn with_parsers<I>(parsers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn CommandParser>>,
    {
        let mut registry = Self::new();
        for parser in parsers {
            registry.register(parser);
        }
        registry
    }

    /// Appends a parser at the lowest priority and indexes its completions.
    pub fn register(&mut self, parser: Box<dyn CommandParser>) {
        self.trie.insert_all(parser.direct_completions().iter().copied());
        self.parsers.push(parser);
    }

    /// Number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parser names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parsers.iter().map(|parser| parser.name())
    }

    /// Every literal verb phrase, in priority order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.direct_completions().iter().copied())
    }

    /// Returns the first command any parser produces.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Command> {
        match self.dispatch(text) {
            Dispatch::Command(command) => Some(command),
            Dispatch::Incomplete(_) | Dispatch::Unknown => None,
        }
    }

    /// Parses `text`, keeping the first incomplete-verb diagnostic if no
    /// parser accepts it.
    #[must_use]
    pub fn dispatch(&self, text: &str) -> Dispatch {
        let mut incomplete = None;
        for parser in &self.parsers {
            match parser.parse(text) {
                ParseOutcome::Command(command) => {
                    debug!(parser = parser.name(), ?command, "dispatched");
                    return Dispatch::Command(command);
                }
                ParseOutcome::Incomplete(message) => {
                    if incomplete.is_none() {
                        debug!(parser = parser.name(), %message, "incomplete");
                        incomplete = Some(message);
                    }
                }
                ParseOutcome::NoMatch => {}
            }
        }
        incomplete.map_or(Dispatch::Unknown, Dispatch::Incomplete)
    }

    /// Completions for `text`.
    ///
    /// Literal completions from the index win outright; parsers' contextual
    /// completions are only gathered when the index has nothing.
    #[must_use]
    pub fn autocomplete(&self, ctx: &CompletionContext, text: &str) -> Vec<String> {
        let direct = self.trie.search(text);
        if !direct.is_empty() {
            return direct;
        }
        let mut contextual = Vec::new();
        for parser in &self.parsers {
            parser.contextual_completions(ctx, text, &mut contextual);
        }
        contextual
    }

    /// Help listing, one `- name: description` line per parser.
    #[must_use]
    pub fn describe(&self) -> String {
        self.parsers
            .iter()
            .map(|parser| format!("- {}: {}", parser.name(), parser.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("parsers", &self.names().collect::<Vec<_>>())
            .field("completions", &self.trie.len())
            .finish_non_exhaustive()
    }
}
