//! Command parsing and completion for Lantern.
//!
//! Text goes through the [`CommandRegistry`], which asks each parser in
//! priority order for a [`Command`]:
//!
//! ```text
//! "pick up the key"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REGISTRY        │  → help, look, map, take, ... (first match wins)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VERB PATTERN    │  → minimal "take|pick up|grab", complete "... ([a-zA-Z_]+)"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Take("key"), executed against the World
//! └─────────────────┘
//! ```
//!
//! When nothing matches, [`CommandRegistry::autocomplete`] offers literal
//! completions from a prefix trie, falling back to completions built from the
//! current [`CompletionContext`](lantern_world::CompletionContext).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod pattern;
pub mod registry;
pub mod verbs;

pub use command::{Command, CommandContext, SaveAction, SaveStorage};
pub use parser::{CommandParser, ParseOutcome};
pub use pattern::VerbPattern;
pub use registry::{CommandRegistry, Dispatch};
pub use verbs::Verb;
