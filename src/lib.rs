//! Lantern - A small text adventure
//!
//! This crate re-exports all layers of the Lantern system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lantern_runtime    — Input pipeline, session, REPL, save files
//! Layer 2: lantern_parser     — Verb parsers, commands, completion registry
//! Layer 1: lantern_world      — Rooms, items, player, view seam
//! Layer 0: lantern_foundation — Errors, blocking channel, completion trie
//! ```

pub use lantern_foundation as foundation;
pub use lantern_parser as parser;
pub use lantern_runtime as runtime;
pub use lantern_world as world;
