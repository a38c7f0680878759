//! Core types and concurrent collections for Lantern.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`BlockingDeque`] - Bounded blocking double-ended channel
//! - [`CompletionTrie`] - Prefix completion index

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod deque;
pub mod error;
pub mod trie;

pub use deque::{BlockingDeque, Interrupted};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use trie::CompletionTrie;
