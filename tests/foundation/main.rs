//! Integration tests for Layer 0: Foundation
//!
//! Tests for the blocking channel, the completion trie, and errors.

mod errors;
mod trie;
