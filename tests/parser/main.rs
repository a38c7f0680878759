//! Integration tests for Layer 2: Parser
//!
//! Dispatch through the standard registry and command execution.

mod completion;
mod dispatch;
mod execution;
