//! Integration tests for Layer 1: World
//!
//! Plays the starting world through its public commands.

mod endings;
mod items;
mod map;
