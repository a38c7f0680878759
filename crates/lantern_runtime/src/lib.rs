//! Terminal front end, game loop, and save files for Lantern.
//!
//! This crate provides:
//! - [`pipeline`] - The bounded channels between the terminal and the game thread
//! - [`Session`] - Owns the world and applies one line of input at a time
//! - [`Repl`] - The terminal loop feeding lines into the pipeline
//! - [`SaveStore`] - `MessagePack` save files on disk
//!
//! The `lantern` binary runs the [`Repl`] on the main thread and
//! [`game::play`] on a `lantern-game` thread.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod game;
mod highlight;
pub mod pipeline;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod view;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use game::run_game;
pub use pipeline::{Frontend, InputPipeline};
pub use repl::Repl;
pub use serialize::SaveStore;
pub use session::Session;
pub use view::PipelineView;
