//! World model for Lantern: rooms, items, the player, and the view seam.
//!
//! This crate provides:
//! - [`World`] - Game state with persistent maps for cheap snapshots
//! - [`Room`], [`Item`], [`Player`] - The pieces a world is made of
//! - [`View`] - How game logic talks to whatever presents it
//! - [`CompletionContext`] - Names the completer may offer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod behavior;
pub mod context;
pub mod direction;
mod initial;
pub mod item;
pub mod layout;
pub mod player;
pub mod room;
pub mod view;
pub mod world;

pub use context::CompletionContext;
pub use direction::Direction;
pub use item::{Item, ItemKind, OvenStatus, PizzaState};
pub use player::Player;
pub use room::{Room, RoomKind};
pub use view::{Presented, ScriptedView, Selection, View};
pub use world::World;
