//! The player character.

use im::OrdSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the player is and what they carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Player name.
    pub name: String,
    /// Id of the current room.
    pub room: String,
    /// Ids of carried items.
    pub items: OrdSet<String>,
}

impl Player {
    /// Creates a player standing in `room` with empty hands.
    #[must_use]
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            items: OrdSet::new(),
        }
    }

    /// Returns true if the player carries `item`.
    #[must_use]
    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Adds an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.insert(item.into());
    }

    /// Removes an item from the inventory, returning whether it was held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.items.remove(item).is_some()
    }
}
