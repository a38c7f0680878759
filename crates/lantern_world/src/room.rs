//! Rooms, their contents, and their exits.

use im::{OrdMap, OrdSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Entry rules attached to a room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoomKind {
    /// Anyone may enter.
    Plain,
    /// Entry is refused while locked.
    Locked {
        /// Whether the door is still locked.
        locked: bool,
    },
    /// Entering while holding `required_item` wins the game.
    Winning {
        /// Item id the player must carry.
        required_item: String,
    },
}

/// A location in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Stable identifier.
    pub id: String,
    /// Short name used on the map.
    pub name: String,
    /// Completes the sentence "You are ...".
    pub description: String,
    /// Ids of items lying here.
    pub items: OrdSet<String>,
    /// Neighbouring room ids by direction.
    pub exits: OrdMap<Direction, String>,
    /// Entry rules.
    pub kind: RoomKind,
}

impl Room {
    /// Creates an empty plain room.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: OrdSet::new(),
            exits: OrdMap::new(),
            kind: RoomKind::Plain,
        }
    }

    /// Places an item in the room.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.insert(item.into());
        self
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, room: impl Into<String>) -> Self {
        self.exits.insert(direction, room.into());
        self
    }

    /// Sets the entry rules.
    #[must_use]
    pub fn with_kind(mut self, kind: RoomKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the room id reached by going `direction`, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    /// Exits as a space-separated list.
    #[must_use]
    pub fn exit_string(&self) -> String {
        self.exits
            .keys()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The multi-line description shown by `look`, with `item_names` already
    /// resolved to display names.
    #[must_use]
    pub fn long_description(&self, item_names: &[&str]) -> String {
        format!(
            "You are {}.\nExits: {}\nItems: {}",
            self.description,
            self.exit_string(),
            item_names.join(" ")
        )
    }
}
