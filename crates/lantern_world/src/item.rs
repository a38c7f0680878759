//! Items and their per-kind state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cooking progress of the oven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OvenStatus {
    /// The pizza needs more time.
    Cooking,
    /// The pizza is done.
    Ready,
    /// The pizza was left in too long.
    Burnt,
    /// The pizza has been taken out.
    Taken,
}

/// Condition of the pizza once out of the oven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PizzaState {
    /// Perfectly cooked.
    Good,
    /// Inedible, mostly.
    Burnt,
}

/// Behaviour attached to an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// No special behaviour.
    Inert,
    /// Unlocks the outdoor door. Taking them the first time finishes the pizza.
    Keys {
        /// Whether the keys have been picked up before.
        was_taken: bool,
    },
    /// Too heavy to carry; using it ends the game.
    Computer,
    /// Too heavy to carry; using it hands out the pizza.
    Oven {
        /// Cooking progress.
        status: OvenStatus,
    },
    /// Edible, depending on its state.
    Pizza {
        /// Cooked or burnt.
        state: PizzaState,
        /// Whether the player already balked at eating it burnt.
        tried_to_eat_burnt: bool,
    },
    /// Please do not eat.
    BlackMold {
        /// Whether the player already considered eating it.
        tried_to_eat: bool,
    },
}

/// An item in the world, referenced from rooms and the inventory by id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Stable identifier, also what the player types.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Kind-specific behaviour and state.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an inert item.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Inert,
        }
    }

    /// Sets the item's behaviour.
    #[must_use]
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Name shown to the player, which may depend on state.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.kind {
            ItemKind::Pizza {
                state: PizzaState::Burnt,
                ..
            } => "Burnt Pizza",
            _ => &self.name,
        }
    }
}
