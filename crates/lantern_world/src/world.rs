//! World state: rooms, items, and the player.
//!
//! Rooms and items live in persistent maps, so cloning a `World` is O(1) and
//! a clone taken before a command doubles as a rollback point.

use im::OrdMap;
use lantern_foundation::{Error, Result};

use crate::context::CompletionContext;
use crate::direction::Direction;
use crate::item::Item;
use crate::layout;
use crate::player::Player;
use crate::room::{Room, RoomKind};
use crate::view::View;

#[cfg(feature = "serde")]
mod serde_support {
    use super::World;
    use crate::item::Item;
    use crate::player::Player;
    use crate::room::Room;
    use im::OrdMap;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for World {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            // The save name and exit flag belong to the session, not the save.
            let mut state = serializer.serialize_struct("World", 3)?;
            state.serialize_field("rooms", &self.rooms)?;
            state.serialize_field("items", &self.items)?;
            state.serialize_field("player", &self.player)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Stored {
        rooms: OrdMap<String, Room>,
        items: OrdMap<String, Item>,
        player: Player,
    }

    impl<'de> Deserialize<'de> for World {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let stored = Stored::deserialize(deserializer)?;
            Ok(World {
                rooms: stored.rooms,
                items: stored.items,
                player: stored.player,
                save_name: String::new(),
                exit_requested: false,
            })
        }
    }
}

/// The complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub(crate) rooms: OrdMap<String, Room>,
    pub(crate) items: OrdMap<String, Item>,
    pub(crate) player: Player,
    save_name: String,
    exit_requested: bool,
}

impl World {
    /// Creates a world containing only `player`.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            rooms: OrdMap::new(),
            items: OrdMap::new(),
            player,
            save_name: String::new(),
            exit_requested: false,
        }
    }

    /// Adds or replaces a room.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.insert(room.id.clone(), room);
        self
    }

    /// Adds or replaces an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    // --- Accessors ---

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// All rooms by id.
    #[must_use]
    pub fn rooms(&self) -> &OrdMap<String, Room> {
        &self.rooms
    }

    /// All items by id.
    #[must_use]
    pub fn items(&self) -> &OrdMap<String, Item> {
        &self.items
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// The room the player stands in.
    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player.room)
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Finds an item by id, then by case-insensitive name.
    #[must_use]
    pub fn lookup_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name).or_else(|| {
            let wanted = name.to_lowercase();
            self.items.values().find(|item| {
                item.name.to_lowercase() == wanted
                    || item.display_name().to_lowercase() == wanted
            })
        })
    }

    /// Name the world is saved under.
    #[must_use]
    pub fn save_name(&self) -> &str {
        &self.save_name
    }

    /// Sets the name the world is saved under.
    pub fn set_save_name(&mut self, name: impl Into<String>) {
        self.save_name = name.into();
    }

    /// Returns true once the game has ended.
    #[must_use]
    pub fn is_exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Ends the game after the current command.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Checks that every room, exit, and item reference resolves.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidWorld` error naming the first dangling reference.
    pub fn validate(&self) -> Result<()> {
        if !self.rooms.contains_key(&self.player.room) {
            return Err(Error::invalid_world(format!(
                "player stands in unknown room '{}'",
                self.player.room
            )));
        }
        for item in &self.player.items {
            if !self.items.contains_key(item) {
                return Err(Error::invalid_world(format!(
                    "player carries unknown item '{item}'"
                )));
            }
        }
        for (id, room) in &self.rooms {
            if let Some(target) = room.exits.values().find(|t| !self.rooms.contains_key(*t)) {
                return Err(Error::invalid_world(format!(
                    "room '{id}' has an exit to unknown room '{target}'"
                )));
            }
            if let Some(item) = room.items.iter().find(|i| !self.items.contains_key(*i)) {
                return Err(Error::invalid_world(format!(
                    "room '{id}' holds unknown item '{item}'"
                )));
            }
        }
        Ok(())
    }

    /// Names visible to the completer right now.
    #[must_use]
    pub fn completion_context(&self) -> CompletionContext {
        let (room_items, exits) = self.current_room().map_or_else(
            || (Vec::new(), Vec::new()),
            |room| {
                (
                    room.items.iter().cloned().collect(),
                    room.exits.keys().map(|d| d.as_str().to_string()).collect(),
                )
            },
        );
        CompletionContext {
            room_items,
            inventory: self.player.items.iter().cloned().collect(),
            exits,
            save_names: Vec::new(),
        }
    }

    // --- Commands ---

    /// Describes the inventory and the current room.
    pub fn look(&self, view: &mut dyn View) {
        view.present_message(&format!("Your items: {}", self.names(&self.player.items)));
        if let Some(room) = self.current_room() {
            let names: Vec<&str> = room
                .items
                .iter()
                .filter_map(|id| self.items.get(id))
                .map(Item::display_name)
                .collect();
            view.present_message(&room.long_description(&names));
        }
    }

    /// Prints the help text followed by `commands`.
    pub fn show_help(&self, view: &mut dyn View, commands: &str) {
        view.present_message("You are lost. You are alone. You wander around the university.");
        view.present_message("Possible commands are:");
        view.present_message(commands);
    }

    /// Prints the map with the current room bracketed.
    pub fn show_map(&self, view: &mut dyn View) {
        view.present_message(&format!(
            "Map:\n{}",
            layout::render(&self.rooms, &self.player.room)
        ));
    }

    /// Moves the player through the exit named by `place`.
    pub fn go_to(&mut self, view: &mut dyn View, place: &str) {
        let target = Direction::parse(place)
            .and_then(|direction| self.current_room()?.exit(direction))
            .and_then(|id| self.rooms.get(id))
            .cloned();
        let Some(target) = target else {
            view.present_message("There is no door!");
            return;
        };

        match &target.kind {
            RoomKind::Locked { locked: true } => {
                view.present_urgent("The door is locked.");
                return;
            }
            RoomKind::Winning { required_item } => {
                if !self.player.has_item(required_item) {
                    view.present_urgent("You pull on the handle, but nothing happens.");
                    return;
                }
                self.player.room = target.id;
                view.present_message("You win!");
                self.request_exit();
                return;
            }
            RoomKind::Plain | RoomKind::Locked { locked: false } => {}
        }

        self.player.room = target.id;
        self.look(view);
    }

    /// Picks up an item from the current room.
    pub fn take_item(&mut self, view: &mut dyn View, name: &str) {
        let Some(item) = self.lookup_item(name) else {
            view.present_message("I can't find this item!");
            return;
        };
        let item = item.clone();
        self.pick_up(view, &item);
    }

    /// Puts a carried item down in the current room.
    pub fn drop_item(&mut self, view: &mut dyn View, name: &str) {
        let Some(item) = self.lookup_item(name) else {
            view.present_message("I don't have this!");
            return;
        };
        let (id, display) = (item.id.clone(), item.display_name().to_string());
        if !self.player.remove_item(&id) {
            view.present_message("I don't have this!");
            return;
        }
        if let Some(room) = self.rooms.get_mut(&self.player.room) {
            room.items.insert(id);
        }
        view.present_message(&format!("You drop the {}.", display.to_lowercase()));
    }

    /// Uses an item from the inventory, or one lying in the current room.
    pub fn use_item(&mut self, view: &mut dyn View, name: &str) {
        let Some(item) = self.lookup_item(name) else {
            view.present_urgent(&format!("What's a \"{name}\"?"));
            return;
        };
        let item = item.clone();
        if self.player.has_item(&item.id) {
            self.use_in_inventory(view, &item);
        } else if self.current_room().is_some_and(|room| room.items.contains(&item.id)) {
            self.use_in_room(view, &item);
        } else {
            view.present_urgent("You don't have this!");
        }
    }

    // --- Helpers ---

    /// Moves `id` from the current room into the inventory.
    pub(crate) fn move_to_inventory(&mut self, view: &mut dyn View, item: &Item) -> bool {
        let removed = self
            .rooms
            .get_mut(&self.player.room)
            .is_some_and(|room| room.items.remove(&item.id).is_some());
        if !removed {
            view.present_message("I can't find this item!");
            return false;
        }
        self.player.add_item(item.id.clone());
        view.present_message(&format!(
            "You pick up the {}.",
            item.display_name().to_lowercase()
        ));
        true
    }

    pub(crate) fn current_room_name(&self) -> &str {
        self.current_room().map_or("", |room| room.name.as_str())
    }

    fn names(&self, ids: &im::OrdSet<String>) -> String {
        ids.iter()
            .filter_map(|id| self.items.get(id))
            .map(Item::display_name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
