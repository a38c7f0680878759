//! The built-in starting world.

use crate::direction::Direction;
use crate::item::{Item, ItemKind, OvenStatus, PizzaState};
use crate::player::Player;
use crate::room::{Room, RoomKind};
use crate::world::World;

impl World {
    /// The university every new game starts in, saved under `save_name`.
    ///
    /// ```text
    /// [Bedroom]<=> Hallway <=> Outdoors <=> Lecture Hall
    ///                 |
    ///              Kitchen <=> Storeroom
    /// ```
    #[must_use]
    pub fn initial(save_name: impl Into<String>) -> Self {
        let mut world = World::new(Player::new("student", "bedroom"))
            .with_room(
                Room::new("bedroom", "Bedroom", "in your cramped student bedroom")
                    .with_exit(Direction::East, "hallway")
                    .with_item("computer")
                    .with_item("mold"),
            )
            .with_room(
                Room::new("hallway", "Hallway", "in the hallway of your flat")
                    .with_exit(Direction::West, "bedroom")
                    .with_exit(Direction::East, "outdoors")
                    .with_exit(Direction::South, "kitchen"),
            )
            .with_room(
                Room::new("kitchen", "Kitchen", "in the shared kitchen")
                    .with_exit(Direction::North, "hallway")
                    .with_exit(Direction::East, "storeroom")
                    .with_item("oven"),
            )
            .with_room(
                Room::new("storeroom", "Storeroom", "in a dusty storeroom")
                    .with_exit(Direction::West, "kitchen")
                    .with_item("keys")
                    .with_item("winning_key")
                    .with_item("textbook"),
            )
            .with_room(
                Room::new("outdoors", "Outdoors", "outside, on the university campus")
                    .with_exit(Direction::West, "hallway")
                    .with_exit(Direction::East, "winning_room")
                    .with_kind(RoomKind::Locked { locked: true }),
            )
            .with_room(
                Room::new("winning_room", "Lecture Hall", "in the lecture hall")
                    .with_exit(Direction::West, "outdoors")
                    .with_kind(RoomKind::Winning {
                        required_item: "winning_key".into(),
                    }),
            )
            .with_item(
                Item::new("keys", "Keys", "the keys to your flat")
                    .with_kind(ItemKind::Keys { was_taken: false }),
            )
            .with_item(
                Item::new("computer", "Computer", "a gaming computer humming on the desk")
                    .with_kind(ItemKind::Computer),
            )
            .with_item(
                Item::new("oven", "Oven", "an oven with a pizza inside").with_kind(ItemKind::Oven {
                    status: OvenStatus::Cooking,
                }),
            )
            .with_item(
                Item::new("pizza", "Pizza", "a pizza fresh from the oven").with_kind(ItemKind::Pizza {
                    state: PizzaState::Good,
                    tried_to_eat_burnt: false,
                }),
            )
            .with_item(
                Item::new("mold", "Black Mold", "a patch of black mold in the corner")
                    .with_kind(ItemKind::BlackMold { tried_to_eat: false }),
            )
            .with_item(Item::new(
                "winning_key",
                "Student Card",
                "your student card, which opens the lecture hall",
            ))
            .with_item(Item::new("textbook", "Textbook", "an unopened textbook"));
        world.set_save_name(save_name);
        world
    }
}
