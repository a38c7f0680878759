//! Per-kind reactions of items to being taken and used.

use crate::item::{Item, ItemKind, OvenStatus, PizzaState};
use crate::room::RoomKind;
use crate::view::View;
use crate::world::World;

impl World {
    pub(crate) fn pick_up(&mut self, view: &mut dyn View, item: &Item) {
        match item.kind {
            ItemKind::Computer => {
                view.present_message("You are too weak to pick up the computer.");
            }
            ItemKind::Oven { .. } => {
                view.present_message("You are too weak to pick up the oven.");
            }
            ItemKind::Keys { was_taken } => {
                if !self.move_to_inventory(view, item) {
                    return;
                }
                if !was_taken {
                    self.set_kind(&item.id, ItemKind::Keys { was_taken: true });
                    if self.oven_status() == Some(OvenStatus::Cooking) {
                        self.set_oven_status(OvenStatus::Ready);
                    }
                }
            }
            ItemKind::BlackMold { .. } => {
                if self.current_room().is_some_and(|room| room.items.contains(&item.id)) {
                    view.present_message("You pick up the black mold... Why would you do this?");
                }
                self.move_to_inventory(view, item);
            }
            ItemKind::Inert | ItemKind::Pizza { .. } => {
                self.move_to_inventory(view, item);
            }
        }
    }

    pub(crate) fn use_in_inventory(&mut self, view: &mut dyn View, item: &Item) {
        match item.kind {
            ItemKind::Keys { .. } => self.unlock_adjacent(view),
            ItemKind::Pizza {
                state: PizzaState::Good,
                ..
            } => {
                view.present_message(
                    "You enjoy a well cooked pizza, preparing you for the dangerous journey outside.",
                );
                self.player.remove_item(&item.id);
            }
            ItemKind::Pizza {
                state: PizzaState::Burnt,
                tried_to_eat_burnt,
            } => {
                if tried_to_eat_burnt {
                    view.present_message(
                        "You decide to eat the burnt pizza, powering through the smell. You lose all will to live.",
                    );
                    self.player.remove_item(&item.id);
                    return;
                }
                view.present_message(
                    "The smell of the burnt pizza is overwhelming, and you do not manage to eat it.",
                );
                self.set_kind(
                    &item.id,
                    ItemKind::Pizza {
                        state: PizzaState::Burnt,
                        tried_to_eat_burnt: true,
                    },
                );
            }
            ItemKind::BlackMold { tried_to_eat: false } => {
                view.present_message("You look at the black mold, and realize it looks kind of tasty.");
                view.present_message("One bite couldn't hurt, right?");
                self.set_kind(&item.id, ItemKind::BlackMold { tried_to_eat: true });
            }
            ItemKind::BlackMold { tried_to_eat: true } => {
                view.present_message(
                    "You bite into the black mold. It tastes great! You realize that all you need in this life is to find more black mold to eat.",
                );
                view.present_message("Throughout the rest of the day you binge eat a kilogram of black mold, and die.");
                self.ending(view, "You got the bad ending. Press enter to exit.");
            }
            ItemKind::Inert | ItemKind::Computer | ItemKind::Oven { .. } => {
                view.present_message(&format!(
                    "You try to use the {}, but nothing happens.",
                    item.display_name().to_lowercase()
                ));
            }
        }
    }

    pub(crate) fn use_in_room(&mut self, view: &mut dyn View, item: &Item) {
        match item.kind {
            ItemKind::Computer => {
                view.present_message(
                    "You sit behind the desk, having decided that going outside isn't worth it.",
                );
                view.present_message(
                    "You play some video games until you fall asleep, having wasted the day away.",
                );
                self.ending(view, "You got the bad ending. Press enter to exit.");
            }
            ItemKind::Oven { status } => match status {
                OvenStatus::Cooking => view.present_message("The pizza is still cooking."),
                OvenStatus::Ready => {
                    view.present_message("You open the oven and take out the perfectly cooked pizza.");
                    self.hand_out_pizza(PizzaState::Good);
                }
                OvenStatus::Burnt => {
                    view.present_message("You open the oven in a hurry, and are hit by a wave of smoke.");
                    view.present_message("You burnt the pizza.");
                    self.hand_out_pizza(PizzaState::Burnt);
                }
                OvenStatus::Taken => view.present_message("The oven is empty."),
            },
            ItemKind::Pizza { .. } => {
                view.present_message(&format!(
                    "You think about eating the {} off the floor, but realize you're above that.",
                    item.display_name().to_lowercase()
                ));
            }
            ItemKind::BlackMold { .. } => {
                view.present_message("You realize that \"using\" the black mold is a bad idea.");
            }
            ItemKind::Inert | ItemKind::Keys { .. } => {
                view.present_message(&format!(
                    "You try to use the {} in {}, but nothing happens.",
                    item.display_name().to_lowercase(),
                    self.current_room_name()
                ));
            }
        }
    }

    /// Unlocks the locked room next to the player, burning a finished pizza
    /// that is still in the oven.
    fn unlock_adjacent(&mut self, view: &mut dyn View) {
        let door = self.current_room().and_then(|room| {
            room.exits.values().find_map(|id| {
                self.rooms
                    .get(id)
                    .and_then(|target| match target.kind {
                        RoomKind::Locked { locked } => Some((id.clone(), locked)),
                        _ => None,
                    })
            })
        });
        match door {
            None => view.present_urgent("You can't use the keys here."),
            Some((_, false)) => view.present_urgent("The door is already unlocked."),
            Some((id, true)) => {
                if let Some(room) = self.rooms.get_mut(&id) {
                    room.kind = RoomKind::Locked { locked: false };
                }
                view.present_message("You use the keys to unlock the door.");
                if self.oven_status() == Some(OvenStatus::Ready) {
                    self.set_oven_status(OvenStatus::Burnt);
                    view.present_message("You smell something burning in the kitchen.");
                }
            }
        }
    }

    /// Shows the final message, waits for one line, then ends the game.
    fn ending(&mut self, view: &mut dyn View, message: &str) {
        view.present_urgent(message);
        let _ = view.read_line();
        self.request_exit();
    }

    fn hand_out_pizza(&mut self, state: PizzaState) {
        let kind = ItemKind::Pizza {
            state,
            tried_to_eat_burnt: false,
        };
        let id = self
            .items
            .values()
            .find(|item| matches!(item.kind, ItemKind::Pizza { .. }))
            .map_or_else(|| "pizza".to_string(), |item| item.id.clone());
        if let Some(pizza) = self.items.get_mut(&id) {
            pizza.kind = kind;
        } else {
            self.items.insert(
                id.clone(),
                Item::new(id.clone(), "Pizza", "a pizza fresh from the oven").with_kind(kind),
            );
        }
        self.player.add_item(id);
        self.set_oven_status(OvenStatus::Taken);
    }

    fn oven_status(&self) -> Option<OvenStatus> {
        self.items.values().find_map(|item| match item.kind {
            ItemKind::Oven { status } => Some(status),
            _ => None,
        })
    }

    fn set_oven_status(&mut self, status: OvenStatus) {
        let oven = self
            .items
            .values()
            .find(|item| matches!(item.kind, ItemKind::Oven { .. }))
            .map(|item| item.id.clone());
        if let Some(id) = oven {
            self.set_kind(&id, ItemKind::Oven { status });
        }
    }

    fn set_kind(&mut self, id: &str, kind: ItemKind) {
        if let Some(item) = self.items.get_mut(id) {
            item.kind = kind;
        }
    }
}
