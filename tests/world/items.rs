//! Taking, dropping, and looking up items.

use lantern_world::{ScriptedView, World};

#[test]
fn take_and_drop_move_items() {
    let mut world = World::initial("items");
    let mut view = ScriptedView::default();
    world.take_item(&mut view, "mold");
    assert!(world.player().has_item("mold"));
    assert!(!world.current_room().unwrap().items.contains("mold"));

    world.go_to(&mut view, "east");
    view.clear();
    world.drop_item(&mut view, "mold");
    assert_eq!(view.messages(), vec!["You drop the black mold."]);
    assert!(world.current_room().unwrap().items.contains("mold"));
}

#[test]
fn heavy_things_stay_put() {
    let mut world = World::initial("items");
    let mut view = ScriptedView::default();
    world.take_item(&mut view, "computer");
    assert_eq!(view.messages(), vec!["You are too weak to pick up the computer."]);
    assert!(!world.player().has_item("computer"));
}

#[test]
fn refusals() {
    let mut world = World::initial("items");
    let mut view = ScriptedView::default();
    world.take_item(&mut view, "textbook");
    world.drop_item(&mut view, "textbook");
    world.use_item(&mut view, "spoon");
    assert_eq!(
        view.messages(),
        vec!["I can't find this item!", "I don't have this!"]
    );
    assert_eq!(view.urgent(), vec!["What's a \"spoon\"?"]);
}

#[test]
fn items_are_found_by_name_or_id() {
    let world = World::initial("items");
    assert_eq!(world.lookup_item("winning_key").unwrap().id, "winning_key");
    assert_eq!(world.lookup_item("student card").unwrap().id, "winning_key");
    assert_eq!(world.lookup_item("KEYS").unwrap().id, "keys");
    assert!(world.lookup_item("spoon").is_none());
}

#[test]
fn completion_context_follows_the_player() {
    let mut world = World::initial("items");
    let ctx = world.completion_context();
    assert_eq!(ctx.room_items, vec!["computer", "mold"]);
    assert_eq!(ctx.exits, vec!["east"]);
    assert!(ctx.inventory.is_empty());

    let mut view = ScriptedView::default();
    world.take_item(&mut view, "mold");
    world.go_to(&mut view, "east");
    let ctx = world.completion_context();
    assert!(ctx.room_items.is_empty());
    assert_eq!(ctx.inventory, vec!["mold"]);
    assert_eq!(ctx.exits.len(), 3);
}

#[test]
fn look_lists_inventory_then_room() {
    let world = World::initial("items");
    let mut view = ScriptedView::default();
    world.look(&mut view);
    let messages = view.messages();
    assert_eq!(messages[0], "Your items: ");
    assert!(messages[1].starts_with("You are in your cramped student bedroom.\nExits: East"));
}
