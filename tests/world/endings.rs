//! The ways a game can end, and the ways it refuses to.

use lantern_world::{ScriptedView, World};

/// Walks from the bedroom to the storeroom.
fn to_storeroom(world: &mut World, view: &mut ScriptedView) {
    for direction in ["east", "south", "east"] {
        world.go_to(view, direction);
    }
}

// =============================================================================
// Doors
// =============================================================================

#[test]
fn outdoors_starts_locked() {
    let mut world = World::initial("doors");
    let mut view = ScriptedView::default();
    world.go_to(&mut view, "east");
    view.clear();

    world.go_to(&mut view, "east");
    assert_eq!(view.urgent(), vec!["The door is locked."]);
    assert_eq!(world.player().room, "hallway");
}

#[test]
fn keys_only_work_next_to_a_locked_door() {
    let mut world = World::initial("doors");
    let mut view = ScriptedView::default();
    to_storeroom(&mut world, &mut view);
    world.take_item(&mut view, "keys");
    view.clear();

    world.use_item(&mut view, "keys");
    assert_eq!(view.urgent(), vec!["You can't use the keys here."]);

    for direction in ["west", "north"] {
        world.go_to(&mut view, direction);
    }
    view.clear();
    world.use_item(&mut view, "keys");
    assert_eq!(view.messages()[0], "You use the keys to unlock the door.");

    view.clear();
    world.use_item(&mut view, "keys");
    assert_eq!(view.urgent(), vec!["The door is already unlocked."]);
}

#[test]
fn lecture_hall_needs_the_student_card() {
    let mut world = World::initial("card");
    let mut view = ScriptedView::default();
    to_storeroom(&mut world, &mut view);
    world.take_item(&mut view, "keys");
    for direction in ["west", "north"] {
        world.go_to(&mut view, direction);
    }
    world.use_item(&mut view, "keys");
    world.go_to(&mut view, "east");
    view.clear();

    world.go_to(&mut view, "east");
    assert_eq!(
        view.urgent(),
        vec!["You pull on the handle, but nothing happens."]
    );
    assert_eq!(world.player().room, "outdoors");
    assert!(!world.is_exit_requested());
}

// =============================================================================
// Pizza
// =============================================================================

#[test]
fn unlocking_before_taking_the_pizza_burns_it() {
    let mut world = World::initial("burnt");
    let mut view = ScriptedView::default();
    to_storeroom(&mut world, &mut view);
    world.take_item(&mut view, "keys");
    for direction in ["west", "north"] {
        world.go_to(&mut view, direction);
    }
    view.clear();

    world.use_item(&mut view, "keys");
    assert_eq!(
        view.messages(),
        vec![
            "You use the keys to unlock the door.",
            "You smell something burning in the kitchen.",
        ]
    );

    world.go_to(&mut view, "south");
    view.clear();
    world.use_item(&mut view, "oven");
    assert_eq!(view.messages()[1], "You burnt the pizza.");
    assert_eq!(
        world.item("pizza").map(lantern_world::Item::display_name),
        Some("Burnt Pizza")
    );

    view.clear();
    world.use_item(&mut view, "pizza");
    assert!(view.messages()[0].starts_with("The smell of the burnt pizza"));
    assert!(world.player().has_item("pizza"));

    view.clear();
    world.use_item(&mut view, "pizza");
    assert!(view.messages()[0].starts_with("You decide to eat the burnt pizza"));
    assert!(!world.player().has_item("pizza"));
    assert!(!world.is_exit_requested());
}

#[test]
fn pizza_is_not_ready_before_the_keys_are_found() {
    let mut world = World::initial("early");
    let mut view = ScriptedView::default();
    world.go_to(&mut view, "east");
    world.go_to(&mut view, "south");
    view.clear();

    world.use_item(&mut view, "oven");
    assert_eq!(view.messages(), vec!["The pizza is still cooking."]);
}

// =============================================================================
// Bad Endings
// =============================================================================

#[test]
fn eating_the_mold_ends_the_game() {
    let mut world = World::initial("mold");
    let mut view = ScriptedView::new([""]);
    world.take_item(&mut view, "mold");
    world.use_item(&mut view, "mold");
    assert!(!world.is_exit_requested());

    world.use_item(&mut view, "mold");
    assert!(world.is_exit_requested());
    assert_eq!(
        view.urgent(),
        vec!["You got the bad ending. Press enter to exit."]
    );
}

#[test]
fn mold_cannot_be_used_from_the_floor() {
    let mut world = World::initial("mold");
    let mut view = ScriptedView::default();
    world.use_item(&mut view, "mold");
    assert_eq!(
        view.messages(),
        vec!["You realize that \"using\" the black mold is a bad idea."]
    );
}
