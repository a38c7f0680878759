//! Map rendering of the starting world.

use lantern_world::{ScriptedView, World};

fn map_of(world: &World) -> String {
    let mut view = ScriptedView::default();
    world.show_map(&mut view);
    view.last_text().unwrap().to_string()
}

#[test]
fn map_marks_the_current_room() {
    let mut world = World::initial("map");
    let map = map_of(&world);
    assert!(map.starts_with("Map:\n"));
    assert!(map.contains("[Bedroom]"));
    assert!(!map.contains("[Hallway]"));

    world.go_to(&mut ScriptedView::default(), "east");
    let map = map_of(&world);
    assert!(map.contains("[Hallway]"));
    assert!(map.contains(" Bedroom "));
}

#[test]
fn every_room_is_drawn() {
    let map = map_of(&World::initial("map"));
    for name in ["Bedroom", "Hallway", "Kitchen", "Storeroom", "Outdoors", "Lecture Hall"] {
        assert!(map.contains(name), "{name} missing from\n{map}");
    }
    assert!(map.lines().all(|line| line == line.trim_end()));
}
