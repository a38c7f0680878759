//! Save files on disk, including broken ones.

use std::fs;

use lantern_foundation::ErrorKind;
use lantern_parser::SaveStorage;
use lantern_runtime::serialize::{self, SaveStore};
use lantern_runtime::Session;
use lantern_world::{ScriptedView, World};

use crate::support::{registry, session, temp_dir};

#[test]
fn save_and_load_through_commands() {
    let mut session = session("saves_cycle");
    let mut view = ScriptedView::default();
    session.advance(&mut view, "go east");
    session.advance(&mut view, "save as checkpoint");
    session.advance(&mut view, "go south");
    assert_eq!(session.world().player().room, "kitchen");

    view.clear();
    session.advance(&mut view, "load checkpoint");
    assert_eq!(view.messages()[0], "Loaded \"checkpoint\".");
    assert_eq!(session.world().player().room, "hallway");
    assert_eq!(session.world().save_name(), "checkpoint");

    let _ = fs::remove_dir_all(session.saves().dir());
}

#[test]
fn corrupt_save_leaves_the_world_alone() {
    let mut session = session("saves_corrupt");
    let dir = session.saves().dir().to_path_buf();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.sav"), b"definitely not a world").unwrap();

    let mut view = ScriptedView::default();
    session.advance(&mut view, "go east");
    let before = session.world().clone();

    view.clear();
    session.advance(&mut view, "load broken");
    let errors = view.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Command failed: serialization error"), "{errors:?}");
    assert_eq!(session.world().player(), before.player());
    assert_eq!(session.world().save_name(), before.save_name());

    view.clear();
    session.advance(&mut view, "go west");
    assert_eq!(session.world().player().room, "bedroom");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dangling_references_are_rejected() {
    let store = SaveStore::new(temp_dir("saves_dangling"));
    let mut world = World::initial("dangling");
    world.go_to(&mut ScriptedView::default(), "east");
    let mut broken = World::new(world.player().clone());
    for room in world.rooms().values().filter(|room| room.id != "hallway") {
        broken = broken.with_room(room.clone());
    }
    fs::create_dir_all(store.dir()).unwrap();
    serialize::save_to_file(&broken, store.path_for("dangling").unwrap()).unwrap();

    let err = store.load("dangling").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWorld(_)));

    let _ = fs::remove_dir_all(store.dir());
}

#[test]
fn startup_picker_lists_saves_from_disk() {
    let dir = temp_dir("saves_picker");
    let store = SaveStore::new(&dir);
    let mut world = World::initial("resume");
    world.go_to(&mut ScriptedView::default(), "east");
    store.save("resume", &world).unwrap();

    let mut view = ScriptedView::new(["1"]);
    let session = Session::load_or_create(&mut view, registry(), SaveStore::new(&dir), None)
        .unwrap()
        .unwrap();
    assert_eq!(session.world().player().room, "hallway");
    assert!(view.messages().contains(&"1) resume"));

    let _ = fs::remove_dir_all(&dir);
}
