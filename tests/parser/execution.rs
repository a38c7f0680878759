//! Commands executed against a world with in-memory saves.

use std::cell::RefCell;
use std::collections::BTreeMap;

use lantern_foundation::{Error, ErrorKind, Result};
use lantern_parser::{Command, CommandContext, CommandRegistry, SaveStorage};
use lantern_world::{ScriptedView, World};

#[derive(Default)]
struct MemorySaves {
    saves: RefCell<BTreeMap<String, World>>,
}

impl SaveStorage for MemorySaves {
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.saves.borrow().keys().cloned().collect())
    }

    fn save(&self, name: &str, world: &World) -> Result<()> {
        self.saves.borrow_mut().insert(name.into(), world.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<World> {
        self.saves
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::save_not_found(name))
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.saves
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::save_not_found(name))
    }
}

fn run(world: &mut World, view: &mut ScriptedView, saves: &MemorySaves, text: &str) -> Result<()> {
    let registry = CommandRegistry::standard()?;
    let help = registry.describe();
    let command = registry.parse(text).expect("command parses");
    command.execute(&mut CommandContext {
        world,
        view,
        saves,
        help: &help,
    })
}

#[test]
fn help_lists_commands() {
    let mut world = World::initial("exec");
    let mut view = ScriptedView::default();
    run(&mut world, &mut view, &MemorySaves::default(), "help").unwrap();
    let messages = view.messages();
    assert_eq!(messages[1], "Possible commands are:");
    assert!(messages[2].contains("- map: Show a map of the area"));
}

#[test]
fn save_then_load_restores_position() {
    let saves = MemorySaves::default();
    let mut world = World::initial("exec");
    let mut view = ScriptedView::default();

    run(&mut world, &mut view, &saves, "save").unwrap();
    run(&mut world, &mut view, &saves, "go east").unwrap();
    assert_eq!(world.player().room, "hallway");

    view.clear();
    run(&mut world, &mut view, &saves, "load exec").unwrap();
    assert_eq!(world.player().room, "bedroom");
    assert_eq!(view.messages()[0], "Loaded \"exec\".");
}

#[test]
fn save_as_prompt_accepts_a_new_name() {
    let saves = MemorySaves::default();
    let mut world = World::initial("exec");
    let mut view = ScriptedView::new(["tuesday"]);
    run(&mut world, &mut view, &saves, "save as").unwrap();
    assert_eq!(world.save_name(), "tuesday");
    assert_eq!(saves.list_names().unwrap(), vec!["tuesday"]);
}

#[test]
fn delete_with_no_saves() {
    let mut world = World::initial("exec");
    let mut view = ScriptedView::default();
    run(&mut world, &mut view, &MemorySaves::default(), "delete save").unwrap();
    assert_eq!(view.messages(), vec!["There are no saved games."]);
}

#[test]
fn loading_a_missing_save_fails() {
    let mut world = World::initial("exec");
    let mut view = ScriptedView::default();
    let err = run(&mut world, &mut view, &MemorySaves::default(), "load nothing").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SaveNotFound(_)));
}

#[test]
fn exit_requests_exit() {
    let mut world = World::initial("exec");
    Command::Exit
        .execute(&mut CommandContext {
            world: &mut world,
            view: &mut ScriptedView::default(),
            saves: &MemorySaves::default(),
            help: "",
        })
        .unwrap();
    assert!(world.is_exit_requested());
}
