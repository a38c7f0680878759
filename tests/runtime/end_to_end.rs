//! Lines in, messages out.

use std::io::Cursor;
use std::thread;

use lantern_runtime::game::{self, GOODBYE};
use lantern_runtime::pipeline;
use lantern_runtime::{PipelineView, Repl, RuntimeConfig, ScriptEditor};
use lantern_world::ScriptedView;

use crate::support::{registry, session, temp_dir};

// =============================================================================
// Session
// =============================================================================

#[test]
fn missing_exit() {
    let mut session = session("e2e_door");
    let before = session.world().clone();
    let mut view = ScriptedView::default();
    session.advance(&mut view, "go north");
    assert_eq!(view.messages(), vec!["There is no door!"]);
    assert_eq!(session.world().player(), before.player());
    assert_eq!(session.world().rooms(), before.rooms());
}

#[test]
fn bare_take() {
    let mut session = session("e2e_take");
    let mut view = ScriptedView::default();
    session.advance(&mut view, "take");
    assert_eq!(view.urgent(), vec!["Take what?"]);
    assert!(view.messages().is_empty());
}

#[test]
fn unknown_verb() {
    let mut session = session("e2e_unknown");
    let mut view = ScriptedView::default();
    session.advance(&mut view, "frobnicate");
    assert_eq!(view.urgent(), vec!["Unknown command."]);
}

#[test]
fn partial_verb_gets_suggestions() {
    let mut session = session("e2e_partial");
    let mut view = ScriptedView::default();
    session.advance(&mut view, "lo");
    assert_eq!(view.urgent(), vec!["Did you mean any of: load, look?"]);
}

#[test]
fn full_game_through_the_session() {
    let mut session = session("e2e_win");
    let mut view = ScriptedView::default();
    for line in [
        "go east",
        "go south",
        "go east",
        "take keys",
        "pick up the winning_key",
        "go west",
        "use oven",
        "use pizza",
        "go north",
        "use keys",
        "go east",
        "move to the east",
    ] {
        session.advance(&mut view, line);
    }
    assert!(view.urgent().is_empty(), "{:?}", view.urgent());
    assert_eq!(view.last_text(), Some("You win!"));
    assert!(session.is_finished());
}

// =============================================================================
// Two Threads
// =============================================================================

#[test]
fn scripted_game_over_the_pipeline() {
    let config = RuntimeConfig::default()
        .without_banner()
        .with_new_game("scripted")
        .with_save_dir(temp_dir("e2e_pipeline"));
    let (frontend, input) = pipeline::channel(&config, registry()).unwrap();

    let game = thread::spawn(move || {
        let mut view = PipelineView::with_writers(input, "> ", Vec::new(), Vec::new());
        game::play(&config, &mut view).unwrap();
        view.into_writers()
    });

    let script = Cursor::new("go north\ntake\nfrobnicate\ngo east\nexit\nlook\n");
    let mut repl = Repl::with_editor(ScriptEditor::new(script, Vec::new()), frontend.clone());
    repl.run().unwrap();

    let (out, err) = game.join().unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("There is no door!\n"), "{out}");
    assert!(out.contains("! Take what?\n"));
    assert!(out.contains("! Unknown command.\n"));
    assert!(out.contains("You are in the hallway of your flat."));
    assert!(out.ends_with(&format!("{GOODBYE}\n")));
    assert!(err.is_empty());
    assert!(frontend.is_shutdown());
}

#[test]
fn end_of_script_ends_the_game() {
    let config = RuntimeConfig::default()
        .without_banner()
        .with_new_game("short")
        .with_save_dir(temp_dir("e2e_eof"));
    let (frontend, input) = pipeline::channel(&config, registry()).unwrap();

    let game = thread::spawn(move || {
        let mut view = PipelineView::with_writers(input, "> ", Vec::new(), Vec::new());
        game::play(&config, &mut view).unwrap();
        view.into_writers()
    });

    let mut repl = Repl::with_editor(ScriptEditor::new(Cursor::new("look\n"), Vec::new()), frontend);
    repl.run().unwrap();

    let (out, _) = game.join().unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with(&format!("{GOODBYE}\n")));
}
