//! Text to commands through the standard registry.

use lantern_parser::{Command, CommandParser, CommandRegistry, Dispatch, ParseOutcome, SaveAction};
use proptest::prelude::*;

fn registry() -> CommandRegistry {
    CommandRegistry::standard().expect("built-in patterns compile")
}

// =============================================================================
// Verb Families
// =============================================================================

#[test]
fn every_verb_family_dispatches() {
    let registry = registry();
    let cases = [
        ("help", Command::Help),
        ("look", Command::Look),
        ("map", Command::Map),
        ("pick up the keys", Command::Take("keys".into())),
        ("drop pizza", Command::Drop("pizza".into())),
        ("move to the west", Command::Go("west".into())),
        ("use the oven", Command::Use("oven".into())),
        ("save as monday", Command::Save(SaveAction::SaveAs("monday".into()))),
        ("delete save", Command::Save(SaveAction::Delete)),
        ("exit", Command::Exit),
    ];
    for (text, command) in cases {
        assert_eq!(registry.dispatch(text), Dispatch::Command(command), "{text}");
    }
}

#[test]
fn bare_verbs_are_incomplete() {
    let registry = registry();
    for (text, message) in [
        ("take", "Take what?"),
        ("grab", "Take what?"),
        ("drop", "Drop what?"),
        ("go", "Go where?"),
        ("move", "Go where?"),
        ("use", "Use what?"),
    ] {
        assert_eq!(registry.dispatch(text), Dispatch::Incomplete(message.into()), "{text}");
    }
}

#[test]
fn nonsense_is_unknown() {
    let registry = registry();
    for text in ["frobnicate", "look around", "take 42", "", "save as two words"] {
        assert_eq!(registry.dispatch(text), Dispatch::Unknown, "{text:?}");
    }
}

// =============================================================================
// Priority
// =============================================================================

/// Claims every line starting with "go" for itself.
struct Greedy;

impl CommandParser for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn description(&self) -> &'static str {
        "Takes over movement"
    }

    fn direct_completions(&self) -> &[&str] {
        &["go", "go home"]
    }

    fn parse(&self, text: &str) -> ParseOutcome {
        if text.starts_with("go") {
            ParseOutcome::Command(Command::Map)
        } else {
            ParseOutcome::NoMatch
        }
    }
}

#[test]
fn earlier_parsers_win() {
    let mut first = CommandRegistry::new();
    first.register(Box::new(Greedy));
    for verb in lantern_parser::Verb::all().unwrap() {
        first.register(Box::new(verb));
    }
    assert_eq!(first.dispatch("go north"), Dispatch::Command(Command::Map));

    let mut last = registry();
    last.register(Box::new(Greedy));
    assert_eq!(last.dispatch("go north"), Dispatch::Command(Command::Go("north".into())));
    assert_eq!(last.dispatch("go"), Dispatch::Command(Command::Map));
    assert!(last.describe().ends_with("- greedy: Takes over movement"));
}

proptest! {
    #[test]
    fn dispatch_never_panics(text in "\\PC{0,40}") {
        let _ = registry().dispatch(&text);
    }

    #[test]
    fn take_binds_any_word(word in "[a-zA-Z_]{1,12}") {
        prop_assert_eq!(
            registry().dispatch(&format!("take {word}")),
            Dispatch::Command(Command::Take(word))
        );
    }
}
