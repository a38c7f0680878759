//! Literal and contextual completion.

use lantern_parser::CommandRegistry;
use lantern_world::{CompletionContext, World};

fn registry() -> CommandRegistry {
    CommandRegistry::standard().unwrap()
}

#[test]
fn literal_completions_come_from_the_verbs() {
    let registry = registry();
    let ctx = CompletionContext::default();
    assert_eq!(registry.autocomplete(&ctx, "sa"), vec!["save", "save as"]);
    assert_eq!(registry.autocomplete(&ctx, "go"), vec!["go", "go to", "go to the"]);
    assert_eq!(registry.autocomplete(&ctx, "m"), vec!["map", "move", "move to", "move to the"]);
}

#[test]
fn literal_completions_hide_contextual_ones() {
    let ctx = CompletionContext {
        save_names: vec!["save_one".into()],
        ..CompletionContext::default()
    };
    assert_eq!(registry().autocomplete(&ctx, "save"), vec!["save", "save as"]);
}

#[test]
fn contextual_completions_use_the_room() {
    let ctx = CompletionContext {
        room_items: vec!["key".into()],
        ..CompletionContext::default()
    };
    assert_eq!(registry().autocomplete(&ctx, "take "), vec!["take key"]);
}

#[test]
fn contextual_completions_from_a_real_world() {
    let world = World::initial("ctx");
    let ctx = world.completion_context().with_save_names(vec!["b".into(), "a".into()]);
    let registry = registry();

    assert_eq!(registry.autocomplete(&ctx, "take "), vec!["take computer", "take mold"]);
    assert_eq!(registry.autocomplete(&ctx, "go "), vec!["go to", "go to the"]);
    assert_eq!(registry.autocomplete(&ctx, "go e"), vec!["go east"]);
    assert_eq!(registry.autocomplete(&ctx, "use m"), vec!["use mold"]);
    assert_eq!(registry.autocomplete(&ctx, "load "), vec!["load a", "load b"]);
    assert!(registry.autocomplete(&ctx, "drop m").is_empty());
}

#[test]
fn nothing_matches_nothing() {
    assert!(registry().autocomplete(&CompletionContext::default(), "zzz").is_empty());
}
