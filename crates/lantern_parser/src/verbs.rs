//! The built-in verb families.

use lantern_foundation::Result;
use lantern_world::CompletionContext;
use regex::Regex;

use crate::command::{Command, SaveAction};
use crate::parser::{CommandParser, ParseOutcome};
use crate::pattern::{self, PatternMatch, VerbPattern, add_if_starts_with};

/// Regexes recognized by the save family.
#[derive(Clone, Debug)]
pub struct SavePatterns {
    save_as: Regex,
    load: Regex,
}

impl SavePatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            save_as: pattern::compile(r"save as ([a-zA-Z0-9_\-]+)")?,
            load: pattern::compile(r"load ([a-zA-Z0-9_\-]+)")?,
        })
    }
}

/// One built-in verb family. Argument-taking verbs carry their compiled patterns.
#[derive(Clone, Debug)]
pub enum Verb {
    /// `help`
    Help,
    /// `look`
    Look,
    /// `map`
    Map,
    /// `take ITEM`, `pick up ITEM`, `grab ITEM`
    Take(VerbPattern),
    /// `drop ITEM`
    Drop(VerbPattern),
    /// `go DIRECTION`, `move to the DIRECTION`, ...
    Go(VerbPattern),
    /// `use ITEM`
    Use(VerbPattern),
    /// `save`, `save as NAME`, `load NAME`, `delete save`, ...
    Save(SavePatterns),
    /// `exit`
    Exit,
}

impl Verb {
    /// Every built-in verb, in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn all() -> Result<Vec<Verb>> {
        Ok(vec![
            Verb::Help,
            Verb::Look,
            Verb::Map,
            Verb::take()?,
            Verb::drop()?,
            Verb::go()?,
            Verb::use_item()?,
            Verb::save()?,
            Verb::Exit,
        ])
    }

    /// The take family.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn take() -> Result<Self> {
        VerbPattern::new(
            "take|pick up|grab",
            "(?:take|pick up|grab)(?: the)? ([a-zA-Z_]+)",
            "Take what?",
        )
        .map(Verb::Take)
    }

    /// The drop family.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn drop() -> Result<Self> {
        VerbPattern::new("drop", "drop(?: the)? ([a-zA-Z_]+)", "Drop what?").map(Verb::Drop)
    }

    /// The go family.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn go() -> Result<Self> {
        VerbPattern::new("go|move", "(?:go|move)(?: to(?: the)?)? (.+)", "Go where?").map(Verb::Go)
    }

    /// The use family.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn use_item() -> Result<Self> {
        VerbPattern::new("use", "use(?: the)? ([a-zA-Z_]+)", "Use what?").map(Verb::Use)
    }

    /// The save family.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a pattern fails to compile.
    pub fn save() -> Result<Self> {
        SavePatterns::new().map(Verb::Save)
    }
}

fn exact(text: &str, phrase: &str, command: Command) -> ParseOutcome {
    if text == phrase {
        ParseOutcome::Command(command)
    } else {
        ParseOutcome::NoMatch
    }
}

fn with_argument(pattern: &VerbPattern, text: &str, bind: fn(String) -> Command) -> ParseOutcome {
    match pattern.apply(text) {
        PatternMatch::Complete(captures) => ParseOutcome::Command(bind(captures[1].to_string())),
        PatternMatch::Incomplete(message) => ParseOutcome::Incomplete(message.to_string()),
        PatternMatch::NoMatch => ParseOutcome::NoMatch,
    }
}

fn parse_save(patterns: &SavePatterns, text: &str) -> ParseOutcome {
    if let Some(captures) = patterns.save_as.captures(text) {
        return ParseOutcome::Command(Command::Save(SaveAction::SaveAs(captures[1].to_string())));
    }
    if let Some(captures) = patterns.load.captures(text) {
        return ParseOutcome::Command(Command::Save(SaveAction::Load(captures[1].to_string())));
    }
    let action = match text {
        "save" => SaveAction::Save,
        "save as" => SaveAction::SaveAsPrompt,
        "load" => SaveAction::LoadPrompt,
        "delete save" => SaveAction::Delete,
        _ => return ParseOutcome::NoMatch,
    };
    ParseOutcome::Command(Command::Save(action))
}

/// Every `verb item` phrase for the given verbs and items.
fn phrases<'a>(verbs: &'a [&str], items: &'a [String]) -> impl Iterator<Item = String> + 'a {
    verbs
        .iter()
        .flat_map(move |verb| items.iter().map(move |item| format!("{verb} {item}")))
}

impl CommandParser for Verb {
    fn name(&self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Look => "look",
            Verb::Map => "map",
            Verb::Take(_) => "take",
            Verb::Drop(_) => "drop",
            Verb::Go(_) => "go",
            Verb::Use(_) => "use",
            Verb::Save(_) => "save",
            Verb::Exit => "exit",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Verb::Help => "Show this help message",
            Verb::Look => "Look around",
            Verb::Map => "Show a map of the area",
            Verb::Take(_) => "Pick up an item",
            Verb::Drop(_) => "Drop an item",
            Verb::Go(_) => "Go through an exit",
            Verb::Use(_) => "Use an item",
            Verb::Save(_) => "Save, load, or delete a saved game",
            Verb::Exit => "Exit the game",
        }
    }

    fn direct_completions(&self) -> &[&str] {
        match self {
            Verb::Help => &["help"],
            Verb::Look => &["look"],
            Verb::Map => &["map"],
            Verb::Take(_) => &["take", "pick up", "grab"],
            Verb::Drop(_) => &["drop", "drop the"],
            Verb::Go(_) => &["go", "move", "go to", "move to", "go to the", "move to the"],
            Verb::Use(_) => &["use"],
            Verb::Save(_) => &["save", "save as", "load", "delete save"],
            Verb::Exit => &["exit"],
        }
    }

    fn contextual_completions(&self, ctx: &CompletionContext, text: &str, out: &mut Vec<String>) {
        match self {
            Verb::Take(_) => {
                add_if_starts_with(out, text, phrases(&["take", "pick up", "grab"], &ctx.room_items));
            }
            Verb::Drop(_) => add_if_starts_with(out, text, phrases(&["drop"], &ctx.inventory)),
            Verb::Go(_) => add_if_starts_with(out, text, phrases(&["go", "move"], &ctx.exits)),
            Verb::Use(_) => {
                add_if_starts_with(out, text, phrases(&["use"], &ctx.inventory));
                add_if_starts_with(out, text, phrases(&["use"], &ctx.room_items));
            }
            Verb::Save(_) => {
                add_if_starts_with(out, text, phrases(&["load", "save as"], &ctx.save_names));
            }
            Verb::Help | Verb::Look | Verb::Map | Verb::Exit => {}
        }
    }

    fn parse(&self, text: &str) -> ParseOutcome {
        match self {
            Verb::Help => exact(text, "help", Command::Help),
            Verb::Look => exact(text, "look", Command::Look),
            Verb::Map => exact(text, "map", Command::Map),
            Verb::Exit => exact(text, "exit", Command::Exit),
            Verb::Take(pattern) => with_argument(pattern, text, Command::Take),
            Verb::Drop(pattern) => with_argument(pattern, text, Command::Drop),
            Verb::Go(pattern) => with_argument(pattern, text, Command::Go),
            Verb::Use(pattern) => with_argument(pattern, text, Command::Use),
            Verb::Save(patterns) => parse_save(patterns, text),
        }
    }
}
