//! Session state for a running game.
//!
//! The session owns the world and applies one line of input at a time. It
//! lives on the game thread; the terminal only sees the completion snapshot
//! it publishes.

use std::sync::Arc;

use lantern_foundation::Result;
use lantern_parser::{Command, CommandContext, CommandRegistry, Dispatch, SaveStorage};
use lantern_world::{CompletionContext, Selection, View, World};
use tracing::{debug, info, warn};

use crate::pipeline::InputPipeline;
use crate::serialize::{SaveStore, is_valid_save_name};

/// Greeting shown before the save picker.
pub const WELCOME: &str = "Welcome to Lantern, pick a save file or create a new one";

/// A game in progress.
pub struct Session<S: SaveStorage = SaveStore> {
    /// The current world state.
    world: World,

    /// Parsers, shared with the terminal.
    registry: Arc<CommandRegistry>,

    /// Where saves live.
    saves: S,

    /// Command listing shown by `help`.
    help: String,

    /// Where completion snapshots are published, if anywhere.
    publisher: Option<InputPipeline>,
}

impl<S: SaveStorage> Session<S> {
    /// Creates a session around an existing world.
    #[must_use]
    pub fn new(world: World, registry: Arc<CommandRegistry>, saves: S) -> Self {
        let help = registry.describe();
        Self {
            world,
            registry,
            saves,
            help,
            publisher: None,
        }
    }

    /// Publishes completion snapshots to `input` after every command.
    #[must_use]
    pub fn with_publisher(mut self, input: InputPipeline) -> Self {
        self.publisher = Some(input);
        self
    }

    /// Starts a game, either fresh or from a save.
    ///
    /// With `new_game` set the picker is skipped and a fresh world is created
    /// under that name. Otherwise the player picks a listed save or types a
    /// name; a typed name that matches no save starts a fresh world. Saves
    /// that fail to load are reported and the picker is shown again.
    ///
    /// Returns `None` if input ended before a game was chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the saves cannot be listed.
    pub fn load_or_create(
        view: &mut dyn View,
        registry: Arc<CommandRegistry>,
        saves: S,
        new_game: Option<&str>,
    ) -> Result<Option<Self>> {
        if let Some(name) = new_game {
            info!(save = name, "starting new game");
            return Ok(Some(Self::new(World::initial(name), registry, saves)));
        }

        view.present_message(WELCOME);
        loop {
            let names = saves.list_names()?;
            let name = match view.select_or_enter(&names, "enter the name of a save file to create")
            {
                Selection::Listed(index) => names[index].clone(),
                Selection::Entered(name) => name,
                Selection::Cancelled => return Ok(None),
            };

            if !is_valid_save_name(&name) {
                view.present_urgent("Save names may only contain letters, digits, '_' and '-'.");
                continue;
            }

            if !names.contains(&name) {
                info!(save = %name, "starting new game");
                return Ok(Some(Self::new(World::initial(&name), registry, saves)));
            }

            match saves.load(&name) {
                Ok(mut world) => {
                    world.set_save_name(&name);
                    info!(save = %name, "resumed game");
                    return Ok(Some(Self::new(world, registry, saves)));
                }
                Err(e) => view.present_error(&format!("Could not load \"{name}\": {e}")),
            }
        }
    }

    /// Returns a reference to the current world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The save storage.
    #[must_use]
    pub const fn saves(&self) -> &S {
        &self.saves
    }

    /// Returns true once the world has asked to stop.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.world.is_exit_requested()
    }

    /// Applies one line of input.
    ///
    /// Unparseable input is answered with suggestions; a failing command is
    /// reported as `Command failed: ...` and leaves the world as it was.
    pub fn advance(&mut self, view: &mut dyn View, line: &str) {
        let text = line.trim();
        if text.is_empty() {
            return;
        }

        match self.registry.dispatch(text) {
            Dispatch::Command(command) => {
                if let Err(e) = self.execute(view, command) {
                    view.present_error(&format!("Command failed: {e}"));
                }
            }
            Dispatch::Incomplete(message) => {
                view.present_urgent(&message);
                let suggestions = self.suggestions_other_than(text);
                if !suggestions.is_empty() {
                    view.present_urgent(&did_you_mean(&suggestions));
                }
            }
            Dispatch::Unknown => {
                let suggestions = self.suggestions_other_than(text);
                if suggestions.is_empty() {
                    view.present_urgent("Unknown command.");
                } else {
                    view.present_urgent(&did_you_mean(&suggestions));
                }
            }
        }

        self.publish_context();
    }

    /// Runs a bound command.
    ///
    /// # Errors
    ///
    /// Returns the command's error after restoring the world to its state
    /// from before the command.
    pub fn execute(&mut self, view: &mut dyn View, command: Command) -> Result<()> {
        debug!(?command, "executing");
        let snapshot = self.world.clone();
        let mut ctx = CommandContext {
            world: &mut self.world,
            view,
            saves: &self.saves,
            help: &self.help,
        };
        let result = command.execute(&mut ctx);
        if let Err(e) = &result {
            warn!(error = %e, "command failed, restoring world");
            self.world = snapshot;
        }
        result
    }

    /// Completions for `text` against the current world.
    #[must_use]
    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.registry.autocomplete(&self.completion_context(), text)
    }

    /// Names the completer may offer: the world's plus the save names.
    #[must_use]
    pub fn completion_context(&self) -> CompletionContext {
        let save_names = self.saves.list_names().unwrap_or_else(|e| {
            warn!(error = %e, "could not list saves for completion");
            Vec::new()
        });
        self.world.completion_context().with_save_names(save_names)
    }

    /// Sends a fresh completion snapshot to the terminal.
    pub fn publish_context(&self) {
        if let Some(input) = &self.publisher {
            input.publish_context(self.completion_context());
        }
    }

    fn suggestions_other_than(&self, text: &str) -> Vec<String> {
        self.suggest(text)
            .into_iter()
            .map(|suggestion| suggestion.trim().to_string())
            .filter(|suggestion| suggestion != text)
            .collect()
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    format!("Did you mean any of: {}?", suggestions.join(", "))
}
