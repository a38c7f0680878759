//! Bound commands and the context they run in.

use lantern_foundation::Result;
use lantern_world::{Selection, View, World};
use tracing::info;

/// Persistent storage for saved games.
pub trait SaveStorage {
    /// Names of existing saves, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be listed.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Writes `world` under `name`, replacing any existing save.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the write fails.
    fn save(&self, name: &str, world: &World) -> Result<()>;

    /// Reads the save called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the save is missing, unreadable, or inconsistent.
    fn load(&self, name: &str) -> Result<World>;

    /// Removes the save called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the save is missing or cannot be removed.
    fn delete(&self, name: &str) -> Result<()>;
}

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    /// The live world.
    pub world: &'a mut World,
    /// Where output goes and prompted input comes from.
    pub view: &'a mut dyn View,
    /// Saved games.
    pub saves: &'a dyn SaveStorage,
    /// Command listing shown by `help`.
    pub help: &'a str,
}

/// The save-family actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveAction {
    /// Save under the current name.
    Save,
    /// Save under a new name and adopt it.
    SaveAs(String),
    /// Ask for a save to overwrite or a new name.
    SaveAsPrompt,
    /// Load the named save.
    Load(String),
    /// Ask which save to load.
    LoadPrompt,
    /// Ask which save to delete.
    Delete,
}

/// A parsed command with its arguments bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show help.
    Help,
    /// Describe the surroundings.
    Look,
    /// Draw the map.
    Map,
    /// Pick up an item.
    Take(String),
    /// Put an item down.
    Drop(String),
    /// Walk through an exit.
    Go(String),
    /// Use an item.
    Use(String),
    /// Save, load, or delete games.
    Save(SaveAction),
    /// Leave the game.
    Exit,
}

impl Command {
    /// Runs the command, consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if a save operation fails. Game-level refusals
    /// ("There is no door!") are reported through the view, not as errors.
    pub fn execute(self, ctx: &mut CommandContext<'_>) -> Result<()> {
        match self {
            Self::Help => ctx.world.show_help(ctx.view, ctx.help),
            Self::Look => ctx.world.look(ctx.view),
            Self::Map => ctx.world.show_map(ctx.view),
            Self::Take(item) => ctx.world.take_item(ctx.view, &item),
            Self::Drop(item) => ctx.world.drop_item(ctx.view, &item),
            Self::Go(place) => ctx.world.go_to(ctx.view, &place),
            Self::Use(item) => ctx.world.use_item(ctx.view, &item),
            Self::Save(action) => return action.execute(ctx),
            Self::Exit => ctx.world.request_exit(),
        }
        Ok(())
    }
}

impl SaveAction {
    fn execute(self, ctx: &mut CommandContext<'_>) -> Result<()> {
        match self {
            Self::Save => {
                let name = ctx.world.save_name().to_string();
                save_as(ctx, &name)
            }
            Self::SaveAs(name) => save_as(ctx, &name),
            Self::SaveAsPrompt => {
                ctx.view.present_message(
                    "Pick a save file to overwrite, or enter the name of the save file to create",
                );
                let names = ctx.saves.list_names()?;
                match ctx.view.select_or_enter(&names, "Create new save") {
                    Selection::Listed(index) => save_as(ctx, &names[index]),
                    Selection::Entered(name) => save_as(ctx, &name),
                    Selection::Cancelled => {
                        ctx.view.present_message("Nothing was saved.");
                        Ok(())
                    }
                }
            }
            Self::Load(name) => load(ctx, &name),
            Self::LoadPrompt => {
                let Some(name) = pick(ctx, "Pick a save file to load")? else {
                    return Ok(());
                };
                load(ctx, &name)
            }
            Self::Delete => {
                let Some(name) = pick(ctx, "Pick a save file to delete")? else {
                    return Ok(());
                };
                ctx.saves.delete(&name)?;
                info!(save = %name, "deleted save");
                ctx.view.present_message(&format!("Deleted \"{name}\"."));
                Ok(())
            }
        }
    }
}

fn save_as(ctx: &mut CommandContext<'_>, name: &str) -> Result<()> {
    ctx.saves.save(name, ctx.world)?;
    ctx.world.set_save_name(name);
    info!(save = %name, "saved game");
    ctx.view.present_message(&format!("Saved as \"{name}\"."));
    Ok(())
}

fn load(ctx: &mut CommandContext<'_>, name: &str) -> Result<()> {
    let mut loaded = ctx.saves.load(name)?;
    loaded.set_save_name(name);
    *ctx.world = loaded;
    info!(save = %name, "loaded game");
    ctx.view.present_message(&format!("Loaded \"{name}\"."));
    ctx.world.look(ctx.view);
    Ok(())
}

/// Lists saves and asks for one. `None` if there are none or the answer was unusable.
fn pick(ctx: &mut CommandContext<'_>, message: &str) -> Result<Option<String>> {
    let names = ctx.saves.list_names()?;
    if names.is_empty() {
        ctx.view.present_message("There are no saved games.");
        return Ok(None);
    }
    ctx.view.present_message(message);
    Ok(ctx.view.select(&names).map(|index| names[index].clone()))
}
