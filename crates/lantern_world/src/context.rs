//! Snapshot of the names a player might type next.

/// Names visible to the completer, captured after each command.
///
/// The completer runs on the input thread and never touches the live world,
/// so the game publishes one of these whenever state changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionContext {
    /// Item ids lying in the current room.
    pub room_items: Vec<String>,
    /// Item ids the player carries.
    pub inventory: Vec<String>,
    /// Lowercase directions leading out of the current room.
    pub exits: Vec<String>,
    /// Known save names, sorted.
    pub save_names: Vec<String>,
}

impl CompletionContext {
    /// Replaces the save names, keeping them sorted.
    #[must_use]
    pub fn with_save_names(mut self, mut names: Vec<String>) -> Self {
        names.sort();
        self.save_names = names;
        self
    }
}
