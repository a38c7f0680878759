//! Runtime configuration.
//!
//! Defaults can be overridden by the environment (`LANTERN_SAVE_DIR`) and then
//! by command-line flags, which the binary applies through the builder methods.

use std::path::PathBuf;

use lantern_foundation::{Error, ErrorKind, Result};

/// Default number of lines the input channel holds.
pub const DEFAULT_CAPACITY: usize = 16;

/// Environment variable naming the save directory.
pub const SAVE_DIR_ENV: &str = "LANTERN_SAVE_DIR";

/// Settings for one run of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Capacity of the input channel.
    pub capacity: usize,

    /// Directory holding save files.
    pub save_dir: PathBuf,

    /// Prompt shown while waiting for a command.
    pub prompt: String,

    /// Whether to print the welcome banner.
    pub show_banner: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Start a new game under this name instead of asking.
    pub new_game: Option<String>,

    /// Read commands from this file instead of the terminal.
    pub script: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            save_dir: PathBuf::from("saves"),
            prompt: "> ".to_string(),
            show_banner: true,
            log_filter: "warn".to_string(),
            new_game: None,
            script: None,
        }
    }
}

impl RuntimeConfig {
    /// Defaults, with the save directory taken from `LANTERN_SAVE_DIR` if set.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(SAVE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => config.with_save_dir(dir),
            _ => config,
        }
    }

    /// Builder method to set the channel capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method to set the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Builder method to set the fallback log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Skips the save picker and starts a new game called `name`.
    #[must_use]
    pub fn with_new_game(mut self, name: impl Into<String>) -> Self {
        self.new_game = Some(name.into());
        self
    }

    /// Reads commands from `path` instead of the terminal.
    #[must_use]
    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = Some(path.into());
        self
    }

    /// Checks that the settings can be used.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` for a zero capacity and `InvalidSaveName` if
    /// the new-game name is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidCapacity(self.capacity)));
        }
        if let Some(name) = &self.new_game {
            if !crate::serialize::is_valid_save_name(name) {
                return Err(Error::invalid_save_name(name.clone()));
            }
        }
        Ok(())
    }
}
