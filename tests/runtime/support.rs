//! Shared helpers for runtime tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use lantern_parser::CommandRegistry;
use lantern_runtime::{SaveStore, Session};
use lantern_world::World;

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lantern_it_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

pub fn registry() -> Arc<CommandRegistry> {
    Arc::new(CommandRegistry::standard().unwrap())
}

/// A new game saving into its own temp directory.
pub fn session(tag: &str) -> Session<SaveStore> {
    Session::new(
        World::initial(tag),
        registry(),
        SaveStore::new(temp_dir(tag)),
    )
}
