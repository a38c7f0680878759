//! Saved games on disk, using `MessagePack`.
//!
//! Each save is one `<name>.sav` file in the save directory. Writes go to a
//! temporary file first and are renamed into place, so a crash mid-save
//! leaves the previous save intact.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use lantern_foundation::{Error, ErrorContext, Result};
use lantern_parser::SaveStorage;
use lantern_world::World;
use tracing::{debug, warn};

/// File extension of save files.
pub const SAVE_EXTENSION: &str = "sav";

/// Serializes a world to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(world: &World) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(world).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a world from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<World> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a world to a file using `MessagePack` format.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(world: &World, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(world)?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    Ok(())
}

/// Loads a world from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<World> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes)
}

fn io_error(action: &str, path: &Path, error: &io::Error) -> Error {
    Error::io(format!("failed to {action} file '{}': {error}", path.display()))
}

/// Returns true if `name` can be used as a save name.
#[must_use]
pub fn is_valid_save_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A directory of save files.
#[derive(Clone, Debug)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The save directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the save called `name`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidSaveName` error if `name` is empty or contains
    /// anything but ASCII letters, digits, `_` and `-`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_save_name(name) {
            return Err(Error::invalid_save_name(name));
        }
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }

    /// Returns true if a save called `name` exists.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|path| path.is_file())
    }
}

fn context(operation: &str, path: &Path) -> ErrorContext {
    ErrorContext::new()
        .with_operation(operation)
        .with_path(path.display().to_string())
}

impl SaveStorage for SaveStore {
    fn list_names(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list", &self.dir, &e)),
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SAVE_EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .filter(|name| is_valid_save_name(name))
            .collect();
        names.sort();
        Ok(names)
    }

    fn save(&self, name: &str, world: &World) -> Result<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| io_error("create directory for", &path, &e).with_context(context("save", &path)))?;

        let temp = path.with_extension(format!("{SAVE_EXTENSION}.tmp"));
        save_to_file(world, &temp).map_err(|e| e.with_context(context("save", &path)))?;
        fs::rename(&temp, &path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            io_error("replace", &path, &e).with_context(context("save", &path))
        })?;

        debug!(save = name, path = %path.display(), "wrote save file");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<World> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(Error::save_not_found(name));
        }
        let world = load_from_file(&path)
            .and_then(|world| world.validate().map(|()| world))
            .map_err(|e| {
                warn!(save = name, error = %e, "rejected save file");
                e.with_context(context("load", &path))
            })?;
        debug!(save = name, path = %path.display(), "read save file");
        Ok(world)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::save_not_found(name)),
            Err(e) => Err(io_error("delete", &path, &e).with_context(context("delete", &path))),
        }
    }
}
