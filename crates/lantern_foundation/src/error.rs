//! Error types for the Lantern system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only genuinely exceptional conditions live here: "no match" from a parser
//! or the completion index and a full or empty channel are ordinary results.

use std::fmt;

use thiserror::Error;

/// The main error type for Lantern operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a save-not-found error.
    #[must_use]
    pub fn save_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::SaveNotFound(name.into()))
    }

    /// Creates an invalid save name error.
    #[must_use]
    pub fn invalid_save_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSaveName(name.into()))
    }

    /// Creates an error for world data that decoded but does not hang together.
    #[must_use]
    pub fn invalid_world(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWorld(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error reports an interrupted blocking wait.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self.kind, ErrorKind::Interrupted)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Persisted data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No save with the given name exists.
    #[error("no save named '{0}'")]
    SaveNotFound(String),

    /// The save name contains characters that cannot be used in a file name.
    #[error("invalid save name '{0}'")]
    InvalidSaveName(String),

    /// World data refers to rooms or items that do not exist.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// A channel was configured with a capacity of zero.
    #[error("invalid channel capacity {0}: capacity must be positive")]
    InvalidCapacity(usize),

    /// A blocking wait was interrupted during shutdown.
    #[error("interrupted while waiting for input")]
    Interrupted,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g. `"load"`).
    pub operation: Option<String>,
    /// The file involved, if any.
    pub path: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "during {operation}")?;
        }
        if let Some(path) = &self.path {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "of {path}")?;
        }
        Ok(())
    }
}

/// Result type alias using Lantern's Error.
pub type Result<T> = std::result::Result<T, Error>;
