//! The input pipeline between the terminal and the game thread.
//!
//! Two bounded channels connect the halves. The game thread asks for a line by
//! pushing a prompt onto the prompt channel; the terminal reads a line with
//! that prompt and pushes it onto the line channel.
//!
//! ```text
//!  Frontend (terminal)                      InputPipeline (game thread)
//!  ───────────────────                      ───────────────────────────
//!  next_prompt()  ◄──── prompts ─────────── request_line(prompt)
//!  submit_line()  ───── lines (front) ────► next_line()  (pop back)
//!  inject_line()  ───── lines (back)  ────►
//!  suggest()      ◄──── completion snapshot ─ publish_context()
//! ```
//!
//! Either side may call `shutdown`, which wakes every blocked wait.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lantern_foundation::{BlockingDeque, Error, ErrorKind, Result};
use lantern_parser::CommandRegistry;
use lantern_world::CompletionContext;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;

/// Line pushed on shutdown to wake a consumer blocked on the line channel.
pub const EXIT_SENTINEL: &str = "\u{0}__lantern_exit__";

/// State shared by both halves.
struct Shared {
    lines: BlockingDeque<String>,
    prompts: BlockingDeque<String>,
    exit: AtomicBool,
    registry: Arc<CommandRegistry>,
    context: RwLock<CompletionContext>,
}

impl Shared {
    fn shutdown(&self) {
        if self.exit.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("shutting down input pipeline");
        // Best effort: if the channel is full the interrupt below still wakes the consumer.
        let _ = self.lines.try_push_back(EXIT_SENTINEL.to_string());
        self.lines.interrupt();
        self.prompts.interrupt();
    }

    fn is_shutdown(&self) -> bool {
        self.exit.load(Ordering::SeqCst)
    }
}

/// Creates the connected halves of a pipeline.
///
/// Both channels get the configured capacity.
///
/// # Errors
///
/// Returns `InvalidCapacity` if the configured capacity is zero.
pub fn channel(
    config: &RuntimeConfig,
    registry: Arc<CommandRegistry>,
) -> Result<(Frontend, InputPipeline)> {
    let shared = Arc::new(Shared {
        lines: BlockingDeque::new(config.capacity)?,
        prompts: BlockingDeque::new(config.capacity)?,
        exit: AtomicBool::new(false),
        registry,
        context: RwLock::new(CompletionContext::default()),
    });
    Ok((
        Frontend {
            shared: Arc::clone(&shared),
        },
        InputPipeline { shared },
    ))
}

/// The producing half, owned by the terminal.
#[derive(Clone)]
pub struct Frontend {
    shared: Arc<Shared>,
}

impl Frontend {
    /// Queues a line of input without blocking.
    ///
    /// Returns false if the pipeline is shut down or the channel is full, in
    /// which case the line is dropped.
    pub fn submit_line(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.shared.is_shutdown() || text == EXIT_SENTINEL {
            return false;
        }
        match self.shared.lines.try_push_front(text) {
            Ok(()) => true,
            Err(dropped) => {
                warn!(line = %dropped, "input channel full, dropping line");
                false
            }
        }
    }

    /// Queues a line ahead of everything already submitted.
    pub fn inject_line(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.shared.is_shutdown() || text == EXIT_SENTINEL {
            return false;
        }
        self.shared.lines.try_push_back(text).is_ok()
    }

    /// Blocks until the game asks for a line, returning the prompt to show.
    ///
    /// Returns `None` once the pipeline is shut down.
    #[must_use]
    pub fn next_prompt(&self) -> Option<String> {
        if self.shared.is_shutdown() {
            return None;
        }
        self.shared.prompts.pop_back().ok()
    }

    /// Completions for `text` against the latest published snapshot.
    #[must_use]
    pub fn suggest(&self, text: &str) -> Vec<String> {
        let context = self.shared.context.read();
        self.shared.registry.autocomplete(&context, text)
    }

    /// The command listing.
    #[must_use]
    pub fn describe_commands(&self) -> String {
        self.shared.registry.describe()
    }

    /// Every literal verb phrase the registry knows.
    #[must_use]
    pub fn phrases(&self) -> Vec<String> {
        self.shared.registry.phrases().map(str::to_string).collect()
    }

    /// Stops the pipeline and wakes both sides.
    pub fn shutdown(&self) {
        self.shared.shutdown();
    }

    /// Returns true once either side has shut the pipeline down.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.shared.is_shutdown()
    }
}

/// The consuming half, owned by the game thread.
#[derive(Clone)]
pub struct InputPipeline {
    shared: Arc<Shared>,
}

impl InputPipeline {
    /// Asks the frontend for a line shown with `prompt`.
    pub fn request_line(&self, prompt: &str) {
        if self.shared.is_shutdown() {
            return;
        }
        if self.shared.prompts.try_push_front(prompt.to_string()).is_err() {
            warn!(%prompt, "prompt channel full");
        }
    }

    /// Blocks for the next line, reporting a closed pipeline as an
    /// `Interrupted` error.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` after shutdown, when the wait is interrupted, or
    /// when the exit sentinel arrives.
    pub fn recv_line(&self) -> Result<String> {
        if self.shared.is_shutdown() {
            return Err(Error::new(ErrorKind::Interrupted));
        }
        let line = self.shared.lines.pop_back()?;
        if line == EXIT_SENTINEL || self.shared.is_shutdown() {
            return Err(Error::new(ErrorKind::Interrupted));
        }
        Ok(line)
    }

    /// Blocks for the next line.
    ///
    /// Returns `None` after shutdown, on interruption, or on the exit sentinel.
    #[must_use]
    pub fn next_line(&self) -> Option<String> {
        match self.recv_line() {
            Ok(line) => {
                debug!(%line, "received line");
                Some(line)
            }
            Err(e) if e.is_interrupted() => None,
            Err(e) => {
                warn!(error = %e, "input channel failed");
                None
            }
        }
    }

    /// Requests a line with `prompt` and waits for it.
    #[must_use]
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        self.request_line(prompt);
        self.next_line()
    }

    /// Replaces the completion snapshot the frontend completes against.
    pub fn publish_context(&self, context: CompletionContext) {
        *self.shared.context.write() = context;
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.shared.registry
    }

    /// Stops the pipeline and wakes both sides.
    pub fn shutdown(&self) {
        self.shared.shutdown();
    }

    /// Returns true once either side has shut the pipeline down.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.shared.is_shutdown()
    }
}
