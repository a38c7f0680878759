//! The command loop run on the game thread.

use std::io::Write;
use std::sync::Arc;

use lantern_foundation::Result;
use lantern_parser::SaveStorage;
use lantern_world::View;
use tracing::info;

use crate::config::RuntimeConfig;
use crate::serialize::SaveStore;
use crate::session::Session;
use crate::view::PipelineView;

/// Last line printed when the game ends.
pub const GOODBYE: &str = "Thank you for playing. Goodbye.";

/// Reads and applies lines until the world asks to stop or input runs out.
pub fn run_game<S: SaveStorage>(session: &mut Session<S>, view: &mut dyn View) {
    session.publish_context();
    session.world().look(view);

    while !session.is_finished() {
        let Some(line) = view.read_line() else {
            info!("input closed");
            break;
        };
        session.advance(view, &line);
    }

    view.present_message(GOODBYE);
}

/// Plays one game over `view`'s pipeline, then shuts the pipeline down.
///
/// # Errors
///
/// Returns an error if the saves cannot be listed at startup.
pub fn play<W: Write, E: Write>(config: &RuntimeConfig, view: &mut PipelineView<W, E>) -> Result<()> {
    let input = view.input().clone();
    let result = start(config, view);
    input.shutdown();
    result
}

fn start<W: Write, E: Write>(config: &RuntimeConfig, view: &mut PipelineView<W, E>) -> Result<()> {
    if config.show_banner {
        view.present_message(&banner());
    }

    let input = view.input().clone();
    let registry = Arc::clone(input.registry());
    let saves = SaveStore::new(&config.save_dir);
    let Some(session) = Session::load_or_create(view, registry, saves, config.new_game.as_deref())?
    else {
        info!("no game chosen");
        return Ok(());
    };

    let mut session = session.with_publisher(input);
    run_game(&mut session, view);
    Ok(())
}

fn banner() -> String {
    format!(
        "Lantern v{}\nType 'help' for commands, Tab to complete, Ctrl-D to quit.",
        env!("CARGO_PKG_VERSION")
    )
}
