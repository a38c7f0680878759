//! Lantern CLI entry point.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use lantern_parser::CommandRegistry;
use lantern_runtime::editor::ScriptEditor;
use lantern_runtime::pipeline::{self, Frontend};
use lantern_runtime::{PipelineView, Repl, RuntimeConfig, game};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
struct CliConfig {
    runtime: RuntimeConfig,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Returns the value following the flag at `args[*i]`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, Box<dyn std::error::Error>> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig {
        runtime: RuntimeConfig::from_env(),
        show_help: false,
        show_version: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.runtime = config.runtime.without_banner(),
            "--save-dir" => {
                let dir = value(args, &mut i)?;
                config.runtime = config.runtime.with_save_dir(dir);
            }
            "--capacity" => {
                let raw = value(args, &mut i)?;
                let capacity = raw
                    .parse()
                    .map_err(|_| format!("invalid --capacity value: {raw}"))?;
                config.runtime = config.runtime.with_capacity(capacity);
            }
            "--new" => {
                let name = value(args, &mut i)?;
                config.runtime = config.runtime.with_new_game(name);
            }
            "--script" => {
                let path = value(args, &mut i)?;
                config.runtime = config.runtime.with_script(path);
            }
            "--log" => {
                let filter = value(args, &mut i)?;
                config.runtime = config.runtime.with_log_filter(filter);
            }
            arg => return Err(format!("unknown argument: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(&args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("lantern {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = cli.runtime;
    config.validate()?;
    init_logging(&config.log_filter);
    info!(save_dir = %config.save_dir.display(), capacity = config.capacity, "starting");

    let registry = Arc::new(CommandRegistry::standard()?);
    let (frontend, input) = pipeline::channel(&config, registry)?;

    let game_config = config.clone();
    let game = thread::Builder::new()
        .name("lantern-game".into())
        .spawn(move || {
            let mut view = PipelineView::new(input, game_config.prompt.clone());
            game::play(&game_config, &mut view)
        })?;

    let repl_result = run_frontend(&config, frontend.clone());
    frontend.shutdown();
    let game_result = game.join().map_err(|_| "game thread panicked")?;

    repl_result?;
    game_result?;
    Ok(())
}

fn run_frontend(config: &RuntimeConfig, frontend: Frontend) -> lantern_foundation::Result<()> {
    match &config.script {
        Some(path) => Repl::with_editor(ScriptEditor::open(path)?, frontend).run(),
        None => Repl::new(frontend)?.run(),
    }
}

fn print_help() {
    println!(
        "\x1b[1mLantern\x1b[0m - A small text adventure

\x1b[1mUSAGE:\x1b[0m
    lantern [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -q, --quiet          Do not print the welcome banner
    --save-dir DIR       Directory for save files (default: ./saves, or $LANTERN_SAVE_DIR)
    --capacity N         Input channel capacity (default: 16)
    --new NAME           Start a new game called NAME without the save picker
    --script FILE        Read commands from FILE instead of the terminal
    --log FILTER         Log filter when RUST_LOG is unset (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    lantern                          Pick a save and play
    lantern --new monday             Start a fresh game called monday
    lantern --new t --script run.txt Play the moves in run.txt

\x1b[1mIN GAME:\x1b[0m
    help                 List commands
    Tab                  Complete the current command
    Ctrl+D / Ctrl+C      Quit"
    );
}
