mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use statepad_config::AppConfig;

use crate::scenario::ReplayOp;

/// Snapshot-based undo/redo playground.
#[derive(Parser, Debug)]
#[command(name = "statepad", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the final history as JSON instead of a text trace.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit a code buffer, then undo and redo the last edit.
    Editor,
    /// Play through several levels, then restore earlier ones.
    Game,
    /// Run raw operations (save:VALUE, undo, redo) against a string history.
    Replay {
        #[arg(required = true)]
        ops: Vec<ReplayOp>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    // The log level lives in the config, so loading it reports through a
    // temporary stderr subscriber.
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt().with_writer(std::io::stderr).finish(),
        || AppConfig::load_or_create(&config_path),
    );

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting statepad with config {}", config_path.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Editor => scenario::run_editor(&config.editor, cli.json, &mut out),
        Command::Game => scenario::run_game(&config.game, cli.json, &mut out),
        Command::Replay { ops } => scenario::run_replay(&ops, cli.json, &mut out),
    }
}
