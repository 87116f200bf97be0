#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Fork Off **
//! A text adventure about a fork, a kitchen and a lot of poking around.

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use forkoff_engine::config::DEFAULT_CONFIG_FILE;
use forkoff_engine::repl::{ConsoleConfirm, InputManager};
use forkoff_engine::{FORKOFF_VERSION, FileStore, Game, Renderer, Settings, run_repl};

#[derive(Parser)]
#[command(name = "forkoff")]
#[command(about = "Play the Fork Off text adventure")]
#[command(version)]
struct Cli {
    /// Run the game in development mode.
    #[arg(short, long)]
    development: bool,

    /// Settings file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the game data files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory for saved games
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::load(&self.config);
        if self.development {
            settings.development = true;
        }
        if let Some(dir) = &self.data_dir {
            settings.data_dir.clone_from(dir);
        }
        if let Some(dir) = &self.save_dir {
            settings.save_dir.clone_from(dir);
        }
        settings
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    info!("Start: Fork Off {FORKOFF_VERSION}");

    let settings = cli.settings();
    info!(
        "data from {}, saves in {}, development: {}",
        settings.data_dir.display(),
        settings.save_dir.display(),
        settings.development
    );

    let renderer = Renderer::new(settings.development);
    let input = Rc::new(RefCell::new(InputManager::new()));
    let confirm = ConsoleConfirm::new(Rc::clone(&input), renderer.clone());
    let store = FileStore::new(&settings.data_dir, &settings.save_dir);
    let mut game = Game::new(Box::new(store), Box::new(confirm), &settings)
        .with_context(|| format!("while loading game data from {}", settings.data_dir.display()))?;

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    run_repl(&mut game, &renderer, &input)
}
