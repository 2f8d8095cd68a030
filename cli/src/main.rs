use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prismatch_core::{Coord, PlayEngine};

mod app;
mod command;
mod leaderboard;
mod render;
mod settings;
mod share;

use app::App;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board side length
    #[arg(long)]
    size: Option<Coord>,

    /// Moves per game
    #[arg(short, long)]
    moves: Option<u16>,

    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(args.size, args.moves, args.seed);
    log::debug!("settings: {settings:?}");

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let engine = PlayEngine::seeded(settings.game, seed);
    let top = settings.leaderboard_size.unwrap_or(leaderboard::DEFAULT_TOP);
    let mut app = App::new(engine, top, io::stdout().lock());

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            app.run(BufReader::new(file))
        }
        None => app.run(io::stdin().lock()),
    }
}
