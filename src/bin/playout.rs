//! quoridor-playout - random playouts from the command line.
//!
//! Plays uniformly random games and reports how they ended. Useful as a
//! smoke test of the rules and as a rough throughput measure.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rustc_hash::FxHashSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quoridor_engine::core::{EngineConfig, GameRng, Player};
use quoridor_engine::games::quoridor::{random_playout, QuoridorGame};

/// Random Quoridor playouts
#[derive(Parser, Debug)]
#[command(name = "quoridor-playout")]
#[command(about = "Play random Quoridor games and summarise the outcomes", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value = "10")]
    games: u32,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a TOML engine config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check wall candidates on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Ply limit per game (overrides the config file)
    #[arg(long)]
    max_plies: Option<u32>,
}

#[derive(Debug, Default)]
struct Summary {
    wins: [u32; 2],
    unfinished: u32,
    plies: u64,
    walls: u64,
    distinct_states: usize,
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_plies) = cli.max_plies {
        config = config.with_max_plies(max_plies);
    }
    if cli.parallel {
        config = config.with_parallel_walls(true);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, games = cli.games, "starting playouts");

    let game = QuoridorGame::try_new(config.clone()).context("invalid engine config")?;
    let mut rng = GameRng::new(config.seed);
    let mut summary = Summary::default();
    let mut seen = FxHashSet::default();
    let started = Instant::now();

    for index in 0..cli.games {
        let mut playout_rng = rng.fork();
        let result = random_playout(&game, &mut playout_rng, config.max_plies)
            .with_context(|| format!("playout {index} failed"))?;

        for state in &result.states {
            seen.insert(game.state_key(state)?);
        }

        match result.winner {
            Some(player) => summary.wins[player.index()] += 1,
            None => summary.unfinished += 1,
        }
        summary.plies += u64::from(result.plies);
        summary.walls += u64::from(result.walls_placed);

        info!(
            game = index,
            winner = ?result.winner,
            plies = result.plies,
            walls = result.walls_placed,
            "game finished"
        );
        debug!(history = ?result.history, "game history");
    }
    summary.distinct_states = seen.len();

    let games = f64::from(cli.games.max(1));
    info!(
        player_one_wins = summary.wins[Player::One.index()],
        player_two_wins = summary.wins[Player::Two.index()],
        unfinished = summary.unfinished,
        average_plies = summary.plies as f64 / games,
        walls_placed = summary.walls,
        distinct_states = summary.distinct_states,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "playouts complete"
    );

    Ok(())
}
