//! `dama` - headless checkers
//!
//! Loads settings, applies command-line overrides and plays one match through a
//! [`GameSession`], with stand-in strategies in the human seats.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dama::core::{load_settings, save_settings};
use dama::game::driver::DEFAULT_MAX_PLIES;
use dama::game::{run_match, AiPlayer, GameMode, GameSession, MatchConfig, StrategyKind};

/// Play a game of checkers in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Game mode (defaults to the one in the settings file)
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Strategy standing in for the white player
    #[arg(long, value_enum, default_value_t = StrategyKind::Search)]
    white: StrategyKind,

    /// Strategy standing in for the black player in two-player mode
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    black: StrategyKind,

    /// Seed for the random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Stop an undecided match after this many plies
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: u32,

    /// AI thinking time in milliseconds (charged to the move clock and waited for real)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Settings file to use instead of the one in the config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings back before playing
    #[arg(long, default_value_t = false)]
    save_config: bool,

    /// Print the match summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.ai_move_delay_ms = delay_ms;
    }
    if settings.mode.ai_side().is_some() && args.black != StrategyKind::Random {
        warn!(
            "[MAIN] --black is ignored in {} mode, the AI plays black",
            settings.mode
        );
    }

    if args.save_config {
        let path = save_settings(&settings, args.config.as_deref())
            .context("Failed to save settings")?;
        info!("[MAIN] Settings written to {:?}", path);
    }

    let mut session = GameSession::from_settings(&settings);
    let mut ai = AiPlayer::from_settings(&settings);
    let stand_in_seed = settings.seed.map(|s| s.wrapping_add(1));
    let mut stand_ins = AiPlayer::new(stand_in_seed, settings.searcher());
    let config = MatchConfig {
        white: args.white,
        black: args.black,
        max_plies: args.max_plies,
        ai_delay: settings.ai_move_delay(),
        realtime: args.delay_ms.is_some_and(|ms| ms > 0),
    };
    info!(
        "[MAIN] Starting {} match (white stand-in: {}, AI delay: {:?})",
        settings.mode,
        config.white,
        Duration::from_millis(settings.ai_move_delay_ms)
    );

    let summary = run_match(&mut session, &mut ai, &mut stand_ins, &config)
        .context("Match aborted")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.final_board);
        println!();
        println!(
            "{:?} after {} plies ({} captures, {} timeouts)",
            summary.end, summary.plies, summary.captures, summary.timeouts
        );
    }
    Ok(())
}
