//! Headless Cozy Slots round simulator.
//!
//! Drives the session API the way a presentation layer would, minus the
//! animation delays: player-initiated rounds run one after another and every
//! follow-up directive (autoplay, free spins) is drained immediately.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cozy_engine::GameConfig;
use cozy_session::{RoundResolution, SessionError, SlotSession};

#[derive(Debug, Parser)]
#[command(
    name = "cozy-cli",
    about = "Run Cozy Slots rounds headlessly and report session statistics"
)]
struct Args {
    /// Player-initiated rounds to play
    #[arg(long, default_value_t = 100)]
    rounds: u32,

    /// Bet size (must be on the bet ladder)
    #[arg(long)]
    bet: Option<f64>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Autoplay rounds to queue before the first spin
    #[arg(long, default_value_t = 0)]
    autoplay: u32,

    /// Game config JSON file (defaults to the built-in config)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };

    let mut session = match args.seed {
        Some(seed) => SlotSession::seeded(config, seed)?,
        None => SlotSession::new(config)?,
    };
    if let Some(bet) = args.bet {
        session.set_bet(bet)?;
    }
    if args.autoplay > 0 {
        session.set_autoplay(args.autoplay)?;
    }

    log::info!(
        "starting session: {} rounds at bet {}, balance {}",
        args.rounds,
        session.bet(),
        session.balance()
    );

    'rounds: for round in 1..=args.rounds {
        let mut resolution = match session.spin() {
            Ok(resolution) => resolution,
            Err(SessionError::InsufficientFunds { balance, bet }) => {
                log::warn!("round {round}: out of funds (balance {balance}, bet {bet})");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        report(round, &resolution, &session);

        // Drain follow-ups before the next player-initiated round.
        while resolution.follow_up.is_some() {
            resolution = match session.spin() {
                Ok(resolution) => resolution,
                Err(SessionError::InsufficientFunds { .. }) => break 'rounds,
                Err(e) => return Err(e.into()),
            };
            report(round, &resolution, &session);
        }
    }

    let stats = session.stats();
    println!("spins         {}", stats.total_spins);
    println!("  free spins  {}", stats.free_spins_played);
    println!("staked        {:.0}", stats.total_staked);
    println!("won           {:.0}", stats.total_won);
    println!("rtp           {:.2}%", stats.rtp());
    println!("hit rate      {:.2}%", stats.hit_rate());
    println!("features      {}", stats.features_triggered);
    println!("jackpots      {}", stats.jackpots_won);
    println!("max win       {:.0}", stats.max_win);
    println!("balance       {:.0}", session.balance());
    println!("jackpot pool  {:.2}", session.jackpot());

    Ok(())
}

fn report(round: u32, resolution: &RoundResolution, session: &SlotSession) {
    let kind = if resolution.is_free_spin { "free" } else { "paid" };
    log::debug!(
        "round {round} ({kind}): won {:.0}, balance {:.0}",
        resolution.total_credited,
        session.balance()
    );
    if let Some(amount) = resolution.jackpot_won {
        log::info!("round {round}: jackpot pays {amount:.0}");
    }
    if resolution.outcome.free_spins_triggered {
        log::info!(
            "round {round}: free spins triggered ({} remaining)",
            session.free_spins_remaining()
        );
    }
}
