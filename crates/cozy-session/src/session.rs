//! Spin transaction state machine

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use cozy_engine::{EngineResult, GameConfig, Grid, Paytable, ReelSet, SpinOutcome};

use crate::error::{SessionError, SessionResult};
use crate::stats::SessionStats;

/// Session phase. Spins are rejected while one is unsettled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Spinning,
}

/// Who should auto-initiate the next spin, if anyone.
///
/// The session never schedules anything itself; the caller owns the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUp {
    /// Pending autoplay rounds remain
    Autoplay,
    /// Free spins remain
    FreeSpin,
}

/// Data available as soon as a spin begins: what the reels must land on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundStart {
    /// The grid the reels will settle on
    pub grid: Grid,
    /// Bet the round was played at
    pub bet: f64,
    /// True when this round consumed a free spin
    pub is_free_spin: bool,
}

/// Result of settling a spin: everything the UI needs to present the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// Evaluated outcome (line wins, scatter win, trigger flag)
    pub outcome: SpinOutcome,
    /// Jackpot amount, when the independent draw hit
    pub jackpot_won: Option<f64>,
    /// Total credited to the balance (outcome total plus jackpot)
    pub total_credited: f64,
    /// True when this round consumed a free spin
    pub is_free_spin: bool,
    /// Chaining directive for the caller
    pub follow_up: Option<FollowUp>,
}

/// Everything computed at begin time, applied at settle time.
#[derive(Debug, Clone)]
struct PendingRound {
    outcome: SpinOutcome,
    jackpot_won: Option<f64>,
    bet: f64,
    is_free_spin: bool,
}

/// A single player's round session.
///
/// There is exactly one mutator of this state and the spin transaction is not
/// reentrant; wrap it in [`crate::SharedSession`] when several parties need a
/// handle to the same player.
#[derive(Debug)]
pub struct SlotSession {
    config: GameConfig,
    paytable: Paytable,
    reels: ReelSet,
    rng: StdRng,

    phase: SessionPhase,
    pending: Option<PendingRound>,

    balance: f64,
    bet_index: usize,
    last_win: f64,
    jackpot_pool: f64,
    free_spins_remaining: u32,
    autoplay_remaining: u32,

    stats: SessionStats,
}

impl SlotSession {
    /// Create a session with the standard tables and an OS-seeded RNG.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let paytable = Paytable::standard();
        let reels = ReelSet::standard(paytable.symbols());
        Self::with_tables(config, paytable, reels, StdRng::from_os_rng())
    }

    /// Create a session with the standard tables and a fixed RNG seed.
    pub fn seeded(config: GameConfig, seed: u64) -> EngineResult<Self> {
        let paytable = Paytable::standard();
        let reels = ReelSet::standard(paytable.symbols());
        Self::with_tables(config, paytable, reels, StdRng::seed_from_u64(seed))
    }

    /// Create a session from explicit tables.
    pub fn with_tables(
        config: GameConfig,
        paytable: Paytable,
        reels: ReelSet,
        rng: StdRng,
    ) -> EngineResult<Self> {
        config.validate()?;
        let bet_index = config
            .bet_levels
            .iter()
            .position(|&b| b == config.default_bet)
            .unwrap_or(0);

        Ok(Self {
            balance: config.starting_balance,
            jackpot_pool: config.jackpot.seed,
            bet_index,
            config,
            paytable,
            reels,
            rng,
            phase: SessionPhase::Idle,
            pending: None,
            last_win: 0.0,
            free_spins_remaining: 0,
            autoplay_remaining: 0,
            stats: SessionStats::default(),
        })
    }

    /// Reseed the RNG for reproducible rounds.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SPIN TRANSACTION
    // ═══════════════════════════════════════════════════════════════════════

    /// Begin a spin: take payment, build the grid, compute the full outcome.
    ///
    /// On a paid spin the bet is debited and the jackpot pool funded before
    /// anything else; a free spin consumes one counter tick and costs
    /// nothing. The independent jackpot draw only runs on paid spins.
    /// Rejected without any state change while a spin is unsettled or when
    /// the balance cannot cover the bet.
    pub fn begin_spin(&mut self) -> SessionResult<RoundStart> {
        if self.phase == SessionPhase::Spinning {
            log::warn!("spin requested while spinning; ignored");
            return Err(SessionError::SpinInProgress);
        }

        let bet = self.bet();
        let is_free_spin = self.free_spins_remaining > 0;
        if is_free_spin {
            self.free_spins_remaining -= 1;
        } else {
            if self.balance < bet {
                log::warn!(
                    "spin rejected: balance {} below bet {}",
                    self.balance,
                    bet
                );
                return Err(SessionError::InsufficientFunds {
                    balance: self.balance,
                    bet,
                });
            }
            self.balance -= bet;
            self.jackpot_pool += bet * self.config.jackpot.contribution_rate;
        }

        self.phase = SessionPhase::Spinning;
        self.last_win = 0.0;

        let grid = self.reels.build_grid(&mut self.rng);
        let line_multiplier = if is_free_spin {
            self.config.free_spins.multiplier
        } else {
            1.0
        };
        let outcome = self.paytable.evaluate(&grid, bet, line_multiplier);

        let jackpot_won = if !is_free_spin
            && self.rng.random::<f64>() < self.config.jackpot.hit_probability
        {
            let amount = self.jackpot_pool.floor();
            self.jackpot_pool = self.config.jackpot.seed;
            log::info!("jackpot hit for {amount}");
            Some(amount)
        } else {
            None
        };

        self.pending = Some(PendingRound {
            outcome,
            jackpot_won,
            bet,
            is_free_spin,
        });

        Ok(RoundStart {
            grid,
            bet,
            is_free_spin,
        })
    }

    /// Settle the pending spin: credit the win, apply feature bookkeeping,
    /// and report whether the caller should chain another spin.
    pub fn settle(&mut self) -> SessionResult<RoundResolution> {
        let PendingRound {
            outcome,
            jackpot_won,
            bet,
            is_free_spin,
        } = self.pending.take().ok_or(SessionError::NotSpinning)?;

        let total_credited = outcome.total_win + jackpot_won.unwrap_or(0.0);
        self.balance += total_credited;
        self.last_win = total_credited;

        if outcome.free_spins_triggered {
            self.free_spins_remaining += self.config.free_spins.award_count;
            self.autoplay_remaining = 0;
            log::info!(
                "free spins triggered: +{} at {}x",
                self.config.free_spins.award_count,
                self.config.free_spins.multiplier
            );
        }
        if jackpot_won.is_some() {
            self.autoplay_remaining = 0;
        }

        let staked = if is_free_spin { 0.0 } else { bet };
        self.stats
            .record(staked, total_credited, &outcome, jackpot_won.is_some());

        let follow_up = if self.autoplay_remaining > 0 {
            self.autoplay_remaining -= 1;
            Some(FollowUp::Autoplay)
        } else if self.free_spins_remaining > 0 {
            Some(FollowUp::FreeSpin)
        } else {
            None
        };

        self.phase = SessionPhase::Idle;
        log::debug!(
            "round settled: credited {total_credited}, balance {}, follow-up {follow_up:?}",
            self.balance
        );

        Ok(RoundResolution {
            outcome,
            jackpot_won,
            total_credited,
            is_free_spin,
            follow_up,
        })
    }

    /// Run a complete round in one call (begin + settle back-to-back).
    pub fn spin(&mut self) -> SessionResult<RoundResolution> {
        self.begin_spin()?;
        self.settle()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BET AND AUTOPLAY CONTROLS (Idle only)
    // ═══════════════════════════════════════════════════════════════════════

    /// Move one step up the bet ladder; clamps at the top.
    pub fn raise_bet(&mut self) -> SessionResult<f64> {
        self.ensure_idle()?;
        if self.bet_index + 1 < self.config.bet_levels.len() {
            self.bet_index += 1;
        }
        Ok(self.bet())
    }

    /// Move one step down the bet ladder; clamps at the bottom.
    pub fn lower_bet(&mut self) -> SessionResult<f64> {
        self.ensure_idle()?;
        self.bet_index = self.bet_index.saturating_sub(1);
        Ok(self.bet())
    }

    /// Select an exact bet from the ladder.
    pub fn set_bet(&mut self, bet: f64) -> SessionResult<f64> {
        self.ensure_idle()?;
        let index = self
            .config
            .bet_levels
            .iter()
            .position(|&b| b == bet)
            .ok_or(SessionError::InvalidBet(bet))?;
        self.bet_index = index;
        Ok(self.bet())
    }

    /// Set the pending autoplay round count.
    pub fn set_autoplay(&mut self, rounds: u32) -> SessionResult<()> {
        self.ensure_idle()?;
        self.autoplay_remaining = rounds;
        Ok(())
    }

    fn ensure_idle(&self) -> SessionResult<()> {
        if self.phase == SessionPhase::Spinning {
            return Err(SessionError::SpinInProgress);
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // VIEWS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SessionPhase::Spinning
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The currently selected bet
    pub fn bet(&self) -> f64 {
        self.config.bet_levels[self.bet_index]
    }

    pub fn last_win(&self) -> f64 {
        self.last_win
    }

    pub fn jackpot(&self) -> f64 {
        self.jackpot_pool
    }

    pub fn free_spins_remaining(&self) -> u32 {
        self.free_spins_remaining
    }

    pub fn autoplay_remaining(&self) -> u32 {
        self.autoplay_remaining
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session statistics.
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }
}
