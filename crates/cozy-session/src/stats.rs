//! Session statistics

use serde::{Deserialize, Serialize};

use cozy_engine::SpinOutcome;

/// Aggregate statistics for one session.
///
/// Free spins are recorded with a stake of zero, so RTP relates wins to real
/// money wagered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub free_spins_played: u64,
    pub total_staked: f64,
    pub total_won: f64,
    pub wins: u64,
    pub losses: u64,
    pub features_triggered: u64,
    pub jackpots_won: u64,
    pub max_win: f64,
}

impl SessionStats {
    /// Record one settled round.
    pub fn record(&mut self, staked: f64, won: f64, outcome: &SpinOutcome, jackpot: bool) {
        self.total_spins += 1;
        if staked == 0.0 {
            self.free_spins_played += 1;
        }
        self.total_staked += staked;
        self.total_won += won;

        if won > 0.0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        if outcome.free_spins_triggered {
            self.features_triggered += 1;
        }
        if jackpot {
            self.jackpots_won += 1;
        }
        if won > self.max_win {
            self.max_win = won;
        }
    }

    /// Return-to-player percentage over real-money stakes
    pub fn rtp(&self) -> f64 {
        if self.total_staked > 0.0 {
            (self.total_won / self.total_staked) * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of rounds that paid anything
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(total: f64, triggered: bool) -> SpinOutcome {
        SpinOutcome {
            total_win: total,
            free_spins_triggered: triggered,
            scatter_win: None,
            line_wins: Vec::new(),
        }
    }

    #[test]
    fn rtp_ignores_free_spin_stakes() {
        let mut stats = SessionStats::default();
        stats.record(100.0, 50.0, &outcome(50.0, false), false);
        stats.record(0.0, 200.0, &outcome(200.0, false), false);

        assert_eq!(stats.total_spins, 2);
        assert_eq!(stats.free_spins_played, 1);
        assert_eq!(stats.total_staked, 100.0);
        assert_eq!(stats.total_won, 250.0);
        assert_eq!(stats.rtp(), 250.0);
    }

    #[test]
    fn hit_rate_counts_paying_rounds() {
        let mut stats = SessionStats::default();
        stats.record(100.0, 0.0, &outcome(0.0, false), false);
        stats.record(100.0, 500.0, &outcome(500.0, true), false);

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.features_triggered, 1);
        assert_eq!(stats.hit_rate(), 50.0);
        assert_eq!(stats.max_win, 500.0);
    }

    #[test]
    fn empty_stats_have_zero_rates() {
        let stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }
}
