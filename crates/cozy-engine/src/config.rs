//! Game configuration

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Free-spin feature parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSpinsConfig {
    /// Spins awarded per scatter trigger
    pub award_count: u32,
    /// Line-win multiplier applied during free-spin rounds
    pub multiplier: f64,
}

impl Default for FreeSpinsConfig {
    fn default() -> Self {
        Self {
            award_count: 10,
            multiplier: 2.0,
        }
    }
}

/// Progressive jackpot parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackpotConfig {
    /// Pool value after an award, and at session start
    pub seed: f64,
    /// Fraction of each real-money bet added to the pool
    pub contribution_rate: f64,
    /// Per-spin award probability (paid spins only)
    pub hit_probability: f64,
}

impl Default for JackpotConfig {
    fn default() -> Self {
        Self {
            seed: 10_000.0,
            contribution_rate: 0.01,
            hit_probability: 0.0005,
        }
    }
}

/// Full game configuration: feature parameters plus the bet ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub free_spins: FreeSpinsConfig,
    pub jackpot: JackpotConfig,
    /// Discrete bet sizes, in play order
    pub bet_levels: Vec<f64>,
    /// Bet selected at session start (snapped to the ladder)
    pub default_bet: f64,
    /// Balance at session start
    pub starting_balance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            free_spins: FreeSpinsConfig::default(),
            jackpot: JackpotConfig::default(),
            bet_levels: vec![10.0, 20.0, 50.0, 100.0, 200.0],
            default_bet: 100.0,
            starting_balance: 10_000.0,
        }
    }
}

impl GameConfig {
    /// Validate ladder and probability ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.bet_levels.is_empty() {
            return Err(EngineError::EmptyBetLadder);
        }
        if !(0.0..=1.0).contains(&self.jackpot.hit_probability) {
            return Err(EngineError::InvalidProbability(
                self.jackpot.hit_probability,
            ));
        }
        Ok(())
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import from JSON, then validate
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_constants() {
        let config = GameConfig::default();
        assert_eq!(config.free_spins.award_count, 10);
        assert_eq!(config.free_spins.multiplier, 2.0);
        assert_eq!(config.jackpot.seed, 10_000.0);
        assert_eq!(config.jackpot.contribution_rate, 0.01);
        assert_eq!(config.jackpot.hit_probability, 0.0005);
        assert_eq!(config.bet_levels, vec![10.0, 20.0, 50.0, 100.0, 200.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        let restored = GameConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn empty_ladder_rejected() {
        let config = GameConfig {
            bet_levels: Vec::new(),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::EmptyBetLadder)));
    }

    #[test]
    fn out_of_range_probability_rejected() {
        let mut config = GameConfig::default();
        config.jackpot.hit_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidProbability(p)) if p == 1.5
        ));
    }
}
