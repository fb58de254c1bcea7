//! Puzzle configuration.
//!
//! Defaults reproduce the classic game: reach 2048 to win, and one spawn
//! in ten is a 4. A fixed `seed` makes every spawn reproducible.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tile value that wins the classic game.
pub const WIN_TILE: u32 = 2048;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// A board holding any tile at least this large is won.
    pub win_tile: u32,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            win_tile: WIN_TILE,
            four_probability: FOUR_PROBABILITY,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, win_tile: u32) -> Self {
        self.win_tile = win_tile;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        if self.win_tile == 0 {
            return Err(ConfigError::ZeroWinTile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PuzzleConfig::new()
            .with_win_tile(64)
            .with_four_probability(0.5)
            .with_seed(9);

        assert_eq!(config.win_tile, 64);
        assert_eq!(config.four_probability, 0.5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_probability() {
        let err = PuzzleConfig::new().with_four_probability(1.5).validate();
        assert_eq!(err, Err(ConfigError::InvalidProbability(1.5)));

        let err = PuzzleConfig::new().with_four_probability(-0.1).validate();
        assert!(matches!(err, Err(ConfigError::InvalidProbability(_))));

        let err = PuzzleConfig::new().with_four_probability(f64::NAN).validate();
        assert!(matches!(err, Err(ConfigError::InvalidProbability(_))));

        assert!(PuzzleConfig::new().with_four_probability(0.0).validate().is_ok());
        assert!(PuzzleConfig::new().with_four_probability(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_win_tile() {
        let err = PuzzleConfig::new().with_win_tile(0).validate();
        assert_eq!(err, Err(ConfigError::ZeroWinTile));
    }

    #[test]
    fn test_serde_partial() {
        let config: PuzzleConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config, PuzzleConfig::new().with_seed(5));

        let json = serde_json::to_string(&config).unwrap();
        let back: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
