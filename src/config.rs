//! Game configuration.

use crate::error::{InvalidConfiguration, Result};
use crate::session::ScoreRecord;
use crate::CODE_LENGTH;

/// Smallest pool a player may choose.
pub const MIN_POOL_SIZE: usize = 5;
/// Largest pool a player may choose.
pub const MAX_POOL_SIZE: usize = 10;
/// Pool size used when the player does not choose one.
pub const DEFAULT_POOL_SIZE: usize = 5;

/// How the final score of a won session is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Number of guesses submitted, including the winning one.
    #[default]
    GuessCount,
    /// Hit and Present marks earned by the latest guess.
    MatchedColors,
}

impl std::str::FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guesses" | "guess-count" => Ok(ScoringRule::GuessCount),
            "matched" | "matched-colors" => Ok(ScoringRule::MatchedColors),
            other => Err(format!("unknown scoring rule: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub pool_size: usize,
    pub scoring: ScoringRule,
    pub player_id: Option<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            scoring: ScoringRule::default(),
            player_id: None,
        }
    }
}

impl GameConfig {
    pub fn with_pool_size(pool_size: usize) -> Self {
        Self {
            pool_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&self.pool_size) {
            return Err(InvalidConfiguration::DifficultyOutOfRange {
                requested: self.pool_size,
                min: MIN_POOL_SIZE,
                max: MAX_POOL_SIZE,
            });
        }
        Ok(())
    }

    /// Colors in the pool beyond the four the target needs.
    pub fn difficulty_level(&self) -> usize {
        self.pool_size.saturating_sub(CODE_LENGTH)
    }

    pub(crate) fn score_record(&self, score: usize) -> ScoreRecord {
        ScoreRecord {
            player_id: self.player_id,
            score,
            difficulty_level: self.difficulty_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_easiest() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.difficulty_level(), 1);
        assert_eq!(config.scoring, ScoringRule::GuessCount);
    }

    #[test]
    fn range_is_five_to_ten() {
        assert!(GameConfig::with_pool_size(10).validate().is_ok());
        assert_eq!(GameConfig::with_pool_size(10).difficulty_level(), 6);
        assert_eq!(
            GameConfig::with_pool_size(4).validate(),
            Err(InvalidConfiguration::DifficultyOutOfRange {
                requested: 4,
                min: 5,
                max: 10
            })
        );
        assert!(GameConfig::with_pool_size(11).validate().is_err());
    }

    #[test]
    fn scoring_rule_names() {
        assert_eq!("guesses".parse::<ScoringRule>(), Ok(ScoringRule::GuessCount));
        assert_eq!("Matched".parse::<ScoringRule>(), Ok(ScoringRule::MatchedColors));
        assert!("points".parse::<ScoringRule>().is_err());
    }
}
