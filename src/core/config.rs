//! Session configuration.
//!
//! - `HandLayout`: how many cards of each kind a player is dealt
//! - `SessionConfig`: seed, hand layout, roster bounds, compose placeholder
//!
//! Both use builder methods over `Default` and can be read from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest roster that can finish a vote: everyone needs someone else's
/// tweet to vote for.
pub const MIN_PLAYERS: usize = 2;

/// Cards dealt to each player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandLayout {
    /// Cards drawn from each of Opening, Middle and Ending.
    pub per_category: usize,

    /// Extra cards drawn from the union of all categories.
    pub extras: usize,
}

impl Default for HandLayout {
    fn default() -> Self {
        Self {
            per_category: 2,
            extras: 2,
        }
    }
}

impl HandLayout {
    /// Hand size when the deck never runs dry.
    #[must_use]
    pub fn full_hand(&self) -> usize {
        self.per_category * 3 + self.extras
    }
}

/// Configuration for a `SessionState` and its `PhaseController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Deck seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Dealing layout.
    pub hand: HandLayout,

    /// Smallest roster the controller accepts.
    pub min_players: usize,

    /// Largest roster the controller accepts.
    pub max_players: usize,

    /// Prompt text the compose box shows before a player types. Submitting
    /// it unchanged counts as a blank tweet.
    pub compose_placeholder: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand: HandLayout::default(),
            min_players: 3,
            max_players: 6,
            compose_placeholder: Some("what's happening?".to_string()),
        }
    }
}

impl SessionConfig {
    /// Use a fixed deck seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom hand layout.
    #[must_use]
    pub fn with_hand(mut self, hand: HandLayout) -> Self {
        self.hand = hand;
        self
    }

    /// Set the accepted roster size range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= MIN_PLAYERS, "A vote needs at least 2 players");
        assert!(min <= max, "Empty player range");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set or clear the compose placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Option<&str>) -> Self {
        self.compose_placeholder = placeholder.map(str::to_string);
        self
    }

    /// Check the roster bounds `with_player_range` enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_PLAYERS || self.min_players > self.max_players {
            return Err(ConfigError::PlayerRange {
                min: self.min_players,
                max: self.max_players,
                floor: MIN_PLAYERS,
            });
        }
        Ok(())
    }

    /// Parse from JSON and validate; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "session config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.hand.full_hand(), 8);
        assert_eq!((config.min_players, config.max_players), (3, 6));
        assert_eq!(config.compose_placeholder.as_deref(), Some("what's happening?"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(123)
            .with_hand(HandLayout { per_category: 1, extras: 0 })
            .with_player_range(2, 4)
            .with_placeholder(None);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.hand.full_hand(), 3);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 4);
        assert_eq!(config.compose_placeholder, None);
    }

    #[test]
    #[should_panic(expected = "Empty player range")]
    fn test_inverted_range() {
        let _ = SessionConfig::default().with_player_range(5, 3);
    }

    #[test]
    fn test_partial_json() {
        let config = SessionConfig::from_json(r#"{"seed": 9, "hand": {"extras": 0}}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.hand.per_category, 2);
        assert_eq!(config.hand.extras, 0);
        assert_eq!(config.max_players, 6);
    }

    #[test]
    fn test_json_rejects_unplayable_roster() {
        for json in [r#"{"min_players": 0}"#, r#"{"min_players": 1}"#] {
            let err = SessionConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::PlayerRange { max: 6, floor: 2, .. }));
        }

        let err = SessionConfig::from_json(r#"{"min_players": 5, "max_players": 4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PlayerRange { min: 5, max: 4, .. }));
    }

    #[test]
    fn test_json_bad_syntax() {
        let err = SessionConfig::from_json("{ seed: 1").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate() {
        assert!(SessionConfig::default().validate().is_ok());
        assert!(SessionConfig::default().with_player_range(2, 2).validate().is_ok());

        let config = SessionConfig {
            min_players: 1,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
