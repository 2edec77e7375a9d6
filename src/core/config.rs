//! Game configuration.

use serde::{Deserialize, Serialize};

/// When the "checkers on the bar must re-enter first" rule is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarEntryRule {
    /// Only the first checker action of a turn must come from the bar.
    ///
    /// After one re-entry, remaining bar checkers no longer force the
    /// following moves. This is the classic behavior of this engine.
    #[default]
    FirstAction,
    /// Every checker action must come from the bar while it is non-empty.
    EveryAction,
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default dice RNG.
    /// Same seed produces the same sequence of rolls.
    pub seed: u64,

    /// Forced re-entry enforcement.
    pub bar_entry: BarEntryRule,

    /// Append every accepted action to the game history.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bar_entry: BarEntryRule::FirstAction,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom bar-entry rule.
    pub fn with_bar_entry(mut self, rule: BarEntryRule) -> Self {
        self.bar_entry = rule;
        self
    }

    /// Create a new config with history recording on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.bar_entry, BarEntryRule::FirstAction);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_bar_entry(BarEntryRule::EveryAction)
            .with_history(false);

        assert_eq!(config.seed, 123);
        assert_eq!(config.bar_entry, BarEntryRule::EveryAction);
        assert!(!config.record_history);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
