use crate::card::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Cards that make a starting position meaningless in the default set
pub const DEFAULT_BANNED: &[&str] = &[
    "Coax from the Blind Eternities",
    "Emrakul, the Promised End",
    "Lupine Prototype",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: &'static str, min: u32, max: u32 },
    #[error("num_colors must be between 1 and 5, got {got}")]
    InvalidColorCount { got: usize },
    #[error("life_range must start at 1 or more, got {0}")]
    NonPositiveLife(u32),
    #[error("life_range max {0} is above the largest life total ({})", i32::MAX)]
    LifeTooHigh(u32),
}

/// Tunables for matchup generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchupConfig {
    pub banned_names: BTreeSet<String>,
    pub num_colors: usize,
    pub hand_size_range: (u32, u32),
    pub board_size_range: (u32, u32),
    /// Random floor for the land count before the creature curve is considered
    pub land_range: (u32, u32),
    pub life_range: (u32, u32),
    /// Upper bound of the extra life granted when a side starts dead on board
    pub alpha_buffer: u32,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        MatchupConfig {
            banned_names: DEFAULT_BANNED.iter().map(|s| s.to_string()).collect(),
            num_colors: 2,
            hand_size_range: (1, 3),
            board_size_range: (2, 4),
            land_range: (3, 6),
            life_range: (1, 20),
            alpha_buffer: 5,
        }
    }
}

impl MatchupConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: MatchupConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_colors == 0 || self.num_colors > Color::ALL.len() {
            return Err(ConfigError::InvalidColorCount { got: self.num_colors });
        }

        let ranges = [
            ("hand_size_range", self.hand_size_range),
            ("board_size_range", self.board_size_range),
            ("land_range", self.land_range),
            ("life_range", self.life_range),
        ];
        for (field, (min, max)) in ranges {
            if min > max {
                return Err(ConfigError::InvalidRange { field, min, max });
            }
        }

        if self.life_range.0 == 0 {
            return Err(ConfigError::NonPositiveLife(self.life_range.0));
        }
        if i32::try_from(self.life_range.1).is_err() {
            return Err(ConfigError::LifeTooHigh(self.life_range.1));
        }

        Ok(())
    }
}
