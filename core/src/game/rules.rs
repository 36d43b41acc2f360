use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use super::{
    DEFAULT_BACKPACK_LIMIT, DEFAULT_CAPTURE_PROBABILITY, DEFAULT_LEMONADE_MAX,
    DEFAULT_LEMONADE_MIN, DEFAULT_STARTING_MONEY, DEFAULT_WINNING_PASSPORT_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub starting_money: u32,
    pub backpack_limit: usize,
    pub winning_passport_count: usize,
    pub capture_probability: f64,
    pub lemonade_min: u32,
    pub lemonade_max: u32,
}

impl GameRules {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.backpack_limit > 0,
            "backpack_limit must leave room for the birth passport"
        );
        ensure!(
            self.winning_passport_count > 1,
            "winning_passport_count must be at least 2, the birth passport alone cannot win"
        );
        ensure!(
            self.winning_passport_count <= self.backpack_limit,
            "winning_passport_count ({}) does not fit in a backpack of {} slots",
            self.winning_passport_count,
            self.backpack_limit
        );
        ensure!(
            self.capture_probability.is_finite()
                && (0.0..=1.0).contains(&self.capture_probability),
            "capture_probability must be between 0 and 1: {}",
            self.capture_probability
        );
        ensure!(
            self.lemonade_min <= self.lemonade_max,
            "lemonade_min ({}) is above lemonade_max ({})",
            self.lemonade_min,
            self.lemonade_max
        );
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_money: DEFAULT_STARTING_MONEY,
            backpack_limit: DEFAULT_BACKPACK_LIMIT,
            winning_passport_count: DEFAULT_WINNING_PASSPORT_COUNT,
            capture_probability: DEFAULT_CAPTURE_PROBABILITY,
            lemonade_min: DEFAULT_LEMONADE_MIN,
            lemonade_max: DEFAULT_LEMONADE_MAX,
        }
    }
}
