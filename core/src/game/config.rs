use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{country::CountryDefinition, rules::GameRules};

const EMBEDDED_CONFIG: &str = include_str!("../../../config/game.yaml");

/// Rules plus the country list a session is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub rules: GameRules,
    pub countries: Vec<CountryDefinition>,
}

impl GameConfig {
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_CONFIG).context("failed to parse the built-in game config")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("invalid game config YAML")
    }
}
