use std::collections::HashSet;

use anyhow::{Result, anyhow, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    country::{Country, CountryDefinition},
    player::Player,
    rules::GameRules,
    state::GameState,
};

pub struct GameBuilder<R = StdRng> {
    definitions: Vec<CountryDefinition>,
    rules: GameRules,
    birth_country: Option<String>,
    rng: R,
}

impl GameBuilder<StdRng> {
    pub fn new(config: GameConfig) -> Self {
        Self {
            definitions: config.countries,
            rules: config.rules,
            birth_country: None,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> GameBuilder<R> {
    pub fn with_rng<S: Rng>(self, rng: S) -> GameBuilder<S> {
        GameBuilder {
            definitions: self.definitions,
            rules: self.rules,
            birth_country: self.birth_country,
            rng,
        }
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Skips the random birth draw.
    pub fn with_birth_country(mut self, name: impl Into<String>) -> Self {
        self.birth_country = Some(name.into());
        self
    }

    pub fn build(self) -> Result<GameState<R>> {
        self.validate()?;
        let GameBuilder {
            definitions,
            rules,
            birth_country,
            mut rng,
        } = self;

        let countries: Vec<Country> = definitions.into_iter().map(Country::from).collect();
        let birth_idx = match birth_country {
            Some(name) => countries
                .iter()
                .position(|country| country.matches_name(&name))
                .ok_or_else(|| anyhow!("unknown birth country: {}", name))?,
            None => rng.gen_range(0..countries.len()),
        };
        let player = Player::new(&countries[birth_idx], &rules);
        log::info!(
            "session ready: {} countries, born in {}",
            countries.len(),
            countries[birth_idx].name
        );

        Ok(GameState::new(rng, rules, countries, player))
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.definitions.is_empty(),
            "no countries are defined; provide at least one"
        );
        self.rules.validate()?;

        let mut seen = HashSet::new();
        for definition in &self.definitions {
            let name = definition.name.trim();
            ensure!(!name.is_empty(), "country names must not be empty");
            ensure!(
                seen.insert(name.to_lowercase()),
                "duplicate country: {}",
                name
            );
            ensure!(definition.visa_fee > 0, "{} has no visa fee", name);
            ensure!(definition.passport_fee > 0, "{} has no passport fee", name);
        }
        Ok(())
    }
}
