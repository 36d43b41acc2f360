use anyhow::{Result, anyhow, ensure};
use rand::Rng;
use rand::rngs::StdRng;

use super::{
    bootstrap::GameBuilder, config::GameConfig, country::Country, player::Player,
    rules::GameRules,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Won,
    Lost,
    Quit,
}

/// One play session: the country registry, the player, and the dice.
pub struct GameState<R = StdRng> {
    rng: R,
    rules: GameRules,
    countries: Vec<Country>,
    player: Player,
    status: SessionStatus,
}

impl GameState<StdRng> {
    pub fn from_config_with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        GameBuilder::new(config).with_rng(rng).build()
    }
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new(rng: R, rules: GameRules, countries: Vec<Country>, player: Player) -> Self {
        Self {
            rng,
            rules,
            countries,
            player,
            status: SessionStatus::Running,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Passports held against the number needed to win.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.player.count_passports(),
            self.rules.winning_passport_count,
        )
    }

    pub fn find_country_index(&self, name: &str) -> Option<usize> {
        self.countries
            .iter()
            .position(|country| country.matches_name(name))
    }

    pub fn work(&mut self) -> Result<Vec<String>> {
        self.ensure_running()?;
        Ok(self.player.sell_lemonade(&mut self.rng, &self.rules))
    }

    pub fn apply_for_visa(&mut self, country: &str) -> Result<Vec<String>> {
        self.ensure_running()?;
        let idx = self.resolve_index(country)?;
        self.player.apply_for_visa(&self.countries[idx])
    }

    pub fn travel(&mut self, country: &str) -> Result<Vec<String>> {
        self.ensure_running()?;
        let idx = self.resolve_index(country)?;
        self.player.travel_to(&self.countries[idx])
    }

    pub fn sneak(&mut self, country: &str) -> Result<Vec<String>> {
        self.ensure_running()?;
        let idx = self.resolve_index(country)?;
        let reports = self.player.attempt_illegal_entry(
            &self.countries[idx],
            &mut self.rng,
            self.rules.capture_probability,
        )?;
        if self.player.is_game_over() {
            self.status = SessionStatus::Lost;
        }
        Ok(reports)
    }

    /// Permits are always bought for the country the player is standing in.
    pub fn buy_permit(&mut self) -> Result<Vec<String>> {
        self.ensure_running()?;
        let here = self.player.current_location().clone();
        self.player.buy_residence_permit(&here)
    }

    pub fn buy_passport(&mut self) -> Result<Vec<String>> {
        self.ensure_running()?;
        let here = self.player.current_location().clone();
        let mut reports = self.player.buy_passport(&here)?;
        let (held, target) = self.progress();
        if held >= target {
            log::info!("victory with {held} passports");
            self.status = SessionStatus::Won;
            reports.extend(victory_banner(target));
        }
        Ok(reports)
    }

    pub fn drop_item(&mut self, name: &str) -> Result<String> {
        self.ensure_running()?;
        self.player.drop_item(name)
    }

    pub fn quit(&mut self) -> Vec<String> {
        if self.is_running() {
            self.status = SessionStatus::Quit;
        }
        vec![String::new(), "Thanks for playing World Passport Quest!".to_owned()]
    }

    fn resolve_index(&self, name: &str) -> Result<usize> {
        self.find_country_index(name).ok_or_else(|| not_found(name))
    }

    fn ensure_running(&self) -> Result<()> {
        ensure!(self.is_running(), "The game is over.");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

fn not_found(name: &str) -> anyhow::Error {
    anyhow!(
        "Country '{}' not found. Type 'countries' to see all available countries.",
        name.trim()
    )
}

fn victory_banner(target: usize) -> Vec<String> {
    let rule = "=".repeat(50);
    vec![
        String::new(),
        rule.clone(),
        "CONGRATULATIONS! YOU WON!".to_owned(),
        rule,
        String::new(),
        format!("You've collected {} passports!", target),
        "You are now a true world citizen!".to_owned(),
    ]
}
