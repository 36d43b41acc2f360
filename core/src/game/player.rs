use anyhow::{Result, bail, ensure};
use rand::Rng;

use super::{
    country::Country,
    document::{Document, DocumentKind},
    rules::GameRules,
};

/// The traveller: where they are, what they carry, and how much they can spend.
///
/// Every action checks its guards before touching any state, so a failed
/// action leaves the player exactly as it was.
#[derive(Debug, Clone)]
pub struct Player {
    current_location: Country,
    money: u32,
    backpack: Vec<Document>,
    backpack_limit: usize,
    game_over: bool,
}

impl Player {
    pub fn new(birth_country: &Country, rules: &GameRules) -> Self {
        let mut backpack = Vec::with_capacity(rules.backpack_limit);
        backpack.push(Document::new(
            DocumentKind::Passport,
            birth_country.name.clone(),
        ));
        Self {
            current_location: birth_country.clone(),
            money: rules.starting_money,
            backpack,
            backpack_limit: rules.backpack_limit,
            game_over: false,
        }
    }

    pub fn current_location(&self) -> &Country {
        &self.current_location
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn backpack(&self) -> &[Document] {
        &self.backpack
    }

    pub fn backpack_limit(&self) -> usize {
        self.backpack_limit
    }

    pub fn free_slots(&self) -> usize {
        self.backpack_limit.saturating_sub(self.backpack.len())
    }

    pub fn is_backpack_full(&self) -> bool {
        self.backpack.len() >= self.backpack_limit
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn add_money(&mut self, amount: u32) -> String {
        self.money = self.money.saturating_add(amount);
        format!("Earned {} coins. Total: {} coins.", amount, self.money)
    }

    /// All or nothing: returns `false` and keeps the balance when funds are short.
    pub fn spend_money(&mut self, amount: u32) -> bool {
        match self.money.checked_sub(amount) {
            Some(remaining) => {
                self.money = remaining;
                true
            }
            None => false,
        }
    }

    pub fn add_to_backpack(&mut self, kind: DocumentKind, country: &str) -> Result<String> {
        let document = Document::new(kind, country);
        ensure!(
            !self.is_backpack_full(),
            "Your backpack is full! Cannot add more items."
        );
        ensure!(
            !self.backpack.contains(&document),
            "You already carry {}.",
            document
        );
        let message = format!("Added {} to your backpack", document);
        log::debug!("backpack += {document}");
        self.backpack.push(document);
        Ok(message)
    }

    pub fn has_document(&self, kind: DocumentKind, country: &str) -> bool {
        self.backpack.iter().any(|document| document.is(kind, country))
    }

    pub fn drop_item(&mut self, name: &str) -> Result<String> {
        let Some(position) = self
            .backpack
            .iter()
            .position(|document| document.matches_name(name))
        else {
            bail!("Item '{}' not found in backpack!", name.trim());
        };
        let dropped = self.backpack.remove(position);
        log::debug!("backpack -= {dropped}");
        Ok(format!("Dropped: {}", dropped))
    }

    pub fn count_passports(&self) -> usize {
        self.backpack
            .iter()
            .filter(|document| document.kind == DocumentKind::Passport)
            .count()
    }

    pub fn sell_lemonade<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rules: &GameRules,
    ) -> Vec<String> {
        let profit = rng.gen_range(rules.lemonade_min..=rules.lemonade_max);
        vec![
            self.add_money(profit),
            format!("You sold lemonade and earned {} coins!", profit),
        ]
    }

    pub fn apply_for_visa(&mut self, target: &Country) -> Result<Vec<String>> {
        self.ensure_backpack_space()?;
        self.ensure_elsewhere(target)?;
        ensure!(
            !self.has_document(DocumentKind::Visa, &target.name),
            "You already have a visa for {}!",
            target.name
        );
        self.pay(target.visa_fee, &format!("a {} visa", target.name))?;
        let added = self.add_to_backpack(DocumentKind::Visa, &target.name)?;
        Ok(vec![added, format!("Visa approved for {}!", target.name)])
    }

    pub fn travel_to(&mut self, target: &Country) -> Result<Vec<String>> {
        self.ensure_elsewhere(target)?;
        let admitted = [
            DocumentKind::Visa,
            DocumentKind::Passport,
            DocumentKind::Permit,
        ]
        .into_iter()
        .any(|kind| self.has_document(kind, &target.name));
        ensure!(
            admitted,
            "You need a visa, permit, or passport to enter {}!",
            target.name
        );
        self.current_location = target.clone();
        Ok(vec![
            format!("Traveling to {}...", target.name),
            format!("Welcome to {}!", target.name),
        ])
    }

    /// Crosses a border without papers. A roll below `capture_probability`
    /// ends the game; the random source is untouched when the target is the
    /// current location.
    pub fn attempt_illegal_entry<R: Rng + ?Sized>(
        &mut self,
        target: &Country,
        rng: &mut R,
        capture_probability: f64,
    ) -> Result<Vec<String>> {
        self.ensure_elsewhere(target)?;
        let roll: f64 = rng.r#gen();
        if roll < capture_probability {
            log::info!("caught sneaking into {} (roll {roll:.3})", target.name);
            self.game_over = true;
            return Ok(vec![
                format!(
                    "Border patrol caught you trying to sneak into {}!",
                    target.name
                ),
                "You've been deported!".to_owned(),
                String::new(),
                "GAME OVER".to_owned(),
            ]);
        }
        self.current_location = target.clone();
        Ok(vec![
            format!("Sneaking into {}...", target.name),
            "Success! You made it in, but you should get a residence permit to stay legally."
                .to_owned(),
        ])
    }

    pub fn buy_residence_permit(&mut self, country: &Country) -> Result<Vec<String>> {
        self.ensure_backpack_space()?;
        ensure!(
            !self.has_document(DocumentKind::Passport, &country.name),
            "You are already a citizen of {}!",
            country.name
        );
        ensure!(
            !self.has_document(DocumentKind::Permit, &country.name),
            "You already have a residence permit for {}!",
            country.name
        );
        self.pay(country.permit_fee(), "a residence permit")?;
        let added = self.add_to_backpack(DocumentKind::Permit, &country.name)?;
        Ok(vec![
            added,
            format!("Residence permit acquired for {}!", country.name),
        ])
    }

    pub fn buy_passport(&mut self, target: &Country) -> Result<Vec<String>> {
        self.ensure_backpack_space()?;
        ensure!(
            self.current_location == *target,
            "You must be in {} to buy their passport!",
            target.name
        );
        ensure!(
            !self.has_document(DocumentKind::Passport, &target.name),
            "You are already a citizen of {}!",
            target.name
        );
        ensure!(
            self.has_document(DocumentKind::Permit, &target.name),
            "You need a residence permit for {} first!",
            target.name
        );
        self.pay(target.passport_fee, &format!("a {} passport", target.name))?;
        let added = self.add_to_backpack(DocumentKind::Passport, &target.name)?;
        Ok(vec![
            added,
            format!("Congratulations! You are now a citizen of {}!", target.name),
        ])
    }

    fn ensure_backpack_space(&self) -> Result<()> {
        ensure!(
            !self.is_backpack_full(),
            "Your backpack is full! Drop an item first."
        );
        Ok(())
    }

    fn ensure_elsewhere(&self, target: &Country) -> Result<()> {
        ensure!(
            self.current_location != *target,
            "You are already in {}!",
            target.name
        );
        Ok(())
    }

    fn pay(&mut self, amount: u32, purpose: &str) -> Result<()> {
        if !self.spend_money(amount) {
            bail!(
                "You need {} coins for {}. Current balance: {} coins",
                amount,
                purpose,
                self.money
            );
        }
        Ok(())
    }
}
