use std::collections::HashMap;
use std::io::Write;

use anyhow::{Result, anyhow, bail};
use passport_quest_core::GameState;

use super::{print_countries, print_help, print_inventory, print_reports, print_status};

pub struct Context<'a> {
    game: &'a mut GameState,
    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(game: &'a mut GameState, out: &'a mut dyn Write) -> Self {
        Self { game, out }
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut *self.game
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    fn report(&mut self, reports: &[String]) -> Result<()> {
        print_reports(self.out(), reports)?;
        Ok(())
    }
}

/// Everything after the command word, kept whole so country names may contain spaces.
pub struct Args<'a> {
    rest: Option<&'a str>,
}

impl<'a> Args<'a> {
    pub fn new(rest: Option<&'a str>) -> Self {
        Self {
            rest: rest.map(str::trim).filter(|rest| !rest.is_empty()),
        }
    }

    pub fn required(&self, message: &str) -> Result<&'a str> {
        self.rest.ok_or_else(|| anyhow!(message.to_owned()))
    }
}

pub trait Command {
    fn name() -> &'static str;
    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()>;
}

type CommandFn = fn(&mut Context<'_>, Args<'_>) -> Result<()>;

pub struct CommandRegistry {
    handlers: HashMap<&'static str, CommandFn>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<C: Command>(&mut self) {
        let name = C::name();
        if self.handlers.insert(name, C::execute).is_some() {
            panic!("command registered twice: {name}");
        }
    }

    pub fn dispatch(&self, command: &str, ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        let Some(handler) = self.handlers.get(command) else {
            bail!("Unknown command. Type 'help' for available commands.");
        };
        handler(ctx, args)
    }

    /// Lowercases the line and splits it into the command word and the rest.
    pub fn execute_input(&self, ctx: &mut Context<'_>, input: &str) -> Result<()> {
        let normalized = input.trim().to_lowercase();
        let (head, rest) = match normalized.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest)),
            None => (normalized.as_str(), None),
        };
        self.dispatch(head, ctx, Args::new(rest))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register::<CountriesCommand>();
        registry.register::<StatusCommand>();
        registry.register::<WorkCommand>();
        registry.register::<LimonCommand>();
        registry.register::<VisaCommand>();
        registry.register::<TravelCommand>();
        registry.register::<MoveCommand>();
        registry.register::<SneakCommand>();
        registry.register::<PermitCommand>();
        registry.register::<PassportCommand>();
        registry.register::<BackpackCommand>();
        registry.register::<DropCommand>();
        registry.register::<HelpCommand>();
        registry.register::<QuitCommand>();
        registry
    }
}

pub struct CountriesCommand;

impl Command for CountriesCommand {
    fn name() -> &'static str {
        "countries"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let Context { game, out } = ctx;
        print_countries(game.countries(), &mut **out)?;
        Ok(())
    }
}

pub struct StatusCommand;

impl Command for StatusCommand {
    fn name() -> &'static str {
        "status"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let Context { game, out } = ctx;
        print_status(&**game, &mut **out)?;
        Ok(())
    }
}

pub struct BackpackCommand;

impl Command for BackpackCommand {
    fn name() -> &'static str {
        "backpack"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let Context { game, out } = ctx;
        print_inventory(game.player(), &mut **out)?;
        Ok(())
    }
}

pub struct WorkCommand;

impl Command for WorkCommand {
    fn name() -> &'static str {
        "work"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let reports = ctx.game_mut().work()?;
        ctx.report(&reports)
    }
}

pub struct LimonCommand;

impl Command for LimonCommand {
    fn name() -> &'static str {
        "limon"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        WorkCommand::execute(ctx, args)
    }
}

pub struct VisaCommand;

impl Command for VisaCommand {
    fn name() -> &'static str {
        "visa"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        let country = args.required("Which country? Usage: visa <country>")?;
        let reports = ctx.game_mut().apply_for_visa(country)?;
        ctx.report(&reports)
    }
}

pub struct TravelCommand;

impl Command for TravelCommand {
    fn name() -> &'static str {
        "travel"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        let country = args.required("Where to? Usage: travel <country>")?;
        let reports = ctx.game_mut().travel(country)?;
        ctx.report(&reports)
    }
}

pub struct MoveCommand;

impl Command for MoveCommand {
    fn name() -> &'static str {
        "move"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        TravelCommand::execute(ctx, args)
    }
}

pub struct SneakCommand;

impl Command for SneakCommand {
    fn name() -> &'static str {
        "sneak"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        let country = args.required("Where to? Usage: sneak <country>")?;
        let reports = ctx.game_mut().sneak(country)?;
        ctx.report(&reports)
    }
}

pub struct PermitCommand;

impl Command for PermitCommand {
    fn name() -> &'static str {
        "permit"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let reports = ctx.game_mut().buy_permit()?;
        ctx.report(&reports)
    }
}

pub struct PassportCommand;

impl Command for PassportCommand {
    fn name() -> &'static str {
        "passport"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let reports = ctx.game_mut().buy_passport()?;
        ctx.report(&reports)
    }
}

pub struct DropCommand;

impl Command for DropCommand {
    fn name() -> &'static str {
        "drop"
    }

    fn execute(ctx: &mut Context<'_>, args: Args<'_>) -> Result<()> {
        let item = args.required("What should be dropped? Usage: drop <item>")?;
        let message = ctx.game_mut().drop_item(item)?;
        writeln!(ctx.out(), "{message}")?;
        Ok(())
    }
}

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name() -> &'static str {
        "help"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        print_help(ctx.out())?;
        Ok(())
    }
}

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name() -> &'static str {
        "quit"
    }

    fn execute(ctx: &mut Context<'_>, _args: Args<'_>) -> Result<()> {
        let farewell = ctx.game_mut().quit();
        ctx.report(&farewell)
    }
}

#[cfg(test)]
mod tests {
    use passport_quest_core::{DocumentKind, GameBuilder, GameConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn game_born_in(country: &str) -> GameState {
        GameBuilder::new(GameConfig::from_embedded().unwrap())
            .with_rng(StdRng::seed_from_u64(9))
            .with_birth_country(country)
            .build()
            .unwrap()
    }

    fn run(game: &mut GameState, input: &str) -> (Result<()>, String) {
        let registry = CommandRegistry::default();
        let mut out = Vec::new();
        let result = {
            let mut ctx = Context::new(game, &mut out);
            registry.execute_input(&mut ctx, input)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_are_case_insensitive() {
        let mut game = game_born_in("Bulls");
        let (result, output) = run(&mut game, "STATUS");
        assert!(result.is_ok());
        assert!(output.contains("Current Location: Bulls"));
    }

    #[test]
    fn limon_is_an_alias_for_work() {
        let mut game = game_born_in("Bulls");
        let (result, output) = run(&mut game, "limon");
        assert!(result.is_ok());
        assert!(output.contains("You sold lemonade"));
        assert!(game.player().money() >= 20);
    }

    #[test]
    fn country_argument_keeps_inner_spaces() {
        let mut game = game_born_in("Bulls");
        let (result, _) = run(&mut game, "visa   United States of Waffleland  ");
        let error = result.unwrap_err();
        assert!(error.to_string().contains("You need 1000 coins"));
    }

    #[test]
    fn missing_argument_is_reported() {
        let mut game = game_born_in("Bulls");
        for input in ["visa", "travel", "move", "sneak   ", "drop"] {
            let (result, _) = run(&mut game, input);
            assert!(result.unwrap_err().to_string().contains("Usage:"));
        }
        assert!(game.is_running());
    }

    #[test]
    fn unknown_command_hints_at_help() {
        let mut game = game_born_in("Bulls");
        let (result, _) = run(&mut game, "fly bulls");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown command. Type 'help' for available commands."
        );
    }

    #[test]
    fn move_travels_like_travel() {
        let mut game = game_born_in("Bulls");
        let (result, output) = run(&mut game, "move Bulls");
        assert_eq!(result.unwrap_err().to_string(), "You are already in Bulls!");
        assert!(output.is_empty());
    }

    #[test]
    fn drop_takes_multi_word_items() {
        let mut game = game_born_in("Bulls");
        let (result, output) = run(&mut game, "drop Bulls Passport");
        assert!(result.is_ok());
        assert!(output.contains("Dropped: Bulls Passport"));
        assert!(!game.player().has_document(DocumentKind::Passport, "Bulls"));
    }

    #[test]
    fn help_lists_every_command() {
        let mut game = game_born_in("Bulls");
        let (_, output) = run(&mut game, "help");
        for name in [
            "countries", "status", "work", "visa", "travel", "sneak", "permit", "passport",
            "backpack", "drop", "help", "quit",
        ] {
            assert!(output.contains(name), "help is missing {name}");
        }
    }

    #[test]
    #[should_panic]
    fn duplicate_registration_panics() {
        let mut registry = CommandRegistry::default();
        registry.register::<HelpCommand>();
    }
}
