mod commands;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context as _, Result};
use passport_quest_core::{Country, GameState, Player};

use commands::{CommandRegistry, Context};

const BANNER_WIDTH: usize = 50;
const LIST_WIDTH: usize = 30;

pub fn run(game: &mut GameState) -> Result<()> {
    ctrlc::set_handler(|| {
        let _ = say_goodbye(&mut io::stdout());
        process::exit(0);
    })
    .context("failed to install the interrupt handler")?;

    // Unlocked handle: the interrupt handler writes from its own thread.
    let mut out = io::stdout();
    run_session(game, io::stdin().lock(), &mut out)
}

/// Reads one command per line until the session ends or input runs out.
pub(crate) fn run_session<I: BufRead, W: Write>(
    game: &mut GameState,
    mut input: I,
    out: &mut W,
) -> Result<()> {
    let registry = CommandRegistry::default();
    print_intro(game, &mut *out)?;

    while game.is_running() {
        write!(out, "\n> ")?;
        out.flush().context("failed to flush the prompt")?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("failed to read input")?;
        if bytes == 0 {
            say_goodbye(out)?;
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let outcome = {
            let mut ctx = Context::new(&mut *game, &mut *out);
            registry.execute_input(&mut ctx, trimmed)
        };
        if let Err(error) = outcome {
            writeln!(out, "{error}")?;
        }
    }
    Ok(())
}

/// Farewell for a session cut short by Ctrl-C or end-of-input.
fn say_goodbye(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n\nGame interrupted. Thanks for playing!")?;
    out.flush()
}

fn print_intro(game: &GameState, out: &mut dyn Write) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    let (_, target) = game.progress();
    writeln!(out, "\n{rule}")?;
    writeln!(out, "WORLD PASSPORT QUEST")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nExplore island nations and collect passports!")?;
    writeln!(out, "Goal: Collect {target} passports to win")?;
    writeln!(out, "(Your birth country passport counts)")?;
    writeln!(
        out,
        "\nYou were born in {}!",
        game.player().current_location().name
    )?;
    writeln!(out, "You receive your home country's passport.")?;
    writeln!(out, "\nType 'help' to see available commands.")?;
    print_status(game, out)
}

pub(crate) fn print_help(out: &mut dyn Write) -> io::Result<()> {
    let commands = [
        ("countries", "View all countries and their fees"),
        ("status", "Show your current status"),
        ("work", "Work at lemonade stand to earn coins"),
        ("visa [country]", "Apply for a visa"),
        ("travel [country]", "Travel to a country"),
        ("sneak [country]", "Attempt illegal entry (risky!)"),
        ("permit", "Buy residence permit for current country"),
        ("passport", "Buy passport for current country"),
        ("backpack", "View backpack contents"),
        ("drop [item]", "Drop an item from backpack"),
        ("help", "Show this help message"),
        ("quit", "Exit game"),
    ];
    writeln!(out, "\nAvailable Commands:")?;
    for (command, description) in commands {
        writeln!(out, "  {command:<20} - {description}")?;
    }
    Ok(())
}

pub(crate) fn print_status(game: &GameState, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "\nCurrent Location: {}",
        game.player().current_location().name
    )?;
    print_inventory(game.player(), out)?;
    let (held, target) = game.progress();
    writeln!(out, "Progress: {held}/{target} passports")
}

pub(crate) fn print_inventory(player: &Player, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Money: {} coins", player.money())?;
    writeln!(out, "\nBackpack contents:")?;
    if player.backpack().is_empty() {
        writeln!(out, "  Empty")?;
    }
    for document in player.backpack() {
        writeln!(out, "  - {document}")?;
    }
    writeln!(
        out,
        "Space remaining: {}/{} slots",
        player.free_slots(),
        player.backpack_limit()
    )
}

pub(crate) fn print_countries(countries: &[Country], out: &mut dyn Write) -> io::Result<()> {
    let rule = "=".repeat(LIST_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "AVAILABLE COUNTRIES")?;
    writeln!(out, "{rule}")?;
    for country in countries {
        writeln!(out, "\n{}:", country.name)?;
        writeln!(out, "  - Visa fee: {} coins", country.visa_fee)?;
        writeln!(out, "  - Permit fee: {} coins", country.permit_fee())?;
        writeln!(out, "  - Passport fee: {} coins", country.passport_fee)?;
    }
    Ok(())
}

pub(crate) fn print_reports(out: &mut dyn Write, reports: &[String]) -> io::Result<()> {
    for report in reports {
        writeln!(out, "{report}")?;
    }
    Ok(())
}
