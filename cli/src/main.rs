mod cli;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use passport_quest_core::{GameConfig, GameState};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let config = load_config()?;
    let rng = StdRng::from_entropy();
    let mut game = GameState::from_config_with_rng(config, rng)
        .context("failed to set up the game")?;

    cli::run(&mut game)
}

fn load_config() -> Result<GameConfig> {
    let Some(path) = resolve_config_path()? else {
        return GameConfig::from_embedded();
    };

    let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
    if is_json {
        let file = File::open(&path)
            .with_context(|| format!("cannot open game config: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse game config: {}", path.display()))
    } else {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read game config: {}", path.display()))?;
        GameConfig::from_yaml_str(&content)
            .with_context(|| format!("failed to parse game config: {}", path.display()))
    }
}

/// An override file in `./config` wins over the built-in country list.
fn resolve_config_path() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let config_dir = cwd.join("config");
    let candidates = ["game.json", "game.yaml", "game.yml"].map(|name| config_dir.join(name));

    Ok(candidates.into_iter().find(|path| path.exists()))
}
