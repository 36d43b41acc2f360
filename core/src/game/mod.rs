mod bootstrap;
mod config;
mod constants;
pub(crate) use constants::*;
mod country;
mod document;
mod player;
mod rules;
mod state;

pub use bootstrap::GameBuilder;
pub use config::GameConfig;
pub use country::{Country, CountryDefinition};
pub use document::{Document, DocumentKind};
pub use player::Player;
pub use rules::GameRules;
pub use state::{GameState, SessionStatus};
