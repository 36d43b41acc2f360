mod game;

pub use game::{
    Country, CountryDefinition, Document, DocumentKind, GameBuilder, GameConfig, GameRules,
    GameState, Player, SessionStatus,
};
