use std::sync::LazyLock;

use crate::commands::dj::utils::player::PlayerRegistry;
use crate::config::BotConfig;

pub mod commands;
pub mod config;
pub mod modules;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// Shared HTTP client for streaming inputs and API calls
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

// User data, which is stored and accessible in all command invocations
pub struct Data {
    pub config: BotConfig,
    pub players: PlayerRegistry,
}

impl Data {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            players: PlayerRegistry::new(),
        }
    }
}
