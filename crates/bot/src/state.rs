use pitwall_client::StatsApi;

use crate::config::BotConfig;

/// Shared data handed to every command.
pub struct Data {
    pub config: BotConfig,
    pub api: StatsApi,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;
