//! Gateway event logging.

use poise::serenity_prelude as serenity;

use crate::state::{Context, Data, Error};

/// poise event hook. Logs `Ready`, then the guild details once the
/// cache has filled in (`CacheReady`).
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot } = event {
        log_ready(ctx, data_about_bot).await;
    }
    if let Some(guild_ids) = cached_guild_ids(event) {
        log_guilds(ctx, guild_ids);
    }
    Ok(())
}

/// Guilds whose details are available in the cache for this event.
///
/// At `Ready` the cache only holds unavailable stubs, so details are
/// logged from `CacheReady` instead.
pub fn cached_guild_ids(event: &serenity::FullEvent) -> Option<&[serenity::GuildId]> {
    match event {
        serenity::FullEvent::CacheReady { guilds } => Some(guilds.as_slice()),
        _ => None,
    }
}

async fn log_ready(ctx: &serenity::Context, ready: &serenity::Ready) {
    tracing::info!(
        bot = %ready.user.name,
        bot_id = %ready.user.id,
        version = env!("CARGO_PKG_VERSION"),
        "Bot is online"
    );

    match ctx.http.get_current_application_info().await {
        Ok(info) => match info.owner {
            Some(owner) => tracing::info!(owner = %owner.name, owner_id = %owner.id, "Application owner"),
            None => tracing::info!("Application has no individual owner"),
        },
        Err(e) => tracing::warn!(error = %e, "Could not fetch application info"),
    }

    if ready.guilds.is_empty() {
        tracing::warn!("The bot is not connected to any servers");
        return;
    }

    let ids: Vec<String> = ready.guilds.iter().map(|g| g.id.to_string()).collect();
    tracing::info!(count = ready.guilds.len(), ids = %ids.join(","), "Connected guilds");
}

fn log_guilds(ctx: &serenity::Context, guild_ids: &[serenity::GuildId]) {
    for &guild_id in guild_ids {
        match ctx.cache.guild(guild_id) {
            Some(guild) => tracing::info!(
                guild_id = %guild_id,
                name = %guild.name,
                owner_id = %guild.owner_id,
                members = guild.member_count,
                "Guild"
            ),
            None => tracing::debug!(guild_id = %guild_id, "Guild missing from cache"),
        }
    }
}

/// Logs every invocation before the command body runs.
pub async fn log_invocation(ctx: Context<'_>) {
    let guild = match ctx.guild_id() {
        Some(id) => {
            let name = ctx
                .guild()
                .map(|g| g.name.clone())
                .unwrap_or_default();
            format!("{name} ({id})")
        }
        None => "(DM)".to_string(),
    };
    tracing::debug!(
        invocation = %ctx.invocation_string(),
        user = %ctx.author().name,
        user_id = %ctx.author().id,
        guild = %guild,
        "Command invoked"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_details_come_from_cache_ready() {
        let ids = vec![serenity::GuildId::new(7), serenity::GuildId::new(9)];
        let event = serenity::FullEvent::CacheReady { guilds: ids.clone() };
        assert_eq!(cached_guild_ids(&event), Some(ids.as_slice()));
    }

    #[test]
    fn other_events_carry_no_guild_details() {
        let event = serenity::FullEvent::ShardsReady { total_shards: 1 };
        assert_eq!(cached_guild_ids(&event), None);
    }
}
