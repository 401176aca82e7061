use pitwall_core::render::creations_embed;
use pitwall_core::types::{CreationKind, Platform};

use crate::reply::{requester, send_embed};
use crate::state::{Context, Error};

/// How many creations the top-N commands show.
pub const TOP_CREATIONS: u32 = 3;

pub const NO_CREATIONS: &str = "No creations found.";

/// Top 3 most downloaded mods today (PS3).
#[poise::command(slash_command, category = "Creations")]
pub async fn topmods(ctx: Context<'_>) -> Result<(), Error> {
    send_top(ctx, CreationKind::Character).await
}

/// Top 3 most downloaded karts today (PS3).
#[poise::command(slash_command, category = "Creations")]
pub async fn topkarts(ctx: Context<'_>) -> Result<(), Error> {
    send_top(ctx, CreationKind::Kart).await
}

/// Top 3 most downloaded tracks today (PS3).
#[poise::command(slash_command, category = "Creations")]
pub async fn toptracks(ctx: Context<'_>) -> Result<(), Error> {
    send_top(ctx, CreationKind::Track).await
}

pub fn failure_message(kind: CreationKind) -> String {
    format!("Failed to fetch top {}.", kind.label().to_lowercase())
}

pub fn title(kind: CreationKind) -> String {
    format!("Top {}", kind.label())
}

async fn send_top(ctx: Context<'_>, kind: CreationKind) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let creations = match data
        .api
        .top_creations(kind, Platform::Ps3, TOP_CREATIONS)
        .await
    {
        Ok(creations) => creations,
        Err(e) => {
            tracing::warn!(kind = kind.label(), error = %e, "Top creations fetch failed");
            ctx.say(failure_message(kind)).await?;
            return Ok(());
        }
    };

    if creations.is_empty() {
        ctx.say(NO_CREATIONS).await?;
        return Ok(());
    }

    let view = creations_embed(
        &creations,
        &title(kind),
        &data.config.star_glyphs,
        data.config.embed_color,
        &requester(ctx),
    );
    send_embed(ctx, &view).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_the_kind() {
        assert_eq!(failure_message(CreationKind::Character), "Failed to fetch top mods.");
        assert_eq!(failure_message(CreationKind::Track), "Failed to fetch top tracks.");
        assert_eq!(title(CreationKind::Kart), "Top Karts");
    }
}
