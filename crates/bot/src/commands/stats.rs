use pitwall_core::render::stats_embed;
use pitwall_core::types::Platform;

use crate::reply::{bot_avatar, requester, send_embed};
use crate::state::{Context, Error};

/// Show server statistics.
#[poise::command(slash_command, category = "Stats")]
pub async fn stats(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let totals = data.api.server_totals(Platform::Ps3).await;
    tracing::debug!(
        mods = totals.mods,
        karts = totals.karts,
        tracks = totals.tracks,
        "Server totals"
    );

    let avatar = bot_avatar(ctx);
    let view = stats_embed(
        &totals,
        data.config.embed_color,
        Some(&avatar),
        &requester(ctx),
    );
    send_embed(ctx, &view).await
}
