//! Conversion from rendered [`EmbedView`]s to serenity builders, plus
//! the small context lookups every command needs.

use pitwall_core::embed::{EmbedView, Requester};
use poise::serenity_prelude as serenity;

use crate::state::{Context, Error};

/// Build the serenity embed for a rendered view.
pub fn to_create_embed(view: &EmbedView) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(view.title.as_str())
        .colour(view.color);

    if let Some(description) = &view.description {
        embed = embed.description(description.as_str());
    }
    if let Some(thumbnail) = &view.thumbnail {
        embed = embed.thumbnail(thumbnail.as_str());
    }
    for field in &view.fields {
        embed = embed.field(field.name.as_str(), field.value.as_str(), field.inline);
    }
    if let Some(footer) = &view.footer {
        let mut builder = serenity::CreateEmbedFooter::new(footer.text.as_str());
        if let Some(icon_url) = &footer.icon_url {
            builder = builder.icon_url(icon_url.as_str());
        }
        embed = embed.footer(builder);
    }
    if let Some(at) = view.timestamp {
        match serenity::Timestamp::from_unix_timestamp(at.timestamp()) {
            Ok(timestamp) => embed = embed.timestamp(timestamp),
            Err(e) => tracing::debug!(error = %e, "Dropping unrepresentable embed timestamp"),
        }
    }
    embed
}

/// The invoking user, for "Requested by" footers.
pub fn requester(ctx: Context<'_>) -> Requester {
    let author = ctx.author();
    Requester {
        name: author.name.clone(),
        avatar_url: Some(author.face()),
    }
}

/// The bot's own avatar URL.
pub fn bot_avatar(ctx: Context<'_>) -> String {
    ctx.serenity_context().cache.current_user().face()
}

/// The bot's own user name.
pub fn bot_name(ctx: Context<'_>) -> String {
    ctx.serenity_context().cache.current_user().name.clone()
}

/// Send a single embed.
pub async fn send_embed(ctx: Context<'_>, view: &EmbedView) -> Result<(), Error> {
    ctx.send(poise::CreateReply::default().embed(to_create_embed(view)))
        .await?;
    Ok(())
}
