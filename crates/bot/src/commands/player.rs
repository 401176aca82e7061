use pitwall_core::render::player_embed;
use poise::serenity_prelude as serenity;

use crate::assets::{skill_image_file_name, skill_level_image};
use crate::reply::to_create_embed;
use crate::state::{Context, Error};

/// Shows information about a player.
#[poise::command(slash_command, category = "Players")]
pub async fn player(
    ctx: Context<'_>,
    #[description = "The username of the player you want to view."] username: String,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let player_id = match data.api.player_id(&username).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            ctx.say(not_found_message(&username)).await?;
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(username = %username, error = %e, "Player id lookup failed");
            ctx.say(not_found_message(&username)).await?;
            return Ok(());
        }
    };

    let profile = match data.api.player_info(&player_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            ctx.say(info_failure_message(&player_id)).await?;
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(player_id = %player_id, error = %e, "Player info lookup failed");
            ctx.say(info_failure_message(&player_id)).await?;
            return Ok(());
        }
    };

    let skill_id = profile.skill_level_id.as_deref().unwrap_or("N/A");
    let image = skill_level_image(&data.config.skill_image_dir, skill_id);
    tracing::debug!(skill_id, found = image.is_some(), "Skill level badge");

    let file_name = skill_image_file_name(skill_id);
    let view = player_embed(
        &profile,
        &username,
        &player_id,
        data.config.embed_color,
        image.as_ref().map(|_| file_name.as_str()),
    );

    let mut reply = poise::CreateReply::default().embed(to_create_embed(&view));
    if let Some(path) = image {
        // The attachment keeps the on-disk name, which the thumbnail URL uses.
        reply = reply.attachment(serenity::CreateAttachment::path(&path).await?);
    }
    ctx.send(reply).await?;
    Ok(())
}

pub fn not_found_message(username: &str) -> String {
    format!("Could not find player `{username}`.")
}

pub fn info_failure_message(player_id: &str) -> String {
    format!("Could not get information for player with ID `{player_id}`.")
}
