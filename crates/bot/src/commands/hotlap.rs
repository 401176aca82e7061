use pitwall_client::ApiError;
use pitwall_core::hotlap::HOTLAP_BOARD_SIZE;
use pitwall_core::render::hotlap_embed;

use crate::reply::{requester, send_embed};
use crate::state::{Context, Error};

pub const FETCH_FAILED: &str = "Failed to fetch hotlap data.";
pub const NO_DATA: &str = "No hotlap data found.";

/// Shows the top 10 fastest hotlap times (PS3 only)
#[poise::command(slash_command, category = "Leaderboard", user_cooldown = 30)]
pub async fn hotlap(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();

    let board = match data
        .api
        .hotlap_leaderboard(HOTLAP_BOARD_SIZE, data.config.hotlap_max_pages)
        .await
    {
        Ok(board) => board,
        Err(e) => {
            tracing::warn!(error = %e, "Hotlap scan failed");
            ctx.say(failure_message(&e)).await?;
            return Ok(());
        }
    };

    if board.entries.is_empty() {
        ctx.say(NO_DATA).await?;
        return Ok(());
    }

    let view = hotlap_embed(
        &board.entries,
        board.track.as_ref(),
        data.config.embed_color,
        &requester(ctx),
    );
    send_embed(ctx, &view).await
}

/// Reply text for a scan that failed on its first page.
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Xml(e) => format!("XML Parse Error: {e}"),
        ApiError::MissingElement(_) => NO_DATA.to_string(),
        ApiError::Request(_) | ApiError::Status { .. } => FETCH_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_core::error::XmlError;

    #[test]
    fn failures_map_to_replies() {
        let status = ApiError::Status {
            status: 502,
            body: String::new(),
        };
        assert_eq!(failure_message(&status), FETCH_FAILED);
        assert_eq!(failure_message(&ApiError::MissingElement("leaderboard")), NO_DATA);
        assert_eq!(
            failure_message(&ApiError::Xml(XmlError::NoRoot)),
            "XML Parse Error: no element found"
        );
    }
}
