//! Embed renderers, one per command.
//!
//! Every function here is pure: it takes already-fetched records plus the
//! presentation settings and returns an [`EmbedView`].

use crate::embed::{EmbedFooter, EmbedView, Requester};
use crate::format::{
    format_created_at, format_lap_time, rating_to_stars, shorten_description, StarGlyphs,
};
use crate::models::{Creation, HotlapEntry, LeaderboardPage, PlayerProfile, ServerTotals, TrackInfo};
use crate::types::LeaderboardQuery;

pub const HOTLAP_TITLE: &str = "Hot Lap Leaderboard (PS3)";
pub const STATS_TITLE: &str = "Server Statistics";
pub const NO_QUOTE: &str = "No description.";
pub const NO_SCORE: &str = "No score recorded.";

/// Fastest laps, fastest first, with the track header when known.
pub fn hotlap_embed(
    entries: &[HotlapEntry],
    track: Option<&TrackInfo>,
    color: u32,
    requester: &Requester,
) -> EmbedView {
    let mut embed = EmbedView::new(HOTLAP_TITLE, color);

    if let Some(track) = track {
        embed = embed
            .description(format!("`{}`\nBy *{}*", track.name, track.creator))
            .thumbnail(track.thumbnail.clone());
    }

    for (i, entry) in entries.iter().enumerate() {
        embed = embed.field(
            format!("#{} {}", i + 1, entry.username),
            format!("**{}**", format_lap_time(&entry.best_lap)),
            false,
        );
    }

    embed.footer(requester.footer())
}

/// Player profile card.
///
/// `skill_image` is the file name of an attached skill-level badge; when
/// set the card uses it as thumbnail.
pub fn player_embed(
    profile: &PlayerProfile,
    requested_username: &str,
    player_id: &str,
    color: u32,
    skill_image: Option<&str>,
) -> EmbedView {
    let title = profile.username.as_deref().unwrap_or(requested_username);
    let quote = profile
        .quote
        .as_deref()
        .filter(|quote| !quote.trim().is_empty())
        .unwrap_or(NO_QUOTE);
    let created_at = non_blank(&profile.created_at)
        .map(format_created_at)
        .unwrap_or_else(|| "N/A".to_string());

    let mut embed = EmbedView::new(title, color)
        .description(quote)
        .field("Online Races", non_blank(&profile.online_races).unwrap_or("0"), true)
        .field("Online Wins", non_blank(&profile.online_wins).unwrap_or("0"), true)
        .field("Rating", non_blank(&profile.rating).unwrap_or("N/A"), true)
        .field("Created at", created_at, true)
        .footer(EmbedFooter {
            text: format!("Player ID: {player_id}"),
            icon_url: None,
        });

    if let Some(file_name) = skill_image {
        embed = embed.thumbnail(format!("attachment://{file_name}"));
    }
    embed
}

/// Present attributes that are empty count as missing.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Ranked list of creations. The first creation's preview is the thumbnail.
pub fn creations_embed(
    creations: &[Creation],
    title: &str,
    glyphs: &StarGlyphs,
    color: u32,
    requester: &Requester,
) -> EmbedView {
    let mut embed = EmbedView::new(title, color);

    if let Some(thumbnail) = creations.first().and_then(|c| c.thumbnail.as_deref()) {
        embed = embed.thumbnail(thumbnail);
    }

    for (i, creation) in creations.iter().enumerate() {
        embed = embed.field(
            format!("#{} {}", i + 1, creation.name),
            creation_summary(creation, glyphs),
            false,
        );
    }

    embed.footer(requester.footer())
}

fn creation_summary(creation: &Creation, glyphs: &StarGlyphs) -> String {
    // Quote every line so multi-line descriptions stay inside the block.
    let quoted = shorten_description(&creation.description).replace('\n', "\n> ");
    format!(
        "Creator: **{}**\n\
         Points Today: **{}** | Total Points: **{}**\n\
         Rating: **{}** | Total Downloads: **{}**\n\
         > {}",
        creation.username,
        creation.points_today,
        creation.points,
        rating_to_stars(&creation.star_rating, glyphs),
        creation.downloads,
        quoted,
    )
}

/// Aggregate creation counts.
pub fn stats_embed(
    totals: &ServerTotals,
    color: u32,
    bot_avatar: Option<&str>,
    requester: &Requester,
) -> EmbedView {
    let mut embed = EmbedView::new(STATS_TITLE, color);
    if let Some(avatar) = bot_avatar {
        embed = embed.thumbnail(avatar);
    }

    embed
        .field("Total Creations", totals.total().to_string(), false)
        .field("Total Mods", totals.mods.to_string(), false)
        .field("Total Karts", totals.karts.to_string(), false)
        .field("Total Tracks", totals.tracks.to_string(), false)
        .footer(requester.footer())
}

/// One page of a generic leaderboard.
pub fn leaderboard_embed(
    page: &LeaderboardPage,
    query: &LeaderboardQuery,
    color: u32,
    requester: &Requester,
) -> EmbedView {
    let title = format!(
        "{} {} Leaderboard ({})",
        query.board_type.label(),
        query.game_type.label(),
        query.platform.as_api_str()
    );
    let mut embed = EmbedView::new(title, color);

    if page.rows.is_empty() {
        embed = embed.description("No entries on this page.");
    }

    for row in &page.rows {
        let mut parts = Vec::new();
        if let Some(points) = &row.points {
            parts.push(format!("Points: **{points}**"));
        }
        if let Some(score) = &row.score {
            parts.push(format!("Score: **{score}**"));
        }
        if let Some(lap) = &row.best_lap_time {
            parts.push(format!("Best Lap: **{}**", format_lap_time(lap)));
        }
        if let Some(finish) = &row.finish_time {
            parts.push(format!("Finish Time: **{}**", format_lap_time(finish)));
        }
        let value = if parts.is_empty() {
            NO_SCORE.to_string()
        } else {
            parts.join(" | ")
        };
        embed = embed.field(format!("#{} {}", row.rank, row.username), value, false);
    }

    let page_label = match page.total {
        Some(total) => {
            let per_page = u64::from(query.per_page.max(1));
            let pages = total.div_ceil(per_page).max(1);
            format!("Page {} of {pages}", page.page)
        }
        None => format!("Page {}", page.page),
    };
    embed.footer(requester.footer_with_prefix(Some(&page_label)))
}
