//! `/leaderboard`: one page of any board the stats API exposes.

use pitwall_client::ApiError;
use pitwall_core::render::leaderboard_embed;
use pitwall_core::types::{BoardType, GameType, LeaderboardQuery, Platform};

use crate::reply::{requester, send_embed};
use crate::state::{Context, Error};

pub const FETCH_FAILED: &str = "Failed to fetch leaderboard data.";
pub const NO_DATA: &str = "No leaderboard data found.";

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum BoardChoice {
    #[name = "Daily"]
    Daily,
    #[name = "Last Month"]
    LastMonth,
    #[name = "Last Week"]
    LastWeek,
    #[name = "Lifetime"]
    Lifetime,
    #[name = "Monthly"]
    Monthly,
    #[name = "Weekly"]
    Weekly,
}

impl From<BoardChoice> for BoardType {
    fn from(choice: BoardChoice) -> Self {
        match choice {
            BoardChoice::Daily => BoardType::Daily,
            BoardChoice::LastMonth => BoardType::LastMonth,
            BoardChoice::LastWeek => BoardType::LastWeek,
            BoardChoice::Lifetime => BoardType::Lifetime,
            BoardChoice::Monthly => BoardType::Monthly,
            BoardChoice::Weekly => BoardType::Weekly,
        }
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum GameChoice {
    #[name = "Character Creators"]
    CharacterCreators,
    #[name = "Kart Creators"]
    KartCreators,
    #[name = "Track Creators"]
    TrackCreators,
    #[name = "Online Action Race"]
    OnlineActionRace,
    #[name = "Online Pure Race"]
    OnlinePureRace,
    #[name = "Online Time Trial Race"]
    OnlineTimeTrialRace,
    #[name = "Overall"]
    Overall,
    #[name = "Overall Creators"]
    OverallCreators,
    #[name = "Overall Race"]
    OverallRace,
}

impl From<GameChoice> for GameType {
    fn from(choice: GameChoice) -> Self {
        match choice {
            GameChoice::CharacterCreators => GameType::CharacterCreators,
            GameChoice::KartCreators => GameType::KartCreators,
            GameChoice::TrackCreators => GameType::TrackCreators,
            GameChoice::OnlineActionRace => GameType::OnlineActionRace,
            GameChoice::OnlinePureRace => GameType::OnlinePureRace,
            GameChoice::OnlineTimeTrialRace => GameType::OnlineTimeTrialRace,
            GameChoice::Overall => GameType::Overall,
            GameChoice::OverallCreators => GameType::OverallCreators,
            GameChoice::OverallRace => GameType::OverallRace,
        }
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum PlatformChoice {
    #[name = "PS3"]
    Ps3,
    #[name = "PSP"]
    Psp,
    #[name = "PSV"]
    Psv,
}

impl From<PlatformChoice> for Platform {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Ps3 => Platform::Ps3,
            PlatformChoice::Psp => Platform::Psp,
            PlatformChoice::Psv => Platform::Psv,
        }
    }
}

/// Build the query, falling back to Lifetime / Overall / PS3 / page 1.
pub fn build_query(
    board_type: Option<BoardChoice>,
    game_type: Option<GameChoice>,
    platform: Option<PlatformChoice>,
    page: Option<u32>,
) -> LeaderboardQuery {
    let defaults = LeaderboardQuery::default();
    LeaderboardQuery {
        board_type: board_type.map(Into::into).unwrap_or(defaults.board_type),
        game_type: game_type.map(Into::into).unwrap_or(defaults.game_type),
        platform: platform.map(Into::into).unwrap_or(defaults.platform),
        page: page.unwrap_or(defaults.page).max(1),
        per_page: defaults.per_page,
    }
}

/// Shows the top players or creators on the leaderboard.
#[poise::command(slash_command, category = "Leaderboard")]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[description = "Time window of the leaderboard."] board_type: Option<BoardChoice>,
    #[description = "Game mode to rank."] game_type: Option<GameChoice>,
    #[description = "Console platform."] platform: Option<PlatformChoice>,
    #[description = "Page number."]
    #[min = 1]
    page: Option<u32>,
) -> Result<(), Error> {
    ctx.defer().await?;
    let data = ctx.data();
    let query = build_query(board_type, game_type, platform, page);

    let page = match data.api.leaderboard_page(&query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(?query, error = %e, "Leaderboard fetch failed");
            ctx.say(failure_message(&e)).await?;
            return Ok(());
        }
    };

    let view = leaderboard_embed(&page, &query, data.config.embed_color, &requester(ctx));
    send_embed(ctx, &view).await
}

pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Xml(e) => format!("XML Parse Error: {e}"),
        ApiError::MissingElement(_) => NO_DATA.to_string(),
        ApiError::Request(_) | ApiError::Status { .. } => FETCH_FAILED.to_string(),
    }
}
