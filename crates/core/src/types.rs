//! Wire vocabulary of the stats API.
//!
//! Each enum maps to the exact query-string value the API expects via
//! `as_api_str()`, plus a human-readable label for embeds.

/// Console platform a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Ps3,
    Psp,
    Psv,
}

impl Platform {
    pub fn as_api_str(self) -> &'static str {
        match self {
            Platform::Ps3 => "PS3",
            Platform::Psp => "PSP",
            Platform::Psv => "PSV",
        }
    }
}

/// Kind of user-generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationKind {
    /// Character mods.
    Character,
    Kart,
    Track,
}

impl CreationKind {
    /// Order used by the server statistics embed.
    pub const ALL: [CreationKind; 3] = [
        CreationKind::Character,
        CreationKind::Kart,
        CreationKind::Track,
    ];

    pub fn as_api_str(self) -> &'static str {
        match self {
            CreationKind::Character => "CHARACTER",
            CreationKind::Kart => "KART",
            CreationKind::Track => "TRACK",
        }
    }

    /// Plural label shown to users ("Mods", "Karts", "Tracks").
    pub fn label(self) -> &'static str {
        match self {
            CreationKind::Character => "Mods",
            CreationKind::Kart => "Karts",
            CreationKind::Track => "Tracks",
        }
    }
}

/// Time window of a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardType {
    Daily,
    LastMonth,
    LastWeek,
    #[default]
    Lifetime,
    Monthly,
    Weekly,
}

impl BoardType {
    pub fn as_api_str(self) -> &'static str {
        match self {
            BoardType::Daily => "DAILY",
            BoardType::LastMonth => "LAST_MONTH",
            BoardType::LastWeek => "LAST_WEEK",
            BoardType::Lifetime => "LIFETIME",
            BoardType::Monthly => "MONTHLY",
            BoardType::Weekly => "WEEKLY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoardType::Daily => "Daily",
            BoardType::LastMonth => "Last Month",
            BoardType::LastWeek => "Last Week",
            BoardType::Lifetime => "Lifetime",
            BoardType::Monthly => "Monthly",
            BoardType::Weekly => "Weekly",
        }
    }
}

/// Game mode a leaderboard ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameType {
    CharacterCreators,
    KartCreators,
    TrackCreators,
    OnlineActionRace,
    OnlinePureRace,
    OnlineTimeTrialRace,
    #[default]
    Overall,
    OverallCreators,
    OverallRace,
    /// Hot-seat time trials backing the hotlap board. Not offered as a
    /// `/leaderboard` choice.
    OnlineHotSeatRace,
}

impl GameType {
    pub fn as_api_str(self) -> &'static str {
        match self {
            GameType::CharacterCreators => "CHARACTER_CREATORS",
            GameType::KartCreators => "KART_CREATORS",
            GameType::TrackCreators => "TRACK_CREATORS",
            GameType::OnlineActionRace => "ONLINE_ACTION_RACE",
            GameType::OnlinePureRace => "ONLINE_PURE_RACE",
            GameType::OnlineTimeTrialRace => "ONLINE_TIME_TRIAL_RACE",
            GameType::Overall => "OVERALL",
            GameType::OverallCreators => "OVERALL_CREATORS",
            GameType::OverallRace => "OVERALL_RACE",
            GameType::OnlineHotSeatRace => "ONLINE_HOT_SEAT_RACE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameType::CharacterCreators => "Character Creators",
            GameType::KartCreators => "Kart Creators",
            GameType::TrackCreators => "Track Creators",
            GameType::OnlineActionRace => "Online Action Race",
            GameType::OnlinePureRace => "Online Pure Race",
            GameType::OnlineTimeTrialRace => "Online Time Trial Race",
            GameType::Overall => "Overall",
            GameType::OverallCreators => "Overall Creators",
            GameType::OverallRace => "Overall Race",
            GameType::OnlineHotSeatRace => "Hot Lap",
        }
    }
}

/// Parameters of one `/leaderboards/view.xml` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub board_type: BoardType,
    pub game_type: GameType,
    pub platform: Platform,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            board_type: BoardType::default(),
            game_type: GameType::default(),
            platform: Platform::default(),
            page: 1,
            per_page: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_unfiltered_leaderboard() {
        let query = LeaderboardQuery::default();
        assert_eq!(query.board_type.as_api_str(), "LIFETIME");
        assert_eq!(query.game_type.as_api_str(), "OVERALL");
        assert_eq!(query.platform.as_api_str(), "PS3");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 10);
    }

    #[test]
    fn creation_kinds_carry_plural_labels() {
        let labels: Vec<_> = CreationKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["Mods", "Karts", "Tracks"]);
        assert_eq!(CreationKind::Character.as_api_str(), "CHARACTER");
    }
}
