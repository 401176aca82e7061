//! Normalized records built from stats API elements.
//!
//! The API reports everything as string attributes. Records keep them as
//! strings (the bot displays them verbatim) but apply the display defaults
//! once, at parse time.

use crate::xml::XmlElement;

/// Attribute value or `default` when the attribute is missing.
fn attr_or(element: &XmlElement, name: &str, default: &str) -> String {
    element.attr(name).unwrap_or(default).to_string()
}

fn attr_opt(element: &XmlElement, name: &str) -> Option<String> {
    element.attr(name).map(str::to_string)
}

/// Public profile of a player (`<player>` in `/players/{id}/info.xml`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    pub username: Option<String>,
    pub quote: Option<String>,
    pub skill_level_id: Option<String>,
    pub online_races: Option<String>,
    pub online_wins: Option<String>,
    pub rating: Option<String>,
    pub created_at: Option<String>,
}

impl PlayerProfile {
    pub fn from_element(element: &XmlElement) -> Self {
        Self {
            username: attr_opt(element, "username"),
            quote: attr_opt(element, "quote"),
            skill_level_id: attr_opt(element, "skill_level_id"),
            online_races: attr_opt(element, "online_races"),
            online_wins: attr_opt(element, "online_wins"),
            rating: attr_opt(element, "rating"),
            created_at: attr_opt(element, "created_at"),
        }
    }
}

/// One user-generated mod, kart or track (`<player_creation>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creation {
    pub id: Option<String>,
    pub name: String,
    pub username: String,
    pub points_today: String,
    pub points: String,
    pub star_rating: String,
    pub downloads: String,
    pub description: String,
    /// Preview image URL, filled in by the API client which knows the base URL.
    pub thumbnail: Option<String>,
}

impl Creation {
    pub fn from_element(element: &XmlElement) -> Self {
        Self {
            id: attr_opt(element, "id"),
            name: attr_or(element, "name", "Unknown"),
            username: attr_or(element, "username", "Unknown"),
            points_today: attr_or(element, "points_today", "0"),
            points: attr_or(element, "points", "0"),
            star_rating: attr_or(element, "star_rating", "N/A"),
            downloads: attr_or(element, "downloads", "0"),
            description: attr_or(element, "description", ""),
            thumbnail: None,
        }
    }
}

/// Header information for the track a hotlap board is set on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub name: String,
    pub creator: String,
    pub thumbnail: String,
}

/// A single player's best hot-seat lap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlapEntry {
    pub username: String,
    /// Raw `best_lap_time` attribute, in seconds.
    pub best_lap: String,
    pub rank: String,
    pub track_idx: Option<String>,
}

/// One `<player>` row of a generic leaderboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: String,
    pub username: String,
    pub points: Option<String>,
    pub score: Option<String>,
    pub best_lap_time: Option<String>,
    pub finish_time: Option<String>,
}

impl LeaderboardRow {
    pub fn from_element(element: &XmlElement) -> Self {
        Self {
            rank: attr_or(element, "rank", "?"),
            username: attr_or(element, "username", "Unknown"),
            points: attr_opt(element, "points"),
            score: attr_opt(element, "score"),
            best_lap_time: attr_opt(element, "best_lap_time"),
            finish_time: attr_opt(element, "finish_time"),
        }
    }
}

/// A page of a generic leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub page: u32,
    /// `total` attribute of `<leaderboard>`, when reported.
    pub total: Option<u64>,
    pub rows: Vec<LeaderboardRow>,
}

/// Number of published creations per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerTotals {
    pub mods: u64,
    pub karts: u64,
    pub tracks: u64,
}

impl ServerTotals {
    pub fn total(&self) -> u64 {
        self.mods + self.karts + self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn creation_defaults_fill_missing_attributes() {
        let element = parse_document(r#"<player_creation id="9"/>"#).unwrap();
        let creation = Creation::from_element(&element);
        assert_eq!(creation.id.as_deref(), Some("9"));
        assert_eq!(creation.name, "Unknown");
        assert_eq!(creation.username, "Unknown");
        assert_eq!(creation.points_today, "0");
        assert_eq!(creation.star_rating, "N/A");
        assert_eq!(creation.description, "");
        assert!(creation.thumbnail.is_none());
    }

    #[test]
    fn player_profile_keeps_missing_fields_empty() {
        let element =
            parse_document(r#"<player username="dan" online_races="40" skill_level_id="12"/>"#)
                .unwrap();
        let profile = PlayerProfile::from_element(&element);
        assert_eq!(profile.username.as_deref(), Some("dan"));
        assert_eq!(profile.online_races.as_deref(), Some("40"));
        assert_eq!(profile.skill_level_id.as_deref(), Some("12"));
        assert!(profile.quote.is_none());
        assert!(profile.rating.is_none());
    }

    #[test]
    fn leaderboard_row_reads_scores() {
        let element =
            parse_document(r#"<player rank="3" username="eve" points="900"/>"#).unwrap();
        let row = LeaderboardRow::from_element(&element);
        assert_eq!(row.rank, "3");
        assert_eq!(row.points.as_deref(), Some("900"));
        assert!(row.score.is_none());
    }

    #[test]
    fn totals_add_up() {
        let totals = ServerTotals {
            mods: 10,
            karts: 20,
            tracks: 5,
        };
        assert_eq!(totals.total(), 35);
    }
}
