//! Typed queries against the stats API.
//!
//! Each method builds the request for one API endpoint, fetches it
//! through an [`XmlSource`] and normalizes the interesting elements into
//! `pitwall_core` records.

use std::time::Duration;

use pitwall_core::format::parse_count;
use pitwall_core::hotlap;
use pitwall_core::models::{
    Creation, HotlapEntry, LeaderboardPage, LeaderboardRow, PlayerProfile, ServerTotals, TrackInfo,
};
use pitwall_core::types::{BoardType, CreationKind, GameType, LeaderboardQuery, Platform};
use pitwall_core::xml::XmlElement;

use crate::error::ApiError;
use crate::source::{HttpSource, XmlSource};

/// Rows requested per hotlap page.
pub const HOTLAP_PAGE_SIZE: u32 = 100;

/// Column the creation rankings are ordered by.
const CREATION_SORT_COLUMN: &str = "points_today";

/// Result of a full hotlap scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlapBoard {
    /// Fastest laps, fastest first.
    pub entries: Vec<HotlapEntry>,
    /// Track of the fastest lap, when it could be resolved.
    pub track: Option<TrackInfo>,
}

/// Client for one stats API deployment.
pub struct StatsApi<S = HttpSource> {
    source: S,
    base_url: String,
}

impl StatsApi<HttpSource> {
    /// Create a client that talks HTTP to `base_url`.
    pub fn http(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let source = HttpSource::new(base_url, timeout, user_agent)?;
        Ok(Self::new(source, base_url))
    }
}

impl<S: XmlSource> StatsApi<S> {
    /// Wrap an arbitrary source. `base_url` is only used to build
    /// preview-image links.
    pub fn new(source: S, base_url: &str) -> Self {
        Self {
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Public URL of a creation's preview image.
    pub fn preview_image_url(&self, creation_id: &str) -> String {
        format!(
            "{}/player_creations/{}/preview_image.png",
            self.base_url, creation_id
        )
    }

    /// Resolve a username to its numeric player id.
    ///
    /// Returns `Ok(None)` when the API knows no such player.
    pub async fn player_id(&self, username: &str) -> Result<Option<String>, ApiError> {
        tracing::debug!(username, "Looking up player id");
        let root = self
            .source
            .fetch_xml("/players/to_id.xml", &[("username", username.to_string())])
            .await?;

        let player_id = root
            .find("player_id")
            .map(|element| element.text.trim().to_string())
            .filter(|id| !id.is_empty());
        tracing::debug!(username, player_id = ?player_id, "Player id lookup finished");
        Ok(player_id)
    }

    /// Fetch a player's public profile.
    ///
    /// Returns `Ok(None)` when the response carries no `<player>` element.
    pub async fn player_info(&self, player_id: &str) -> Result<Option<PlayerProfile>, ApiError> {
        if !is_safe_segment(player_id) {
            tracing::warn!(player_id, "Refusing to request profile for malformed player id");
            return Ok(None);
        }
        let root = self
            .source
            .fetch_xml(&format!("/players/{player_id}/info.xml"), &[])
            .await?;
        Ok(root.find("player").map(PlayerProfile::from_element))
    }

    /// Top creations of one kind ranked by today's points.
    pub async fn top_creations(
        &self,
        kind: CreationKind,
        platform: Platform,
        count: u32,
    ) -> Result<Vec<Creation>, ApiError> {
        let query = [
            ("page", "1".to_string()),
            ("per_page", count.to_string()),
            ("sort_column", CREATION_SORT_COLUMN.to_string()),
            ("player_creation_type", kind.as_api_str().to_string()),
            ("platform", platform.as_api_str().to_string()),
            ("sort_order", "desc".to_string()),
        ];
        let root = self.source.fetch_xml("/player_creations.xml", &query).await?;
        let container = root
            .find("player_creations")
            .ok_or(ApiError::MissingElement("player_creations"))?;

        let creations = container
            .children_named("player_creation")
            .map(|element| {
                let mut creation = Creation::from_element(element);
                creation.thumbnail = creation.id.as_deref().map(|id| self.preview_image_url(id));
                creation
            })
            .collect();
        Ok(creations)
    }

    /// Name, creator and preview of a single track.
    ///
    /// Returns `Ok(None)` when the response carries no `<player_creation>`.
    pub async fn track_info(&self, track_idx: &str) -> Result<Option<TrackInfo>, ApiError> {
        if !is_safe_segment(track_idx) {
            tracing::warn!(track_idx, "Refusing to request malformed track id");
            return Ok(None);
        }
        let root = self
            .source
            .fetch_xml(&format!("/player_creations/{track_idx}.xml"), &[])
            .await?;

        Ok(root.find("player_creation").map(|element| {
            let id = element.attr("id").unwrap_or(track_idx);
            TrackInfo {
                name: element.attr("name").unwrap_or("Unknown Track").to_string(),
                creator: element.attr("username").unwrap_or("Unknown Creator").to_string(),
                thumbnail: self.preview_image_url(id),
            }
        }))
    }

    /// Number of published creations of one kind.
    pub async fn creation_total(
        &self,
        kind: CreationKind,
        platform: Platform,
    ) -> Result<u64, ApiError> {
        let query = [
            ("page", "1".to_string()),
            ("per_page", "0".to_string()),
            ("player_creation_type", kind.as_api_str().to_string()),
            ("platform", platform.as_api_str().to_string()),
        ];
        let root = self.source.fetch_xml("/player_creations.xml", &query).await?;
        let total = root
            .child_path(&["response", "player_creations"])
            .or_else(|| root.find("player_creations"))
            .and_then(|container| container.attr("total"))
            .map(parse_count)
            .unwrap_or(0);
        Ok(total)
    }

    /// Creation counts for every kind. A kind that cannot be fetched
    /// counts as zero.
    pub async fn server_totals(&self, platform: Platform) -> ServerTotals {
        let mut totals = ServerTotals::default();
        for kind in CreationKind::ALL {
            let count = match self.creation_total(kind, platform).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::debug!(kind = kind.label(), error = %e, "Counting as zero");
                    0
                }
            };
            match kind {
                CreationKind::Character => totals.mods = count,
                CreationKind::Kart => totals.karts = count,
                CreationKind::Track => totals.tracks = count,
            }
        }
        totals
    }

    /// One page of a leaderboard.
    pub async fn leaderboard_page(&self, query: &LeaderboardQuery) -> Result<LeaderboardPage, ApiError> {
        let root = self.fetch_leaderboard(query).await?;
        let leaderboard = root
            .find("leaderboard")
            .ok_or(ApiError::MissingElement("leaderboard"))?;

        Ok(LeaderboardPage {
            page: query.page,
            total: leaderboard.attr("total").map(parse_count),
            rows: leaderboard
                .children_named("player")
                .map(LeaderboardRow::from_element)
                .collect(),
        })
    }

    /// Scan the lifetime hot-seat leaderboard and keep the `limit`
    /// fastest laps.
    ///
    /// Failures on the first page are returned. Later pages end the scan
    /// on any failure, on a page without a `<leaderboard>` or `<player>`
    /// rows, or once `max_pages` pages have been read.
    pub async fn hotlap_leaderboard(&self, limit: usize, max_pages: u32) -> Result<HotlapBoard, ApiError> {
        let max_pages = max_pages.max(1);
        let mut collected = Vec::new();
        let mut pages_read = 0u32;

        for page in 1..=max_pages {
            let query = LeaderboardQuery {
                board_type: BoardType::Lifetime,
                game_type: GameType::OnlineHotSeatRace,
                platform: Platform::Ps3,
                page,
                per_page: HOTLAP_PAGE_SIZE,
            };

            let root = match self.fetch_leaderboard(&query).await {
                Ok(root) => root,
                Err(e) if page == 1 => return Err(e),
                Err(e) => {
                    tracing::debug!(page, error = %e, "Hotlap page failed, ending scan");
                    break;
                }
            };

            let Some(leaderboard) = root.find("leaderboard") else {
                if page == 1 {
                    return Err(ApiError::MissingElement("leaderboard"));
                }
                break;
            };

            if leaderboard.children_named("player").next().is_none() {
                break;
            }

            collected.extend(hotlap::entries_from_page(leaderboard));
            pages_read = page;

            if page == max_pages {
                tracing::warn!(max_pages, "Hotlap scan hit the page limit");
            }
        }

        tracing::info!(pages = pages_read, laps = collected.len(), "Hotlap scan complete");

        let entries = hotlap::fastest(collected, limit);
        let track = match entries.first().and_then(|entry| entry.track_idx.as_deref()) {
            Some(track_idx) => match self.track_info(track_idx).await {
                Ok(track) => track,
                Err(e) => {
                    tracing::debug!(track_idx, error = %e, "Track lookup failed");
                    None
                }
            },
            None => None,
        };

        Ok(HotlapBoard { entries, track })
    }

    // ---- private helpers ----

    async fn fetch_leaderboard(&self, query: &LeaderboardQuery) -> Result<XmlElement, ApiError> {
        let params = [
            ("type", query.board_type.as_api_str().to_string()),
            ("game_type", query.game_type.as_api_str().to_string()),
            ("platform", query.platform.as_api_str().to_string()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        self.source.fetch_xml("/leaderboards/view.xml", &params).await
    }
}

/// Ids are spliced into URL paths, so only plain tokens are allowed.
fn is_safe_segment(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_must_be_plain_tokens() {
        assert!(is_safe_segment("48213"));
        assert!(is_safe_segment("abc_12-x"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment("../admin"));
        assert!(!is_safe_segment("1?x=2"));
        assert!(!is_safe_segment(&"9".repeat(65)));
    }
}
