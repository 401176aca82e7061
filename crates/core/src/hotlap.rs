//! Client-side aggregation of the hot-seat (hotlap) leaderboard.
//!
//! The API returns hotlap rows in rank order across many pages and does
//! not sort by lap time, so the bot collects every page, drops rows
//! without a recorded lap, and sorts locally.

use std::cmp::Ordering;

use crate::models::HotlapEntry;
use crate::xml::XmlElement;

/// Number of laps shown on the hotlap board.
pub const HOTLAP_BOARD_SIZE: usize = 10;

/// `best_lap_time` value the API uses for "no lap recorded".
pub const NO_LAP_SENTINEL: &str = "N/A";

/// Extract hotlap entries from one `<leaderboard>` element.
///
/// Only direct `<player>` children with a usable `best_lap_time` are kept.
pub fn entries_from_page(leaderboard: &XmlElement) -> Vec<HotlapEntry> {
    leaderboard
        .children_named("player")
        .filter_map(|player| {
            let best_lap = player.attr("best_lap_time")?;
            if best_lap.is_empty() || best_lap == NO_LAP_SENTINEL {
                return None;
            }
            Some(HotlapEntry {
                username: player.attr("username").unwrap_or("Unknown").to_string(),
                best_lap: best_lap.to_string(),
                rank: player.attr("rank").unwrap_or("?").to_string(),
                track_idx: player.attr("track_idx").map(str::to_string),
            })
        })
        .collect()
}

/// Sort key for a raw lap time. Unparsable laps sort last.
pub fn lap_key(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(seconds) if !seconds.is_nan() => seconds,
        _ => f64::INFINITY,
    }
}

/// The `limit` fastest entries, fastest first.
///
/// The sort is stable: equal lap times keep their page order.
pub fn fastest(mut entries: Vec<HotlapEntry>, limit: usize) -> Vec<HotlapEntry> {
    entries.sort_by(|a, b| {
        lap_key(&a.best_lap)
            .partial_cmp(&lap_key(&b.best_lap))
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn entry(username: &str, best_lap: &str) -> HotlapEntry {
        HotlapEntry {
            username: username.to_string(),
            best_lap: best_lap.to_string(),
            rank: "?".to_string(),
            track_idx: None,
        }
    }

    #[test]
    fn page_rows_without_laps_are_skipped() {
        let page = parse_document(
            r#"<leaderboard>
                 <player rank="1" username="ann" best_lap_time="41.2" track_idx="77"/>
                 <player rank="2" username="ben" best_lap_time="N/A"/>
                 <player rank="3" username="cat"/>
                 <player rank="4" best_lap_time="39.9"/>
                 <ghost username="zed" best_lap_time="1.0"/>
               </leaderboard>"#,
        )
        .unwrap();

        let entries = entries_from_page(&page);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].username, "ann");
        assert_eq!(entries[0].track_idx.as_deref(), Some("77"));
        assert_eq!(entries[1].username, "Unknown");
        assert_eq!(entries[1].rank, "4");
    }

    #[test]
    fn lap_key_pushes_garbage_to_infinity() {
        assert_eq!(lap_key("42.5"), 42.5);
        assert_eq!(lap_key("1:02:003"), f64::INFINITY);
        assert_eq!(lap_key("NaN"), f64::INFINITY);
        assert_eq!(lap_key(""), f64::INFINITY);
    }

    #[test]
    fn fastest_sorts_ascending_and_truncates() {
        let entries = vec![
            entry("slow", "60.0"),
            entry("odd", "fast"),
            entry("quick", "30.5"),
            entry("mid", "45.0"),
        ];
        let top = fastest(entries, 3);
        let names: Vec<_> = top.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["quick", "mid", "slow"]);
    }

    #[test]
    fn ties_keep_page_order() {
        let entries = vec![entry("first", "50.0"), entry("second", "50.0"), entry("x", "bad")];
        let top = fastest(entries, HOTLAP_BOARD_SIZE);
        let names: Vec<_> = top.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "x"]);
    }

    #[test]
    fn fastest_of_nothing_is_empty() {
        assert!(fastest(Vec::new(), HOTLAP_BOARD_SIZE).is_empty());
    }
}
