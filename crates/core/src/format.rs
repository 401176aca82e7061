//! Text formatting helpers shared by the embed renderers.

use chrono::DateTime;

/// Longest creation description shown before it is cut off with `...`.
pub const DESCRIPTION_LIMIT: usize = 250;

/// Placeholder for creations without a description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Glyphs used to draw a five-star rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarGlyphs {
    pub full: String,
    pub half: String,
    pub empty: String,
}

impl Default for StarGlyphs {
    fn default() -> Self {
        Self {
            full: "★".to_string(),
            half: "⯪".to_string(),
            empty: "☆".to_string(),
        }
    }
}

/// Render a lap or race time as `MM:SS:mmm`.
///
/// Accepted inputs:
///
/// - `"m:s:ms"` -- each component zero-padded as is (no carry).
/// - `"s:ms"` -- minutes are `00`.
/// - Decimal seconds such as `"83.417"` -- rounded to the nearest
///   millisecond, ties to even.
///
/// Anything else, including times too large to represent, is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use pitwall_core::format::format_lap_time;
///
/// assert_eq!(format_lap_time("83.417"), "01:23:417");
/// assert_eq!(format_lap_time("1:5:42"), "01:05:042");
/// assert_eq!(format_lap_time("N/A"), "N/A");
/// ```
pub fn format_lap_time(raw: &str) -> String {
    match lap_time_parts(raw) {
        Some((minutes, seconds, millis)) => format!("{minutes:02}:{seconds:02}:{millis:03}"),
        None => raw.to_string(),
    }
}

fn lap_time_parts(raw: &str) -> Option<(u64, u64, u64)> {
    if raw.contains(':') {
        let parts: Vec<&str> = raw.split(':').collect();
        return match parts.as_slice() {
            [minutes, seconds, millis] => Some((
                parse_component(minutes)?,
                parse_component(seconds)?,
                parse_component(millis)?,
            )),
            [seconds, millis] => Some((0, parse_component(seconds)?, parse_component(millis)?)),
            _ => None,
        };
    }

    let seconds: f64 = raw.trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let total_ms = (seconds * 1000.0).round_ties_even();
    // Beyond u64 the cast would saturate into a wrong time.
    if total_ms >= u64::MAX as f64 {
        return None;
    }
    let total_ms = total_ms as u64;
    Some((total_ms / 60_000, (total_ms % 60_000) / 1000, total_ms % 1000))
}

fn parse_component(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Draw a 0-5 rating as exactly five glyphs.
///
/// The rating is clamped to `[0, 5]`; a fractional part of at least
/// one half adds a half star. Non-numeric input (for example `"N/A"`) is
/// returned unchanged.
pub fn rating_to_stars(raw: &str, glyphs: &StarGlyphs) -> String {
    let rating: f64 = match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(0.0, 5.0),
        _ => return raw.to_string(),
    };

    let full = rating.trunc() as usize;
    let half = usize::from(rating - full as f64 >= 0.5);
    let empty = 5 - full - half;

    format!(
        "{}{}{}",
        glyphs.full.repeat(full),
        glyphs.half.repeat(half),
        glyphs.empty.repeat(empty)
    )
}

/// Trim a creation description and cut it at [`DESCRIPTION_LIMIT`] characters.
pub fn shorten_description(raw: &str) -> String {
    let description = raw.trim();
    if description.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let head: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{}...", head.trim_end())
}

/// Show an RFC 3339 timestamp as a calendar date; other input is kept.
pub fn format_created_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Parse a count attribute, treating anything unparsable as zero.
pub fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- format_lap_time ---------------------------------------------------

    #[test]
    fn lap_time_rounds_ties_to_even() {
        assert_eq!(format_lap_time("0.0025"), "00:00:002");
        assert_eq!(format_lap_time("0.0015"), "00:00:002");
    }

    #[test]
    fn lap_time_out_of_range_is_kept() {
        assert_eq!(format_lap_time("1e20"), "1e20");
    }

    #[test]
    fn lap_time_from_decimal_seconds() {
        assert_eq!(format_lap_time("45.5"), "00:45:500");
        assert_eq!(format_lap_time("125.25"), "02:05:250");
        assert_eq!(format_lap_time("0"), "00:00:000");
    }

    #[test]
    fn lap_time_rounds_to_the_millisecond() {
        assert_eq!(format_lap_time("61.0004"), "01:01:000");
        assert_eq!(format_lap_time("61.0006"), "01:01:001");
    }

    #[test]
    fn lap_time_from_colon_forms() {
        assert_eq!(format_lap_time("2:03:7"), "02:03:007");
        assert_eq!(format_lap_time("59:999"), "00:59:999");
    }

    #[test]
    fn colon_components_are_not_carried() {
        assert_eq!(format_lap_time("0:75:0"), "00:75:000");
    }

    #[test]
    fn unparsable_lap_times_pass_through() {
        assert_eq!(format_lap_time("N/A"), "N/A");
        assert_eq!(format_lap_time("1:2:3:4"), "1:2:3:4");
        assert_eq!(format_lap_time("a:b"), "a:b");
        assert_eq!(format_lap_time("inf"), "inf");
        assert_eq!(format_lap_time("-3.5"), "-3.5");
        assert_eq!(format_lap_time(""), "");
    }

    // -- rating_to_stars ---------------------------------------------------

    fn ascii() -> StarGlyphs {
        StarGlyphs {
            full: "#".into(),
            half: "+".into(),
            empty: "-".into(),
        }
    }

    #[test]
    fn whole_and_half_stars() {
        assert_eq!(rating_to_stars("3", &ascii()), "###--");
        assert_eq!(rating_to_stars("3.5", &ascii()), "###+-");
        assert_eq!(rating_to_stars("3.49", &ascii()), "###--");
        assert_eq!(rating_to_stars("4.75", &ascii()), "####+");
    }

    #[test]
    fn ratings_are_clamped() {
        assert_eq!(rating_to_stars("7", &ascii()), "#####");
        assert_eq!(rating_to_stars("-2", &ascii()), "-----");
    }

    #[test]
    fn non_numeric_rating_passes_through() {
        assert_eq!(rating_to_stars("N/A", &ascii()), "N/A");
        assert_eq!(rating_to_stars("NaN", &ascii()), "NaN");
    }

    #[test]
    fn default_glyphs_render_five_symbols() {
        let stars = rating_to_stars("2.5", &StarGlyphs::default());
        assert_eq!(stars.chars().count(), 5);
    }

    // -- shorten_description -----------------------------------------------

    #[test]
    fn short_descriptions_are_trimmed_only() {
        assert_eq!(shorten_description("  fast and fun \n"), "fast and fun");
    }

    #[test]
    fn blank_description_gets_placeholder() {
        assert_eq!(shorten_description(""), NO_DESCRIPTION);
        assert_eq!(shorten_description("   "), NO_DESCRIPTION);
    }

    #[test]
    fn long_descriptions_are_cut_at_the_limit() {
        let raw = format!("{}   {}", "a".repeat(248), "b".repeat(20));
        let short = shorten_description(&raw);
        assert_eq!(short, format!("{}...", "a".repeat(248)));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let raw = "é".repeat(DESCRIPTION_LIMIT);
        assert_eq!(shorten_description(&raw), raw);
    }

    // -- misc ----------------------------------------------------------------

    #[test]
    fn created_at_shows_the_date() {
        assert_eq!(format_created_at("2010-06-02T17:38:11+00:00"), "2010-06-02");
        assert_eq!(format_created_at("last tuesday"), "last tuesday");
    }

    #[test]
    fn counts_fall_back_to_zero() {
        assert_eq!(parse_count("1234"), 1234);
        assert_eq!(parse_count(" 7 "), 7);
        assert_eq!(parse_count("lots"), 0);
        assert_eq!(parse_count("-1"), 0);
    }
}
