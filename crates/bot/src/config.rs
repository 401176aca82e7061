use std::path::PathBuf;
use std::time::Duration;

use pitwall_core::format::StarGlyphs;

/// Default embed colour (teal).
pub const DEFAULT_EMBED_COLOR: u32 = 0x1ABC9C;
/// Default directory holding `{skill_level_id}.PNG` badges.
pub const DEFAULT_SKILL_IMAGE_DIR: &str = "img/levels";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Safety cap on hotlap pages scanned per invocation.
pub const DEFAULT_HOTLAP_MAX_PAGES: u32 = 200;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("{var} has an invalid value `{value}`: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Bot configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token.
    pub discord_token: String,
    /// Stats API root without a trailing slash.
    pub stats_api_url: String,
    pub embed_color: u32,
    /// Enables debug-level logging for the pitwall crates.
    pub debug_mode: bool,
    pub star_glyphs: StarGlyphs,
    pub skill_image_dir: PathBuf,
    pub http_timeout: Duration,
    pub http_user_agent: String,
    pub hotlap_max_pages: u32,
    pub log_format: LogFormat,
}

impl BotConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var             | Default                   |
    /// |---------------------|---------------------------|
    /// | `DISCORD_TOKEN`     | required                  |
    /// | `STATS_API_URL`     | required                  |
    /// | `EMBED_COLOR`       | `0x1ABC9C`                |
    /// | `DEBUG_MODE`        | `false`                   |
    /// | `STAR_FULL`         | `★`                       |
    /// | `STAR_HALF`         | `⯪`                       |
    /// | `STAR_EMPTY`        | `☆`                       |
    /// | `SKILL_IMAGE_DIR`   | `img/levels`              |
    /// | `HTTP_TIMEOUT_SECS` | `30`                      |
    /// | `HTTP_USER_AGENT`   | `pitwall-bot/{version}`   |
    /// | `HOTLAP_MAX_PAGES`  | `200`                     |
    /// | `LOG_FORMAT`        | `pretty` (or `json`)      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values behave as unset.
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let stats_api_url = get("STATS_API_URL")
            .ok_or(ConfigError::Missing("STATS_API_URL"))?
            .trim_end_matches('/')
            .to_string();

        let embed_color = match get("EMBED_COLOR") {
            Some(raw) => parse_color(&raw).ok_or(ConfigError::Invalid {
                var: "EMBED_COLOR",
                value: raw,
                reason: "expected a hex colour such as 0x1ABC9C",
            })?,
            None => DEFAULT_EMBED_COLOR,
        };

        let debug_mode = match get("DEBUG_MODE") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                var: "DEBUG_MODE",
                value: raw,
                reason: "expected true or false",
            })?,
            None => false,
        };

        let defaults = StarGlyphs::default();
        let star_glyphs = StarGlyphs {
            full: get("STAR_FULL").unwrap_or(defaults.full),
            half: get("STAR_HALF").unwrap_or(defaults.half),
            empty: get("STAR_EMPTY").unwrap_or(defaults.empty),
        };

        let skill_image_dir = PathBuf::from(
            get("SKILL_IMAGE_DIR").unwrap_or_else(|| DEFAULT_SKILL_IMAGE_DIR.to_string()),
        );

        let http_timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "HTTP_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let http_user_agent = get("HTTP_USER_AGENT")
            .unwrap_or_else(|| format!("pitwall-bot/{}", env!("CARGO_PKG_VERSION")));

        let hotlap_max_pages = match get("HOTLAP_MAX_PAGES") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(pages) if pages > 0 => pages,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "HOTLAP_MAX_PAGES",
                        value: raw,
                        reason: "expected a positive page count",
                    })
                }
            },
            None => DEFAULT_HOTLAP_MAX_PAGES,
        };

        let log_format = match get("LOG_FORMAT").map(|raw| raw.to_ascii_lowercase()) {
            None => LogFormat::Pretty,
            Some(raw) if raw == "pretty" => LogFormat::Pretty,
            Some(raw) if raw == "json" => LogFormat::Json,
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: raw,
                    reason: "expected pretty or json",
                })
            }
        };

        Ok(Self {
            discord_token,
            stats_api_url,
            embed_color,
            debug_mode,
            star_glyphs,
            skill_image_dir,
            http_timeout: Duration::from_secs(http_timeout_secs),
            http_user_agent,
            hotlap_max_pages,
            log_format,
        })
    }
}

/// Parse `0x1ABC9C`, `#1ABC9C` or `1ABC9C`.
pub fn parse_color(raw: &str) -> Option<u32> {
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .or_else(|| raw.strip_prefix('#'))
        .unwrap_or(raw);
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_prefixes() {
        assert_eq!(parse_color("0x1ABC9C"), Some(0x1ABC9C));
        assert_eq!(parse_color("#ff0000"), Some(0xFF0000));
        assert_eq!(parse_color("00ff00"), Some(0x00FF00));
        assert_eq!(parse_color("0x"), None);
        assert_eq!(parse_color("0x1234567"), None);
        assert_eq!(parse_color("teal"), None);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
