use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use assert_matches::assert_matches;
use pitwall_bot::config::{BotConfig, ConfigError, LogFormat, DEFAULT_EMBED_COLOR};

fn load(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    BotConfig::from_lookup(|key| map.get(key).cloned())
}

const REQUIRED: [(&str, &str); 2] = [
    ("DISCORD_TOKEN", "token-123"),
    ("STATS_API_URL", "https://stats.example/api/"),
];

#[test]
fn defaults_apply_with_only_required_vars() {
    let config = load(&REQUIRED).unwrap();

    assert_eq!(config.discord_token, "token-123");
    assert_eq!(config.stats_api_url, "https://stats.example/api");
    assert_eq!(config.embed_color, DEFAULT_EMBED_COLOR);
    assert!(!config.debug_mode);
    assert_eq!(config.star_glyphs.full, "★");
    assert_eq!(config.star_glyphs.half, "⯪");
    assert_eq!(config.star_glyphs.empty, "☆");
    assert_eq!(config.skill_image_dir, PathBuf::from("img/levels"));
    assert_eq!(config.http_timeout, Duration::from_secs(30));
    assert!(config.http_user_agent.starts_with("pitwall-bot/"));
    assert_eq!(config.hotlap_max_pages, 200);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn missing_token_is_reported() {
    let result = load(&[("STATS_API_URL", "https://stats.example")]);
    assert_matches!(result, Err(ConfigError::Missing("DISCORD_TOKEN")));
}

#[test]
fn blank_api_url_counts_as_missing() {
    let result = load(&[("DISCORD_TOKEN", "t"), ("STATS_API_URL", "   ")]);
    assert_matches!(result, Err(ConfigError::Missing("STATS_API_URL")));
}

#[test]
fn overrides_are_parsed() {
    let mut vars = REQUIRED.to_vec();
    vars.extend([
        ("EMBED_COLOR", "#FF8800"),
        ("DEBUG_MODE", "yes"),
        ("STAR_FULL", "*"),
        ("STAR_HALF", "+"),
        ("STAR_EMPTY", "-"),
        ("SKILL_IMAGE_DIR", "/srv/badges"),
        ("HTTP_TIMEOUT_SECS", "5"),
        ("HTTP_USER_AGENT", "custom/1.0"),
        ("HOTLAP_MAX_PAGES", "12"),
        ("LOG_FORMAT", "JSON"),
    ]);
    let config = load(&vars).unwrap();

    assert_eq!(config.embed_color, 0xFF8800);
    assert!(config.debug_mode);
    assert_eq!(config.star_glyphs.full, "*");
    assert_eq!(config.star_glyphs.half, "+");
    assert_eq!(config.star_glyphs.empty, "-");
    assert_eq!(config.skill_image_dir, PathBuf::from("/srv/badges"));
    assert_eq!(config.http_timeout, Duration::from_secs(5));
    assert_eq!(config.http_user_agent, "custom/1.0");
    assert_eq!(config.hotlap_max_pages, 12);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn invalid_values_name_the_variable() {
    let cases = [
        ("EMBED_COLOR", "teal"),
        ("DEBUG_MODE", "sometimes"),
        ("HTTP_TIMEOUT_SECS", "0"),
        ("HOTLAP_MAX_PAGES", "lots"),
        ("LOG_FORMAT", "xml"),
    ];
    for (var, value) in cases {
        let mut vars = REQUIRED.to_vec();
        vars.push((var, value));
        let err = load(&vars).unwrap_err();
        assert_matches!(&err, ConfigError::Invalid { var: v, .. } if *v == var);
        assert!(err.to_string().contains(var));
    }
}
