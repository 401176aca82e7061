//! Local image assets shipped next to the bot.

use std::path::{Path, PathBuf};

/// Path of the badge for `skill_level_id`, if the file exists.
///
/// Only plain identifiers are considered so an API value can never point
/// outside `dir`.
pub fn skill_level_image(dir: &Path, skill_level_id: &str) -> Option<PathBuf> {
    if !is_safe_file_stem(skill_level_id) {
        tracing::debug!(skill_level_id, "Ignoring unsafe skill level id");
        return None;
    }
    let path = dir.join(skill_image_file_name(skill_level_id));
    path.is_file().then_some(path)
}

/// File name used both on disk and as the attachment name.
pub fn skill_image_file_name(skill_level_id: &str) -> String {
    format!("{skill_level_id}.PNG")
}

fn is_safe_file_stem(stem: &str) -> bool {
    !stem.is_empty()
        && stem.len() <= 32
        && stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems() {
        assert!(is_safe_file_stem("7"));
        assert!(is_safe_file_stem("level_12"));
        assert!(!is_safe_file_stem(""));
        assert!(!is_safe_file_stem("N/A"));
        assert!(!is_safe_file_stem("../secret"));
        assert!(!is_safe_file_stem("a.b"));
    }
}
