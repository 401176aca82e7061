use std::fs;

use pitwall_bot::assets::{skill_image_file_name, skill_level_image};

#[test]
fn finds_existing_badge() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("7.PNG"), b"png").unwrap();

    let found = skill_level_image(dir.path(), "7").expect("badge should be found");
    assert_eq!(found, dir.path().join("7.PNG"));
    assert_eq!(skill_image_file_name("7"), "7.PNG");
}

#[test]
fn missing_badge_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(skill_level_image(dir.path(), "3").is_none());
}

#[test]
fn directories_are_not_badges() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("4.PNG")).unwrap();
    assert!(skill_level_image(dir.path(), "4").is_none());
}

#[test]
fn traversal_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("levels");
    fs::create_dir(&nested).unwrap();
    fs::write(dir.path().join("secret.PNG"), b"png").unwrap();

    assert!(skill_level_image(&nested, "../secret").is_none());
    assert!(skill_level_image(&nested, "N/A").is_none());
}
