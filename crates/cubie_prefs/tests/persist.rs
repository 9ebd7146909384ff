//! Loading and saving preferences files.

use config as _;
use eyre as _;
use lazy_static as _;
use log as _;
use serde as _;
use serde_norway as _;
use strum as _;

use cubie_prefs::*;
use pretty_assertions::assert_eq;

#[test]
fn test_user_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "animation:\n  twist_interpolation: cosine\nscramble:\n  length: 40\n")
        .unwrap();

    let prefs = Preferences::load(Some(&path));
    assert_eq!(prefs.animation.twist_interpolation, InterpolateFn::Cosine);
    assert_eq!(prefs.scramble.length, 40);
    // Unspecified values keep their defaults.
    assert_eq!(prefs.animation.twist_duration, DEFAULT_PREFS.animation.twist_duration);
    assert_eq!(prefs.interaction, DEFAULT_PREFS.interaction);
}

#[test]
fn test_bad_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "scramble:\n  length: many\n").unwrap();
    assert_eq!(Preferences::load(Some(&path)), *DEFAULT_PREFS);

    let missing = dir.path().join("missing.yaml");
    assert_eq!(Preferences::load(Some(&missing)), *DEFAULT_PREFS);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = DEFAULT_PREFS.clone();
    prefs.animation.twist_duration = 0.5;
    prefs.animation.twist_interpolation = InterpolateFn::Lerp;
    prefs.interaction.shift_reverses = false;
    prefs.save(&path).unwrap();

    assert_eq!(Preferences::load(Some(&path)), prefs);
}
