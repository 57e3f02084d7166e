// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use decoy_core::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_sane() {
    assert!(tuning::DRIFT_RADIUS > 0.0);
    assert!(tuning::SAFE_RADIUS > tuning::MIN_DECOY_DISTANCE);
    assert!((0.0..=1.0).contains(&tuning::IMAGE_PROBABILITY));
    assert!(tuning::ESCAPE_LIMIT >= 1);
    assert!(tuning::PLACEMENT_ATTEMPTS > 0);
    assert!(tuning::DECOY_COUNT_FLOOR > 0);
    assert!(tuning::NARROW_COUNT_MULTIPLIER >= 1.0);
    assert!(tuning::IMAGE_SCALE_MIN < tuning::IMAGE_SCALE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_timing_is_consistent() {
    assert!(tuning::FADE_DELAY_MS > 0);
    assert!(tuning::HEART_INTERVAL_MS < tuning::HEART_SPAWN_DURATION_MS);
    assert!(tuning::HEART_RISE_MIN_MS <= tuning::HEART_RISE_MAX_MS);
    assert!(tuning::STICKER_SIZE_MIN <= tuning::STICKER_SIZE_MAX);
    assert!(tuning::HEART_SIZE_MIN <= tuning::HEART_SIZE_MAX);
}

#[test]
fn content_pools_are_populated() {
    assert!(!tuning::DECOY_LABELS.is_empty());
    assert!(!tuning::PHRASES.is_empty());
    assert!(!tuning::DEFAULT_IMAGES.is_empty());
}

#[test]
fn selectors_and_classes_are_well_formed() {
    assert!(CONFIRM_SELECTOR.starts_with('.'));
    assert!(SCENE_SELECTOR.starts_with('.'));
    assert!(FINAL_TEXT_SELECTOR.starts_with('.'));
    for class in [
        DECOY_CLASS,
        VANISHED_CLASS,
        HIDDEN_CLASS,
        PHRASE_CLASS,
        POPUP_IMAGE_CLASS,
        STICKER_CLASS,
        HEART_CLASS,
    ] {
        assert!(!class.is_empty() && !class.contains(' '));
    }
    assert!(IMAGES_ATTR.starts_with(CONFIG_ATTR_PREFIX));
    assert!(STICKERS_ATTR.starts_with(CONFIG_ATTR_PREFIX));
}
