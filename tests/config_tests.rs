// Host-side tests for session configuration and decoy counts.

use decoy_core::*;

#[test]
fn defaults_validate() {
    let config = SessionConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.escape_limit, 3);
    assert_eq!(config.drift_radius, 18.0);
    assert_eq!(config.safe_radius, 180.0);
    assert_eq!(config.min_decoy_distance, 60.0);
    assert_eq!(config.placement_attempts, 100);
    assert_eq!(config.fade_delay_ms, 600);
    assert_eq!(config.artifact_lifetime_ms, 5_000);
}

#[test]
fn decoy_count_has_floor_and_scales_with_area() {
    let rule = DecoyCountRule::default();
    assert_eq!(rule.count_for(Viewport::new(1280.0, 800.0)), 51);
    assert_eq!(rule.count_for(Viewport::new(800.0, 600.0)), 24);
    assert_eq!(rule.count_for(Viewport::new(600.0, 400.0)), 15);
    assert_eq!(rule.count_for(Viewport::new(0.0, 0.0)), 23);
}

#[test]
fn narrow_viewports_get_more_decoys() {
    let rule = DecoyCountRule::default();
    // 400x800 -> 16 by area, x1.5 on a narrow screen
    assert_eq!(rule.count_for(Viewport::new(400.0, 800.0)), 24);
    // floor of 15 scaled up and rounded up
    assert_eq!(rule.count_for(Viewport::new(300.0, 300.0)), 23);
}

#[test]
fn validation_rejects_bad_values() {
    let mut c = SessionConfig::default();
    c.image_probability = -0.1;
    assert_eq!(c.validate(), Err(ConfigError::ProbabilityOutOfRange(-0.1)));

    let mut c = SessionConfig::default();
    c.safe_radius = 0.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive {
            name: "safe_radius",
            ..
        })
    ));

    let mut c = SessionConfig::default();
    c.decoy_count.floor = 0;
    assert_eq!(c.validate(), Err(ConfigError::ZeroDecoyFloor));

    let mut c = SessionConfig::default();
    c.placement_attempts = 0;
    assert_eq!(
        c.validate(),
        Err(ConfigError::ZeroAttempts("placement_attempts"))
    );

    let mut c = SessionConfig::default();
    c.decoy_count.narrow_multiplier = 0.5;
    assert_eq!(c.validate(), Err(ConfigError::MultiplierTooSmall(0.5)));
}

#[test]
fn overrides_apply_by_attribute_name() {
    let mut c = SessionConfig::default();
    let errors = c.apply_overrides([
        ("escape-limit", "1"),
        ("drift-radius", " 24.5 "),
        ("image-probability", "0"),
        ("decoy-floor", "20"),
    ]);
    assert!(errors.is_empty());
    assert_eq!(c.escape_limit, 1);
    assert_eq!(c.drift_radius, 24.5);
    assert_eq!(c.image_probability, 0.0);
    assert_eq!(c.decoy_count.floor, 20);
    assert!(c.validate().is_ok());
}

#[test]
fn bad_overrides_are_reported_and_skipped() {
    let mut c = SessionConfig::default();
    let errors = c.apply_overrides([
        ("escape-limit", "lots"),
        ("colour", "red"),
        ("safe-radius", "200"),
    ]);
    assert_eq!(
        errors,
        vec![
            ConfigError::InvalidOverride {
                key: "escape-limit".into(),
                value: "lots".into()
            },
            ConfigError::UnknownKey("colour".into()),
        ]
    );
    assert_eq!(c.escape_limit, 3);
    assert_eq!(c.safe_radius, 200.0);
}

#[test]
fn every_override_key_is_accepted() {
    for key in OVERRIDE_KEYS {
        let mut c = SessionConfig::default();
        assert!(c.apply_override(key, "1").is_ok(), "{key} rejected");
    }
}

#[test]
fn errors_render_readably() {
    let e = ConfigError::InvalidOverride {
        key: "safe-radius".into(),
        value: "big".into(),
    };
    assert_eq!(e.to_string(), "invalid value \"big\" for safe-radius");
}

#[test]
fn validation_rejects_bad_reveal_ranges() {
    let mut c = SessionConfig::default();
    c.reveal.heart_sway_max = f32::NAN;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::Negative {
            name: "reveal.heart_sway_max",
            ..
        })
    ));

    let mut c = SessionConfig::default();
    c.reveal.heart_sway_max = -1.0;
    assert!(c.validate().is_err());

    let mut c = SessionConfig::default();
    c.reveal.sticker_size_max = c.reveal.sticker_size_min - 1.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvertedRange {
            name: "reveal.sticker_size",
            ..
        })
    ));

    let mut c = SessionConfig::default();
    c.reveal.heart_size_max = f32::INFINITY;
    assert!(c.validate().is_err());

    let mut c = SessionConfig::default();
    c.reveal.heart_rise_max_ms = c.reveal.heart_rise_min_ms - 1;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvertedRange {
            name: "reveal.heart_rise_ms",
            ..
        })
    ));

    let mut c = SessionConfig::default();
    c.reveal.sticker_padding = f32::NAN;
    assert!(c.validate().is_err());
}
