// Host-side tests for the confirmation reveal: fade timing, stickers, hearts.

use decoy_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn final_screen_waits_for_fade_delay() {
    let mut seq = RevealSequencer::new(600);
    assert!(!seq.is_revealed(0.0));
    assert!(seq.activate(1_000.0));
    assert!(!seq.is_revealed(1_000.0));
    assert!(!seq.is_revealed(1_599.9));
    assert!(seq.is_revealed(1_600.0));
    assert!(seq.is_revealed(1_000_000.0));
    assert_eq!(seq.phase(), RevealPhase::Revealed);
}

#[test]
fn confirmation_only_triggers_once() {
    let mut seq = RevealSequencer::new(600);
    assert!(seq.activate(10.0));
    assert!(!seq.activate(20.0));
    assert_eq!(
        seq.phase(),
        RevealPhase::Fading {
            started_at_ms: 10.0
        }
    );
    assert!(seq.poll(700.0));
    assert!(!seq.poll(800.0));
    assert!(!seq.activate(900.0));
    assert_eq!(seq.phase(), RevealPhase::Revealed);
}

#[test]
fn session_confirm_drives_sequencer() {
    let mut session = Session::new(
        SessionConfig::default(),
        Viewport::new(1280.0, 800.0),
        Vec2::new(640.0, 400.0),
        Catalogs::default(),
        StdRng::seed_from_u64(1),
    )
    .unwrap();
    assert!(session.confirm(50.0));
    assert!(!session.confirm(60.0));
    assert!(!session.is_revealed(649.0));
    assert!(session.is_revealed(650.0));
}

#[test]
fn stickers_avoid_text_block_and_each_other() {
    let mut rng = StdRng::seed_from_u64(4);
    let cfg = RevealConfig::default();
    let bounds = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let text_block = Rect::new(400.0, 300.0, 400.0, 200.0);
    let sources = vec!["s1.png".to_string(), "s2.png".to_string()];
    for _ in 0..20 {
        let plan = plan_stickers(&mut rng, &cfg, bounds, text_block, &sources);
        assert!(plan.len() <= cfg.sticker_count);
        for (i, s) in plan.iter().enumerate() {
            assert!(bounds.contains_rect(&s.rect));
            assert!(!s.rect.overlaps(&text_block, cfg.sticker_padding));
            assert!(s.rect.width >= cfg.sticker_size_min && s.rect.width <= cfg.sticker_size_max);
            assert!(sources.contains(&s.src));
            for other in &plan[i + 1..] {
                assert!(!s.rect.overlaps(&other.rect, 0.0));
            }
        }
    }
}

#[test]
fn no_stickers_without_sources_or_room() {
    let mut rng = StdRng::seed_from_u64(5);
    let cfg = RevealConfig::default();
    let text_block = Rect::new(0.0, 0.0, 10.0, 10.0);
    let plan = plan_stickers(&mut rng, &cfg, Rect::new(0.0, 0.0, 800.0, 600.0), text_block, &[]);
    assert!(plan.is_empty());

    let sources = vec!["s.png".to_string()];
    let plan = plan_stickers(&mut rng, &cfg, Rect::new(0.0, 0.0, 60.0, 60.0), text_block, &sources);
    assert!(plan.is_empty());
}

#[test]
fn heart_spawner_stops_after_duration() {
    let mut rng = StdRng::seed_from_u64(6);
    let cfg = RevealConfig::default();
    let mut spawner = HeartSpawner::new(0.0, cfg.heart_spawn_duration_ms);
    let mut t = 0.0;
    while let Some(heart) = spawner.tick(&mut rng, &cfg, 1000.0, t) {
        assert!(heart.size >= cfg.heart_size_min && heart.size <= cfg.heart_size_max);
        assert!(heart.x >= 0.0 && heart.x + heart.size <= 1000.0 + 1e-3);
        assert!(heart.rise_ms >= cfg.heart_rise_min_ms && heart.rise_ms <= cfg.heart_rise_max_ms);
        assert!(heart.sway.abs() <= cfg.heart_sway_max);
        t += cfg.heart_interval_ms as f64;
    }
    assert_eq!(spawner.emitted(), 20);
    assert!(spawner.is_finished(t));
    assert!(spawner.tick(&mut rng, &cfg, 1000.0, t + 1.0).is_none());
}

#[test]
fn session_hearts_use_viewport_width() {
    let mut session = Session::new(
        SessionConfig::default(),
        Viewport::new(320.0, 640.0),
        Vec2::new(160.0, 320.0),
        Catalogs::default(),
        StdRng::seed_from_u64(7),
    )
    .unwrap();
    let mut spawner = session.heart_spawner(1_000.0);
    for i in 0..10 {
        let heart = session
            .next_heart(&mut spawner, 1_000.0 + i as f64 * 300.0)
            .expect("spawner still running");
        assert!(heart.x + heart.size <= 320.0 + 1e-3);
    }
    assert!(session.next_heart(&mut spawner, 7_000.0).is_none());
}

#[test]
fn remaining_fade_rounds_up_and_reaches_zero() {
    let mut seq = RevealSequencer::new(600);
    assert_eq!(seq.remaining_ms(0.0), 0);
    seq.activate(100.0);
    assert_eq!(seq.remaining_ms(100.0), 600);
    assert_eq!(seq.remaining_ms(400.0), 300);
    assert_eq!(seq.remaining_ms(699.5), 1);
    assert_eq!(seq.remaining_ms(700.0), 0);
}

#[test]
fn early_fade_check_reports_time_left() {
    let mut session = Session::new(
        SessionConfig::default(),
        Viewport::new(1280.0, 800.0),
        Vec2::new(640.0, 400.0),
        Catalogs::default(),
        StdRng::seed_from_u64(2),
    )
    .unwrap();
    session.confirm(1_000.0);
    // timer fired 20 ms early
    assert_eq!(session.fade_remaining_ms(1_580.0), 20);
    assert!(!session.is_revealed(1_580.0));
    assert_eq!(session.fade_remaining_ms(1_600.0), 0);
    assert!(session.is_revealed(1_600.0));
    assert_eq!(session.fade_remaining_ms(5_000.0), 0);
}

#[test]
fn heart_spawner_survives_non_finite_sway() {
    let mut cfg = RevealConfig::default();
    cfg.heart_sway_max = f32::NAN;
    let mut rng = StdRng::seed_from_u64(8);
    let mut spawner = HeartSpawner::new(0.0, cfg.heart_spawn_duration_ms);
    let heart = spawner.tick(&mut rng, &cfg, 800.0, 0.0).unwrap();
    assert_eq!(heart.sway, 0.0);
}
