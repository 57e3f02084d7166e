// Host-side tests for inline style formatting.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use style::*;

#[test]
fn lengths_and_durations() {
    assert_eq!(px(12.0), "12.00px");
    assert_eq!(px(-3.456), "-3.46px");
    assert_eq!(ms(600), "600ms");
}

#[test]
fn drift_transform_formats_offset() {
    assert_eq!(
        translate(Vec2::new(1.5, -2.0)),
        "translate(1.50px, -2.00px)"
    );
}

#[test]
fn popup_transform_combines_rotation_and_scale() {
    assert_eq!(rotate(-12.34), "rotate(-12.3deg)");
    assert_eq!(rotate_scale(10.0, 0.85), "rotate(10.0deg) scale(0.85)");
}

#[test]
fn attribute_lists_are_trimmed() {
    assert_eq!(
        split_list(" a.png, ,b.png ,"),
        vec!["a.png".to_string(), "b.png".to_string()]
    );
    assert!(split_list("").is_empty());
}
