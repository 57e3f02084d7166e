// Inline style and attribute values. Kept free of web-sys so host tests can include it.

use glam::Vec2;

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

#[inline]
pub fn ms(v: u32) -> String {
    format!("{}ms", v)
}

/// Drift transform relative to the decoy's anchor.
#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

#[inline]
pub fn rotate(deg: f32) -> String {
    format!("rotate({:.1}deg)", deg)
}

#[inline]
pub fn rotate_scale(deg: f32, scale: f32) -> String {
    format!("rotate({:.1}deg) scale({:.2})", deg, scale)
}

/// Split a comma-separated attribute into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
