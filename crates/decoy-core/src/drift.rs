use crate::constants::{DRIFT_PERIOD_X_MS, DRIFT_PERIOD_Y_MS};
use glam::Vec2;

/// Oscillating offset for a decoy anchored at `anchor`, `elapsed_ms` into the
/// session. The anchor coordinates double as phase seeds so neighbouring
/// decoys never move in lockstep. Each axis stays within `radius`.
#[inline]
pub fn drift_offset(elapsed_ms: f64, anchor: Vec2, radius: f32) -> Vec2 {
    let dx = (elapsed_ms / DRIFT_PERIOD_X_MS + anchor.x as f64).sin() as f32 * radius;
    let dy = (elapsed_ms / DRIFT_PERIOD_Y_MS + anchor.y as f64).cos() as f32 * radius;
    Vec2::new(dx, dy)
}
