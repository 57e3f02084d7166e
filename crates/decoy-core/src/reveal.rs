//! Confirmation reveal: scene fade, sticker layout and the heart spawner.
//!
//! Everything here is driven by timestamps passed in by the caller (ms since
//! session start), so the front-end decides when to poll.

use crate::config::RevealConfig;
use crate::constants::STICKER_ROTATION_MAX_DEG;
use crate::geometry::{place_rect_avoiding, Rect, Size};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Idle,
    Fading { started_at_ms: f64 },
    Revealed,
}

#[derive(Clone, Debug)]
pub struct RevealSequencer {
    phase: RevealPhase,
    fade_delay_ms: u32,
}

impl RevealSequencer {
    pub fn new(fade_delay_ms: u32) -> Self {
        Self {
            phase: RevealPhase::Idle,
            fade_delay_ms,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whole milliseconds left in the fade, rounded up; zero unless fading.
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        match self.phase {
            RevealPhase::Fading { started_at_ms } => {
                let left = self.fade_delay_ms as f64 - (now_ms - started_at_ms);
                if left > 0.0 {
                    (left.ceil() as u32).max(1)
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    /// Start the fade. Only the first call does anything.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        if self.phase != RevealPhase::Idle {
            return false;
        }
        self.phase = RevealPhase::Fading {
            started_at_ms: now_ms,
        };
        true
    }

    /// Advance to `Revealed` once the fade delay has passed. Returns true on
    /// the call that performs the transition.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.phase {
            RevealPhase::Fading { started_at_ms }
                if now_ms - started_at_ms >= self.fade_delay_ms as f64 =>
            {
                self.phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&mut self, now_ms: f64) -> bool {
        self.poll(now_ms);
        self.phase == RevealPhase::Revealed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    pub src: String,
    pub rect: Rect,
    pub rotation_deg: f32,
}

pub type StickerPlan = SmallVec<[Sticker; 8]>;

/// Lay out up to `cfg.sticker_count` stickers inside `bounds`, clear of the
/// text block and of each other. Stickers that cannot find a spot within the
/// attempt budget are dropped.
pub fn plan_stickers<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &RevealConfig,
    bounds: Rect,
    text_block: Rect,
    sources: &[String],
) -> StickerPlan {
    let mut plan = StickerPlan::new();
    if sources.is_empty() {
        return plan;
    }
    let mut obstacles: SmallVec<[Rect; 9]> = SmallVec::new();
    obstacles.push(text_block);
    for _ in 0..cfg.sticker_count {
        let side =
            rng.gen_range(cfg.sticker_size_min..=cfg.sticker_size_max.max(cfg.sticker_size_min));
        let placed = place_rect_avoiding(
            rng,
            bounds,
            Size::new(side, side),
            &obstacles,
            cfg.sticker_padding,
            cfg.sticker_attempts,
        );
        let Some(rect) = placed else {
            log::debug!("[reveal] sticker skipped, no free spot");
            continue;
        };
        let src = sources.choose(rng).cloned().unwrap_or_default();
        obstacles.push(rect);
        plan.push(Sticker {
            src,
            rect,
            rotation_deg: rng
                .gen_range(-STICKER_ROTATION_MAX_DEG..=STICKER_ROTATION_MAX_DEG),
        });
    }
    plan
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heart {
    pub x: f32,
    pub size: f32,
    pub rise_ms: u32,
    pub sway: f32,
}

/// Repeating heart emitter that stops itself after a fixed duration.
#[derive(Clone, Debug)]
pub struct HeartSpawner {
    started_at_ms: f64,
    duration_ms: u32,
    emitted: u32,
}

impl HeartSpawner {
    pub fn new(started_at_ms: f64, duration_ms: u32) -> Self {
        Self {
            started_at_ms,
            duration_ms,
            emitted: 0,
        }
    }

    #[inline]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms as f64
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// One heart per tick while running, `None` once finished.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        cfg: &RevealConfig,
        width: f32,
        now_ms: f64,
    ) -> Option<Heart> {
        if self.is_finished(now_ms) {
            return None;
        }
        self.emitted += 1;
        let size =
            rng.gen_range(cfg.heart_size_min..=cfg.heart_size_max.max(cfg.heart_size_min));
        let sway = if cfg.heart_sway_max.is_finite() {
            cfg.heart_sway_max.abs()
        } else {
            0.0
        };
        Some(Heart {
            x: rng.gen::<f32>() * (width - size).max(0.0),
            size,
            rise_ms: rng.gen_range(
                cfg.heart_rise_min_ms..=cfg.heart_rise_max_ms.max(cfg.heart_rise_min_ms),
            ),
            sway: rng.gen_range(-sway..=sway),
        })
    }
}
