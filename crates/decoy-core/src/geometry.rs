//! Screen-space geometry and rejection-sampling placement.
//!
//! All coordinates are CSS pixels with the origin at the top-left of the
//! viewport. A decoy's anchor is the top-left corner of its element.

use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }
}

/// Circle around the confirmation control that active decoys stay out of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeZone {
    pub center: Vec2,
    pub radius: f32,
}

impl SafeZone {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance(self.center) < self.radius
    }

    /// How far `p` sits inside the zone; zero when outside.
    #[inline]
    pub fn intrusion(&self, p: Vec2) -> f32 {
        (self.radius - p.distance(self.center)).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Overlap test with `padding` added around `self`. Touching edges do not
    /// count as overlap.
    pub fn overlaps(&self, other: &Rect, padding: f32) -> bool {
        self.x - padding < other.right()
            && other.x < self.right() + padding
            && self.y - padding < other.bottom()
            && other.y < self.bottom() + padding
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementKind {
    /// Both the safe-zone and the crowding constraint hold.
    Satisfied,
    /// The attempt budget ran out; the least-violating candidate was kept.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub point: Vec2,
    pub kind: PlacementKind,
}

impl Placement {
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.kind == PlacementKind::Fallback
    }
}

/// Inputs for a single decoy placement.
#[derive(Clone, Copy, Debug)]
pub struct PlacementRequest<'a> {
    pub viewport: Viewport,
    pub footprint: Size,
    pub safe_zone: SafeZone,
    pub existing: &'a [Vec2],
    pub min_distance: f32,
    pub max_attempts: u32,
}

impl PlacementRequest<'_> {
    fn crowding(&self, p: Vec2) -> f32 {
        self.existing
            .iter()
            .map(|q| (self.min_distance - p.distance(*q)).max(0.0))
            .fold(0.0, f32::max)
    }

    /// Total constraint shortfall for `p`; zero means the point is valid.
    pub fn violation(&self, p: Vec2) -> f32 {
        self.safe_zone.intrusion(p) + self.crowding(p)
    }
}

#[inline]
fn sample_in<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, footprint: Size) -> Vec2 {
    let span_x = (viewport.width - footprint.width).max(0.0);
    let span_y = (viewport.height - footprint.height).max(0.0);
    Vec2::new(rng.gen::<f32>() * span_x, rng.gen::<f32>() * span_y)
}

/// Pick a random anchor outside the safe zone and at least `min_distance`
/// from every existing anchor.
///
/// Sampling stops after `max_attempts` draws. If no draw satisfied both
/// constraints, the draw with the smallest total violation is returned as a
/// `Fallback`, so the call always terminates.
pub fn place_outside_safe_zone<R: Rng + ?Sized>(
    rng: &mut R,
    req: &PlacementRequest<'_>,
) -> Placement {
    let mut best: Option<(Vec2, f32)> = None;
    for _ in 0..req.max_attempts.max(1) {
        let p = sample_in(rng, req.viewport, req.footprint);
        let v = req.violation(p);
        if v <= 0.0 {
            return Placement {
                point: p,
                kind: PlacementKind::Satisfied,
            };
        }
        match best {
            Some((_, bv)) if v >= bv => {}
            _ => best = Some((p, v)),
        }
    }
    let point = best.map(|(p, _)| p).unwrap_or(Vec2::ZERO);
    log::debug!(
        "[placement] no valid spot after {} attempts, fallback at ({:.0},{:.0})",
        req.max_attempts,
        point.x,
        point.y
    );
    Placement {
        point,
        kind: PlacementKind::Fallback,
    }
}

/// Place a `size` rectangle inside `bounds`, keeping `padding` clear of every
/// obstacle. Returns `None` once `attempts` draws have failed.
pub fn place_rect_avoiding<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Rect,
    size: Size,
    obstacles: &[Rect],
    padding: f32,
    attempts: u32,
) -> Option<Rect> {
    let span_x = bounds.width - size.width;
    let span_y = bounds.height - size.height;
    if span_x < 0.0 || span_y < 0.0 {
        return None;
    }
    (0..attempts).find_map(|_| {
        let candidate = Rect::new(
            bounds.x + rng.gen::<f32>() * span_x,
            bounds.y + rng.gen::<f32>() * span_y,
            size.width,
            size.height,
        );
        obstacles
            .iter()
            .all(|o| !candidate.overlaps(o, padding))
            .then_some(candidate)
    })
}
