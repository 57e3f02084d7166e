//! The session context: the one object that owns all page state.
//!
//! Front-ends hold a `Session` behind `Rc<RefCell<_>>` and feed it viewport
//! changes, pointer contacts and the confirmation click. It never touches a
//! display surface; every operation returns what the front-end should show.

use crate::artifact::{choose_artifact, Artifact};
use crate::catalog::Catalogs;
use crate::config::{ConfigError, SessionConfig};
use crate::decoy::{next_evasion, ContactOutcome, DecoyId, DecoyRegistry, DecoyState, Evasion};
use crate::drift::drift_offset;
use crate::geometry::{place_outside_safe_zone, Placement, PlacementRequest, Rect, SafeZone, Viewport};
use crate::reveal::{plan_stickers, Heart, HeartSpawner, RevealSequencer, StickerPlan};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub relocations: u32,
    pub vanishes: u32,
    pub fallback_placements: u32,
}

pub struct Session<R: Rng> {
    config: SessionConfig,
    viewport: Viewport,
    safe_zone: SafeZone,
    registry: DecoyRegistry,
    catalogs: Catalogs,
    rng: R,
    z_counter: u32,
    reveal: RevealSequencer,
    stats: SessionStats,
}

impl<R: Rng> Session<R> {
    /// Build an empty session. Call [`Session::populate`] to create decoys.
    pub fn new(
        config: SessionConfig,
        viewport: Viewport,
        safe_center: Vec2,
        catalogs: Catalogs,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let safe_zone = SafeZone {
            center: safe_center,
            radius: config.safe_radius,
        };
        let reveal = RevealSequencer::new(config.fade_delay_ms);
        Ok(Self {
            config,
            viewport,
            safe_zone,
            registry: DecoyRegistry::new(),
            catalogs,
            rng,
            z_counter: 0,
            reveal,
            stats: SessionStats::default(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn safe_zone(&self) -> SafeZone {
        self.safe_zone
    }

    pub fn registry(&self) -> &DecoyRegistry {
        &self.registry
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Monotonic z-order for overlay elements; each call returns a higher value.
    pub fn next_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    fn place(&mut self, except: Option<DecoyId>) -> Placement {
        let existing = self.registry.active_anchors_except(except);
        let req = PlacementRequest {
            viewport: self.viewport,
            footprint: self.config.decoy_footprint,
            safe_zone: self.safe_zone,
            existing: &existing,
            min_distance: self.config.min_decoy_distance,
            max_attempts: self.config.placement_attempts,
        };
        let placement = place_outside_safe_zone(&mut self.rng, &req);
        if placement.is_fallback() {
            self.stats.fallback_placements += 1;
        }
        placement
    }

    /// Create one active decoy at a fresh placement.
    pub fn spawn_decoy(&mut self) -> DecoyId {
        let label = self.catalogs.labels.pick(&mut self.rng).to_string();
        let anchor = self.place(None).point;
        self.registry.insert(label, anchor)
    }

    /// Create the initial decoys; the count comes from the viewport area.
    pub fn populate(&mut self) -> Vec<DecoyId> {
        let count = self.config.decoy_count.count_for(self.viewport);
        let ids: Vec<DecoyId> = (0..count).map(|_| self.spawn_decoy()).collect();
        log::info!(
            "[session] {} decoys for {:.0}x{:.0} ({} fallback placements)",
            ids.len(),
            self.viewport.width,
            self.viewport.height,
            self.stats.fallback_placements
        );
        ids
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Move the safe zone. Active decoys that end up inside it are re-placed
    /// without spending an escape; their new anchors are returned.
    pub fn set_safe_center(&mut self, center: Vec2) -> Vec<(DecoyId, Vec2)> {
        self.safe_zone.center = center;
        let intruders: Vec<DecoyId> = self
            .registry
            .active()
            .filter(|d| self.safe_zone.contains(d.anchor))
            .map(|d| d.id)
            .collect();
        let mut moved = Vec::with_capacity(intruders.len());
        for id in intruders {
            let to = self.place(Some(id)).point;
            if let Some(d) = self.registry.get_mut(id) {
                d.anchor = to;
                moved.push((id, to));
            }
        }
        if !moved.is_empty() {
            log::debug!("[session] safe zone moved, nudged {} decoys", moved.len());
        }
        moved
    }

    /// Drive the evasion state machine for a pointer contact on `id`.
    pub fn contact(&mut self, id: DecoyId, now_ms: f64) -> ContactOutcome {
        let (escape_count, from) = match self.registry.get(id) {
            Some(d) if d.is_active() => (d.escape_count, d.anchor),
            _ => return ContactOutcome::Ignored,
        };
        match next_evasion(escape_count, self.config.escape_limit) {
            Evasion::Escape => {
                let to = self.place(Some(id)).point;
                let Some(d) = self.registry.get_mut(id) else {
                    return ContactOutcome::Ignored;
                };
                d.escape_count += 1;
                d.anchor = to;
                self.stats.relocations += 1;
                ContactOutcome::Escaped {
                    id,
                    from,
                    to,
                    escape_count: d.escape_count,
                }
            }
            Evasion::Vanish => {
                if let Some(d) = self.registry.get_mut(id) {
                    d.state = DecoyState::Vanished;
                }
                self.stats.vanishes += 1;
                let kind = choose_artifact(
                    &mut self.rng,
                    self.config.image_probability,
                    &mut self.catalogs.images,
                    &self.catalogs.phrases,
                );
                let artifact = Artifact {
                    kind,
                    position: from,
                    created_at_ms: now_ms,
                    lifetime_ms: self.config.artifact_lifetime_ms,
                    z_index: self.next_z(),
                };
                log::debug!(
                    "[decoy] {} vanished at ({:.0},{:.0})",
                    id.0,
                    from.x,
                    from.y
                );
                ContactOutcome::Vanished { id, artifact }
            }
        }
    }

    /// Drift offset for every active decoy at `elapsed_ms`.
    pub fn drift_offsets(&self, elapsed_ms: f64) -> impl Iterator<Item = (DecoyId, Vec2)> + '_ {
        let radius = self.config.drift_radius;
        self.registry
            .active()
            .map(move |d| (d.id, drift_offset(elapsed_ms, d.anchor, radius)))
    }

    /// Confirmation click. True only for the first activation.
    pub fn confirm(&mut self, now_ms: f64) -> bool {
        let started = self.reveal.activate(now_ms);
        if started {
            log::info!("[reveal] confirmed at {:.0} ms", now_ms);
        }
        started
    }

    pub fn is_revealed(&mut self, now_ms: f64) -> bool {
        self.reveal.is_revealed(now_ms)
    }

    /// Time left before the final screen may be shown; zero once revealed.
    pub fn fade_remaining_ms(&mut self, now_ms: f64) -> u32 {
        if self.reveal.is_revealed(now_ms) {
            0
        } else {
            self.reveal.remaining_ms(now_ms)
        }
    }

    pub fn plan_stickers(&mut self, bounds: Rect, text_block: Rect) -> StickerPlan {
        plan_stickers(
            &mut self.rng,
            &self.config.reveal,
            bounds,
            text_block,
            &self.catalogs.stickers,
        )
    }

    pub fn heart_spawner(&self, now_ms: f64) -> HeartSpawner {
        HeartSpawner::new(now_ms, self.config.reveal.heart_spawn_duration_ms)
    }

    pub fn next_heart(&mut self, spawner: &mut HeartSpawner, now_ms: f64) -> Option<Heart> {
        spawner.tick(
            &mut self.rng,
            &self.config.reveal,
            self.viewport.width,
            now_ms,
        )
    }
}
