//! Session configuration.
//!
//! A `SessionConfig` is fixed once a session starts. The web front-end builds
//! one from `Default` and then applies any `data-*` overrides found on the
//! decoy container before validating it.

use crate::constants::*;
use crate::geometry::{Size, Viewport};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("image probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("decoy count floor must be at least 1")]
    ZeroDecoyFloor,
    #[error("{0} must allow at least one attempt")]
    ZeroAttempts(&'static str),
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} range is inverted: max {max} < min {min}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("narrow viewport multiplier must be >= 1, got {0}")]
    MultiplierTooSmall(f32),
    #[error("invalid value {value:?} for {key}")]
    InvalidOverride { key: String, value: String },
    #[error("unknown config key {0}")]
    UnknownKey(String),
}

/// How many decoys a viewport gets.
#[derive(Clone, Debug, PartialEq)]
pub struct DecoyCountRule {
    pub floor: usize,
    pub area_per_decoy: f32,
    pub narrow_width: f32,
    pub narrow_multiplier: f32,
}

impl Default for DecoyCountRule {
    fn default() -> Self {
        Self {
            floor: DECOY_COUNT_FLOOR,
            area_per_decoy: AREA_PER_DECOY,
            narrow_width: NARROW_VIEWPORT_WIDTH,
            narrow_multiplier: NARROW_COUNT_MULTIPLIER,
        }
    }
}

impl DecoyCountRule {
    pub fn count_for(&self, viewport: Viewport) -> usize {
        let by_area = (viewport.area() / self.area_per_decoy).floor().max(0.0) as usize;
        let base = by_area.max(self.floor);
        if viewport.width < self.narrow_width {
            (base as f32 * self.narrow_multiplier).ceil() as usize
        } else {
            base
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub drift_radius: f32,
    pub escape_limit: u32,
    pub safe_radius: f32,
    pub image_probability: f64,
    pub min_decoy_distance: f32,
    pub decoy_footprint: Size,
    pub placement_attempts: u32,
    pub decoy_count: DecoyCountRule,
    pub artifact_lifetime_ms: u32,
    pub fade_delay_ms: u32,
    pub loader_delay_ms: u32,
    pub reveal: RevealConfig,
}

/// Sticker and heart tuning for the final screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub sticker_count: usize,
    pub sticker_size_min: f32,
    pub sticker_size_max: f32,
    pub sticker_padding: f32,
    pub sticker_attempts: u32,
    pub heart_interval_ms: u32,
    pub heart_spawn_duration_ms: u32,
    pub heart_size_min: f32,
    pub heart_size_max: f32,
    pub heart_rise_min_ms: u32,
    pub heart_rise_max_ms: u32,
    pub heart_sway_max: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            sticker_count: STICKER_COUNT,
            sticker_size_min: STICKER_SIZE_MIN,
            sticker_size_max: STICKER_SIZE_MAX,
            sticker_padding: STICKER_PADDING,
            sticker_attempts: STICKER_ATTEMPTS,
            heart_interval_ms: HEART_INTERVAL_MS,
            heart_spawn_duration_ms: HEART_SPAWN_DURATION_MS,
            heart_size_min: HEART_SIZE_MIN,
            heart_size_max: HEART_SIZE_MAX,
            heart_rise_min_ms: HEART_RISE_MIN_MS,
            heart_rise_max_ms: HEART_RISE_MAX_MS,
            heart_sway_max: HEART_SWAY_MAX,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            drift_radius: DRIFT_RADIUS,
            escape_limit: ESCAPE_LIMIT,
            safe_radius: SAFE_RADIUS,
            image_probability: IMAGE_PROBABILITY,
            min_decoy_distance: MIN_DECOY_DISTANCE,
            decoy_footprint: Size::new(DECOY_WIDTH, DECOY_HEIGHT),
            placement_attempts: PLACEMENT_ATTEMPTS,
            decoy_count: DecoyCountRule::default(),
            artifact_lifetime_ms: ARTIFACT_LIFETIME_MS,
            fade_delay_ms: FADE_DELAY_MS,
            loader_delay_ms: LOADER_DELAY_MS,
            reveal: RevealConfig::default(),
        }
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative {
            name,
            value: value as f64,
        })
    }
}

fn ordered(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if max.is_finite() && max >= min {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive {
            name,
            value: value as f64,
        })
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("drift_radius", self.drift_radius)?;
        positive("safe_radius", self.safe_radius)?;
        positive("min_decoy_distance", self.min_decoy_distance)?;
        positive("decoy_count.area_per_decoy", self.decoy_count.area_per_decoy)?;
        positive("reveal.sticker_size_min", self.reveal.sticker_size_min)?;
        positive("reveal.heart_size_min", self.reveal.heart_size_min)?;
        non_negative("reveal.sticker_padding", self.reveal.sticker_padding)?;
        non_negative("reveal.heart_sway_max", self.reveal.heart_sway_max)?;
        let r = &self.reveal;
        ordered(
            "reveal.sticker_size",
            r.sticker_size_min as f64,
            r.sticker_size_max as f64,
        )?;
        ordered(
            "reveal.heart_size",
            r.heart_size_min as f64,
            r.heart_size_max as f64,
        )?;
        ordered(
            "reveal.heart_rise_ms",
            r.heart_rise_min_ms as f64,
            r.heart_rise_max_ms as f64,
        )?;
        if !(0.0..=1.0).contains(&self.image_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.image_probability));
        }
        if self.decoy_count.floor == 0 {
            return Err(ConfigError::ZeroDecoyFloor);
        }
        if self.decoy_count.narrow_multiplier < 1.0 {
            return Err(ConfigError::MultiplierTooSmall(
                self.decoy_count.narrow_multiplier,
            ));
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts("placement_attempts"));
        }
        if self.reveal.sticker_attempts == 0 {
            return Err(ConfigError::ZeroAttempts("reveal.sticker_attempts"));
        }
        if self.reveal.heart_interval_ms == 0 {
            return Err(ConfigError::NotPositive {
                name: "reveal.heart_interval_ms",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Apply a single `key = value` override. Keys use the kebab-case names of
    /// the `data-*` attributes on the decoy container.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidOverride {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "escape-limit" => self.escape_limit = value.parse().map_err(|_| invalid())?,
            "drift-radius" => self.drift_radius = value.parse().map_err(|_| invalid())?,
            "safe-radius" => self.safe_radius = value.parse().map_err(|_| invalid())?,
            "image-probability" => {
                self.image_probability = value.parse().map_err(|_| invalid())?
            }
            "min-distance" => self.min_decoy_distance = value.parse().map_err(|_| invalid())?,
            "decoy-floor" => self.decoy_count.floor = value.parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply overrides in order, collecting the ones that failed. A failed
    /// override leaves the previous value in place.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }
}

/// Keys accepted by `SessionConfig::apply_override`.
pub const OVERRIDE_KEYS: &[&str] = &[
    "escape-limit",
    "drift-radius",
    "safe-radius",
    "image-probability",
    "min-distance",
    "decoy-floor",
];
