//! Short-lived popups left behind by vanished decoys.

use crate::catalog::{ImageCatalog, TextPool};
use crate::constants::{IMAGE_ROTATION_MAX_DEG, IMAGE_SCALE_MAX, IMAGE_SCALE_MIN};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub enum ArtifactKind {
    Image {
        src: String,
        rotation_deg: f32,
        scale: f32,
    },
    Phrase {
        text: String,
    },
}

impl ArtifactKind {
    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, ArtifactKind::Image { .. })
    }
}

/// Immutable once created; the front-end removes it after `lifetime_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub position: Vec2,
    pub created_at_ms: f64,
    pub lifetime_ms: u32,
    pub z_index: u32,
}

impl Artifact {
    #[inline]
    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + self.lifetime_ms as f64
    }

    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}

/// Image artifact with a random tilt and scale, or `None` if the catalog is
/// empty.
pub fn image_artifact<R: Rng + ?Sized>(
    rng: &mut R,
    images: &mut ImageCatalog,
) -> Option<ArtifactKind> {
    let src = images.next_image()?.to_string();
    let rotation_deg = rng.gen_range(-IMAGE_ROTATION_MAX_DEG..=IMAGE_ROTATION_MAX_DEG);
    let scale = rng.gen_range(IMAGE_SCALE_MIN..=IMAGE_SCALE_MAX);
    Some(ArtifactKind::Image {
        src,
        rotation_deg,
        scale,
    })
}

pub fn phrase_artifact<R: Rng + ?Sized>(rng: &mut R, phrases: &TextPool) -> ArtifactKind {
    ArtifactKind::Phrase {
        text: phrases.pick(rng).to_string(),
    }
}

/// Weighted coin flip between an image and a phrase. An empty image catalog
/// always yields a phrase, so a vanish never goes without an artifact.
pub fn choose_artifact<R: Rng + ?Sized>(
    rng: &mut R,
    image_probability: f64,
    images: &mut ImageCatalog,
    phrases: &TextPool,
) -> ArtifactKind {
    let want_image = !images.is_empty() && rng.gen_bool(image_probability.clamp(0.0, 1.0));
    if want_image {
        if let Some(kind) = image_artifact(rng, images) {
            return kind;
        }
    }
    phrase_artifact(rng, phrases)
}
