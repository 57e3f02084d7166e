use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered image list handed out strictly round-robin.
#[derive(Clone, Debug, Default)]
pub struct ImageCatalog {
    images: Vec<String>,
    cursor: usize,
}

impl ImageCatalog {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Next image in catalog order, wrapping at the end. `None` when empty.
    pub fn next_image(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        let i = self.cursor;
        self.cursor = (self.cursor + 1) % self.images.len();
        Some(self.images[i].as_str())
    }
}

/// Pool of strings picked uniformly at random.
#[derive(Clone, Debug)]
pub struct TextPool {
    entries: Vec<String>,
}

impl TextPool {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.entries.choose(rng).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, s: &str) -> bool {
        self.entries.iter().any(|e| e == s)
    }
}

/// Everything a session draws content from.
#[derive(Clone, Debug)]
pub struct Catalogs {
    pub images: ImageCatalog,
    pub stickers: Vec<String>,
    pub labels: TextPool,
    pub phrases: TextPool,
}

impl Default for Catalogs {
    fn default() -> Self {
        use crate::constants::{DECOY_LABELS, DEFAULT_IMAGES, DEFAULT_STICKERS, PHRASES};
        Self {
            images: ImageCatalog::new(DEFAULT_IMAGES.iter().copied()),
            stickers: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            labels: TextPool::new(DECOY_LABELS.iter().copied()),
            phrases: TextPool::new(PHRASES.iter().copied()),
        }
    }
}
