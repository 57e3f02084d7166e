//! Decoy records and the registry that owns them.
//!
//! A decoy is Active until it has escaped `escape_limit` times; the next
//! contact vanishes it for good. Vanished decoys stay in the registry so ids
//! (registry indices) remain stable; iteration helpers skip them.

use crate::artifact::Artifact;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecoyId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoyState {
    Active,
    Vanished,
}

#[derive(Clone, Debug)]
pub struct Decoy {
    pub id: DecoyId,
    pub label: String,
    pub anchor: Vec2,
    pub escape_count: u32,
    pub state: DecoyState,
}

impl Decoy {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == DecoyState::Active
    }
}

/// What a pointer contact did to a decoy.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactOutcome {
    Escaped {
        id: DecoyId,
        from: Vec2,
        to: Vec2,
        escape_count: u32,
    },
    Vanished {
        id: DecoyId,
        artifact: Artifact,
    },
    /// The decoy was already gone or never existed.
    Ignored,
}

/// Transition decided by the escape counter alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evasion {
    Escape,
    Vanish,
}

/// Escape while the budget lasts, then vanish.
#[inline]
pub fn next_evasion(escape_count: u32, escape_limit: u32) -> Evasion {
    if escape_count < escape_limit {
        Evasion::Escape
    } else {
        Evasion::Vanish
    }
}

#[derive(Clone, Debug, Default)]
pub struct DecoyRegistry {
    decoys: Vec<Decoy>,
}

impl DecoyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, anchor: Vec2) -> DecoyId {
        let id = DecoyId(self.decoys.len());
        self.decoys.push(Decoy {
            id,
            label,
            anchor,
            escape_count: 0,
            state: DecoyState::Active,
        });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decoys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decoys.is_empty()
    }

    pub fn get(&self, id: DecoyId) -> Option<&Decoy> {
        self.decoys.get(id.0)
    }

    pub fn get_mut(&mut self, id: DecoyId) -> Option<&mut Decoy> {
        self.decoys.get_mut(id.0)
    }

    pub fn active(&self) -> impl Iterator<Item = &Decoy> {
        self.decoys.iter().filter(|d| d.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Anchors of every active decoy other than `except`.
    pub fn active_anchors_except(&self, except: Option<DecoyId>) -> Vec<Vec2> {
        self.active()
            .filter(|d| Some(d.id) != except)
            .map(|d| d.anchor)
            .collect()
    }
}
