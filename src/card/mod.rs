//! Cards and their enhancement slots.
//!
//! Produced by the host's data loader or editor and handed to the query
//! functions read-only. Nothing here is catalog data: a `Card` is one
//! concrete ability card with its printed slots.

mod slot;

pub use slot::{EnhancementSlot, Region};

use serde::{Deserialize, Serialize};

/// Printed card level: a number, or the "X" sentinel for cards whose
/// level varies with play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LevelRepr", into = "LevelRepr")]
pub enum CardLevel {
    Numbered(u32),
    Variable,
}

impl CardLevel {
    /// Level used for pricing; "X" cards price as level 1.
    #[must_use]
    pub fn effective(self) -> u32 {
        match self {
            Self::Numbered(level) => level,
            Self::Variable => 1,
        }
    }
}

impl Default for CardLevel {
    fn default() -> Self {
        Self::Numbered(1)
    }
}

/// Wire form of a card level: a JSON number, or a string sentinel (the
/// editor writes `"X"`). Any non-numeric value prices as a variable
/// level.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Numbered(u32),
    Sentinel(String),
}

impl From<LevelRepr> for CardLevel {
    fn from(repr: LevelRepr) -> Self {
        match repr {
            LevelRepr::Numbered(level) => Self::Numbered(level),
            LevelRepr::Sentinel(_) => Self::Variable,
        }
    }
}

impl From<CardLevel> for LevelRepr {
    fn from(level: CardLevel) -> Self {
        match level {
            CardLevel::Numbered(level) => Self::Numbered(level),
            CardLevel::Variable => Self::Sentinel("X".to_string()),
        }
    }
}

/// One ability card with its printed enhancement slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Display name.
    pub name: String,

    /// Printed level.
    #[serde(default)]
    pub level: CardLevel,

    /// Asset reference resolved by the host; opaque here.
    #[serde(default)]
    pub image: String,

    /// Printed slots, in card order.
    #[serde(rename = "enhancementSpots", default)]
    pub slots: Vec<EnhancementSlot>,

    /// Hexes the card's area attack already covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_count: Option<u32>,
}

impl Card {
    /// Create a card with no slots.
    pub fn new(name: impl Into<String>, level: CardLevel) -> Self {
        Self {
            name: name.into(),
            level,
            image: String::new(),
            slots: Vec::new(),
            hex_count: None,
        }
    }

    /// Add a slot (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: EnhancementSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Set the stored hex count (builder pattern).
    #[must_use]
    pub fn with_hexes(mut self, hexes: u32) -> Self {
        self.hex_count = Some(hexes);
        self
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Find a slot by id.
    #[must_use]
    pub fn slot(&self, id: &str) -> Option<&EnhancementSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}
