//! Enhancement slots ("spots") - marked locations on a card.

use serde::{Deserialize, Serialize};

use crate::catalog::{AbilityTag, EnhancementKey, MarkKind};

/// Half of the card a slot sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Top,
    Bottom,
}

/// A marked location on an ability card where one enhancement may be
/// applied.
///
/// Immutable inside this crate; the host's editor is the only writer.
///
/// ## Example
///
/// ```
/// use gloom_enhance::card::{EnhancementSlot, Region};
/// use gloom_enhance::catalog::MarkKind;
///
/// let slot = EnhancementSlot::new("top-1", MarkKind::Square, Region::Top)
///     .described("Attack 3")
///     .with_ability("attack")
///     .with_targets(2);
///
/// assert!(slot.has_ability("attack"));
/// assert_eq!(slot.targets, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementSlot {
    /// Identifier, unique within the owning card.
    pub id: String,

    /// The printed mark shape.
    #[serde(rename = "type")]
    pub mark: MarkKind,

    /// Free-text description shown in pickers.
    #[serde(default)]
    pub description: String,

    /// Which half of the card the slot sits on.
    pub region: Region,

    /// Slot on a summon's stat line.
    #[serde(default)]
    pub is_summon: bool,

    /// Printed target count; absent prices as a single target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<u32>,

    /// The card is lost after use, halving enhancement cost.
    #[serde(default)]
    pub has_lost_icon: bool,

    /// Explicit allow-list for summon slots; absent falls back to the
    /// default four summon enhancements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_summon_enhancements: Option<Vec<EnhancementKey>>,

    /// Merged ability-type and ability-property tags of the slot's line.
    #[serde(default)]
    pub abilities: Vec<AbilityTag>,
}

impl EnhancementSlot {
    /// Create a new slot with no abilities and default flags.
    pub fn new(id: impl Into<String>, mark: MarkKind, region: Region) -> Self {
        Self {
            id: id.into(),
            mark,
            description: String::new(),
            region,
            is_summon: false,
            targets: None,
            has_lost_icon: false,
            allowed_summon_enhancements: None,
            abilities: Vec::new(),
        }
    }

    /// Set the display description (builder pattern).
    #[must_use]
    pub fn described(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Mark the slot as part of a summon's stat line (builder pattern).
    #[must_use]
    pub fn summon(mut self) -> Self {
        self.is_summon = true;
        self
    }

    /// Set the printed target count (builder pattern).
    #[must_use]
    pub fn with_targets(mut self, targets: u32) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Add the lost icon (builder pattern).
    #[must_use]
    pub fn lost(mut self) -> Self {
        self.has_lost_icon = true;
        self
    }

    /// Restrict a summon slot to an explicit enhancement allow-list
    /// (builder pattern).
    #[must_use]
    pub fn allow_summon_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<EnhancementKey>,
    {
        self.allowed_summon_enhancements = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Add an ability tag (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, tag: impl Into<AbilityTag>) -> Self {
        self.abilities.push(tag.into());
        self
    }

    /// Check whether the slot's line carries an ability tag.
    #[must_use]
    pub fn has_ability(&self, tag: &str) -> bool {
        self.abilities.iter().any(|t| t.as_str() == tag)
    }
}
