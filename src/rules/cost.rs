//! Gold cost calculation.
//!
//! The price of an enhancement starts at the definition's base cost and
//! moves through a fixed sequence of modifiers: target doubling, lost
//! icon halving, level surcharge, existing-enhancement surcharge, and
//! the hex-division special rule. Every intermediate value is whole
//! gold.
//!
//! Overrides resolve through explicit three-tier chains (manual value,
//! else card/slot default, else global default); each chain is its own
//! function so it can be tested in isolation.

use crate::card::{Card, CardLevel, EnhancementSlot};
use crate::catalog::EnhancementCatalog;

/// Gold added per card level above 1.
pub const LEVEL_SURCHARGE: u32 = 25;

/// Gold added per enhancement already on the slot.
pub const EXISTING_SURCHARGE: u32 = 75;

/// Per-calculation override and modifier inputs.
///
/// `None` overrides fall through to the card/slot defaults. The caller
/// (typically UI state) owns these and re-invokes the calculator on
/// every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostModifiers {
    /// Overrides the card's printed level.
    pub level_override: Option<CardLevel>,

    /// Overrides the slot's printed target count.
    pub targets_override: Option<u32>,

    /// Overrides the slot's printed lost icon.
    pub lost_icon_override: Option<bool>,

    /// Enhancements already on the slot.
    pub existing_enhancements: u32,

    /// Hex-count control value, consulted by the hex-division rule.
    pub hex_count: u32,
}

impl Default for CostModifiers {
    fn default() -> Self {
        Self {
            level_override: None,
            targets_override: None,
            lost_icon_override: None,
            existing_enhancements: 0,
            hex_count: 1,
        }
    }
}

impl CostModifiers {
    /// Create modifiers with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the card level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: CardLevel) -> Self {
        self.level_override = Some(level);
        self
    }

    /// Override the target count (builder pattern).
    #[must_use]
    pub fn with_targets(mut self, targets: u32) -> Self {
        self.targets_override = Some(targets);
        self
    }

    /// Override the lost icon (builder pattern).
    #[must_use]
    pub fn with_lost_icon(mut self, lost: bool) -> Self {
        self.lost_icon_override = Some(lost);
        self
    }

    /// Set the count of enhancements already on the slot (builder
    /// pattern).
    #[must_use]
    pub fn with_existing(mut self, count: u32) -> Self {
        self.existing_enhancements = count;
        self
    }

    /// Set the hex-count control value (builder pattern).
    #[must_use]
    pub fn with_hexes(mut self, hexes: u32) -> Self {
        self.hex_count = hexes;
        self
    }
}

/// Effective card level: override, else printed level, else 1.
///
/// "X" cards price as level 1.
#[must_use]
pub fn effective_level(modifiers: &CostModifiers, card: Option<&Card>) -> u32 {
    modifiers
        .level_override
        .or_else(|| card.map(|c| c.level))
        .map_or(1, CardLevel::effective)
}

/// Effective target count: override, else printed count, else 1; never
/// below 1.
#[must_use]
pub fn effective_targets(modifiers: &CostModifiers, slot: &EnhancementSlot) -> u32 {
    modifiers
        .targets_override
        .or(slot.targets)
        .unwrap_or(1)
        .max(1)
}

/// Effective lost icon: override, else the printed flag.
#[must_use]
pub fn effective_lost_icon(modifiers: &CostModifiers, slot: &EnhancementSlot) -> bool {
    modifiers.lost_icon_override.unwrap_or(slot.has_lost_icon)
}

/// Hex count for the plain-cost path: the card's stored count when
/// present and nonzero, else the manual control value.
#[must_use]
pub fn effective_hexes(modifiers: &CostModifiers, card: Option<&Card>) -> u32 {
    card.and_then(|c| c.hex_count)
        .filter(|&hexes| hexes > 0)
        .unwrap_or(modifiers.hex_count)
}

/// Final gold cost for placing `key` on `slot`.
///
/// Total over all inputs: an unknown key prices at 0 rather than
/// failing.
///
/// ## Example
///
/// ```
/// use gloom_enhance::card::{Card, CardLevel, EnhancementSlot, Region};
/// use gloom_enhance::catalog::{standard_catalog, MarkKind};
/// use gloom_enhance::rules::{enhancement_cost, CostModifiers};
///
/// let catalog = standard_catalog();
/// let card = Card::new("Test", CardLevel::Numbered(3));
/// let slot = EnhancementSlot::new("top-1", MarkKind::Square, Region::Top)
///     .with_ability("attack")
///     .with_targets(2)
///     .lost();
///
/// let modifiers = CostModifiers::new().with_existing(1);
/// let cost = enhancement_cost(&catalog, "attack1", &slot, Some(&card), &modifiers);
/// assert_eq!(cost, 175);
/// ```
#[must_use]
pub fn enhancement_cost(
    catalog: &EnhancementCatalog,
    key: &str,
    slot: &EnhancementSlot,
    card: Option<&Card>,
    modifiers: &CostModifiers,
) -> u32 {
    let Some(def) = catalog.get(key) else {
        return 0;
    };

    let mut cost = def.base_cost;

    if effective_targets(modifiers, slot) > 1 {
        cost *= 2;
    }

    if effective_lost_icon(modifiers, slot) {
        cost /= 2;
    }

    let level = effective_level(modifiers, card);
    if level > 1 {
        cost += (level - 1) * LEVEL_SURCHARGE;
    }

    cost += modifiers.existing_enhancements * EXISTING_SURCHARGE;

    if def.is_hex_divided() {
        let hexes = effective_hexes(modifiers, card);
        if hexes > 0 {
            cost = cost.div_ceil(hexes);
        }
    }

    cost
}
