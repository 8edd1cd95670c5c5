//! Enhancement eligibility filter.
//!
//! Decides which catalog entries may legally be placed on a slot. Pure
//! and total: any well-formed slot yields a (possibly empty) result, in
//! catalog order.

use crate::card::EnhancementSlot;
use crate::catalog::{EnhancementCatalog, EnhancementDef, EnhancementKey, MarkKind};

/// Key with bespoke eligibility: square mark, move ability, not a summon.
pub const JUMP_KEY: &str = "jump";

/// Keys a summon slot falls back to when it has no explicit allow-list.
/// These four never appear on non-summon slots.
pub const DEFAULT_SUMMON_KEYS: [&str; 4] =
    ["summonHp1", "summonMove1", "summonAttack1", "summonRange1"];

const MOVE_TAG: &str = "move";

/// Filter the catalog down to the enhancements usable on `slot`.
///
/// Entries come back in catalog order; the UI renders them as-is.
///
/// ## Example
///
/// ```
/// use gloom_enhance::card::{EnhancementSlot, Region};
/// use gloom_enhance::catalog::{standard_catalog, MarkKind};
/// use gloom_enhance::rules::eligible_enhancements;
///
/// let catalog = standard_catalog();
/// let slot = EnhancementSlot::new("top-1", MarkKind::Square, Region::Top)
///     .with_ability("attack");
///
/// let keys: Vec<_> = eligible_enhancements(&catalog, &slot)
///     .into_iter()
///     .map(|(key, _)| key.as_str())
///     .collect();
/// assert!(keys.contains(&"attack1"));
/// assert!(!keys.contains(&"move1"));
/// ```
#[must_use]
pub fn eligible_enhancements<'a>(
    catalog: &'a EnhancementCatalog,
    slot: &EnhancementSlot,
) -> Vec<(&'a EnhancementKey, &'a EnhancementDef)> {
    catalog
        .iter()
        .filter(|(key, def)| is_eligible(key, def, slot))
        .collect()
}

fn is_eligible(key: &EnhancementKey, def: &EnhancementDef, slot: &EnhancementSlot) -> bool {
    // Jump ignores the mark and ability tables entirely: square mark,
    // move ability, not a summon.
    if key.as_str() == JUMP_KEY {
        return slot.mark == MarkKind::Square && slot.has_ability(MOVE_TAG) && !slot.is_summon;
    }

    if !def.allows_mark(slot.mark) {
        return false;
    }

    if slot.is_summon {
        // An explicit allow-list decides outright; otherwise only the
        // default four qualify. Terminal either way.
        return match &slot.allowed_summon_enhancements {
            Some(allowed) => allowed.iter().any(|k| k == key),
            None => DEFAULT_SUMMON_KEYS.contains(&key.as_str()),
        };
    }

    if DEFAULT_SUMMON_KEYS.contains(&key.as_str()) {
        return false;
    }

    if !def.required_ability_types.is_empty()
        && !def
            .required_ability_types
            .iter()
            .any(|tag| slot.abilities.contains(tag))
    {
        return false;
    }

    if !def.required_ability_properties.is_empty() {
        if slot.abilities.is_empty() {
            return false;
        }
        if !def
            .required_ability_properties
            .iter()
            .any(|tag| slot.abilities.contains(tag))
        {
            return false;
        }
    }

    true
}
