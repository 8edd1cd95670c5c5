//! Ledger records for confirmed enhancements.
//!
//! When the user commits an enhancement, the host appends one of these
//! to its running list. The record captures the price and the
//! human-readable modifier lines that produced it; storage and
//! persistence of the list stay with the host.

use serde::{Deserialize, Serialize};

use crate::card::{Card, EnhancementSlot};
use crate::catalog::{EnhancementCatalog, EnhancementKey, MarkKind};

use super::cost::{
    effective_level, effective_lost_icon, effective_targets, enhancement_cost, CostModifiers,
    EXISTING_SURCHARGE, LEVEL_SURCHARGE,
};

/// One confirmed enhancement, ready for the host's running list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Name of the enhanced card.
    pub card_name: String,

    /// Slot identifier on that card.
    pub spot_id: String,

    /// Slot description, for display.
    pub spot_description: String,

    /// The slot's printed mark.
    pub mark_type: MarkKind,

    /// The chosen enhancement.
    pub enhancement: EnhancementKey,

    /// Final price in gold.
    pub cost: u32,

    /// Human-readable modifier lines that shaped the price.
    pub modifiers: Vec<String>,
}

impl LedgerEntry {
    /// Build the record for a confirmed enhancement on `slot` of `card`.
    #[must_use]
    pub fn record(
        catalog: &EnhancementCatalog,
        key: &str,
        slot: &EnhancementSlot,
        card: &Card,
        modifiers: &CostModifiers,
    ) -> Self {
        Self {
            card_name: card.name.clone(),
            spot_id: slot.id.clone(),
            spot_description: slot.description.clone(),
            mark_type: slot.mark,
            enhancement: EnhancementKey::new(key),
            cost: enhancement_cost(catalog, key, slot, Some(card), modifiers),
            modifiers: modifier_summary(catalog, key, slot, Some(card), modifiers),
        }
    }
}

/// Human-readable list of the modifiers that changed the price.
///
/// Lines appear in the order the calculator applies them; a modifier
/// that did not fire produces no line.
#[must_use]
pub fn modifier_summary(
    catalog: &EnhancementCatalog,
    key: &str,
    slot: &EnhancementSlot,
    card: Option<&Card>,
    modifiers: &CostModifiers,
) -> Vec<String> {
    let mut lines = Vec::new();

    let targets = effective_targets(modifiers, slot);
    if targets > 1 {
        lines.push(format!("{targets} Targets (×2)"));
    }

    if effective_lost_icon(modifiers, slot) {
        lines.push("Lost Icon (÷2)".to_string());
    }

    let level = effective_level(modifiers, card);
    if level > 1 {
        lines.push(format!("Level {level} (+{})", (level - 1) * LEVEL_SURCHARGE));
    }

    let existing = modifiers.existing_enhancements;
    if existing > 0 {
        lines.push(format!("{existing} Existing (+{})", existing * EXISTING_SURCHARGE));
    }

    let hex_divided = catalog.get(key).is_some_and(|def| def.is_hex_divided());
    if hex_divided && modifiers.hex_count > 1 {
        lines.push(format!("÷{} hexes", modifiers.hex_count));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardLevel, Region};
    use crate::catalog::standard_catalog;

    fn slot() -> EnhancementSlot {
        EnhancementSlot::new("top-1", MarkKind::Square, Region::Top)
            .described("Attack 3")
            .with_ability("attack")
    }

    #[test]
    fn test_summary_empty_without_modifiers() {
        let catalog = standard_catalog();
        let lines = modifier_summary(&catalog, "attack1", &slot(), None, &CostModifiers::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_summary_lists_fired_modifiers_in_order() {
        let catalog = standard_catalog();
        let card = Card::new("Test", CardLevel::Numbered(3));
        let slot = slot().with_targets(2).lost();
        let modifiers = CostModifiers::new().with_existing(1);

        let lines = modifier_summary(&catalog, "attack1", &slot, Some(&card), &modifiers);
        assert_eq!(
            lines,
            vec![
                "2 Targets (×2)".to_string(),
                "Lost Icon (÷2)".to_string(),
                "Level 3 (+50)".to_string(),
                "1 Existing (+75)".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_hex_line_only_for_hex_divided_keys() {
        let catalog = standard_catalog();
        let modifiers = CostModifiers::new().with_hexes(3);

        let hex_lines = modifier_summary(&catalog, "areaHex", &slot(), None, &modifiers);
        assert_eq!(hex_lines, vec!["÷3 hexes".to_string()]);

        let plain_lines = modifier_summary(&catalog, "attack1", &slot(), None, &modifiers);
        assert!(plain_lines.is_empty());
    }

    #[test]
    fn test_ledger_record() {
        let catalog = standard_catalog();
        let card = Card::new("Skewer", CardLevel::Numbered(3));
        let slot = slot().with_targets(2).lost();
        let modifiers = CostModifiers::new().with_existing(1);

        let entry = LedgerEntry::record(&catalog, "attack1", &slot, &card, &modifiers);
        assert_eq!(entry.card_name, "Skewer");
        assert_eq!(entry.spot_id, "top-1");
        assert_eq!(entry.spot_description, "Attack 3");
        assert_eq!(entry.mark_type, MarkKind::Square);
        assert_eq!(entry.enhancement.as_str(), "attack1");
        assert_eq!(entry.cost, 175);
        assert_eq!(entry.modifiers.len(), 4);
    }

    #[test]
    fn test_ledger_record_serde_round_trip() {
        let catalog = standard_catalog();
        let card = Card::new("Skewer", CardLevel::Numbered(1));
        let entry = LedgerEntry::record(&catalog, "attack1", &slot(), &card, &CostModifiers::new());

        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
