//! Step-by-step cost breakdown for display.
//!
//! Mirrors the plain calculator, emitting one step per modifier so the
//! UI can show how a price came to be. The hex-division step is the one
//! deliberate divergence: this path divides by the manual hex-count
//! control whenever it exceeds 1, even when the card stores its own
//! count, while the plain path resolves the card's count first.

use serde::{Deserialize, Serialize};

use crate::card::{Card, EnhancementSlot};
use crate::catalog::EnhancementCatalog;

use super::cost::{
    effective_level, effective_lost_icon, effective_targets, CostModifiers, EXISTING_SURCHARGE,
    LEVEL_SURCHARGE,
};

/// Direction a step moved the running cost; drives display styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepEffect {
    /// Starting value.
    Neutral,
    /// The step raised the price.
    Surcharge,
    /// The step lowered the price.
    Discount,
}

/// One line of the cost calculation, as shown in the breakdown panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostStep {
    /// What the step accounts for ("Base cost", "Lost icon", ...).
    pub description: String,

    /// The operation applied, in display form ("x2", "+50", "100 ÷ 3").
    pub operation: String,

    /// Running cost after the step, in gold.
    pub result: u32,

    /// Direction the step moved the cost.
    pub effect: StepEffect,
}

/// Step-by-step variant of [`enhancement_cost`].
///
/// Returns an empty sequence for unknown keys. For enhancements without
/// the hex-division rule, the last step's `result` equals the plain
/// calculator's output for the same inputs.
///
/// [`enhancement_cost`]: crate::rules::enhancement_cost
#[must_use]
pub fn cost_breakdown(
    catalog: &EnhancementCatalog,
    key: &str,
    slot: &EnhancementSlot,
    card: Option<&Card>,
    modifiers: &CostModifiers,
) -> Vec<CostStep> {
    let Some(def) = catalog.get(key) else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    let mut cost = def.base_cost;

    steps.push(CostStep {
        description: "Base cost".to_string(),
        operation: format!("{}g", def.base_cost),
        result: cost,
        effect: StepEffect::Neutral,
    });

    let targets = effective_targets(modifiers, slot);
    if targets > 1 {
        cost *= 2;
        steps.push(CostStep {
            description: format!("{targets} targets"),
            operation: "x2".to_string(),
            result: cost,
            effect: StepEffect::Surcharge,
        });
    }

    if effective_lost_icon(modifiers, slot) {
        cost /= 2;
        steps.push(CostStep {
            description: "Lost icon".to_string(),
            operation: "÷ 2".to_string(),
            result: cost,
            effect: StepEffect::Discount,
        });
    }

    let level = effective_level(modifiers, card);
    if level > 1 {
        let bonus = (level - 1) * LEVEL_SURCHARGE;
        cost += bonus;
        steps.push(CostStep {
            description: format!("Level {level}"),
            operation: format!("+{bonus}"),
            result: cost,
            effect: StepEffect::Surcharge,
        });
    }

    // Reported even at zero so the panel always carries the surcharge
    // line.
    let existing_bonus = modifiers.existing_enhancements * EXISTING_SURCHARGE;
    cost += existing_bonus;
    steps.push(CostStep {
        description: format!("{} existing", modifiers.existing_enhancements),
        operation: format!("+{existing_bonus}"),
        result: cost,
        effect: StepEffect::Surcharge,
    });

    if def.is_hex_divided() && modifiers.hex_count > 1 {
        let divided = cost.div_ceil(modifiers.hex_count);
        steps.push(CostStep {
            description: format!("Divided by {} hexes", modifiers.hex_count),
            operation: format!("{cost} ÷ {}", modifiers.hex_count),
            result: divided,
            effect: StepEffect::Discount,
        });
    }

    steps
}
