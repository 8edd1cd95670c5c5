//! The two query operations: eligibility filtering and cost
//! calculation.
//!
//! Everything here is a pure function over the read-only catalog and
//! caller-supplied card/slot/modifier inputs. Nothing fails at query
//! time: unknown keys price at 0 and filter to nothing.

mod breakdown;
mod cost;
mod eligibility;
mod ledger;

pub use breakdown::{cost_breakdown, CostStep, StepEffect};
pub use cost::{
    effective_hexes, effective_level, effective_lost_icon, effective_targets, enhancement_cost,
    CostModifiers, EXISTING_SURCHARGE, LEVEL_SURCHARGE,
};
pub use eligibility::{eligible_enhancements, DEFAULT_SUMMON_KEYS, JUMP_KEY};
pub use ledger::{modifier_summary, LedgerEntry};
