//! # gloom-enhance
//!
//! Eligibility filtering and gold-cost calculation for ability-card
//! enhancements in a Gloomhaven-style cooperative board game.
//!
//! ## Design Principles
//!
//! 1. **Pure queries**: the two core operations - which enhancements fit
//!    a slot, and what one costs - are side-effect-free functions over
//!    immutable inputs. Callers own all selection state and re-invoke
//!    on every change.
//!
//! 2. **Typed reference data**: the enhancement catalog and mark-type
//!    table are closed record types, validated once at load. Malformed
//!    tables are rejected at startup, never at query time.
//!
//! 3. **Total over well-formed input**: unknown keys price at 0 and
//!    filter to nothing; malformed level values price as level 1. The
//!    query path never fails.
//!
//! ## Modules
//!
//! - `catalog`: enhancement definitions, mark types, the ordered
//!   registry, JSON loading, and the built-in standard tables
//! - `card`: ability cards and their enhancement slots
//! - `rules`: the eligibility filter, the cost calculator and its
//!   breakdown variant, and ledger records

pub mod card;
pub mod catalog;
pub mod rules;

// Re-export commonly used types
pub use crate::card::{Card, CardLevel, EnhancementSlot, Region};

pub use crate::catalog::{
    standard_catalog, standard_marks, AbilityTag, CatalogError, EnhancementCatalog,
    EnhancementDef, EnhancementKey, MarkKind, MarkTable, MarkType, SpecialRule,
};

pub use crate::rules::{
    cost_breakdown, eligible_enhancements, enhancement_cost, modifier_summary, CostModifiers,
    CostStep, LedgerEntry, StepEffect, DEFAULT_SUMMON_KEYS, EXISTING_SURCHARGE, JUMP_KEY,
    LEVEL_SURCHARGE,
};
