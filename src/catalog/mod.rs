//! Reference catalog: enhancement definitions and mark types.
//!
//! Loaded once at process start and read-only afterwards. The two query
//! operations in `rules` never mutate it, so any number of callers can
//! share one catalog with no coordination.

mod enhancement;
mod marks;
mod registry;
mod standard;

pub use enhancement::{AbilityTag, EnhancementDef, EnhancementKey, SpecialRule};
pub use marks::{MarkKind, MarkTable, MarkType};
pub use registry::{CatalogError, EnhancementCatalog};
pub use standard::{standard_catalog, standard_marks};
