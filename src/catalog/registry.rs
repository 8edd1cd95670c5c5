//! Enhancement catalog - ordered definition lookup.
//!
//! The `EnhancementCatalog` stores every enhancement definition for the
//! game. Lookup is by key; iteration preserves insertion order, which
//! the eligibility filter (and through it the UI) relies on for stable
//! rendering.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::enhancement::{EnhancementDef, EnhancementKey};

/// Errors rejected at catalog load time.
///
/// The query path never fails; everything that can go wrong with the
/// reference tables is caught here, once, at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The JSON text did not parse into catalog records.
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share a key.
    #[error("duplicate catalog entry `{0}`")]
    Duplicate(String),

    /// A definition lists no compatible mark types.
    #[error("enhancement `{0}` lists no compatible mark types")]
    NoCompatibleMarks(EnhancementKey),
}

/// Ordered registry of enhancement definitions.
///
/// ## Example
///
/// ```
/// use gloom_enhance::catalog::{EnhancementCatalog, EnhancementDef, MarkKind};
///
/// let mut catalog = EnhancementCatalog::new();
/// catalog.register(
///     "move1",
///     EnhancementDef::new("Move +1", 30, [MarkKind::Square]).requires_ability("move"),
/// );
///
/// let found = catalog.get("move1").unwrap();
/// assert_eq!(found.name, "Move +1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnhancementCatalog {
    entries: Vec<(EnhancementKey, EnhancementDef)>,
    index: FxHashMap<EnhancementKey, usize>,
}

impl EnhancementCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Panics if the key is already registered.
    pub fn register(&mut self, key: impl Into<EnhancementKey>, def: EnhancementDef) {
        let key = key.into();
        if self.index.contains_key(key.as_str()) {
            panic!("enhancement `{key}` already registered");
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, def));
    }

    /// Register a definition (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<EnhancementKey>, def: EnhancementDef) -> Self {
        self.register(key, def);
        self
    }

    /// Get a definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnhancementDef> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&EnhancementKey, &EnhancementDef)> {
        self.entries.iter().map(|(key, def)| (key, def))
    }

    /// Build a catalog from entries in order, rejecting duplicate keys.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (EnhancementKey, EnhancementDef)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (key, def) in entries {
            if catalog.index.contains_key(key.as_str()) {
                return Err(CatalogError::Duplicate(key.to_string()));
            }
            catalog.index.insert(key.clone(), catalog.entries.len());
            catalog.entries.push((key, def));
        }
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON object of key to definition.
    ///
    /// Entry order in the document becomes catalog order. Duplicate keys
    /// and definitions with an empty compatible-mark set are rejected.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: RawEntries = serde_json::from_str(text)?;
        let catalog = Self::from_entries(raw.0)?;
        catalog.validate()?;
        tracing::debug!(entries = catalog.len(), "loaded enhancement catalog");
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (key, def) in self.iter() {
            if def.marks.is_empty() {
                return Err(CatalogError::NoCompatibleMarks(key.clone()));
            }
        }
        Ok(())
    }
}

/// Entries of a JSON catalog, in document order.
struct RawEntries(Vec<(EnhancementKey, EnhancementDef)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of enhancement key to definition")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<EnhancementKey, EnhancementDef>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}
