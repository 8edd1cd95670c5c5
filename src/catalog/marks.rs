//! Mark types - the shapes printed at enhancement slots.
//!
//! A slot's mark restricts which stickers are physically valid there.
//! The set of shapes is closed; the restriction text in `MarkType` is
//! display metadata only and carries no rules weight.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::registry::CatalogError;

/// The closed set of shapes a slot can be printed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkKind {
    Circle,
    Square,
    Diamond,
    DiamondPlus,
}

impl MarkKind {
    /// All mark kinds, in display order.
    pub const ALL: [MarkKind; 4] = [
        MarkKind::Circle,
        MarkKind::Square,
        MarkKind::Diamond,
        MarkKind::DiamondPlus,
    ];

    /// The wire/key form of the mark ("circle", "diamond-plus", ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MarkKind::Circle => "circle",
            MarkKind::Square => "square",
            MarkKind::Diamond => "diamond",
            MarkKind::DiamondPlus => "diamond-plus",
        }
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one mark type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkType {
    /// Human-readable name.
    pub name: String,

    /// Restriction text shown to players.
    #[serde(default)]
    pub restrictions: Vec<String>,
}

impl MarkType {
    /// Create mark metadata with no restriction text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            restrictions: Vec::new(),
        }
    }

    /// Add a restriction line (builder pattern).
    #[must_use]
    pub fn with_restriction(mut self, line: impl Into<String>) -> Self {
        self.restrictions.push(line.into());
        self
    }
}

/// Table of mark metadata, kept in definition order.
#[derive(Clone, Debug, Default)]
pub struct MarkTable {
    entries: Vec<(MarkKind, MarkType)>,
}

impl MarkTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for a mark kind.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, kind: MarkKind, mark: MarkType) {
        if self.get(kind).is_some() {
            panic!("mark type `{kind}` already registered");
        }
        self.entries.push((kind, mark));
    }

    /// Register a mark kind (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: MarkKind, mark: MarkType) -> Self {
        self.register(kind, mark);
        self
    }

    /// Get the metadata for a mark kind.
    #[must_use]
    pub fn get(&self, kind: MarkKind) -> Option<&MarkType> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, mark)| mark)
    }

    /// Number of registered mark kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkKind, &MarkType)> {
        self.entries.iter().map(|(kind, mark)| (*kind, mark))
    }

    /// Load a mark-type table from a JSON object of kind to metadata.
    ///
    /// Duplicate kinds are rejected.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: RawMarkEntries = serde_json::from_str(text)?;

        let mut table = Self::new();
        for (kind, mark) in raw.0 {
            if table.get(kind).is_some() {
                return Err(CatalogError::Duplicate(kind.to_string()));
            }
            table.entries.push((kind, mark));
        }

        tracing::debug!(entries = table.len(), "loaded mark-type table");
        Ok(table)
    }
}

/// Entries of a JSON mark table, in document order.
struct RawMarkEntries(Vec<(MarkKind, MarkType)>);

impl<'de> Deserialize<'de> for RawMarkEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RawMarkEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of mark kind to mark metadata")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<MarkKind, MarkType>()? {
                    entries.push(entry);
                }
                Ok(RawMarkEntries(entries))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_kind_wire_form() {
        assert_eq!(MarkKind::Circle.as_str(), "circle");
        assert_eq!(MarkKind::DiamondPlus.as_str(), "diamond-plus");
        assert_eq!(format!("{}", MarkKind::Square), "square");
    }

    #[test]
    fn test_mark_kind_serde() {
        let json = serde_json::to_string(&MarkKind::DiamondPlus).unwrap();
        assert_eq!(json, "\"diamond-plus\"");

        let kind: MarkKind = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(kind, MarkKind::Circle);
    }

    #[test]
    fn test_mark_table_register_and_get() {
        let table = MarkTable::new()
            .with(MarkKind::Square, MarkType::new("Square"))
            .with(
                MarkKind::Circle,
                MarkType::new("Circle").with_restriction("Element infusions only"),
            );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(MarkKind::Square).unwrap().name, "Square");
        assert_eq!(
            table.get(MarkKind::Circle).unwrap().restrictions,
            vec!["Element infusions only".to_string()]
        );
        assert!(table.get(MarkKind::Diamond).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_mark_panics() {
        let mut table = MarkTable::new();
        table.register(MarkKind::Square, MarkType::new("Square"));
        table.register(MarkKind::Square, MarkType::new("Square again"));
    }

    #[test]
    fn test_mark_table_from_json_preserves_order() {
        let json = r#"{
            "square": { "name": "Square", "restrictions": [] },
            "circle": { "name": "Circle", "restrictions": ["Element infusions only"] }
        }"#;

        let table = MarkTable::from_json(json).unwrap();
        let kinds: Vec<_> = table.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![MarkKind::Square, MarkKind::Circle]);
    }

    #[test]
    fn test_mark_table_from_json_rejects_duplicates() {
        let json = r#"{
            "square": { "name": "Square" },
            "square": { "name": "Square again" }
        }"#;

        let err = MarkTable::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(_)));
    }
}
