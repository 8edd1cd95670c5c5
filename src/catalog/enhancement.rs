//! Enhancement definitions - static sticker data.
//!
//! `EnhancementDef` holds the immutable properties of one enhancement
//! sticker type: display name, base gold cost, the marks it may be
//! placed on, and the ability tags the target slot must carry.
//!
//! Per-calculation inputs (level overrides, existing-enhancement counts)
//! are not part of the definition; the caller supplies them in
//! `CostModifiers`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::marks::MarkKind;

/// Stable identifier for an enhancement definition (e.g. `"attack1"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnhancementKey(pub String);

impl EnhancementKey {
    /// Create a new enhancement key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EnhancementKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EnhancementKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for EnhancementKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnhancementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag naming one ability line trait ("move", "attack", "range", ...).
///
/// A slot's tag set merges ability types and ability properties; the
/// engine only ever intersects these sets, so one tag type covers both.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityTag(pub String);

impl AbilityTag {
    /// Create a new ability tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AbilityTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AbilityTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for AbilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Special pricing rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialRule {
    /// Price is ceiling-divided by the number of hexes the ability
    /// already affects.
    #[serde(rename = "dividedByHexes")]
    DividedByHexes,
}

/// Static enhancement definition.
///
/// ## Example
///
/// ```
/// use gloom_enhance::catalog::{EnhancementDef, MarkKind};
///
/// let attack = EnhancementDef::new("Attack +1", 50, [MarkKind::Square])
///     .requires_ability("attack");
///
/// assert_eq!(attack.base_cost, 50);
/// assert!(attack.allows_mark(MarkKind::Square));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementDef {
    /// Display name.
    pub name: String,

    /// Cost before any modifier, in gold.
    pub base_cost: u32,

    /// Mark types this sticker may be placed on.
    pub marks: SmallVec<[MarkKind; 4]>,

    /// Special pricing rule, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialRule>,

    /// The slot must carry at least one of these ability-type tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_ability_types: Vec<AbilityTag>,

    /// The slot must carry at least one of these ability-property tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_ability_properties: Vec<AbilityTag>,
}

impl EnhancementDef {
    /// Create a new definition.
    pub fn new(
        name: impl Into<String>,
        base_cost: u32,
        marks: impl IntoIterator<Item = MarkKind>,
    ) -> Self {
        Self {
            name: name.into(),
            base_cost,
            marks: marks.into_iter().collect(),
            special: None,
            required_ability_types: Vec::new(),
            required_ability_properties: Vec::new(),
        }
    }

    /// Attach a special pricing rule (builder pattern).
    #[must_use]
    pub fn with_special(mut self, special: SpecialRule) -> Self {
        self.special = Some(special);
        self
    }

    /// Require an ability-type tag on the slot (builder pattern).
    #[must_use]
    pub fn requires_ability(mut self, tag: impl Into<AbilityTag>) -> Self {
        self.required_ability_types.push(tag.into());
        self
    }

    /// Require an ability-property tag on the slot (builder pattern).
    #[must_use]
    pub fn requires_property(mut self, tag: impl Into<AbilityTag>) -> Self {
        self.required_ability_properties.push(tag.into());
        self
    }

    /// Check whether this sticker may be placed on `mark`.
    #[must_use]
    pub fn allows_mark(&self, mark: MarkKind) -> bool {
        self.marks.contains(&mark)
    }

    /// Check whether the hex-division pricing rule applies.
    #[must_use]
    pub fn is_hex_divided(&self) -> bool {
        self.special == Some(SpecialRule::DividedByHexes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhancement_key() {
        let key1 = EnhancementKey::new("attack1");
        let key2: EnhancementKey = "attack1".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.as_str(), "attack1");
        assert_eq!(format!("{key1}"), "attack1");
    }

    #[test]
    fn test_definition_builder() {
        let def = EnhancementDef::new("Attack Hex", 200, [MarkKind::Square])
            .with_special(SpecialRule::DividedByHexes)
            .requires_ability("attack");

        assert_eq!(def.name, "Attack Hex");
        assert_eq!(def.base_cost, 200);
        assert!(def.allows_mark(MarkKind::Square));
        assert!(!def.allows_mark(MarkKind::Circle));
        assert!(def.is_hex_divided());
        assert_eq!(def.required_ability_types, vec![AbilityTag::new("attack")]);
        assert!(def.required_ability_properties.is_empty());
    }

    #[test]
    fn test_definition_from_json() {
        let json = r#"{
            "name": "Range +1",
            "baseCost": 30,
            "marks": ["square"],
            "requiredAbilityProperties": ["range"],
            "icon": "range.svg"
        }"#;

        let def: EnhancementDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "Range +1");
        assert_eq!(def.base_cost, 30);
        assert_eq!(def.marks.as_slice(), [MarkKind::Square]);
        assert!(def.special.is_none());
        assert_eq!(
            def.required_ability_properties,
            vec![AbilityTag::new("range")]
        );
    }

    #[test]
    fn test_special_rule_wire_form() {
        let json = r#"{ "name": "Attack Hex", "baseCost": 200, "marks": ["square"], "special": "dividedByHexes" }"#;
        let def: EnhancementDef = serde_json::from_str(json).unwrap();
        assert!(def.is_hex_divided());

        let back = serde_json::to_string(&def).unwrap();
        assert!(back.contains("dividedByHexes"));
    }

    #[test]
    fn test_definition_serde_round_trip() {
        let def = EnhancementDef::new("Poison", 75, [MarkKind::Diamond]).requires_ability("attack");

        let json = serde_json::to_string(&def).unwrap();
        let back: EnhancementDef = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
