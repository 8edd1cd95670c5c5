//! Catalog loading and validation.
//!
//! The reference tables are the one fallible surface in the crate;
//! everything that can go wrong must be rejected here, at load, so the
//! query path can stay total.

use gloom_enhance::card::Card;
use gloom_enhance::catalog::{CatalogError, EnhancementCatalog, MarkKind, MarkTable};

const ENHANCEMENTS_JSON: &str = r#"{
    "move1": {
        "name": "Move +1",
        "baseCost": 30,
        "marks": ["square"],
        "requiredAbilityTypes": ["move"]
    },
    "attack1": {
        "name": "Attack +1",
        "baseCost": 50,
        "marks": ["square"],
        "requiredAbilityTypes": ["attack"],
        "icon": "attack.svg"
    },
    "areaHex": {
        "name": "Attack Hex",
        "baseCost": 200,
        "marks": ["square"],
        "special": "dividedByHexes",
        "requiredAbilityTypes": ["attack"]
    },
    "anyElement": {
        "name": "Any Element",
        "baseCost": 150,
        "marks": ["circle"]
    }
}"#;

const MARKS_JSON: &str = r#"{
    "circle": {
        "name": "Circle",
        "restrictions": ["Element infusions only"]
    },
    "square": {
        "name": "Square",
        "restrictions": ["Numeric ability bumps"]
    },
    "diamond": {
        "name": "Diamond",
        "restrictions": ["Negative conditions on attack abilities"]
    },
    "diamond-plus": {
        "name": "Diamond Plus",
        "restrictions": ["Positive conditions on ally abilities"]
    }
}"#;

#[test]
fn enhancement_table_loads_in_document_order() {
    let catalog = EnhancementCatalog::from_json(ENHANCEMENTS_JSON).unwrap();

    assert_eq!(catalog.len(), 4);
    let keys: Vec<_> = catalog.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["move1", "attack1", "areaHex", "anyElement"]);

    let hex = catalog.get("areaHex").unwrap();
    assert!(hex.is_hex_divided());
    assert_eq!(hex.base_cost, 200);

    // The icon field belongs to the asset pipeline and is ignored.
    assert_eq!(catalog.get("attack1").unwrap().name, "Attack +1");
}

#[test]
fn mark_table_loads_every_kind() {
    let table = MarkTable::from_json(MARKS_JSON).unwrap();

    assert_eq!(table.len(), 4);
    for kind in MarkKind::ALL {
        assert!(table.get(kind).is_some(), "missing {kind}");
    }
    assert_eq!(
        table.get(MarkKind::DiamondPlus).unwrap().name,
        "Diamond Plus"
    );
}

#[test]
fn duplicate_enhancement_keys_fail_to_load() {
    let json = r#"{
        "move1": { "name": "Move +1", "baseCost": 30, "marks": ["square"] },
        "move1": { "name": "Move +1 again", "baseCost": 30, "marks": ["square"] }
    }"#;

    let err = EnhancementCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate(key) if key == "move1"));
}

#[test]
fn empty_mark_set_fails_to_load() {
    let json = r#"{
        "orphan": { "name": "Orphan", "baseCost": 10, "marks": [] }
    }"#;

    let err = EnhancementCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::NoCompatibleMarks(key) if key.as_str() == "orphan"));
}

#[test]
fn malformed_json_reports_a_parse_error() {
    let err = EnhancementCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));

    let err = MarkTable::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn card_json_round_trips_through_the_loader_shape() {
    let json = r#"{
        "name": "Impaling Eruption",
        "level": 3,
        "image": "cards/impaling-eruption.png",
        "hexCount": 4,
        "enhancementSpots": [
            {
                "id": "top-1",
                "type": "square",
                "description": "Attack 3, Range 4",
                "region": "top",
                "abilities": ["attack", "range"]
            },
            {
                "id": "bottom-1",
                "type": "circle",
                "description": "Move 4",
                "region": "bottom",
                "abilities": ["move"]
            }
        ]
    }"#;

    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.hex_count, Some(4));
    assert_eq!(card.slots.len(), 2);
    assert_eq!(card.slot("top-1").unwrap().mark, MarkKind::Square);

    let back = serde_json::to_string(&card).unwrap();
    let again: Card = serde_json::from_str(&back).unwrap();
    assert_eq!(card, again);
}
