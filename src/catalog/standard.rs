//! Built-in reference tables.
//!
//! The standard enhancement catalog and mark-type table, matching the
//! printed game rules. Hosts that ship their own JSON tables can load
//! those instead; the query layer does not care where the tables came
//! from.

use super::enhancement::{EnhancementDef, SpecialRule};
use super::marks::{MarkKind, MarkTable, MarkType};
use super::registry::EnhancementCatalog;

/// The standard enhancement catalog, in rulebook order.
#[must_use]
pub fn standard_catalog() -> EnhancementCatalog {
    let mut catalog = EnhancementCatalog::new();

    // Square marks: numeric bumps on the ability line.
    catalog.register(
        "move1",
        EnhancementDef::new("Move +1", 30, [MarkKind::Square]).requires_ability("move"),
    );
    catalog.register(
        "attack1",
        EnhancementDef::new("Attack +1", 50, [MarkKind::Square]).requires_ability("attack"),
    );
    catalog.register(
        "range1",
        EnhancementDef::new("Range +1", 30, [MarkKind::Square]).requires_property("range"),
    );
    catalog.register(
        "target1",
        EnhancementDef::new("Target +1", 50, [MarkKind::Square]).requires_property("target"),
    );
    catalog.register(
        "shield1",
        EnhancementDef::new("Shield +1", 100, [MarkKind::Square]).requires_ability("shield"),
    );
    catalog.register(
        "retaliate1",
        EnhancementDef::new("Retaliate +1", 100, [MarkKind::Square]).requires_ability("retaliate"),
    );
    catalog.register(
        "pierce1",
        EnhancementDef::new("Pierce +1", 30, [MarkKind::Square]).requires_property("pierce"),
    );
    catalog.register(
        "heal1",
        EnhancementDef::new("Heal +1", 30, [MarkKind::Square]).requires_ability("heal"),
    );
    catalog.register(
        "push1",
        EnhancementDef::new("Push +1", 30, [MarkKind::Square]).requires_property("push"),
    );
    catalog.register(
        "pull1",
        EnhancementDef::new("Pull +1", 30, [MarkKind::Square]).requires_property("pull"),
    );

    // Jump has its own eligibility rule (square, move ability, not a
    // summon); the mark and ability fields here are informational.
    catalog.register(
        "jump",
        EnhancementDef::new("Jump", 50, [MarkKind::Square]).requires_ability("move"),
    );

    // Area-of-effect attacks: the price is spread across the hexes the
    // ability already covers.
    catalog.register(
        "areaHex",
        EnhancementDef::new("Attack Hex", 200, [MarkKind::Square])
            .with_special(SpecialRule::DividedByHexes)
            .requires_ability("attack"),
    );

    // Diamond marks: negative conditions on attack abilities.
    catalog.register(
        "poison",
        EnhancementDef::new("Poison", 75, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "wound",
        EnhancementDef::new("Wound", 75, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "muddle",
        EnhancementDef::new("Muddle", 50, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "immobilize",
        EnhancementDef::new("Immobilize", 100, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "disarm",
        EnhancementDef::new("Disarm", 150, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "curse",
        EnhancementDef::new("Curse", 75, [MarkKind::Diamond]).requires_ability("attack"),
    );
    catalog.register(
        "stun",
        EnhancementDef::new("Stun", 150, [MarkKind::Diamond]).requires_ability("attack"),
    );

    // Diamond-plus marks: positive conditions on ally abilities.
    catalog.register(
        "strengthen",
        EnhancementDef::new("Strengthen", 50, [MarkKind::DiamondPlus]).requires_ability("heal"),
    );
    catalog.register(
        "bless",
        EnhancementDef::new("Bless", 50, [MarkKind::DiamondPlus]).requires_ability("heal"),
    );

    // Circle marks: element infusions.
    catalog.register(
        "specificElement",
        EnhancementDef::new("Specific Element", 100, [MarkKind::Circle]),
    );
    catalog.register(
        "anyElement",
        EnhancementDef::new("Any Element", 150, [MarkKind::Circle]),
    );

    // Summon stat lines: the summon branch of the eligibility filter
    // decides these, so they list every mark.
    catalog.register(
        "summonHp1",
        EnhancementDef::new("Summon HP +1", 50, MarkKind::ALL),
    );
    catalog.register(
        "summonMove1",
        EnhancementDef::new("Summon Move +1", 100, MarkKind::ALL),
    );
    catalog.register(
        "summonAttack1",
        EnhancementDef::new("Summon Attack +1", 100, MarkKind::ALL),
    );
    catalog.register(
        "summonRange1",
        EnhancementDef::new("Summon Range +1", 50, MarkKind::ALL),
    );

    catalog
}

/// The standard mark-type table.
#[must_use]
pub fn standard_marks() -> MarkTable {
    MarkTable::new()
        .with(
            MarkKind::Circle,
            MarkType::new("Circle").with_restriction("Element infusions only"),
        )
        .with(
            MarkKind::Square,
            MarkType::new("Square")
                .with_restriction("Numeric ability bumps")
                .with_restriction("Jump, on non-summon move abilities only"),
        )
        .with(
            MarkKind::Diamond,
            MarkType::new("Diamond").with_restriction("Negative conditions on attack abilities"),
        )
        .with(
            MarkKind::DiamondPlus,
            MarkType::new("Diamond Plus").with_restriction("Positive conditions on ally abilities"),
        )
}
