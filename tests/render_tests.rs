//! Entity rendering tests.
//!
//! These tests check the full block for each entity kind:
//! - Header line with wiki link and kind-specific title
//! - Cost line for cards
//! - Keyword emphasis and symbol substitution in descriptions

use spire_scan::core::{Card, Cost, Entity, Event, Potion, Relic};
use spire_scan::render::{format_entity, render_description, replace_symbols};

fn lines(entity: &Entity) -> Vec<String> {
    format_entity(entity).lines().map(str::to_string).collect()
}

// =============================================================================
// Entity Blocks
// =============================================================================

/// The Bash example: cost line and Vulnerable emphasis.
#[test]
fn test_bash_block() {
    let bash: Entity = Card::new("Bash", "Deal 8 damage. Apply 2 Vulnerable.", "Attack", "Ironclad")
        .with_rarity("Common")
        .with_cost(Cost::Fixed(2))
        .into();

    let lines = lines(&bash);
    assert_eq!(lines[0], "[Bash](http://slay-the-spire.wikia.com/wiki/Bash) Ironclad Common Attack");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "2 Energy");

    let description = &lines[3];
    assert!(description.contains("**Vulnerable.**"));
    assert!(description.contains("Apply"));
    assert!(description.contains("damage."));
    assert!(!description.contains("**Apply"));
    assert!(!description.contains("**damage"));
}

/// Unplayable curses use the short title and an Unplayable cost line.
#[test]
fn test_curse_block() {
    let doubt: Entity = Card::new(
        "Doubt",
        "Unplayable. At the end of your turn, gain 1 Weak.",
        "Curse",
        "Curse",
    )
    .into();

    assert_eq!(
        lines(&doubt),
        vec![
            "[Doubt](http://slay-the-spire.wikia.com/wiki/Doubt) Curse",
            "",
            "Unplayable",
            "**Unplayable.** At the end of your turn, gain 1 **Weak.**",
        ]
    );
}

/// Relics, potions and events have no cost line.
#[test]
fn test_non_card_blocks() {
    let relic: Entity = Relic::new("Philosopher's Stone", "Gain [R] at the start of each turn. All enemies start with 1 Strength.", "Boss").into();
    let potion: Entity = Potion::new("Block Potion", "Gain 12 Block.", "Common").into();
    let event: Entity = Event::new("Big Fish", "Eat a banana, a donut or a box.", "Act 1").into();

    assert_eq!(
        lines(&relic),
        vec![
            "[Philosopher's Stone](http://slay-the-spire.wikia.com/wiki/Philosopher%27s%20Stone) Boss Relic",
            "",
            "Gain ◼ at the start of each turn. All enemies start with 1 **Strength.**",
        ]
    );
    assert_eq!(lines(&potion)[0], "[Block Potion](http://slay-the-spire.wikia.com/wiki/Block%20Potion) Common Potion");
    assert_eq!(lines(&potion)[2], "Gain 12 **Block.**");
    assert_eq!(lines(&event)[0], "[Big Fish](http://slay-the-spire.wikia.com/wiki/Big%20Fish) Event - Act 1");
    assert_eq!(lines(&event).len(), 3);
}

// =============================================================================
// Symbols and Costs
// =============================================================================

/// Defect and Watcher energy icons collapse to the generic one.
#[test]
fn test_energy_icons() {
    let card: Entity = Card::new("Turbo", "Gain [B] [B]. Add a Void into your discard pile.", "Skill", "Defect")
        .with_rarity("Common")
        .with_cost(Cost::Fixed(0))
        .into();

    let block = format_entity(&card);
    assert!(block.contains("0 Energy"));
    assert!(block.contains("Gain ◼ ◼. Add a **Void** into your discard pile."));

    assert_eq!(render_description("Gain [W]."), "Gain [E].");
    assert_eq!(render_description("Gain [G]."), "Gain [E].");
}

/// Substituting symbols twice is the same as once.
#[test]
fn test_symbols_idempotent() {
    let once = replace_symbols("[G] [W] [R] [B] [E]");
    assert_eq!(once, "[E] [E] ◼ ◼ [E]");
    assert_eq!(replace_symbols(&once), once);
}

/// Upgradable and X costs are shown as written.
#[test]
fn test_variable_cost() {
    let card: Entity = Card::new("Whirlwind", "Deal 5 damage to ALL enemies X times.", "Attack", "Ironclad")
        .with_rarity("Uncommon")
        .with_cost(Cost::parse("X"))
        .into();
    assert_eq!(lines(&card)[2], "X Energy");
}
