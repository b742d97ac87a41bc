//! Entity rendering.
//!
//! Every entity renders as a header line linking to its wiki page, a blank
//! line, and its processed description. Cards add a cost line above the
//! description:
//!
//! ```text
//! [Bash](http://slay-the-spire.wikia.com/wiki/Bash) Ironclad Starter Attack
//!
//! 2 Energy
//! Deal 8 damage. Apply 2 **Vulnerable.**
//! ```

use super::keywords::emphasize_keywords;
use super::symbols::replace_symbols;
use crate::core::{Card, Entity};

/// Base address of entity pages.
pub const WIKI_BASE: &str = "http://slay-the-spire.wikia.com/wiki/";

/// Wiki page for an entity name.
#[must_use]
pub fn wiki_url(name: &str) -> String {
    format!("{}{}", WIKI_BASE, urlencoding::encode(name))
}

/// The text after the link on the header line.
///
/// - Relic: `<category> Relic`
/// - Potion: `<rarity> Potion`
/// - Event: `Event - <act>`
/// - Card: `<category> <rarity> <card_type>`, or for status and curse
///   cards just the category (`Special <category>` if the rarity is Special)
#[must_use]
pub fn title(entity: &Entity) -> String {
    match entity {
        Entity::Card(card) => card_title(card),
        Entity::Relic(relic) => format!("{} Relic", relic.category),
        Entity::Potion(potion) => format!("{} Potion", potion.rarity),
        Entity::Event(event) => format!("Event - {}", event.act),
    }
}

fn card_title(card: &Card) -> String {
    let rarity = card.rarity.as_deref();
    if card.is_special_group() {
        return match rarity {
            Some("Special") => format!("Special {}", card.category),
            _ => card.category.clone(),
        };
    }
    match rarity {
        Some(rarity) => format!("{} {} {}", card.category, rarity, card.card_type),
        None => format!("{} {}", card.category, card.card_type),
    }
}

/// `Unplayable`, or `<cost> Energy`.
#[must_use]
pub fn cost_line(card: &Card) -> String {
    match &card.cost {
        Some(cost) => format!("{} Energy", cost),
        None => "Unplayable".to_string(),
    }
}

/// Emphasize keywords, then substitute icon placeholders.
#[must_use]
pub fn render_description(description: &str) -> String {
    replace_symbols(&emphasize_keywords(description))
}

/// Render an entity as a multi-line block separated by `\n`.
#[must_use]
pub fn format_entity(entity: &Entity) -> String {
    let name = entity.name();
    let header = format!("[{}]({}) {}", name, wiki_url(name), title(entity));
    let description = render_description(entity.description());

    match entity {
        Entity::Card(card) => format!("{}\n\n{}\n{}", header, cost_line(card), description),
        _ => format!("{}\n\n{}", header, description),
    }
}
