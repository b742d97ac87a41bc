//! Corpus entities: cards, relics, potions and events.
//!
//! `Entity` is a closed tagged union. Every variant carries a display
//! `name` and a `description`; the remaining fields depend on the kind.
//! The kind never changes after construction and decides which template
//! the formatter applies.
//!
//! ## Usage
//!
//! ```
//! use spire_scan::core::{Card, Cost, Entity, EntityKind};
//!
//! let bash = Entity::Card(
//!     Card::new("Bash", "Deal 8 damage. Apply 2 Vulnerable.", "Attack", "Ironclad")
//!         .with_rarity("Common")
//!         .with_cost(Cost::Fixed(2)),
//! );
//!
//! assert_eq!(bash.kind(), EntityKind::Card);
//! assert_eq!(bash.name(), "Bash");
//! ```

use serde::{Deserialize, Serialize};

/// The variant tag of an [`Entity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Card,
    Relic,
    Potion,
    Event,
}

impl EntityKind {
    /// Tag string used in corpus files and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Card => "Card",
            EntityKind::Relic => "Relic",
            EntityKind::Potion => "Potion",
            EntityKind::Event => "Event",
        }
    }

    /// Parse a tag string. Matching is exact.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "Card" => Some(EntityKind::Card),
            "Relic" => Some(EntityKind::Relic),
            "Potion" => Some(EntityKind::Potion),
            "Event" => Some(EntityKind::Event),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy cost of a card.
///
/// Scraped data mostly holds plain numbers, but a few cards cost `X`
/// or list an upgraded cost alongside the base one. Those are kept verbatim.
/// An unplayable card has no `Cost` at all (`Option::None` on [`Card`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cost {
    /// A plain non-negative energy amount.
    Fixed(u32),
    /// Any other cost notation (`X`, `1 (0)`), displayed as written.
    Variable(String),
}

impl Cost {
    /// Interpret a raw cost string. Numeric text becomes `Fixed`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u32>() {
            Ok(n) => Cost::Fixed(n),
            Err(_) => Cost::Variable(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Fixed(n) => write!(f, "{}", n),
            Cost::Variable(s) => f.write_str(s),
        }
    }
}

/// A playable (or unplayable) card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub description: String,
    /// Attack, Skill, Power, Status or Curse.
    pub card_type: String,
    /// Owning character (Ironclad, Silent...) or a special group (Colorless, Status, Curse).
    pub category: String,
    /// `None` for most status and curse cards.
    pub rarity: Option<String>,
    /// `None` means the card is unplayable.
    pub cost: Option<Cost>,
}

impl Card {
    /// Create an unplayable card with no rarity.
    ///
    /// Use the builder methods to set rarity and cost.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        card_type: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: single_line(name.into()),
            description: single_line(description.into()),
            card_type: card_type.into(),
            category: category.into(),
            rarity: None,
            cost: None,
        }
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Set the energy cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Status and curse cards use a shorter title.
    #[must_use]
    pub fn is_special_group(&self) -> bool {
        matches!(self.category.as_str(), "Curse" | "Status")
    }
}

/// A relic, grouped by tier or origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl Relic {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: single_line(name.into()),
            description: single_line(description.into()),
            category: category.into(),
        }
    }
}

/// A potion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub description: String,
    pub rarity: String,
}

impl Potion {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: impl Into<String>,
    ) -> Self {
        Self {
            name: single_line(name.into()),
            description: single_line(description.into()),
            rarity: rarity.into(),
        }
    }
}

/// A map event, grouped by the act it appears in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub act: String,
}

impl Event {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        act: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            act: act.into(),
        }
    }
}

/// One entry of the reference corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Card(Card),
    Relic(Relic),
    Potion(Potion),
    Event(Event),
}

impl Entity {
    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Card(_) => EntityKind::Card,
            Entity::Relic(_) => EntityKind::Relic,
            Entity::Potion(_) => EntityKind::Potion,
            Entity::Event(_) => EntityKind::Event,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Entity::Card(c) => &c.name,
            Entity::Relic(r) => &r.name,
            Entity::Potion(p) => &p.name,
            Entity::Event(e) => &e.name,
        }
    }

    /// Free-text description, possibly containing symbol placeholders.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Entity::Card(c) => &c.description,
            Entity::Relic(r) => &r.description,
            Entity::Potion(p) => &p.description,
            Entity::Event(e) => &e.description,
        }
    }

    /// Get the card data if this is a card.
    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Entity::Card(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Card> for Entity {
    fn from(card: Card) -> Self {
        Entity::Card(card)
    }
}

impl From<Relic> for Entity {
    fn from(relic: Relic) -> Self {
        Entity::Relic(relic)
    }
}

impl From<Potion> for Entity {
    fn from(potion: Potion) -> Self {
        Entity::Potion(potion)
    }
}

impl From<Event> for Entity {
    fn from(event: Event) -> Self {
        Entity::Event(event)
    }
}

// Wiki table cells wrap long names and descriptions.
fn single_line(s: String) -> String {
    if s.contains('\n') {
        s.replace('\n', " ")
    } else {
        s
    }
}
