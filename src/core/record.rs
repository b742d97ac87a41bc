//! Flat on-disk corpus records.
//!
//! The acquisition job writes the corpus as a YAML list of flat maps:
//!
//! ```yaml
//! - type: Card
//!   name: Bash
//!   description: Deal 8 damage. Apply 2 Vulnerable.
//!   card_type: Attack
//!   category: Ironclad
//!   rarity: Starter
//!   cost: '2'
//! - type: Event
//!   name: Big Fish
//!   description: Eat a banana, a donut or a box.
//!   act: Act 1
//! ```
//!
//! `EntityRecord` mirrors that shape with every field optional. Turning a
//! record into an [`Entity`] checks that the fields its kind needs are present.

use serde::{Deserialize, Serialize};

use super::entity::{Card, Cost, Entity, EntityKind, Event, Potion, Relic};
use super::error::{Error, Result};

/// A cost as written in the corpus file: a YAML number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCost {
    Number(u32),
    Text(String),
}

impl RawCost {
    fn into_cost(self) -> Option<Cost> {
        match self {
            RawCost::Number(n) => Some(Cost::Fixed(n)),
            RawCost::Text(s) if s.trim().is_empty() => None,
            RawCost::Text(s) => Some(Cost::parse(&s)),
        }
    }
}

/// One unvalidated corpus entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub cost: Option<RawCost>,
    #[serde(default)]
    pub act: Option<String>,
}

impl EntityRecord {
    /// Validate the record and build the entity it describes.
    ///
    /// `index` is only used to locate the record in error messages.
    pub fn into_entity(self, index: usize) -> Result<Entity> {
        let kind = EntityKind::parse(&self.kind)
            .ok_or_else(|| Error::invalid_record(index, format!("unknown type `{}`", self.kind)))?;

        let name = non_empty(self.name, index, "name")?;
        let description = non_empty(self.description, index, "description")?;

        let entity = match kind {
            EntityKind::Card => {
                let card_type = required(self.card_type, index, "card_type")?;
                let category = required(self.category, index, "category")?;
                let mut card = Card::new(name, description, card_type, category);
                card.rarity = self.rarity;
                card.cost = self.cost.and_then(RawCost::into_cost);
                Entity::Card(card)
            }
            EntityKind::Relic => {
                let category = required(self.category, index, "category")?;
                Entity::Relic(Relic::new(name, description, category))
            }
            EntityKind::Potion => {
                let rarity = required(self.rarity, index, "rarity")?;
                Entity::Potion(Potion::new(name, description, rarity))
            }
            EntityKind::Event => {
                let act = required(self.act, index, "act")?;
                Entity::Event(Event::new(name, description, act))
            }
        };

        Ok(entity)
    }
}

fn required(field: Option<String>, index: usize, key: &str) -> Result<String> {
    field.ok_or_else(|| Error::invalid_record(index, format!("missing field `{}`", key)))
}

fn non_empty(field: Option<String>, index: usize, key: &str) -> Result<String> {
    let value = required(field, index, key)?;
    if value.trim().is_empty() {
        return Err(Error::invalid_record(index, format!("empty field `{}`", key)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_record() -> EntityRecord {
        EntityRecord {
            kind: "Card".to_string(),
            name: Some("Bash".to_string()),
            description: Some("Deal 8 damage.".to_string()),
            card_type: Some("Attack".to_string()),
            category: Some("Ironclad".to_string()),
            rarity: Some("Starter".to_string()),
            cost: Some(RawCost::Text("2".to_string())),
            act: None,
        }
    }

    #[test]
    fn test_card_record() {
        let entity = card_record().into_entity(0).unwrap();
        let card = entity.as_card().unwrap();
        assert_eq!(card.cost, Some(Cost::Fixed(2)));
        assert_eq!(card.rarity.as_deref(), Some("Starter"));
    }

    #[test]
    fn test_blank_cost_is_unplayable() {
        let mut record = card_record();
        record.cost = Some(RawCost::Text("  ".to_string()));
        let entity = record.into_entity(0).unwrap();
        assert_eq!(entity.as_card().unwrap().cost, None);
    }

    #[test]
    fn test_numeric_cost() {
        let mut record = card_record();
        record.cost = Some(RawCost::Number(3));
        let entity = record.into_entity(0).unwrap();
        assert_eq!(entity.as_card().unwrap().cost, Some(Cost::Fixed(3)));
    }

    #[test]
    fn test_missing_card_type() {
        let mut record = card_record();
        record.card_type = None;
        let err = record.into_entity(7).unwrap_err();
        assert_eq!(err.to_string(), "corpus record 7: missing field `card_type`");
    }

    #[test]
    fn test_unknown_kind() {
        let mut record = card_record();
        record.kind = "Blight".to_string();
        assert!(matches!(
            record.into_entity(0),
            Err(Error::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut record = card_record();
        record.name = Some(String::new());
        assert!(record.into_entity(1).is_err());
    }

    #[test]
    fn test_event_needs_act() {
        let record = EntityRecord {
            kind: "Event".to_string(),
            name: Some("Big Fish".to_string()),
            description: Some("Eat something.".to_string()),
            ..EntityRecord::default()
        };
        assert!(record.clone().into_entity(0).is_err());

        let record = EntityRecord {
            act: Some("Act 1".to_string()),
            ..record
        };
        let entity = record.into_entity(0).unwrap();
        assert_eq!(entity.kind(), EntityKind::Event);
    }
}
