//! The global card catalog.
//!
//! `CardCatalog` holds every card definition a match can deal, in a fixed
//! order. Decks are generated from it by repeating each definition
//! `count_in_deck` times. The catalog is read-only once a match starts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::definition::{CardDefinition, CardId, MIRROR_DAMAGE};
use crate::core::{MatchConfig, Side};
use crate::error::{Error, Result};

/// Ordered catalog of card definitions.
///
/// ## Example
///
/// ```
/// use demon_duel::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Jab").with_damage(2).with_count(3));
///
/// assert_eq!(catalog.total_weight(), 3);
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().title, "Jab");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Arc<CardDefinition>>,
    index: FxHashMap<CardId, usize>,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    cards: Vec<CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate ids.
    pub fn from_definitions(cards: impl IntoIterator<Item = CardDefinition>) -> Result<Self> {
        let mut catalog = Self::new();
        for card in cards {
            if catalog.contains(card.id) {
                return Err(Error::DuplicateCard(card.id));
            }
            catalog.register(card);
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON of the form `{"cards": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_definitions(file.cards)
    }

    /// Serialize the catalog to JSON.
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            cards: self.cards.iter().map(|c| CardDefinition::clone(c)).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// A small playable default set.
    #[must_use]
    pub fn starter() -> Self {
        let cards = [
            CardDefinition::new(CardId::new(1), "Fireball")
                .with_description("Hurl a ball of flame.")
                .with_cost(2)
                .with_damage(6)
                .fire()
                .with_count(4),
            CardDefinition::new(CardId::new(2), "Ice Lance")
                .with_description("A shard of winter.")
                .with_cost(2)
                .with_damage(6)
                .ice()
                .with_count(4),
            CardDefinition::new(CardId::new(3), "Arcane Bolt")
                .with_description("Raw force, no element.")
                .with_cost(1)
                .with_damage(3)
                .with_count(5),
            CardDefinition::new(CardId::new(4), "Meteor")
                .with_description("Fire from the heavens.")
                .with_cost(4)
                .with_damage(12)
                .fire()
                .with_count(1),
            CardDefinition::new(CardId::new(5), "Healing Light")
                .with_description("Restore health.")
                .with_cost(2)
                .with_damage(5)
                .booster()
                .with_count(3),
            CardDefinition::new(CardId::new(6), "Mirror Ward")
                .with_description("Reflect the next attack.")
                .with_cost(3)
                .mirror()
                .with_count(2),
        ];

        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(Arc::new(card));
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of distinct definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter()
    }

    /// Size of a freshly generated deck.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.cards.iter().map(|c| c.count_in_deck as usize).sum()
    }

    /// Every definition repeated `count_in_deck` times, in catalog order.
    #[must_use]
    pub fn weighted_entries(&self) -> Vec<Arc<CardDefinition>> {
        let mut entries = Vec::with_capacity(self.total_weight());
        for card in &self.cards {
            for _ in 0..card.count_in_deck {
                entries.push(Arc::clone(card));
            }
        }
        entries
    }

    /// Validate the catalog against a match config.
    ///
    /// Rejects catalogs that cannot produce a deck, cards with malformed
    /// numbers, and catalogs where a side could never afford any deck entry.
    pub fn validate(&self, config: &MatchConfig) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if self.total_weight() == 0 {
            return Err(Error::NoDeckEntries);
        }

        for card in &self.cards {
            if card.cost < 0 {
                return Err(Error::NegativeCost {
                    title: card.title.clone(),
                    cost: card.cost,
                });
            }
            if card.damage < MIRROR_DAMAGE {
                return Err(Error::InvalidDamage {
                    title: card.title.clone(),
                    damage: card.damage,
                });
            }
        }

        for side in Side::ALL {
            let max_mana = config.character(side).max_mana;
            let affordable = self
                .cards
                .iter()
                .any(|c| c.count_in_deck > 0 && c.cost <= max_mana);
            if !affordable {
                return Err(Error::NothingAffordable { side, max_mana });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "Test Card"));

        assert_eq!(catalog.get(CardId::new(1)).unwrap().title, "Test Card");
        assert!(catalog.get(CardId::new(99)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "A"));
        catalog.register(CardDefinition::new(CardId::new(1), "B"));
    }

    #[test]
    fn test_from_definitions_rejects_duplicates() {
        let result = CardCatalog::from_definitions([
            CardDefinition::new(CardId::new(1), "A"),
            CardDefinition::new(CardId::new(1), "B"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateCard(id)) if id == CardId::new(1)));
    }

    #[test]
    fn test_weighted_entries_follow_catalog_order() {
        let catalog = CardCatalog::from_definitions([
            CardDefinition::new(CardId::new(1), "A").with_count(2),
            CardDefinition::new(CardId::new(2), "B").with_count(0),
            CardDefinition::new(CardId::new(3), "C").with_count(1),
        ])
        .unwrap();

        let titles: Vec<_> = catalog.weighted_entries().iter().map(|c| c.title.clone()).collect();
        assert_eq!(titles, vec!["A", "A", "C"]);
        assert_eq!(catalog.total_weight(), 3);
    }

    #[test]
    fn test_starter_is_valid() {
        let catalog = CardCatalog::starter();
        assert!(catalog.validate(&MatchConfig::default()).is_ok());
        assert!(catalog.iter().any(|c| c.is_mirror()));
        assert!(catalog.iter().any(|c| c.is_booster));
    }

    #[test]
    fn test_validate_empty_and_weightless() {
        let config = MatchConfig::default();
        assert!(matches!(CardCatalog::new().validate(&config), Err(Error::EmptyCatalog)));

        let weightless =
            CardCatalog::from_definitions([CardDefinition::new(CardId::new(1), "A").with_count(0)])
                .unwrap();
        assert!(matches!(weightless.validate(&config), Err(Error::NoDeckEntries)));
    }

    #[test]
    fn test_validate_bad_numbers() {
        let config = MatchConfig::default();

        let negative =
            CardCatalog::from_definitions([CardDefinition::new(CardId::new(1), "A").with_cost(-1)])
                .unwrap();
        assert!(matches!(negative.validate(&config), Err(Error::NegativeCost { .. })));

        let weird =
            CardCatalog::from_definitions([CardDefinition::new(CardId::new(1), "A").with_damage(-5)])
                .unwrap();
        assert!(matches!(weird.validate(&config), Err(Error::InvalidDamage { .. })));
    }

    #[test]
    fn test_validate_unaffordable() {
        let config = MatchConfig::default();
        let pricey =
            CardCatalog::from_definitions([CardDefinition::new(CardId::new(1), "A").with_cost(99)])
                .unwrap();
        assert!(matches!(
            pricey.validate(&config),
            Err(Error::NothingAffordable { side: Side::Player, .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = CardCatalog::starter();
        let json = catalog.to_json().unwrap();
        let parsed = CardCatalog::from_json(&json).unwrap();

        assert_eq!(parsed.len(), catalog.len());
        for (a, b) in parsed.iter().zip(catalog.iter()) {
            assert_eq!(a, b);
        }
    }
}
