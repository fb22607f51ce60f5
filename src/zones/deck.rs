//! Per-side draw pile.
//!
//! A `Deck` is a randomly ordered stack of definitions consumed from the
//! top. It can never run dry: when empty, it regenerates a full weighted
//! copy of the catalog and shuffles it before drawing.

use std::sync::Arc;

use tracing::debug;

use crate::cards::{CardCatalog, CardDefinition};
use crate::core::GameRng;

/// Auto-refilling shuffled supply of card definitions.
#[derive(Clone, Debug)]
pub struct Deck {
    catalog: Arc<CardCatalog>,
    /// Index 0 is the bottom, the last element is the top.
    cards: Vec<Arc<CardDefinition>>,
    rng: GameRng,
    generation: u32,
}

impl Deck {
    /// Create an empty deck; the first draw generates its contents.
    ///
    /// The catalog must have a positive total weight (checked by
    /// `CardCatalog::validate` at match start).
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rng: GameRng) -> Self {
        Self {
            catalog,
            cards: Vec::new(),
            rng,
            generation: 0,
        }
    }

    /// Draw the top definition, regenerating first if empty.
    pub fn draw(&mut self) -> Arc<CardDefinition> {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.regenerate();
        }
    }

    /// Cards left before the next regeneration.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of times the deck has been (re)generated.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Definitions still in the deck, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Arc<CardDefinition>] {
        &self.cards
    }

    /// Build a fresh permutation of the weighted catalog.
    ///
    /// Repeatedly picks a uniformly random remaining entry and moves it
    /// onto the new stack.
    fn regenerate(&mut self) {
        let mut ordered = self.catalog.weighted_entries();
        assert!(!ordered.is_empty(), "Cannot build a deck from a weightless catalog");

        let mut shuffled = Vec::with_capacity(ordered.len());
        while !ordered.is_empty() {
            let pick = self.rng.gen_index(ordered.len());
            shuffled.push(ordered.remove(pick));
        }

        self.cards = shuffled;
        self.generation += 1;
        debug!(generation = self.generation, size = self.cards.len(), "deck regenerated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use rustc_hash::FxHashMap;

    fn catalog() -> Arc<CardCatalog> {
        Arc::new(
            CardCatalog::from_definitions([
                CardDefinition::new(CardId::new(1), "A").with_count(3),
                CardDefinition::new(CardId::new(2), "B").with_count(2),
                CardDefinition::new(CardId::new(3), "C").with_count(0),
            ])
            .unwrap(),
        )
    }

    fn counts(cards: &[Arc<CardDefinition>]) -> FxHashMap<CardId, usize> {
        let mut map = FxHashMap::default();
        for card in cards {
            *map.entry(card.id).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_lazy_generation() {
        let mut deck = Deck::new(catalog(), GameRng::new(1));
        assert_eq!(deck.generation(), 0);
        assert_eq!(deck.remaining(), 0);

        deck.draw();
        assert_eq!(deck.generation(), 1);
        assert_eq!(deck.remaining(), 4);
    }

    #[test]
    fn test_full_deck_matches_weights() {
        let mut deck = Deck::new(catalog(), GameRng::new(1));
        let drawn: Vec<_> = (0..5).map(|_| deck.draw()).collect();

        let counts = counts(&drawn);
        assert_eq!(counts.get(&CardId::new(1)), Some(&3));
        assert_eq!(counts.get(&CardId::new(2)), Some(&2));
        assert_eq!(counts.get(&CardId::new(3)), None);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.generation(), 1);
    }

    #[test]
    fn test_exhaustion_regenerates() {
        let mut deck = Deck::new(catalog(), GameRng::new(9));
        for _ in 0..5 {
            deck.draw();
        }

        deck.draw();
        assert_eq!(deck.generation(), 2);
        assert_eq!(deck.remaining(), 4);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = Deck::new(catalog(), GameRng::new(77));
        let mut b = Deck::new(catalog(), GameRng::new(77));

        for _ in 0..12 {
            assert_eq!(a.draw().id, b.draw().id);
        }
    }
}
