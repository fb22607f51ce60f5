//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable template of a card: its cost,
//! damage and element flags. Live copies in a hand are `CardInstance`s.
//!
//! ## Damage encoding
//!
//! `damage` doubles as the effect selector: `MIRROR_DAMAGE` (-1) marks a
//! mirror card, a booster heals by `damage`, anything else is an attack.

use serde::{Deserialize, Serialize};

use crate::effects::{CardEffect, Element};

/// Sentinel `damage` value marking a mirror card.
pub const MIRROR_DAMAGE: i32 = -1;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use demon_duel::cards::{CardDefinition, CardId};
///
/// let fireball = CardDefinition::new(CardId::new(1), "Fireball")
///     .with_cost(3)
///     .with_damage(8)
///     .fire()
///     .with_count(4);
///
/// assert!(fireball.is_attack());
/// assert_eq!(fireball.count_in_deck, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card title.
    pub title: String,

    /// Flavour / rules text.
    #[serde(default)]
    pub description: String,

    /// Mana cost to play.
    pub cost: i32,

    /// Damage dealt, health restored (boosters), or `MIRROR_DAMAGE`.
    pub damage: i32,

    /// Heals the target instead of damaging it.
    #[serde(default)]
    pub is_booster: bool,

    /// Fire-elemental; halved against fire characters.
    #[serde(default)]
    pub is_fire: bool,

    /// Ice-elemental; halved against ice characters.
    #[serde(default)]
    pub is_ice: bool,

    /// Copies of this card in a freshly generated deck.
    pub count_in_deck: u32,
}

impl CardDefinition {
    /// Create a zero-cost, zero-damage attack with one copy per deck.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            cost: 0,
            damage: 0,
            is_booster: false,
            is_fire: false,
            is_ice: false,
            count_in_deck: 1,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the mana cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the damage / heal amount.
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    /// Set copies per deck.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count_in_deck = count;
        self
    }

    /// Mark as a healing booster.
    #[must_use]
    pub fn booster(mut self) -> Self {
        self.is_booster = true;
        self
    }

    /// Mark as a mirror card.
    #[must_use]
    pub fn mirror(mut self) -> Self {
        self.damage = MIRROR_DAMAGE;
        self
    }

    /// Mark as fire-elemental.
    #[must_use]
    pub fn fire(mut self) -> Self {
        self.is_fire = true;
        self
    }

    /// Mark as ice-elemental.
    #[must_use]
    pub fn ice(mut self) -> Self {
        self.is_ice = true;
        self
    }

    /// Check if this is a mirror card.
    #[must_use]
    pub fn is_mirror(&self) -> bool {
        self.damage == MIRROR_DAMAGE
    }

    /// An attack is anything that is neither a mirror nor a booster.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        !self.is_mirror() && !self.is_booster
    }

    /// Check whether this card carries an element.
    #[must_use]
    pub fn has_element(&self, element: Element) -> bool {
        match element {
            Element::Fire => self.is_fire,
            Element::Ice => self.is_ice,
        }
    }

    /// Classify the card's effect. Mirror takes precedence over booster.
    #[must_use]
    pub fn effect(&self) -> CardEffect {
        if self.is_mirror() {
            CardEffect::Mirror
        } else if self.is_booster {
            CardEffect::Boost { amount: self.damage }
        } else {
            CardEffect::Attack { damage: self.damage }
        }
    }
}
