//! Combatants: health, mana, element and mirror state.
//!
//! Health and mana are always clamped to `[0, max]`. Death is reported
//! once, on the write that first brings health to zero; what death means
//! (game over, enemy replacement) is the turn controller's business.

use serde::{Deserialize, Serialize};

use super::config::CharacterConfig;
use super::Side;
use crate::cards::CardDefinition;
use crate::effects::{EffectResolver, Element, HitOutcome};

/// Result of an attack landing on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitReport {
    /// A mirror absorbed the hit and is now spent.
    Reflected,
    /// Health was reduced.
    Damaged {
        /// Damage after elemental resistance, before clamping.
        amount: i32,
        /// This hit killed the character.
        died: bool,
    },
}

/// A player or enemy combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    side: Side,
    health: i32,
    max_health: i32,
    mana: i32,
    max_mana: i32,
    element: Option<Element>,
    mirror: bool,
    dead: bool,
}

impl Character {
    /// Spawn at full health with the configured starting mana.
    #[must_use]
    pub fn new(side: Side, config: &CharacterConfig, element: Option<Element>) -> Self {
        Self {
            side,
            health: config.max_health.max(0),
            max_health: config.max_health.max(0),
            mana: config.starting_mana.clamp(0, config.max_mana.max(0)),
            max_mana: config.max_mana.max(0),
            element,
            mirror: false,
            dead: false,
        }
    }

    /// Which seat this character occupies.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    /// Elemental type (enemies only).
    #[must_use]
    pub fn element(&self) -> Option<Element> {
        self.element
    }

    pub fn set_element(&mut self, element: Option<Element>) {
        self.element = element;
    }

    #[must_use]
    pub fn mirror_active(&self) -> bool {
        self.mirror
    }

    pub fn set_mirror(&mut self, active: bool) {
        self.mirror = active;
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Set health, clamped to `[0, max_health]`.
    ///
    /// Returns `true` if this write killed the character.
    pub fn set_health(&mut self, value: i32) -> bool {
        self.health = value.clamp(0, self.max_health);
        if self.health == 0 && !self.dead {
            self.dead = true;
            return true;
        }
        false
    }

    /// Adjust health by `delta`. Returns `true` if this killed the character.
    pub fn add_health(&mut self, delta: i32) -> bool {
        self.set_health(self.health.saturating_add(delta))
    }

    /// Set mana, clamped to `[0, max_mana]`.
    pub fn set_mana(&mut self, value: i32) {
        self.mana = value.clamp(0, self.max_mana);
    }

    /// Adjust mana by `delta`.
    pub fn add_mana(&mut self, delta: i32) {
        self.set_mana(self.mana.saturating_add(delta));
    }

    /// Check whether a card of this cost is affordable.
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.mana
    }

    /// Take an attack.
    ///
    /// An armed mirror negates the hit entirely and disarms; the caller is
    /// responsible for redirecting the attack at the attacker.
    pub fn receive_hit(&mut self, card: &CardDefinition) -> HitReport {
        match EffectResolver::resolve_hit(card, self) {
            HitOutcome::Reflected => {
                self.mirror = false;
                HitReport::Reflected
            }
            HitOutcome::Damage { amount } => {
                let died = self.add_health(-amount);
                HitReport::Damaged { amount, died }
            }
        }
    }
}
