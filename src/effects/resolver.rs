//! Effect resolution - pure rules for playing a card.
//!
//! `EffectResolver` answers three questions without touching any state:
//! may this card be dropped on this target, how much damage does an attack
//! deal to a given character, and does a hit land or get reflected.
//! The turn controller applies the answers.

use thiserror::Error;

use crate::cards::CardDefinition;
use crate::core::{Character, Side};

use super::Element;

/// Why a play was ignored.
///
/// Rejections never leave the core as errors; they are logged and the
/// boundary call reports `false`.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayRejection {
    #[error("input is not allowed right now")]
    InputLocked,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("card is not in the player's hand")]
    UnknownCard,

    #[error("card has not finished dealing in")]
    NotReady,

    #[error("no character occupies the {0} seat")]
    NoTarget(Side),

    #[error("card costs {cost} but only {mana} mana is available")]
    InsufficientMana { cost: i32, mana: i32 },

    #[error("card cannot target the {target} (attack: {is_attack})")]
    WrongTarget { target: Side, is_attack: bool },
}

/// Outcome of an attack reaching a character, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The target's mirror negates the hit; the attack bounces back.
    Reflected,
    /// The target takes `amount` damage.
    Damage { amount: i32 },
}

/// Stateless rule functions for card plays.
pub struct EffectResolver;

impl EffectResolver {
    /// Check a player drop against mana and targeting rules.
    ///
    /// Only the player's mana is consulted; the AI pre-filters by its own.
    /// Attacks must land on the enemy, boosts and mirrors on the player.
    pub fn check_play(
        card: &CardDefinition,
        target: Side,
        player_mana: i32,
    ) -> Result<(), PlayRejection> {
        if card.cost > player_mana {
            return Err(PlayRejection::InsufficientMana {
                cost: card.cost,
                mana: player_mana,
            });
        }

        let is_attack = card.is_attack();
        let accepted = match target {
            Side::Player => !is_attack,
            Side::Enemy => is_attack,
        };
        if !accepted {
            return Err(PlayRejection::WrongTarget { target, is_attack });
        }
        Ok(())
    }

    /// The side a card lands on when `caster` plays it.
    #[must_use]
    pub fn natural_target(card: &CardDefinition, caster: Side) -> Side {
        if card.is_attack() {
            caster.other()
        } else {
            caster
        }
    }

    /// Attack damage after elemental resistance.
    ///
    /// A card sharing the target's element deals half damage, rounded down.
    #[must_use]
    pub fn mitigated_damage(card: &CardDefinition, target_element: Option<Element>) -> i32 {
        match target_element {
            Some(element) if card.has_element(element) => card.damage / 2,
            _ => card.damage,
        }
    }

    /// Decide what an attack does to `target`.
    #[must_use]
    pub fn resolve_hit(card: &CardDefinition, target: &Character) -> HitOutcome {
        if target.mirror_active() {
            return HitOutcome::Reflected;
        }
        HitOutcome::Damage {
            amount: Self::mitigated_damage(card, target.element()),
        }
    }
}
