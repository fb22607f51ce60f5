//! Enemy decision policies.
//!
//! A policy looks at the enemy hand and mana and proposes what to do this
//! step. It never mutates the match; the turn controller carries the
//! decision out over several sequenced steps.

use tracing::debug;

use crate::cards::InstanceId;
use crate::core::GameRng;
use crate::zones::Hand;

/// What the enemy does next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyDecision {
    /// Reveal and play this affordable card.
    Play(InstanceId),
    /// Nothing is affordable: discard this card, redraw, then think again.
    Burn(InstanceId),
    /// Nothing is affordable: pass the turn.
    Skip,
}

/// Chooses enemy actions.
pub trait EnemyPolicy: Send + Sync {
    /// Decide the next enemy action.
    ///
    /// Must only return `Play` for a card in `hand` costing at most `mana`,
    /// and only return `Burn` for a card in `hand`.
    fn choose(&self, hand: &Hand, mana: i32, rng: &mut GameRng) -> EnemyDecision;
}

/// Random enemy.
///
/// Keeps picking uniformly among the cards not yet ruled out, ruling out
/// each unaffordable pick, until one is affordable. When every card is
/// ruled out it burns a random card with probability `burn_chance` and
/// skips otherwise.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    burn_chance: f64,
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RandomPolicy {
    /// Create a policy; `burn_chance` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(burn_chance: f64) -> Self {
        Self {
            burn_chance: burn_chance.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn burn_chance(&self) -> f64 {
        self.burn_chance
    }

    /// Find an affordable card by random elimination.
    fn pick_affordable(hand: &Hand, mana: i32, rng: &mut GameRng) -> Option<InstanceId> {
        let mut candidates: Vec<_> = hand.cards().map(|c| (c.id, c.cost())).collect();

        while !candidates.is_empty() {
            let pick = rng.gen_index(candidates.len());
            let (id, cost) = candidates[pick];
            if cost <= mana {
                return Some(id);
            }
            candidates.swap_remove(pick);
        }
        None
    }
}

impl EnemyPolicy for RandomPolicy {
    fn choose(&self, hand: &Hand, mana: i32, rng: &mut GameRng) -> EnemyDecision {
        if let Some(id) = Self::pick_affordable(hand, mana, rng) {
            debug!(card = %id, mana, "enemy plays");
            return EnemyDecision::Play(id);
        }

        let held = hand.ids();
        if !held.is_empty() && rng.gen_bool(self.burn_chance) {
            if let Some(&id) = rng.choose(&held) {
                debug!(card = %id, mana, "enemy burns");
                return EnemyDecision::Burn(id);
            }
        }

        debug!(mana, "enemy skips");
        EnemyDecision::Skip
    }
}
