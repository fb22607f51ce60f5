//! Effect classification.
//!
//! The effect set is closed: every card is exactly one of attack, boost
//! or mirror, decided by its definition's `damage` and `is_booster`.

use serde::{Deserialize, Serialize};

/// Elemental affinity shared by cards and characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Ice,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Fire => write!(f, "Fire"),
            Element::Ice => write!(f, "Ice"),
        }
    }
}

/// What playing a card does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Deal damage, subject to elemental resistance and mirrors.
    Attack { damage: i32 },
    /// Restore health.
    Boost { amount: i32 },
    /// Arm a mirror that reflects the next incoming attack.
    Mirror,
}

impl CardEffect {
    /// Attacks must target the enemy; everything else targets the caster.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, CardEffect::Attack { .. })
    }
}
