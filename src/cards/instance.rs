//! Card instances - live cards in a hand.
//!
//! A `CardInstance` is created when a definition is drawn from a deck and
//! destroyed when it is played or burned. It is not playable until its
//! deal-in presentation has finished (`ready`).

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::definition::CardDefinition;
use crate::core::Side;

/// Identity of a live card. Allocated once per draw, never reused in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A drawn card owned by one hand slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique identity of this copy.
    pub id: InstanceId,

    /// The template this copy was drawn from.
    pub definition: Arc<CardDefinition>,

    /// Side whose hand owns the card.
    pub owner: Side,

    /// Deal-in finished; the card may be played.
    pub ready: bool,

    /// Drag interaction enabled (player cards only).
    pub drag_enabled: bool,

    /// Card face is shown.
    pub face_up: bool,
}

impl CardInstance {
    /// Create a freshly drawn, not-yet-ready card.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>, owner: Side) -> Self {
        Self {
            id,
            definition,
            owner,
            ready: false,
            drag_enabled: false,
            face_up: false,
        }
    }

    /// Mana cost of the underlying definition.
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.definition.cost
    }

    /// Check whether playing this card is an attack.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.definition.is_attack()
    }

    /// Finish the deal-in. Player cards flip face-up and become draggable.
    pub fn settle(&mut self) {
        self.ready = true;
        if self.owner.is_player() {
            self.face_up = true;
            self.drag_enabled = true;
        }
    }
}
