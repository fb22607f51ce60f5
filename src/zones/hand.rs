//! Fixed-capacity hand of card slots.
//!
//! Slot indices are stable: a card keeps its slot from deal-in until it is
//! played or burned, and presentation targets animations by slot.

use smallvec::SmallVec;

use crate::cards::{CardInstance, InstanceId};
use crate::core::Side;

/// A side's hand.
#[derive(Clone, Debug)]
pub struct Hand {
    owner: Side,
    slots: SmallVec<[Option<CardInstance>; 3]>,
}

impl Hand {
    /// Create an empty hand with `capacity` slots.
    #[must_use]
    pub fn new(owner: Side, capacity: usize) -> Self {
        let mut slots = SmallVec::with_capacity(capacity);
        slots.resize(capacity, None);
        Self { owner, slots }
    }

    /// Side that owns this hand.
    #[must_use]
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Place a card in a slot.
    ///
    /// Panics if the slot is out of range or already occupied.
    pub fn add_card(&mut self, card: CardInstance, slot: usize) {
        let entry = &mut self.slots[slot];
        if let Some(existing) = entry {
            panic!("Slot {} already holds {}", slot, existing.id);
        }
        *entry = Some(card);
    }

    /// Remove a card by identity, freeing its slot.
    ///
    /// Returns `None` (and changes nothing) if the card is not in this hand.
    pub fn remove_card(&mut self, id: InstanceId) -> Option<CardInstance> {
        let slot = self.slot_of(id)?;
        self.slots[slot].take()
    }

    /// The free slot to deal into next.
    ///
    /// Scans every slot and keeps the last empty one, so the highest free
    /// index wins.
    #[must_use]
    pub fn available_slot(&self) -> Option<usize> {
        let mut available = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.is_none() {
                available = Some(i);
            }
        }
        available
    }

    /// True iff every occupied slot holds a ready card.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cards().all(|c| c.ready)
    }

    /// Slot index holding a card.
    #[must_use]
    pub fn slot_of(&self, id: InstanceId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|c| c.id == id))
    }

    /// Card in a slot.
    #[must_use]
    pub fn card_at(&self, slot: usize) -> Option<&CardInstance> {
        self.slots.get(slot)?.as_ref()
    }

    /// Look up a card by identity.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards().find(|c| c.id == id)
    }

    /// Look up a card by identity, mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.slots.iter_mut().flatten().find(|c| c.id == id)
    }

    /// Occupied slots' cards, low slot first.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.slots.iter().flatten()
    }

    /// Identities of held cards, low slot first.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.cards().map(|c| c.id).collect()
    }
}
