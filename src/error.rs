//! Setup and load errors.
//!
//! Runtime rule violations (insufficient mana, wrong target, acting out of
//! turn) are never errors: they are silent no-ops. Everything here is
//! raised while loading data or validating a match before it starts.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::Side;

/// Errors raised while building a match or loading persisted data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("card catalog is empty")]
    EmptyCatalog,

    #[error("card catalog has no deck entries (every count_in_deck is zero)")]
    NoDeckEntries,

    #[error("card {title:?} has negative cost {cost}")]
    NegativeCost { title: String, cost: i32 },

    #[error("card {title:?} has invalid damage {damage}")]
    InvalidDamage { title: String, damage: i32 },

    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),

    #[error("{side} can never afford a card: no deck entry costs at most {max_mana}")]
    NothingAffordable { side: Side, max_mana: i32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
