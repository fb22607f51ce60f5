//! # demon-duel
//!
//! Rules core for a player-vs-demon elemental card battler.
//!
//! Each side holds a small hand dealt from an endlessly reshuffled deck and
//! spends mana to play attacks, heals and mirrors against the other side.
//! The player fights an endless stream of demons; each kill scores, and
//! the match ends when the player falls.
//!
//! ## Design Principles
//!
//! 1. **Presentation Agnostic**: The core never renders or waits on
//!    animations. It emits `MatchEvent`s and sequences its own delays.
//!
//! 2. **Single Owner**: `TurnController` owns every deck, hand and
//!    character and is the only thing that mutates them. Illegal input is
//!    ignored, never reported as an error.
//!
//! 3. **Deterministic**: All randomness flows from one seed through
//!    context-separated ChaCha8 streams, and delays are scaled by an
//!    injected `Clock`, so a match replays exactly under `InstantClock`.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, characters, match state
//! - `cards`: Card definitions, live instances, the catalog
//! - `zones`: Decks and hands
//! - `effects`: Effect classification and the pure resolution rules
//! - `ai`: Enemy decision policies
//! - `turn`: The step sequencer and the turn controller
//! - `events`: Notifications to presentation
//!
//! ## Example
//!
//! ```
//! use demon_duel::{InstantClock, MatchBuilder, MatchConfig, Side};
//!
//! let mut game = MatchBuilder::new(MatchConfig::default().with_seed(7))
//!     .with_clock(InstantClock)
//!     .build()
//!     .unwrap();
//! game.run_until_idle();
//!
//! // Play the first card that fits its natural target, if any is affordable
//! let mana = game.player().mana();
//! let pick = game
//!     .hand(Side::Player)
//!     .cards()
//!     .find(|c| c.cost() <= mana)
//!     .map(|c| (c.id, if c.is_attack() { Side::Enemy } else { Side::Player }));
//!
//! if let Some((card, target)) = pick {
//!     assert!(game.player_attempts_drop(card, target));
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod ai;
pub mod turn;
pub mod events;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng,
    CharacterConfig, MatchConfig, Timings,
    Character, HitReport,
    MatchState, ScoreSnapshot,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance, InstanceId};

pub use crate::zones::{Deck, Hand};

pub use crate::effects::{CardEffect, EffectResolver, Element, HitOutcome, PlayRejection};

pub use crate::ai::{EnemyDecision, EnemyPolicy, RandomPolicy};

pub use crate::turn::{Clock, InstantClock, MatchBuilder, RealTimeClock, TurnController};

pub use crate::events::{EventLog, MatchEvent, NullPresenter, Presenter};

pub use crate::error::{Error, Result};
