//! Core duel types: seats, RNG, configuration, characters and match state.
//!
//! These are the building blocks everything else is assembled from. None of
//! them sequence anything over time; that is the turn controller's job.

pub mod side;
pub mod rng;
pub mod config;
pub mod character;
pub mod state;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{CharacterConfig, MatchConfig, Timings};
pub use character::{Character, HitReport};
pub use state::{MatchState, ScoreSnapshot};
