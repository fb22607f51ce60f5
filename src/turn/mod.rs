//! Turn sequencing.
//!
//! - `Sequencer`: named steps with delays and wait-until conditions
//! - `TurnController`: the match state machine built on top of it

mod controller;
mod sequencer;

pub use controller::{MatchBuilder, TurnController, MAX_ENEMY_BURNS, MAX_IDLE_STEPS};
pub use sequencer::{Clock, InstantClock, RealTimeClock, Sequencer, WaitCondition};
