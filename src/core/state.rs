//! Match-level state: score, turn ownership and input gating.
//!
//! ## MatchState
//!
//! Lives for one match and is rebuilt from scratch on a new game. Score and
//! kill count only ever grow; they change only when an enemy is damaged or
//! killed.
//!
//! ## ScoreSnapshot
//!
//! The read-only tally handed to the game-over screen.

use serde::{Deserialize, Serialize};

use super::Side;
use crate::error::Result;

/// Score, turn and input state of a running match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    score: i32,
    kill_count: u32,
    active: Side,
    input_allowed: bool,
    game_over: bool,
    turn_number: u32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: player to act, input locked until the deal completes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            kill_count: 0,
            active: Side::Player,
            input_allowed: false,
            game_over: false,
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn kill_count(&self) -> u32 {
        self.kill_count
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.active.is_player()
    }

    /// The single gate on player interaction.
    #[must_use]
    pub fn input_allowed(&self) -> bool {
        self.input_allowed
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Turns started so far, counting the opening player turn.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Add points. Negative amounts are ignored so the score never drops.
    pub fn add_score(&mut self, points: i32) {
        self.score += points.max(0);
    }

    pub fn record_kill(&mut self) {
        self.kill_count += 1;
    }

    pub fn set_input_allowed(&mut self, allowed: bool) {
        self.input_allowed = allowed && !self.game_over;
    }

    /// Hand the turn to the other side. Returns the new active side.
    pub fn flip_turn(&mut self) -> Side {
        self.active = self.active.other();
        self.turn_number += 1;
        self.active
    }

    /// End the match. Input stays locked from here on.
    pub fn end(&mut self) {
        self.game_over = true;
        self.input_allowed = false;
    }

    /// Capture the tally for the game-over screen.
    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            score: self.score,
            kill_count: self.kill_count,
        }
    }
}

/// Final tally shown after a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub score: i32,
    pub kill_count: u32,
}

impl ScoreSnapshot {
    /// Encode for hand-off to the summary screen.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a previously encoded snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Summary line, e.g. `Demons Killed: 2 | Score: 37`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Demons Killed: {} | Score: {}", self.kill_count, self.score)
    }
}
