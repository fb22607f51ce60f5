//! Match configuration.
//!
//! Everything tunable about a duel lives in `MatchConfig`: hand size,
//! per-side health and mana limits, presentation delays, scoring and the
//! AI's burn chance. Configs are plain serde data and can be loaded from
//! JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Side;
use crate::error::{Error, Result};

/// Health and mana limits for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Upper clamp for health. Characters start at full health.
    pub max_health: i32,
    /// Upper clamp for mana.
    pub max_mana: i32,
    /// Mana on spawn.
    pub starting_mana: i32,
}

impl CharacterConfig {
    /// Create a character config.
    #[must_use]
    pub const fn new(max_health: i32, max_mana: i32, starting_mana: i32) -> Self {
        Self {
            max_health,
            max_mana,
            starting_mana,
        }
    }

    fn validate(&self, side: Side) -> Result<()> {
        if self.max_health <= 0 {
            return Err(Error::InvalidConfig(format!(
                "{side} max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.max_mana < 0 || self.starting_mana < 0 {
            return Err(Error::InvalidConfig(format!("{side} mana values must be non-negative")));
        }
        if self.starting_mana > self.max_mana {
            return Err(Error::InvalidConfig(format!(
                "{side} starting_mana {} exceeds max_mana {}",
                self.starting_mana, self.max_mana
            )));
        }
        Ok(())
    }
}

/// Presentation delays between sequenced steps.
///
/// These never affect rule outcomes, only when steps run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Deal-in animation length; a dealt card becomes ready after this.
    pub card_anim: Duration,
    /// Attack projectile flight; hits resolve after this.
    pub attack_anim: Duration,
    /// Pause after a death before replacement / game over.
    pub death_delay: Duration,
    /// AI "thinking" pause between enemy turn steps.
    pub enemy_turn_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        let second = Duration::from_secs(1);
        Self {
            card_anim: second,
            attack_anim: second,
            death_delay: second,
            enemy_turn_delay: second,
        }
    }
}

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Slots per hand.
    pub hand_size: usize,

    /// Limits for the human side.
    pub player: CharacterConfig,

    /// Limits for every enemy, including replacements.
    pub enemy: CharacterConfig,

    /// Sequencing delays.
    pub timings: Timings,

    /// Flat score awarded per enemy killed.
    pub kill_bonus: i32,

    /// Probability that a stuck AI burns a card instead of skipping.
    pub burn_chance: f64,

    /// Seed for every random stream in the match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            player: CharacterConfig::new(20, 5, 1),
            enemy: CharacterConfig::new(10, 5, 1),
            timings: Timings::default(),
            kill_bonus: 10,
            burn_chance: 0.5,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Limits for a side.
    #[must_use]
    pub fn character(&self, side: Side) -> &CharacterConfig {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the player's limits.
    #[must_use]
    pub fn with_player(mut self, player: CharacterConfig) -> Self {
        self.player = player;
        self
    }

    /// Set the enemy's limits.
    #[must_use]
    pub fn with_enemy(mut self, enemy: CharacterConfig) -> Self {
        self.enemy = enemy;
        self
    }

    /// Set the sequencing delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the AI burn chance.
    #[must_use]
    pub fn with_burn_chance(mut self, chance: f64) -> Self {
        self.burn_chance = chance;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(Error::InvalidConfig("hand_size must be at least 1".to_string()));
        }
        self.player.validate(Side::Player)?;
        self.enemy.validate(Side::Enemy)?;
        if !(0.0..=1.0).contains(&self.burn_chance) {
            return Err(Error::InvalidConfig(format!(
                "burn_chance must be within [0, 1], got {}",
                self.burn_chance
            )));
        }
        if self.kill_bonus < 0 {
            return Err(Error::InvalidConfig("kill_bonus must be non-negative".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
