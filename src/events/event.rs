//! Match events.
//!
//! Events describe what just happened in the core so presentation can
//! animate it and UI can resync. The core never waits on a presenter
//! except through readiness flags it owns itself.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cards::{CardDefinition, InstanceId};
use crate::core::Side;
use crate::effects::Element;

/// Something the turn controller wants shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Match initialized; the initial deal begins.
    MatchStarted { seed: u64 },

    /// A card was placed in a hand slot and starts its deal-in.
    CardDealt {
        side: Side,
        slot: usize,
        instance: InstanceId,
        card: Arc<CardDefinition>,
    },

    /// A card finished dealing in and may now be played.
    CardReady { side: Side, instance: InstanceId },

    /// An enemy card was flipped face-up ahead of being played.
    CardRevealed { instance: InstanceId },

    /// A card left its hand because it was played.
    CardPlayed {
        side: Side,
        instance: InstanceId,
        card: Arc<CardDefinition>,
        target: Side,
    },

    /// A card left its hand by being burned.
    CardBurned { side: Side, instance: InstanceId },

    /// An attack is on its way to `target`.
    AttackLaunched { card: Arc<CardDefinition>, target: Side },

    /// Damage landed.
    Damaged { target: Side, amount: i32 },

    /// A booster restored health.
    Healed { target: Side, amount: i32 },

    MirrorActivated { target: Side },

    /// A mirror negated a hit and is now spent.
    MirrorShattered { target: Side },

    TurnChanged { active: Side },

    ScoreChanged { score: i32, kill_count: u32 },

    HealthChanged { side: Side, health: i32 },

    ManaChanged { side: Side, mana: i32 },

    /// Show or hide the enemy's skip-turn indicator.
    SkipIndicator { visible: bool },

    /// The enemy died and was removed from its seat.
    EnemyDefeated,

    /// A replacement enemy should be brought in.
    EnemyReplacementRequested,

    /// A replacement enemy took the seat.
    EnemySpawned { element: Element },

    /// The player died; the embedding application should show game over.
    GameOverRequested,
}

impl MatchEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MatchEvent::MatchStarted { .. } => "match_started",
            MatchEvent::CardDealt { .. } => "card_dealt",
            MatchEvent::CardReady { .. } => "card_ready",
            MatchEvent::CardRevealed { .. } => "card_revealed",
            MatchEvent::CardPlayed { .. } => "card_played",
            MatchEvent::CardBurned { .. } => "card_burned",
            MatchEvent::AttackLaunched { .. } => "attack_launched",
            MatchEvent::Damaged { .. } => "damaged",
            MatchEvent::Healed { .. } => "healed",
            MatchEvent::MirrorActivated { .. } => "mirror_activated",
            MatchEvent::MirrorShattered { .. } => "mirror_shattered",
            MatchEvent::TurnChanged { .. } => "turn_changed",
            MatchEvent::ScoreChanged { .. } => "score_changed",
            MatchEvent::HealthChanged { .. } => "health_changed",
            MatchEvent::ManaChanged { .. } => "mana_changed",
            MatchEvent::SkipIndicator { .. } => "skip_indicator",
            MatchEvent::EnemyDefeated => "enemy_defeated",
            MatchEvent::EnemyReplacementRequested => "enemy_replacement_requested",
            MatchEvent::EnemySpawned { .. } => "enemy_spawned",
            MatchEvent::GameOverRequested => "game_over_requested",
        }
    }
}
