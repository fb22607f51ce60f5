//! Turn controller - the match state machine.
//!
//! `TurnController` owns every piece of a running match (decks, hands,
//! characters, score) and is the only thing that mutates them. The
//! embedding application drives it by:
//!
//! - calling `update(dt)` every frame (or `run_until_idle()` headless),
//! - forwarding player input through `player_attempts_drop`,
//!   `player_requests_skip_turn` and `player_burns_card`,
//! - rendering the `MatchEvent`s pushed into its `Presenter`.
//!
//! ## Turn protocol
//!
//! Exactly one side is active. Player input is accepted only while
//! `input_allowed` is set, which happens on the player's turn once nothing
//! is animating. Toggling the turn flips the active side, gates input,
//! then grants the newly active side one mana. An accepted play toggles
//! the turn once, except when an attack is reflected (the reflected
//! attack resolves first) or when it kills the enemy (the player keeps
//! the turn and gains a mana).
//!
//! ## Example
//!
//! ```
//! use demon_duel::core::{MatchConfig, Side};
//! use demon_duel::turn::{InstantClock, MatchBuilder};
//!
//! let mut game = MatchBuilder::new(MatchConfig::default())
//!     .with_clock(InstantClock)
//!     .build()
//!     .unwrap();
//! game.run_until_idle();
//!
//! assert!(game.state().input_allowed());
//! assert_eq!(game.hand(Side::Player).len(), 3);
//!
//! assert!(game.player_requests_skip_turn());
//! assert_eq!(game.state().active_side(), Side::Enemy);
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::ai::{EnemyDecision, EnemyPolicy, RandomPolicy};
use crate::cards::{CardCatalog, CardDefinition, CardInstance, InstanceId};
use crate::core::{
    Character, GameRng, HitReport, MatchConfig, MatchState, ScoreSnapshot, Side, SideMap,
};
use crate::effects::{CardEffect, EffectResolver, Element, PlayRejection};
use crate::error::Result;
use crate::events::{EventLog, MatchEvent, Presenter};
use crate::zones::{Deck, Hand};

use super::sequencer::{Clock, RealTimeClock, Sequencer, WaitCondition};

/// Upper bound on steps `run_until_idle` executes before giving up.
pub const MAX_IDLE_STEPS: usize = 10_000;

/// Burns the enemy may make in one turn before it is forced to skip.
pub const MAX_ENEMY_BURNS: u32 = 8;

/// A sequenced unit of match work.
#[derive(Clone, Debug)]
enum Step {
    /// Initial deal of one card into `slot`.
    Deal { side: Side, slot: usize },
    /// Initial deal for a side has finished animating.
    DealFinished { side: Side },
    /// A dealt card finished its deal-in.
    Settle { side: Side, instance: InstanceId },
    /// An attack reaches its target.
    ResolveAttack { card: Arc<CardDefinition>, target: Side },
    /// Enemy picks what to do.
    EnemyThink,
    /// Enemy starts carrying out its pick.
    EnemyAct(EnemyDecision),
    /// Enemy skip indicator has been shown long enough.
    EnemySkip,
    /// Revealed enemy card is played.
    EnemyPlay(InstanceId),
    /// A replacement enemy takes the empty seat.
    SpawnEnemy,
    /// Hand off to the game-over screen.
    GameOver,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Deal { .. } => "deal",
            Step::DealFinished { .. } => "deal_finished",
            Step::Settle { .. } => "settle",
            Step::ResolveAttack { .. } => "resolve_attack",
            Step::EnemyThink => "enemy_think",
            Step::EnemyAct(_) => "enemy_act",
            Step::EnemySkip => "enemy_skip",
            Step::EnemyPlay(_) => "enemy_play",
            Step::SpawnEnemy => "spawn_enemy",
            Step::GameOver => "game_over",
        }
    }
}

/// Builder for a `TurnController`.
///
/// Validates the config and catalog, wires the collaborators and schedules
/// the initial deal.
pub struct MatchBuilder<P: Presenter = EventLog> {
    config: MatchConfig,
    catalog: Option<Arc<CardCatalog>>,
    policy: Option<Box<dyn EnemyPolicy>>,
    clock: Box<dyn Clock>,
    presenter: P,
}

impl MatchBuilder<EventLog> {
    /// Start from a config, recording events into an `EventLog`.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            catalog: None,
            policy: None,
            clock: Box::new(RealTimeClock),
            presenter: EventLog::new(),
        }
    }
}

impl<P: Presenter> MatchBuilder<P> {
    /// Use this catalog instead of `CardCatalog::starter()`.
    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<Arc<CardCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Use this enemy policy instead of a `RandomPolicy` built from the
    /// config's burn chance.
    #[must_use]
    pub fn with_policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Set the clock that scales sequenced delays.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Send events to a different presenter.
    #[must_use]
    pub fn with_presenter<Q: Presenter>(self, presenter: Q) -> MatchBuilder<Q> {
        MatchBuilder {
            config: self.config,
            catalog: self.catalog,
            policy: self.policy,
            clock: self.clock,
            presenter,
        }
    }

    /// Validate and create the match. Nothing has been dealt yet; the deal
    /// runs as the sequencer advances.
    pub fn build(self) -> Result<TurnController<P>> {
        self.config.validate()?;
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(CardCatalog::starter()));
        catalog.validate(&self.config)?;

        let root = GameRng::new(self.config.seed);
        let decks = SideMap::new(|side| {
            let context = match side {
                Side::Player => "deck:player",
                Side::Enemy => "deck:enemy",
            };
            Deck::new(Arc::clone(&catalog), root.for_context(context))
        });
        let hands = SideMap::new(|side| Hand::new(side, self.config.hand_size));
        let mut rng = root.for_context("enemy");

        let policy: Box<dyn EnemyPolicy> = match self.policy {
            Some(policy) => policy,
            None => Box::new(RandomPolicy::new(self.config.burn_chance)),
        };

        let player = Character::new(Side::Player, &self.config.player, None);
        let enemy = Character::new(Side::Enemy, &self.config.enemy, Some(random_element(&mut rng)));

        let mut controller = TurnController {
            config: self.config,
            catalog,
            decks,
            hands,
            player,
            enemy: Some(enemy),
            state: MatchState::new(),
            policy,
            rng,
            sequencer: Sequencer::new(self.clock),
            presenter: self.presenter,
            next_instance: 0,
            enemy_burns: 0,
        };
        controller.start();
        Ok(controller)
    }
}

fn random_element(rng: &mut GameRng) -> Element {
    if rng.gen_bool(0.5) {
        Element::Fire
    } else {
        Element::Ice
    }
}

/// Orchestrates one match.
pub struct TurnController<P: Presenter = EventLog> {
    config: MatchConfig,
    catalog: Arc<CardCatalog>,
    decks: SideMap<Deck>,
    hands: SideMap<Hand>,
    player: Character,
    /// Empty between an enemy's death and its replacement.
    enemy: Option<Character>,
    state: MatchState,
    policy: Box<dyn EnemyPolicy>,
    /// Stream for AI choices and enemy elements.
    rng: GameRng,
    sequencer: Sequencer<Step>,
    presenter: P,
    next_instance: u32,
    /// Burns made so far in the current enemy turn.
    enemy_burns: u32,
}

impl<P: Presenter> TurnController<P> {
    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// The current enemy, if one occupies the seat.
    #[must_use]
    pub fn enemy(&self) -> Option<&Character> {
        self.enemy.as_ref()
    }

    /// Direct access for scenario setup.
    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    /// Direct access for scenario setup.
    pub fn enemy_mut(&mut self) -> Option<&mut Character> {
        self.enemy.as_mut()
    }

    /// The character in a seat.
    #[must_use]
    pub fn character(&self, side: Side) -> Option<&Character> {
        match side {
            Side::Player => Some(&self.player),
            Side::Enemy => self.enemy.as_ref(),
        }
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck {
        &self.decks[side]
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Current tally, for the game-over screen.
    #[must_use]
    pub fn score_snapshot(&self) -> ScoreSnapshot {
        self.state.snapshot()
    }

    /// Logical time elapsed in the match.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.sequencer.now()
    }

    /// No steps queued or parked: the match is waiting on the player (or
    /// is over).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.sequencer.is_idle()
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// Advance the match by `dt` of wall time, running every step that
    /// falls due. Returns the number of steps run.
    pub fn update(&mut self, dt: Duration) -> usize {
        let horizon = self.sequencer.now() + dt;
        let mut executed = 0;
        loop {
            self.release_waiting();
            match self.sequencer.pop_due(horizon) {
                Some(step) => {
                    self.execute(step);
                    executed += 1;
                }
                None => break,
            }
        }
        self.sequencer.advance_to(horizon);
        executed
    }

    /// Run steps until nothing is queued, jumping time forward as needed.
    ///
    /// Stops after `MAX_IDLE_STEPS` steps. Returns the number of steps run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut executed = 0;
        while executed < MAX_IDLE_STEPS {
            self.release_waiting();
            let Some(step) = self.sequencer.pop_next() else {
                break;
            };
            self.execute(step);
            executed += 1;
        }
        if executed == MAX_IDLE_STEPS {
            warn!(executed, "run_until_idle hit its step limit");
        }
        executed
    }

    // =========================================================================
    // Player input
    // =========================================================================

    /// Player dropped a card on a character.
    ///
    /// Returns `true` if the play was accepted. Rejected plays change
    /// nothing.
    pub fn player_attempts_drop(&mut self, card: InstanceId, target: Side) -> bool {
        match self.try_player_play(card, target) {
            Ok(()) => true,
            Err(reason) => {
                debug!(card = %card, %target, %reason, "play rejected");
                false
            }
        }
    }

    /// Player pressed "skip turn".
    pub fn player_requests_skip_turn(&mut self) -> bool {
        if let Err(reason) = self.check_player_input() {
            debug!(%reason, "skip rejected");
            return false;
        }
        debug!("player skips");
        self.toggle_turn();
        true
    }

    /// Player dropped a card on the burn zone: discard it, draw a
    /// replacement and end the turn.
    pub fn player_burns_card(&mut self, card: InstanceId) -> bool {
        if let Err(reason) = self.check_player_card(card) {
            debug!(card = %card, %reason, "burn rejected");
            return false;
        }
        debug!(card = %card, "player burns");
        self.discard_and_replace(Side::Player, card);
        self.emit(MatchEvent::CardBurned { side: Side::Player, instance: card });
        self.toggle_turn();
        true
    }

    fn check_player_input(&self) -> std::result::Result<(), PlayRejection> {
        if !self.state.input_allowed() {
            return Err(PlayRejection::InputLocked);
        }
        if !self.state.is_player_turn() {
            return Err(PlayRejection::NotPlayersTurn);
        }
        Ok(())
    }

    fn check_player_card(&self, id: InstanceId) -> std::result::Result<&CardInstance, PlayRejection> {
        self.check_player_input()?;
        let card = self.hands[Side::Player]
            .get(id)
            .ok_or(PlayRejection::UnknownCard)?;
        if !card.ready {
            return Err(PlayRejection::NotReady);
        }
        Ok(card)
    }

    fn try_player_play(&mut self, id: InstanceId, target: Side) -> std::result::Result<(), PlayRejection> {
        let definition = Arc::clone(&self.check_player_card(id)?.definition);
        if self.character(target).is_none() {
            return Err(PlayRejection::NoTarget(target));
        }
        EffectResolver::check_play(&definition, target, self.player.mana())?;

        self.player.add_mana(-definition.cost);
        self.emit(MatchEvent::ManaChanged { side: Side::Player, mana: self.player.mana() });
        debug!(card = %definition.title, %target, "player plays");
        self.use_card(Side::Player, id, target);
        Ok(())
    }

    // =========================================================================
    // Step execution
    // =========================================================================

    fn start(&mut self) {
        info!(seed = self.config.seed, hand_size = self.config.hand_size, "match started");
        self.emit(MatchEvent::MatchStarted { seed: self.config.seed });
        for side in Side::ALL {
            self.sequencer.schedule(Duration::ZERO, Step::Deal { side, slot: 0 });
        }
    }

    fn release_waiting(&mut self) {
        let hands = &self.hands;
        self.sequencer.release_waiting(|condition| match condition {
            WaitCondition::HandReady(side) => hands[side].is_ready(),
        });
    }

    fn execute(&mut self, step: Step) {
        trace!(step = step.name(), now = ?self.sequencer.now(), "step");
        match step {
            Step::Deal { side, slot } => {
                self.deal_into(side, slot);
                let card_anim = self.config.timings.card_anim;
                let next = if slot + 1 < self.config.hand_size {
                    Step::Deal { side, slot: slot + 1 }
                } else {
                    Step::DealFinished { side }
                };
                self.sequencer.schedule(card_anim, next);
            }
            Step::DealFinished { side } => {
                if side.is_player() && self.state.is_player_turn() {
                    self.state.set_input_allowed(true);
                }
            }
            Step::Settle { side, instance } => self.settle(side, instance),
            Step::ResolveAttack { card, target } => self.resolve_attack(card, target),
            Step::EnemyThink => self.enemy_think(),
            Step::EnemyAct(decision) => self.enemy_act(decision),
            Step::EnemySkip => {
                self.emit(MatchEvent::SkipIndicator { visible: false });
                self.toggle_turn();
            }
            Step::EnemyPlay(instance) => self.enemy_play(instance),
            Step::SpawnEnemy => self.spawn_enemy(),
            Step::GameOver => {
                info!(score = self.state.score(), kills = self.state.kill_count(), "game over");
                self.emit(MatchEvent::GameOverRequested);
            }
        }
    }

    fn emit(&mut self, event: MatchEvent) {
        trace!(event = event.name(), "emit");
        self.presenter.present(event);
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Draw a card into `slot` and start its deal-in.
    fn deal_into(&mut self, side: Side, slot: usize) {
        let definition = self.decks[side].draw();
        let instance = InstanceId(self.next_instance);
        self.next_instance += 1;

        let card = CardInstance::new(instance, Arc::clone(&definition), side);
        self.hands[side].add_card(card, slot);
        self.emit(MatchEvent::CardDealt { side, slot, instance, card: definition });
        self.sequencer
            .schedule(self.config.timings.card_anim, Step::Settle { side, instance });
    }

    fn settle(&mut self, side: Side, instance: InstanceId) {
        match self.hands[side].get_mut(instance) {
            Some(card) => {
                card.settle();
                trace!(%side, card = %instance, "card ready");
                self.emit(MatchEvent::CardReady { side, instance });
            }
            None => trace!(%side, card = %instance, "settled card already gone"),
        }
    }

    /// Remove a card from its hand and deal a replacement into the free
    /// slot. Returns the removed card.
    fn discard_and_replace(&mut self, side: Side, instance: InstanceId) -> Option<CardInstance> {
        let removed = self.hands[side].remove_card(instance)?;
        match self.hands[side].available_slot() {
            Some(slot) => self.deal_into(side, slot),
            None => warn!(%side, "no free slot for a replacement card"),
        }
        Some(removed)
    }

    /// Apply a card whose cost has already been paid.
    fn use_card(&mut self, caster: Side, instance: InstanceId, target: Side) {
        let Some(card) = self.discard_and_replace(caster, instance) else {
            warn!(%caster, card = %instance, "played card is not in hand");
            return;
        };
        let definition = card.definition;
        self.emit(MatchEvent::CardPlayed {
            side: caster,
            instance,
            card: Arc::clone(&definition),
            target,
        });

        match definition.effect() {
            CardEffect::Mirror => {
                if let Some(character) = self.character_mut(target) {
                    character.set_mirror(true);
                }
                self.emit(MatchEvent::MirrorActivated { target });
                self.toggle_turn();
            }
            CardEffect::Boost { amount } => {
                let health = match self.character_mut(target) {
                    Some(character) => {
                        character.add_health(amount);
                        character.health()
                    }
                    None => return,
                };
                self.emit(MatchEvent::Healed { target, amount });
                self.emit(MatchEvent::HealthChanged { side: target, health });
                self.toggle_turn();
            }
            CardEffect::Attack { .. } => self.launch_attack(definition, target),
        }
    }

    // =========================================================================
    // Combat
    // =========================================================================

    fn character_mut(&mut self, side: Side) -> Option<&mut Character> {
        match side {
            Side::Player => Some(&mut self.player),
            Side::Enemy => self.enemy.as_mut(),
        }
    }

    fn launch_attack(&mut self, card: Arc<CardDefinition>, target: Side) {
        self.state.set_input_allowed(false);
        self.emit(MatchEvent::AttackLaunched { card: Arc::clone(&card), target });
        self.sequencer
            .schedule(self.config.timings.attack_anim, Step::ResolveAttack { card, target });
    }

    fn resolve_attack(&mut self, card: Arc<CardDefinition>, target: Side) {
        let Some(character) = self.character_mut(target) else {
            warn!(%target, card = %card.title, "attack reached an empty seat");
            return;
        };
        let report = character.receive_hit(&card);
        let health = character.health();

        match report {
            HitReport::Reflected => {
                debug!(%target, card = %card.title, "attack reflected");
                self.emit(MatchEvent::MirrorShattered { target });
                self.launch_attack(card, target.other());
            }
            HitReport::Damaged { amount, died } => {
                debug!(%target, amount, health, "attack landed");
                self.emit(MatchEvent::Damaged { target, amount });
                self.emit(MatchEvent::HealthChanged { side: target, health });

                match target {
                    Side::Enemy => {
                        self.state.add_score(amount);
                        self.emit_score();
                        if died {
                            self.player.add_mana(1);
                            self.emit(MatchEvent::ManaChanged {
                                side: Side::Player,
                                mana: self.player.mana(),
                            });
                            self.enemy_died();
                            return;
                        }
                    }
                    Side::Player => {
                        if died {
                            self.player_died();
                        }
                    }
                }
                self.toggle_turn();
            }
        }
    }

    fn emit_score(&mut self) {
        self.emit(MatchEvent::ScoreChanged {
            score: self.state.score(),
            kill_count: self.state.kill_count(),
        });
    }

    fn enemy_died(&mut self) {
        self.state.add_score(self.config.kill_bonus);
        self.state.record_kill();
        self.enemy = None;
        self.state.set_input_allowed(false);
        info!(score = self.state.score(), kills = self.state.kill_count(), "enemy defeated");

        self.emit_score();
        self.emit(MatchEvent::EnemyDefeated);
        self.emit(MatchEvent::EnemyReplacementRequested);
        self.sequencer
            .schedule(self.config.timings.death_delay, Step::SpawnEnemy);
    }

    fn player_died(&mut self) {
        self.state.end();
        info!(score = self.state.score(), kills = self.state.kill_count(), "player defeated");
        self.sequencer
            .schedule(self.config.timings.death_delay, Step::GameOver);
    }

    fn spawn_enemy(&mut self) {
        let element = random_element(&mut self.rng);
        let enemy = Character::new(Side::Enemy, &self.config.enemy, Some(element));
        let (health, mana) = (enemy.health(), enemy.mana());
        self.enemy = Some(enemy);
        info!(%element, "enemy spawned");

        self.emit(MatchEvent::EnemySpawned { element });
        self.emit(MatchEvent::HealthChanged { side: Side::Enemy, health });
        self.emit(MatchEvent::ManaChanged { side: Side::Enemy, mana });

        if self.state.is_game_over() {
            return;
        }
        // An enemy that fell on its own turn passes the turn on arrival
        match self.state.active_side() {
            Side::Enemy => self.toggle_turn(),
            Side::Player => self.state.set_input_allowed(true),
        }
    }

    // =========================================================================
    // Turns
    // =========================================================================

    /// Hand the turn to the other side.
    ///
    /// The side becomes active first, then gains one mana. Does nothing
    /// once the match is over.
    fn toggle_turn(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        let active = self.state.flip_turn();
        self.state.set_input_allowed(active.is_player());

        let mana = self.character_mut(active).map(|character| {
            character.add_mana(1);
            character.mana()
        });
        debug!(%active, turn = self.state.turn_number(), "turn changed");

        self.emit(MatchEvent::TurnChanged { active });
        if let Some(mana) = mana {
            self.emit(MatchEvent::ManaChanged { side: active, mana });
        }

        if active == Side::Enemy {
            self.enemy_burns = 0;
            self.sequencer.schedule(Duration::ZERO, Step::EnemyThink);
        }
    }

    fn enemy_turn_live(&self) -> bool {
        !self.state.is_game_over()
            && self.state.active_side() == Side::Enemy
            && self.enemy.is_some()
    }

    fn enemy_think(&mut self) {
        if !self.enemy_turn_live() {
            trace!("enemy turn abandoned");
            return;
        }
        let mana = self.enemy.as_ref().map_or(0, Character::mana);
        let decision = match self.policy.choose(&self.hands[Side::Enemy], mana, &mut self.rng) {
            EnemyDecision::Burn(_) if self.enemy_burns >= MAX_ENEMY_BURNS => {
                warn!(burns = self.enemy_burns, mana, "enemy burn limit reached, skipping");
                EnemyDecision::Skip
            }
            decision => decision,
        };
        self.sequencer
            .schedule(self.config.timings.enemy_turn_delay, Step::EnemyAct(decision));
    }

    fn enemy_act(&mut self, decision: EnemyDecision) {
        if !self.enemy_turn_live() {
            trace!("enemy turn abandoned");
            return;
        }
        match decision {
            EnemyDecision::Play(instance) => {
                if let Some(card) = self.hands[Side::Enemy].get_mut(instance) {
                    card.face_up = true;
                }
                self.emit(MatchEvent::CardRevealed { instance });
                self.sequencer
                    .schedule(self.config.timings.enemy_turn_delay, Step::EnemyPlay(instance));
            }
            EnemyDecision::Burn(instance) => {
                self.enemy_burns += 1;
                self.discard_and_replace(Side::Enemy, instance);
                self.emit(MatchEvent::CardBurned { side: Side::Enemy, instance });
                self.sequencer
                    .wait_until(WaitCondition::HandReady(Side::Enemy), Step::EnemyThink);
            }
            EnemyDecision::Skip => {
                self.emit(MatchEvent::SkipIndicator { visible: true });
                self.sequencer
                    .schedule(self.config.timings.enemy_turn_delay, Step::EnemySkip);
            }
        }
    }

    fn enemy_play(&mut self, instance: InstanceId) {
        if !self.enemy_turn_live() {
            trace!("enemy turn abandoned");
            return;
        }
        let Some(definition) = self.hands[Side::Enemy]
            .get(instance)
            .map(|card| Arc::clone(&card.definition))
        else {
            warn!(card = %instance, "enemy card vanished before play");
            self.toggle_turn();
            return;
        };

        let mana = self.character_mut(Side::Enemy).map(|enemy| {
            enemy.add_mana(-definition.cost);
            enemy.mana()
        });
        if let Some(mana) = mana {
            self.emit(MatchEvent::ManaChanged { side: Side::Enemy, mana });
        }

        let target = EffectResolver::natural_target(&definition, Side::Enemy);
        debug!(card = %definition.title, %target, "enemy plays");
        self.use_card(Side::Enemy, instance, target);
    }
}

impl<P: Presenter> std::fmt::Debug for TurnController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("state", &self.state)
            .field("player", &self.player)
            .field("enemy", &self.enemy)
            .field("sequencer", &self.sequencer)
            .finish()
    }
}
