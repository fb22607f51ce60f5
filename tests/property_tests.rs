//! Property tests for the rules core.
//!
//! Covers value bounds under arbitrary operation sequences, the
//! no-mutation guarantee of rejected plays, elemental halving, and deck
//! regeneration.

use std::sync::Arc;

use proptest::prelude::*;

use demon_duel::cards::{CardCatalog, CardDefinition, CardId};
use demon_duel::core::{Character, CharacterConfig, GameRng, MatchConfig, Side};
use demon_duel::effects::{EffectResolver, Element};
use demon_duel::turn::{InstantClock, MatchBuilder};
use demon_duel::zones::Deck;

/// One arbitrary mutation of a character.
#[derive(Clone, Debug)]
enum CharacterOp {
    AddHealth(i32),
    SetHealth(i32),
    AddMana(i32),
    SetMana(i32),
    Mirror(bool),
    Hit { damage: i32, fire: bool },
}

fn character_op() -> impl Strategy<Value = CharacterOp> {
    prop_oneof![
        (-50i32..50).prop_map(CharacterOp::AddHealth),
        (-50i32..50).prop_map(CharacterOp::SetHealth),
        (-10i32..10).prop_map(CharacterOp::AddMana),
        (-10i32..10).prop_map(CharacterOp::SetMana),
        any::<bool>().prop_map(CharacterOp::Mirror),
        (0i32..30, any::<bool>()).prop_map(|(damage, fire)| CharacterOp::Hit { damage, fire }),
    ]
}

/// One arbitrary player input.
#[derive(Clone, Debug)]
enum PlayerInput {
    Drop { slot: usize, on_enemy: bool },
    Burn { slot: usize },
    Skip,
}

fn player_input() -> impl Strategy<Value = PlayerInput> {
    prop_oneof![
        3 => (0usize..3, any::<bool>()).prop_map(|(slot, on_enemy)| PlayerInput::Drop { slot, on_enemy }),
        1 => (0usize..3).prop_map(|slot| PlayerInput::Burn { slot }),
        1 => Just(PlayerInput::Skip),
    ]
}

fn in_bounds(character: &Character) -> bool {
    (0..=character.max_health()).contains(&character.health())
        && (0..=character.max_mana()).contains(&character.mana())
}

proptest! {
    /// Health and mana stay within [0, max] whatever happens to a character.
    #[test]
    fn prop_character_values_bounded(
        ops in prop::collection::vec(character_op(), 0..60),
        fire_type in any::<bool>(),
    ) {
        let element = if fire_type { Element::Fire } else { Element::Ice };
        let mut character = Character::new(Side::Enemy, &CharacterConfig::new(10, 5, 1), Some(element));

        for op in ops {
            match op {
                CharacterOp::AddHealth(v) => { character.add_health(v); }
                CharacterOp::SetHealth(v) => { character.set_health(v); }
                CharacterOp::AddMana(v) => character.add_mana(v),
                CharacterOp::SetMana(v) => character.set_mana(v),
                CharacterOp::Mirror(on) => character.set_mirror(on),
                CharacterOp::Hit { damage, fire } => {
                    let card = CardDefinition::new(CardId::new(1), "Hit").with_damage(damage);
                    let card = if fire { card.fire() } else { card.ice() };
                    character.receive_hit(&card);
                }
            }
            prop_assert!(in_bounds(&character), "out of bounds: {:?}", character);
        }
    }

    /// A matching element halves damage, rounding down; anything else is untouched.
    #[test]
    fn prop_elemental_halving(damage in 0i32..1000) {
        let fire = CardDefinition::new(CardId::new(1), "Burn").with_damage(damage).fire();
        prop_assert_eq!(EffectResolver::mitigated_damage(&fire, Some(Element::Fire)), damage / 2);
        prop_assert_eq!(EffectResolver::mitigated_damage(&fire, Some(Element::Ice)), damage);
        prop_assert_eq!(EffectResolver::mitigated_damage(&fire, None), damage);
    }

    /// Drawing one past a full deck regenerates it and never fails.
    #[test]
    fn prop_deck_exhaustion_regenerates(
        counts in prop::collection::vec(1u32..5, 1..6),
        seed in any::<u64>(),
    ) {
        let catalog = CardCatalog::from_definitions(
            counts
                .iter()
                .enumerate()
                .map(|(i, &count)| CardDefinition::new(CardId::new(i as u32), format!("Card {}", i)).with_count(count)),
        )
        .unwrap();
        let total = catalog.total_weight();
        let mut deck = Deck::new(Arc::new(catalog), GameRng::new(seed));

        for _ in 0..total {
            deck.draw();
        }
        prop_assert_eq!(deck.generation(), 1);
        prop_assert_eq!(deck.remaining(), 0);

        deck.draw();
        prop_assert_eq!(deck.generation(), 2);
        prop_assert_eq!(deck.remaining(), total - 1);
    }

    /// Playing a card that costs more than the player's mana changes nothing.
    #[test]
    fn prop_unaffordable_play_is_noop(
        cost in 1i32..=5,
        mana_gap in 1i32..=5,
        on_enemy in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let card = CardDefinition::new(CardId::new(1), "Costly").with_cost(cost).with_damage(4).with_count(5);
        let catalog = CardCatalog::from_definitions([card]).unwrap();
        let mut game = MatchBuilder::new(MatchConfig::default().with_seed(seed))
            .with_catalog(catalog)
            .with_clock(InstantClock)
            .build()
            .unwrap();
        game.run_until_idle();

        let mana = (cost - mana_gap).max(0);
        game.player_mut().set_mana(mana);
        let player_before = game.player().clone();
        let enemy_before = game.enemy().cloned();
        let hand_before = game.hand(Side::Player).ids();
        let events_before = game.presenter().len();

        let target = if on_enemy { Side::Enemy } else { Side::Player };
        let card = hand_before[0];
        prop_assert!(!game.player_attempts_drop(card, target));

        prop_assert_eq!(game.player(), &player_before);
        prop_assert_eq!(game.enemy().cloned(), enemy_before);
        prop_assert_eq!(game.hand(Side::Player).ids(), hand_before);
        prop_assert_eq!(game.state().active_side(), Side::Player);
        prop_assert_eq!(game.presenter().len(), events_before);
    }

    /// Random play against the default enemy keeps every invariant.
    #[test]
    fn prop_random_match_invariants(
        inputs in prop::collection::vec(player_input(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut game = MatchBuilder::new(MatchConfig::default().with_seed(seed))
            .with_clock(InstantClock)
            .build()
            .unwrap();
        game.run_until_idle();

        let mut last_score = 0;
        let mut last_kills = 0;

        for input in inputs {
            if game.state().is_game_over() {
                break;
            }
            prop_assert!(game.state().is_player_turn());
            prop_assert!(game.state().input_allowed());

            let ids = game.hand(Side::Player).ids();
            match input {
                PlayerInput::Drop { slot, on_enemy } => {
                    let target = if on_enemy { Side::Enemy } else { Side::Player };
                    game.player_attempts_drop(ids[slot % ids.len()], target);
                }
                PlayerInput::Burn { slot } => {
                    prop_assert!(game.player_burns_card(ids[slot % ids.len()]));
                }
                PlayerInput::Skip => {
                    prop_assert!(game.player_requests_skip_turn());
                }
            }
            game.run_until_idle();

            prop_assert!(in_bounds(game.player()));
            if let Some(enemy) = game.enemy() {
                prop_assert!(in_bounds(enemy));
            }
            for side in Side::ALL {
                prop_assert_eq!(game.hand(side).len(), 3);
                prop_assert!(game.hand(side).is_ready());
            }
            prop_assert!(game.state().score() >= last_score);
            prop_assert!(game.state().kill_count() >= last_kills);
            last_score = game.state().score();
            last_kills = game.state().kill_count();
        }
    }
}
