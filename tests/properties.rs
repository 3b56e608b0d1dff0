//! Invariants checked over many seeds.

mod common;

use std::collections::HashSet;

use common::init_logging;
use crazy_eights::policy::choose_suit;
use crazy_eights::{
    Actor, Card, DECK_SIZE, Game, GameOptions, GamePhase, HAND_SIZE, build_deck, can_play,
};
use proptest::prelude::*;

const MAX_STEPS: usize = 400;

fn visible_cards_are_unique(game: &Game) -> bool {
    let state = game.state();
    let mut seen = HashSet::new();
    state
        .human_hand
        .iter()
        .chain(&state.computer_hand)
        .chain(state.top_discard.iter())
        .all(|card| seen.insert(*card))
}

/// Plays one step for whoever is due to act.
fn step(game: &mut Game) {
    let state = game.state();
    match (state.phase, state.turn) {
        (GamePhase::AwaitingSuitChoice, _) => {
            game.choose_suit(choose_suit(&state.human_hand)).unwrap();
        }
        (GamePhase::AwaitingPlayerMove, Actor::Human) => {
            match state.playable_cards(Actor::Human).first() {
                Some(&card) => {
                    game.play_card(Actor::Human, card).unwrap();
                }
                None => {
                    game.draw_card(Actor::Human).unwrap();
                }
            }
        }
        (GamePhase::AwaitingPlayerMove, Actor::Computer) => {
            game.computer_turn().unwrap();
        }
        (phase, _) => panic!("no move in phase {phase:?}"),
    }
}

proptest! {
    #[test]
    fn every_deal_is_well_formed(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        let state = game.start_game();

        prop_assert_eq!(state.card_count(), DECK_SIZE);
        prop_assert_eq!(state.discard_pile_len, 1);
        prop_assert_eq!(state.human_hand.len(), HAND_SIZE);
        prop_assert_eq!(state.computer_hand.len(), HAND_SIZE);
        let top = state.top_discard.unwrap();
        prop_assert!(!top.is_wild());
        prop_assert_eq!(state.active_suit, Some(top.suit));
        prop_assert!(visible_cards_are_unique(&game));
    }

    #[test]
    fn full_games_conserve_the_deck(seed in any::<u64>()) {
        init_logging();
        let mut game = Game::new(GameOptions::default(), seed);
        game.start_game();

        for _ in 0..MAX_STEPS {
            if game.phase().is_finished() {
                break;
            }
            step(&mut game);

            let state = game.state();
            prop_assert_eq!(state.card_count(), DECK_SIZE);
            prop_assert!(visible_cards_are_unique(&game));
            if state.phase == GamePhase::AwaitingPlayerMove {
                prop_assert!(state.active_suit.is_some());
            }
        }

        let state = game.state();
        match state.winner() {
            Some(Actor::Human) => {
                prop_assert!(state.human_hand.is_empty());
                prop_assert!(!state.computer_hand.is_empty());
            }
            Some(Actor::Computer) => {
                prop_assert!(state.computer_hand.is_empty());
                prop_assert!(!state.human_hand.is_empty());
            }
            None => {
                prop_assert!(!state.human_hand.is_empty());
                prop_assert!(!state.computer_hand.is_empty());
            }
        }
    }
}

#[test]
fn can_play_classifies_every_card() {
    let deck = build_deck();

    for &top in &deck {
        for suit in crazy_eights::Suit::ALL {
            for &card in &deck {
                let expected = card.is_wild() || card.suit == suit || card.rank == top.rank;
                assert_eq!(can_play(card, Some(top), suit), expected, "{card} on {top} ({suit})");
            }
        }
    }
}

#[test]
fn nothing_is_playable_without_a_discard() {
    for card in build_deck() {
        assert!(!can_play(card, None, card.suit));
    }
}

#[test]
fn eights_are_always_playable() {
    let eights: Vec<Card> = build_deck().into_iter().filter(|c| c.is_wild()).collect();
    assert_eq!(eights.len(), 4);

    for top in build_deck() {
        for suit in crazy_eights::Suit::ALL {
            assert!(eights.iter().all(|&eight| can_play(eight, Some(top), suit)));
        }
    }
}
