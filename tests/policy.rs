//! Computer opponent policy tests.

mod common;

use common::{card, game_from, layout};
use crazy_eights::Rank::{Eight, Five, King, Nine, Three, Two};
use crazy_eights::Suit::{Clubs, Diamonds, Hearts, Spades};
use crazy_eights::policy::choose_suit;
use crazy_eights::{Actor, Game, GameOptions, Intent, choose_move, request_computer_move};

#[test]
fn prefers_a_regular_card_over_an_eight() {
    let hand = [card(Spades, Eight), card(Spades, Five)];
    let intent = choose_move(&hand, Some(card(Hearts, Five)), Hearts);

    assert_eq!(
        intent,
        Intent::Play {
            card: card(Spades, Five),
            wild_suit: None,
        }
    );
}

#[test]
fn plays_the_first_playable_card_in_hand_order() {
    let hand = [card(Hearts, King), card(Spades, Five), card(Hearts, Nine)];
    let intent = choose_move(&hand, Some(card(Hearts, Five)), Hearts);

    assert_eq!(
        intent,
        Intent::Play {
            card: card(Hearts, King),
            wild_suit: None,
        }
    );
}

#[test]
fn plays_an_eight_only_when_nothing_else_fits() {
    let hand = [
        card(Spades, Eight),
        card(Clubs, Two),
        card(Clubs, Three),
        card(Diamonds, King),
    ];
    let intent = choose_move(&hand, Some(card(Hearts, Five)), Hearts);

    assert_eq!(
        intent,
        Intent::Play {
            card: card(Spades, Eight),
            wild_suit: Some(Clubs),
        }
    );
}

#[test]
fn suit_ties_follow_enumeration_order() {
    let hand = [card(Spades, Eight), card(Clubs, Two), card(Diamonds, King)];
    let intent = choose_move(&hand, Some(card(Hearts, Five)), Hearts);

    assert_eq!(
        intent,
        Intent::Play {
            card: card(Spades, Eight),
            wild_suit: Some(Diamonds),
        }
    );
}

#[test]
fn played_eight_is_not_counted_but_others_are() {
    let hand = [card(Spades, Eight), card(Diamonds, Eight), card(Diamonds, Two)];
    let intent = choose_move(&hand, Some(card(Hearts, Five)), Hearts);

    assert_eq!(
        intent,
        Intent::Play {
            card: card(Spades, Eight),
            wild_suit: Some(Diamonds),
        }
    );
}

#[test]
fn draws_when_nothing_is_playable() {
    let hand = [card(Clubs, Two), card(Diamonds, King)];
    assert_eq!(
        choose_move(&hand, Some(card(Hearts, Five)), Hearts),
        Intent::Draw
    );
    assert_eq!(choose_move(&hand, None, Clubs), Intent::Draw);
    assert_eq!(choose_move(&[], Some(card(Hearts, Five)), Hearts), Intent::Draw);
}

#[test]
fn choose_suit_counts_the_hand() {
    assert_eq!(choose_suit(&[]), Hearts);
    assert_eq!(
        choose_suit(&[
            card(Hearts, Two),
            card(Spades, Two),
            card(Spades, Three),
            card(Spades, King),
        ]),
        Spades
    );
    assert_eq!(
        choose_suit(&[
            card(Spades, Two),
            card(Clubs, Two),
            card(Diamonds, Two),
            card(Hearts, Two),
        ]),
        Hearts
    );
}

#[test]
fn request_computer_move_only_answers_on_the_computers_turn() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(request_computer_move(&game.state()), None);

    let table = layout(
        &[card(Clubs, Two)],
        &[card(Diamonds, King), card(Hearts, Nine)],
        card(Hearts, Five),
        &[],
        Actor::Human,
    );
    let game = game_from(table);
    assert_eq!(request_computer_move(&game.state()), None);

    let table = layout(
        &[card(Clubs, Two)],
        &[card(Diamonds, King), card(Hearts, Nine)],
        card(Hearts, Five),
        &[],
        Actor::Computer,
    );
    let game = game_from(table);
    assert_eq!(
        request_computer_move(&game.state()),
        Some(Intent::Play {
            card: card(Hearts, Nine),
            wild_suit: None,
        })
    );
}
