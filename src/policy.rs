//! Computer opponent decision policy.
//!
//! Everything here is a pure function of the cards it is given: no state, no
//! randomness, no delay. Scheduling the computer's turn is the controller's job.

use crate::card::{Card, Suit};
use crate::game::{Actor, GamePhase, GameState};
use crate::rules::playable;

/// An action the computer wants to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play a card from hand.
    Play {
        /// The card to play.
        card: Card,
        /// Suit to name when `card` is an eight.
        wild_suit: Option<Suit>,
    },
    /// Draw from the draw pile.
    Draw,
}

/// Picks the computer's move for the given hand.
///
/// The first playable non-eight in hand order wins. An eight is only played
/// when nothing else is playable, and the suit to name is chosen from the
/// hand that remains after it leaves. With no playable card the answer is
/// [`Intent::Draw`].
#[must_use]
pub fn choose_move(hand: &[Card], top_discard: Option<Card>, active_suit: Suit) -> Intent {
    let mut wild = None;

    for card in playable(hand, top_discard, active_suit) {
        if !card.is_wild() {
            return Intent::Play {
                card,
                wild_suit: None,
            };
        }
        if wild.is_none() {
            wild = Some(card);
        }
    }

    let Some(card) = wild else {
        return Intent::Draw;
    };

    let mut remaining = hand.to_vec();
    if let Some(position) = remaining.iter().position(|&c| c == card) {
        remaining.remove(position);
    }

    Intent::Play {
        card,
        wild_suit: Some(choose_suit(&remaining)),
    }
}

/// Names the suit held most often in `hand`.
///
/// Ties go to the suit that comes first in [`Suit::ALL`]; an empty hand
/// names hearts.
#[must_use]
pub fn choose_suit(hand: &[Card]) -> Suit {
    let mut counts = [0usize; 4];
    for card in hand {
        counts[card.suit.index()] += 1;
    }

    let mut best = Suit::ALL[0];
    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}

/// Returns the computer's intent for a snapshot, if it is the computer's move.
///
/// `None` when the game is not awaiting a move or the human holds the turn.
#[must_use]
pub fn request_computer_move(state: &GameState) -> Option<Intent> {
    if state.phase != GamePhase::AwaitingPlayerMove || state.turn != Actor::Computer {
        return None;
    }

    let active_suit = state.active_suit?;
    Some(choose_move(
        &state.computer_hand,
        state.top_discard,
        active_suit,
    ))
}
