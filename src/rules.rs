//! Move legality.

use crate::card::{Card, Suit};

/// Returns whether `card` may be played on `top_discard` under `active_suit`.
///
/// An eight is always playable. Any other card must match the active suit or
/// the rank of the top discard. With no discard nothing is playable.
///
/// ```
/// use crazy_eights::card::{Card, Rank, Suit};
/// use crazy_eights::rules::can_play;
///
/// let top = Card::new(Suit::Hearts, Rank::Five);
/// assert!(can_play(Card::new(Suit::Spades, Rank::Five), Some(top), Suit::Hearts));
/// assert!(can_play(Card::new(Suit::Clubs, Rank::Eight), Some(top), Suit::Hearts));
/// assert!(!can_play(Card::new(Suit::Spades, Rank::Six), Some(top), Suit::Hearts));
/// ```
#[must_use]
pub fn can_play(card: Card, top_discard: Option<Card>, active_suit: Suit) -> bool {
    let Some(top) = top_discard else {
        return false;
    };

    card.is_wild() || card.suit == active_suit || card.rank == top.rank
}

/// Yields the cards of `hand` that are currently playable, in hand order.
pub fn playable(
    hand: &[Card],
    top_discard: Option<Card>,
    active_suit: Suit,
) -> impl Iterator<Item = Card> + '_ {
    hand.iter()
        .copied()
        .filter(move |&card| can_play(card, top_discard, active_suit))
}
