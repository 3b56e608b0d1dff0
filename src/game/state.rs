//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::rules::playable;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// No game has been dealt yet.
    NotStarted,
    /// Waiting for the turn owner to play or draw.
    AwaitingPlayerMove,
    /// The human played an eight and must name a suit.
    AwaitingSuitChoice,
    /// The human emptied their hand.
    FinishedWon,
    /// The computer emptied its hand.
    FinishedLost,
}

impl GamePhase {
    /// Returns whether the phase is terminal.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::FinishedWon | Self::FinishedLost)
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// The person at the table.
    Human,
    /// The computer opponent.
    Computer,
}

impl Actor {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Read-only snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase.
    pub phase: GamePhase,
    /// Player entitled to act.
    pub turn: Actor,
    /// The human's hand.
    pub human_hand: Vec<Card>,
    /// The computer's hand.
    pub computer_hand: Vec<Card>,
    /// Most recently played card.
    pub top_discard: Option<Card>,
    /// Suit a non-wild play must match. `None` only before the first deal.
    pub active_suit: Option<Suit>,
    /// Cards left in the draw pile.
    pub draw_pile_len: usize,
    /// Cards in the discard pile.
    pub discard_pile_len: usize,
    /// Counter bumped on every (re)initialisation.
    pub generation: u64,
}

impl GameState {
    /// Returns the given player's hand.
    #[must_use]
    pub fn hand(&self, actor: Actor) -> &[Card] {
        match actor {
            Actor::Human => &self.human_hand,
            Actor::Computer => &self.computer_hand,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Returns the winner, if the game has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<Actor> {
        match self.phase {
            GamePhase::FinishedWon => Some(Actor::Human),
            GamePhase::FinishedLost => Some(Actor::Computer),
            _ => None,
        }
    }

    /// Total cards across all piles and hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile_len
            + self.discard_pile_len
            + self.human_hand.len()
            + self.computer_hand.len()
    }

    /// Cards the given player could legally play right now, in hand order.
    ///
    /// Empty before the first deal.
    #[must_use]
    pub fn playable_cards(&self, actor: Actor) -> Vec<Card> {
        self.active_suit.map_or_else(Vec::new, |suit| {
            playable(self.hand(actor), self.top_discard, suit).collect()
        })
    }
}
