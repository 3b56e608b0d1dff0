//! Outcome types returned by game transitions.

use crate::card::{Card, Suit};
use crate::game::GameState;

/// Outcome of a successful play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played and the turn passed.
    Played,
    /// The computer played an eight and named this suit; the turn passed.
    WildSuitChosen(Suit),
    /// The human played an eight and must now name a suit.
    WildPendingSuit,
    /// The human emptied their hand.
    WonGame,
    /// The computer emptied its hand.
    LostGame,
}

/// Outcome of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The drawn card can be played; the drawer keeps the turn.
    DrawnPlayable(Card),
    /// The drawn card cannot be played; the turn passed.
    DrawnUnplayable(Card),
    /// The computer drew a playable card and played it straight away.
    DrawnAndPlayed {
        /// The card drawn and played.
        card: Card,
        /// Outcome of the automatic play.
        play: PlayOutcome,
    },
    /// Nothing to draw; the drawer forfeits the turn.
    DrawPileEmptyTurnSkipped,
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    /// The computer played a card from hand.
    Played {
        /// The card played.
        card: Card,
        /// Outcome of the play.
        outcome: PlayOutcome,
    },
    /// The computer drew.
    Drew(DrawOutcome),
}

/// A transition's outcome together with the state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<O> {
    /// Describes what happened.
    pub outcome: O,
    /// Snapshot after the transition.
    pub state: GameState,
}

impl<O> Transition<O> {
    /// Maps the outcome, keeping the state.
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Transition<U> {
        Transition {
            outcome: f(self.outcome),
            state: self.state,
        }
    }
}
