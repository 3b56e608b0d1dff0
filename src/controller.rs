//! Turn sequencing between human input and the computer opponent.
//!
//! The controller never sleeps or spawns anything. When the turn passes to
//! the computer it hands out a [`Ticket`]; the host waits
//! [`Ticket::delay`] with whatever timer it has and then calls
//! [`Controller::fire`]. Tickets are tied to the game generation and to the
//! single pending computer turn, so a timer that fires after a restart or a
//! second time is ignored.

use core::time::Duration;

use tracing::debug;

use crate::card::{Card, Suit};
use crate::error::ControllerError;
use crate::game::{Actor, Game, GamePhase, GameState};
use crate::options::GameOptions;
use crate::result::{ComputerMove, DrawOutcome, PlayOutcome, Transition};

/// A scheduled computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    sequence: u64,
    delay: Duration,
}

impl Ticket {
    /// How long the host should wait before firing.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// The game generation the ticket belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// A transition plus the computer turn it scheduled, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch<O> {
    /// The transition that was applied.
    pub transition: Transition<O>,
    /// Set when the computer now holds the turn.
    pub scheduled: Option<Ticket>,
}

/// Drives a [`Game`] on behalf of the human and schedules the computer.
pub struct Controller {
    game: Game,
    pending: Option<Ticket>,
    sequence: u64,
}

impl Controller {
    /// Creates a controller for a new, not yet dealt game.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_game(Game::new(options, seed))
    }

    /// Wraps an existing game.
    ///
    /// If the computer already holds the turn, call [`Controller::schedule`]
    /// to obtain its ticket.
    #[must_use]
    pub const fn with_game(game: Game) -> Self {
        Self {
            game,
            pending: None,
            sequence: 0,
        }
    }

    /// Returns the wrapped game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.game.state()
    }

    /// Returns the computer turn waiting to be fired, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Deals a new game, invalidating any pending computer turn.
    pub fn start_game(&mut self) -> GameState {
        if let Some(stale) = self.pending.take() {
            debug!(generation = stale.generation, "pending computer turn cancelled");
        }
        self.game.start_game()
    }

    /// Schedules the computer if it holds the turn and nothing is pending yet.
    pub fn schedule(&mut self) -> Option<Ticket> {
        if self.pending.is_some() {
            return self.pending;
        }

        let state = self.game.state();
        if state.phase != GamePhase::AwaitingPlayerMove || state.turn != Actor::Computer {
            return None;
        }

        self.sequence += 1;
        let ticket = Ticket {
            generation: self.game.generation(),
            sequence: self.sequence,
            delay: self.game.options.computer_delay,
        };
        debug!(
            generation = ticket.generation,
            sequence = ticket.sequence,
            "computer turn scheduled"
        );
        self.pending = Some(ticket);
        Some(ticket)
    }

    fn dispatch<O>(&mut self, transition: Transition<O>) -> Dispatch<O> {
        let scheduled = self.schedule();
        Dispatch {
            transition,
            scheduled,
        }
    }

    /// Plays a card for the human.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the play.
    pub fn play(&mut self, card: Card) -> Result<Dispatch<PlayOutcome>, ControllerError> {
        let transition = self.game.play_card(Actor::Human, card)?;
        Ok(self.dispatch(transition))
    }

    /// Names the suit after the human played an eight.
    ///
    /// # Errors
    ///
    /// Returns an error if no suit choice is pending.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<Dispatch<Suit>, ControllerError> {
        let transition = self.game.choose_suit(suit)?;
        Ok(self.dispatch(transition))
    }

    /// Draws a card for the human.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the draw.
    pub fn draw(&mut self) -> Result<Dispatch<DrawOutcome>, ControllerError> {
        let transition = self.game.draw_card(Actor::Human)?;
        Ok(self.dispatch(transition))
    }

    /// Runs the computer turn a ticket was issued for.
    ///
    /// Returns `Ok(None)` without touching the game when `ticket` is not the
    /// pending one.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the computer's move.
    pub fn fire(
        &mut self,
        ticket: Ticket,
    ) -> Result<Option<Dispatch<ComputerMove>>, ControllerError> {
        if self.pending != Some(ticket) || ticket.generation != self.game.generation() {
            debug!(
                generation = ticket.generation,
                sequence = ticket.sequence,
                "stale computer turn ignored"
            );
            return Ok(None);
        }

        self.pending = None;
        let transition = self.game.computer_turn()?;
        Ok(Some(self.dispatch(transition)))
    }
}
