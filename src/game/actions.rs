use tracing::{debug, info};

use crate::card::{Card, Suit};
use crate::error::{DrawError, PlayError, SuitChoiceError};
use crate::policy::{self, Intent};
use crate::result::{ComputerMove, DrawOutcome, PlayOutcome, Transition};

use super::{Actor, Game, GamePhase};

impl Game {
    fn ensure_move(&self, actor: Actor) -> Result<(), PlayError> {
        if self.table.phase != GamePhase::AwaitingPlayerMove {
            return Err(PlayError::InvalidState);
        }

        if self.table.turn != actor {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    fn transition<O>(&self, outcome: O) -> Transition<O> {
        if self.table.phase.is_finished() {
            info!(
                generation = self.generation,
                phase = ?self.table.phase,
                "game finished"
            );
        }

        Transition {
            outcome,
            state: self.state(),
        }
    }

    /// Plays `card` from `actor`'s hand onto the discard pile.
    ///
    /// Emptying the hand ends the game on the spot. An eight played by the
    /// human leaves the game waiting for [`Game::choose_suit`]; an eight
    /// played by the computer names its suit immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, it is not
    /// `actor`'s turn, `actor` does not hold `card`, or `card` does not match
    /// the active suit or the top discard's rank.
    pub fn play_card(
        &mut self,
        actor: Actor,
        card: Card,
    ) -> Result<Transition<PlayOutcome>, PlayError> {
        self.ensure_move(actor)?;

        let position = self
            .table
            .hand(actor)
            .iter()
            .position(|&held| held == card)
            .ok_or(PlayError::CardNotInHand)?;

        if !self.table.is_playable(card) {
            return Err(PlayError::CardNotPlayable);
        }

        let outcome = self.table.apply_play(actor, position);
        debug!(
            generation = self.generation,
            ?actor,
            %card,
            ?outcome,
            "card played"
        );

        Ok(self.transition(outcome))
    }

    /// Names the active suit after the human played an eight.
    ///
    /// The turn then passes to the computer.
    ///
    /// # Errors
    ///
    /// Returns an error if no suit choice is pending.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<Transition<Suit>, SuitChoiceError> {
        if self.table.phase != GamePhase::AwaitingSuitChoice {
            return Err(SuitChoiceError::InvalidState);
        }

        self.table.active_suit = Some(suit);
        self.table.turn = Actor::Computer;
        self.table.phase = GamePhase::AwaitingPlayerMove;
        debug!(generation = self.generation, %suit, "suit chosen");

        Ok(self.transition(suit))
    }

    /// Draws the top card of the draw pile into `actor`'s hand.
    ///
    /// An empty draw pile forfeits the turn without moving any card. A drawn
    /// card that cannot be played passes the turn. A playable one keeps the
    /// turn for the human, and is played at once by the computer.
    ///
    /// Drawing is accepted even when `actor` holds a playable card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move or it is not
    /// `actor`'s turn.
    pub fn draw_card(&mut self, actor: Actor) -> Result<Transition<DrawOutcome>, DrawError> {
        self.ensure_move(actor).map_err(|err| match err {
            PlayError::NotYourTurn => DrawError::NotYourTurn,
            _ => DrawError::InvalidState,
        })?;

        let Some(card) = self.table.draw_into(actor) else {
            self.table.pass_turn();
            debug!(generation = self.generation, ?actor, "draw pile empty, turn skipped");
            return Ok(self.transition(DrawOutcome::DrawPileEmptyTurnSkipped));
        };

        let outcome = match (self.table.is_playable(card), actor) {
            (false, _) => {
                self.table.pass_turn();
                DrawOutcome::DrawnUnplayable(card)
            }
            (true, Actor::Human) => DrawOutcome::DrawnPlayable(card),
            (true, Actor::Computer) => {
                let position = self.table.computer.len() - 1;
                let play = self.table.apply_play(actor, position);
                DrawOutcome::DrawnAndPlayed { card, play }
            }
        };
        debug!(
            generation = self.generation,
            ?actor,
            %card,
            ?outcome,
            "card drawn"
        );

        Ok(self.transition(outcome))
    }

    /// Lets the computer take its turn according to the opponent policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move or it is the
    /// human's turn.
    pub fn computer_turn(&mut self) -> Result<Transition<ComputerMove>, PlayError> {
        self.ensure_move(Actor::Computer)?;

        let state = self.state();
        let intent = policy::request_computer_move(&state).ok_or(PlayError::InvalidState)?;
        debug!(generation = self.generation, ?intent, "computer decided");

        match intent {
            Intent::Play { card, .. } => Ok(self
                .play_card(Actor::Computer, card)?
                .map(|outcome| ComputerMove::Played { card, outcome })),
            Intent::Draw => Ok(self.draw_card(Actor::Computer)?.map(ComputerMove::Drew)),
        }
    }
}
