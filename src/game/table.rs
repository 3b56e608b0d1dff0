//! The card layout that every transition mutates.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Suit};
use crate::error::SetupError;
use crate::policy;
use crate::result::PlayOutcome;
use crate::rules::can_play;

use super::state::{Actor, GamePhase};

/// Draw pile, discard pile, both hands, and the turn bookkeeping.
///
/// Every card of the deck lives in exactly one of the four containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(super) draw_pile: Vec<Card>,
    pub(super) discard_pile: Vec<Card>,
    pub(super) human: Vec<Card>,
    pub(super) computer: Vec<Card>,
    pub(super) active_suit: Option<Suit>,
    pub(super) turn: Actor,
    pub(super) phase: GamePhase,
}

fn ensure_full_deck<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), SetupError> {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0;

    for card in cards {
        let slot = &mut seen[card.index()];
        if *slot {
            return Err(SetupError::DuplicateCard);
        }
        *slot = true;
        count += 1;
    }

    if count != DECK_SIZE {
        return Err(SetupError::WrongCardCount);
    }

    Ok(())
}

impl Table {
    /// A table before any deal.
    pub(super) const fn empty() -> Self {
        Self {
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            human: Vec::new(),
            computer: Vec::new(),
            active_suit: None,
            turn: Actor::Human,
            phase: GamePhase::NotStarted,
        }
    }

    /// Deals a fresh game from `deck`, taken front to back.
    ///
    /// The human receives the first eight cards and the computer the next
    /// eight. The first non-eight among the rest starts the discard pile; any
    /// eights scanned past stay in the draw pile. The human moves first.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` is not exactly the 52 distinct cards.
    pub fn deal(mut deck: Vec<Card>) -> Result<Self, SetupError> {
        ensure_full_deck(deck.iter())?;

        let mut rest = deck.split_off(HAND_SIZE * 2);
        let computer = deck.split_off(HAND_SIZE);
        let human = deck;

        let position = rest
            .iter()
            .position(|card| !card.is_wild())
            .ok_or(SetupError::NoStartingCard)?;
        let starter = rest.remove(position);

        Ok(Self {
            draw_pile: rest,
            discard_pile: alloc::vec![starter],
            human,
            computer,
            active_suit: Some(starter.suit),
            turn: Actor::Human,
            phase: GamePhase::AwaitingPlayerMove,
        })
    }

    /// Lays out a game in progress from explicit piles.
    ///
    /// The last card of `draw_pile` is drawn first and the last card of
    /// `discard_pile` is the top discard.
    ///
    /// # Errors
    ///
    /// Returns an error if the piles together are not exactly the 52
    /// distinct cards, if either hand is empty, or if the discard pile is
    /// empty.
    pub fn from_piles(
        human: Vec<Card>,
        computer: Vec<Card>,
        draw_pile: Vec<Card>,
        discard_pile: Vec<Card>,
        active_suit: Suit,
        turn: Actor,
    ) -> Result<Self, SetupError> {
        if human.is_empty() || computer.is_empty() {
            return Err(SetupError::EmptyHand);
        }
        if discard_pile.is_empty() {
            return Err(SetupError::EmptyDiscardPile);
        }
        ensure_full_deck(
            human
                .iter()
                .chain(&computer)
                .chain(&draw_pile)
                .chain(&discard_pile),
        )?;

        Ok(Self {
            draw_pile,
            discard_pile,
            human,
            computer,
            active_suit: Some(active_suit),
            turn,
            phase: GamePhase::AwaitingPlayerMove,
        })
    }

    pub(super) fn hand(&self, actor: Actor) -> &[Card] {
        match actor {
            Actor::Human => &self.human,
            Actor::Computer => &self.computer,
        }
    }

    const fn hand_mut(&mut self, actor: Actor) -> &mut Vec<Card> {
        match actor {
            Actor::Human => &mut self.human,
            Actor::Computer => &mut self.computer,
        }
    }

    pub(super) fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub(super) fn is_playable(&self, card: Card) -> bool {
        self.active_suit
            .is_some_and(|suit| can_play(card, self.top_discard(), suit))
    }

    pub(super) const fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Draws the top card into `actor`'s hand.
    pub(super) fn draw_into(&mut self, actor: Actor) -> Option<Card> {
        let card = self.draw_pile.pop()?;
        self.hand_mut(actor).push(card);
        Some(card)
    }

    /// Moves the card at `position` in `actor`'s hand onto the discard pile
    /// and resolves what follows. Legality must already be checked.
    pub(super) fn apply_play(&mut self, actor: Actor, position: usize) -> PlayOutcome {
        let card = self.hand_mut(actor).remove(position);
        self.discard_pile.push(card);

        if self.hand(actor).is_empty() {
            return match actor {
                Actor::Human => {
                    self.phase = GamePhase::FinishedWon;
                    PlayOutcome::WonGame
                }
                Actor::Computer => {
                    self.phase = GamePhase::FinishedLost;
                    PlayOutcome::LostGame
                }
            };
        }

        if card.is_wild() {
            return match actor {
                Actor::Human => {
                    self.phase = GamePhase::AwaitingSuitChoice;
                    PlayOutcome::WildPendingSuit
                }
                Actor::Computer => {
                    let suit = policy::choose_suit(&self.computer);
                    self.active_suit = Some(suit);
                    self.turn = Actor::Human;
                    PlayOutcome::WildSuitChosen(suit)
                }
            };
        }

        self.active_suit = Some(card.suit);
        self.pass_turn();
        PlayOutcome::Played
    }
}
