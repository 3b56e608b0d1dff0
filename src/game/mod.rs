//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use tracing::info;

use crate::card::{Card, build_deck};
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::shuffle::{RandomSource, RngSource, shuffle};

mod actions;
pub mod state;
pub mod table;

pub use state::{Actor, GamePhase, GameState};
pub use table::Table;

/// A Crazy Eights engine for one human against the computer.
///
/// The game owns the table and the random source used to shuffle. Every
/// change goes through a named transition (`start_game`, `play_card`,
/// `choose_suit`, `draw_card`, `computer_turn`); a rejected transition leaves
/// the game untouched.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    table: Table,
    source: Box<dyn RandomSource + Send>,
    generation: u64,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Nothing is dealt until [`Game::start_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{Game, GameOptions, GamePhase};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state().phase, GamePhase::NotStarted);
    ///
    /// let state = game.start_game();
    /// assert_eq!(state.phase, GamePhase::AwaitingPlayerMove);
    /// assert_eq!(state.card_count(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, Box::new(RngSource::seeded(seed)))
    }

    /// Creates a new game that shuffles with `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: Box<dyn RandomSource + Send>) -> Self {
        Self {
            options,
            table: Table::empty(),
            source,
            generation: 0,
        }
    }

    /// Resumes a game from an explicit layout.
    ///
    /// `seed` drives the shuffles of any later [`Game::start_game`].
    #[must_use]
    pub fn from_table(options: GameOptions, seed: u64, table: Table) -> Self {
        let mut game = Self::new(options, seed);
        game.install(table);
        game
    }

    fn install(&mut self, table: Table) -> GameState {
        self.table = table;
        self.generation += 1;
        let state = self.state();
        info!(
            generation = self.generation,
            top = ?state.top_discard,
            "game started"
        );
        state
    }

    /// Deals a new game from a freshly built and shuffled deck.
    ///
    /// Any previous game is discarded.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly built deck always deals"
    )]
    pub fn start_game(&mut self) -> GameState {
        let deck = shuffle(build_deck(), self.source.as_mut());
        let table = Table::deal(deck).expect("a full deck always leaves a non-wild starter");
        self.install(table)
    }

    /// Deals a new game from `deck` exactly as ordered, front to back.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` is not exactly the 52 distinct cards.
    pub fn start_game_with_deck(&mut self, deck: Vec<Card>) -> Result<GameState, SetupError> {
        let table = Table::deal(deck)?;
        Ok(self.install(table))
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            phase: self.table.phase,
            turn: self.table.turn,
            human_hand: self.table.human.clone(),
            computer_hand: self.table.computer.clone(),
            top_discard: self.table.top_discard(),
            active_suit: self.table.active_suit,
            draw_pile_len: self.table.draw_pile.len(),
            discard_pile_len: self.table.discard_pile.len(),
            generation: self.generation,
        }
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.table.phase
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Actor {
        self.table.turn
    }

    /// Returns how many times a game has been (re)initialised.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.table.draw_pile.len()
    }
}
