//! A two-player Crazy Eights engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, both hands, and the
//! discard pile, and applies every play, draw, and wild-suit choice as a single
//! transition. The computer opponent is a pure [`policy`], and the
//! [`Controller`] schedules its turns.
//!
//! # Example
//!
//! ```
//! use crazy_eights::{Actor, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let state = game.start_game();
//!
//! match state.playable_cards(Actor::Human).first() {
//!     Some(&card) => {
//!         game.play_card(Actor::Human, card).unwrap();
//!     }
//!     None => {
//!         game.draw_card(Actor::Human).unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod controller;
pub mod error;
pub mod game;
pub mod options;
pub mod policy;
pub mod result;
pub mod rules;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, build_deck};
pub use controller::{Controller, Dispatch, Ticket};
pub use error::{
    ControllerError, DrawError, ErrorKind, PlayError, SetupError, SuitChoiceError,
};
pub use game::{Actor, Game, GamePhase, GameState, Table};
pub use options::GameOptions;
pub use policy::{Intent, choose_move, request_computer_move};
pub use result::{ComputerMove, DrawOutcome, PlayOutcome, Transition};
pub use rules::can_play;
pub use shuffle::{RandomSource, RngSource, shuffle};
