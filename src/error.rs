//! Error types for game operations.

use thiserror::Error;

/// Broad classification of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The move itself is not allowed: wrong card, wrong owner, wrong turn.
    IllegalMove,
    /// The operation is not valid in the current phase.
    IllegalState,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game phase for playing a card.
    #[error("invalid game phase for playing a card")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The card does not match the active suit or the top discard's rank.
    #[error("card does not match the active suit or top rank")]
    CardNotPlayable,
}

impl PlayError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::IllegalState,
            Self::NotYourTurn | Self::CardNotInHand | Self::CardNotPlayable => {
                ErrorKind::IllegalMove
            }
        }
    }
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game phase for drawing.
    #[error("invalid game phase for drawing")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
}

impl DrawError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::IllegalState,
            Self::NotYourTurn => ErrorKind::IllegalMove,
        }
    }
}

impl From<DrawError> for PlayError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::InvalidState => Self::InvalidState,
            DrawError::NotYourTurn => Self::NotYourTurn,
        }
    }
}

/// Errors that can occur when naming a suit after a wild play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitChoiceError {
    /// No suit choice is pending.
    #[error("no suit choice is pending")]
    InvalidState,
}

impl SuitChoiceError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::IllegalState
    }
}

/// Errors that can occur when laying out a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The cards do not add up to a full deck.
    #[error("cards do not add up to a full deck")]
    WrongCardCount,
    /// The same card appears more than once.
    #[error("duplicate card")]
    DuplicateCard,
    /// Every remaining card is an eight, so no starting discard exists.
    #[error("no non-wild card left to start the discard pile")]
    NoStartingCard,
    /// The discard pile is empty.
    #[error("discard pile is empty")]
    EmptyDiscardPile,
    /// A player's hand is empty.
    #[error("player hand is empty")]
    EmptyHand,
}

/// Errors surfaced by the [`Controller`](crate::controller::Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// A play was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// A draw was rejected.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A suit choice was rejected.
    #[error(transparent)]
    SuitChoice(#[from] SuitChoiceError),
}

impl ControllerError {
    /// Returns the kind of the wrapped error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::Play(err) => err.kind(),
            Self::Draw(err) => err.kind(),
            Self::SuitChoice(err) => err.kind(),
        }
    }
}
