//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when applying an action.
///
/// A rejected action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game phase for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player already drew this turn.
    #[error("already drew this turn")]
    AlreadyDrawn,
    /// The player has to draw before acting.
    #[error("must draw before acting")]
    MustDrawFirst,
    /// Nothing to take from the discard pile.
    #[error("discard pile is empty")]
    EmptyDiscardPile,
    /// Neither the deck nor the discard pile can supply a card.
    #[error("no cards left to draw")]
    DeckExhausted,
    /// The card is not in the acting player's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The same card was submitted more than once.
    #[error("card submitted more than once")]
    DuplicateCard,
    /// The submitted cards do not satisfy the phase.
    #[error("cards do not satisfy the phase")]
    PhaseNotSatisfied,
    /// The phase was already completed this round.
    #[error("phase already completed this round")]
    PhaseAlreadyCompleted,
    /// The phase has to be completed before extending groups.
    #[error("phase not completed this round")]
    PhaseNotCompleted,
    /// The target group does not exist.
    #[error("group not found")]
    GroupNotFound,
    /// The card does not fit the target group.
    #[error("card cannot extend this group")]
    CannotExtend,
    /// The action was scheduled against a match that has since been reset.
    #[error("action belongs to a previous match")]
    StaleMatch,
    /// A restored state does not describe a playable match.
    #[error("state is not a playable match")]
    InvalidSnapshot,
}

/// Errors in the game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Hand size is zero.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// The deck is too small to deal a round.
    #[error("dealing needs {needed} cards but the deck holds {available}")]
    NotEnoughCards {
        /// Cards needed to deal a round.
        needed: usize,
        /// Cards in a deck.
        available: usize,
    },
}
