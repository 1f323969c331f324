//! Actions a caller can submit to the engine.

use alloc::vec::Vec;

use crate::card::CardId;
use crate::group::GroupKind;
use crate::player::PlayerId;

/// A single engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Take the top card of the deck.
    DrawFromDeck,
    /// Take the top card of the discard pile.
    DrawFromDiscard,
    /// Discard a card from hand, ending the turn.
    Discard(CardId),
    /// Lay down the current phase from the given hand cards.
    CompletePhase(Vec<CardId>),
    /// Add a card from hand to a laid-down group.
    PlayOnGroup {
        /// The card to play.
        card: CardId,
        /// Owner of the target group.
        target: PlayerId,
        /// Kind of the target group.
        kind: GroupKind,
        /// Index of the group among the owner's groups of that kind.
        index: usize,
    },
    /// Deal the next round.
    StartNextRound,
    /// Start a fresh match.
    ResetMatch,
}

impl Action {
    /// Returns whether this action is part of a player's turn, as opposed to
    /// a match-level action anyone may trigger.
    #[must_use]
    pub const fn is_turn_action(&self) -> bool {
        !matches!(self, Self::StartNextRound | Self::ResetMatch)
    }
}
