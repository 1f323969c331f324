//! Round result types.

use alloc::vec::Vec;

use crate::player::PlayerId;

/// Result for a single player at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRoundResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// Penalty points from the cards left in hand.
    pub penalty: u32,
    /// Cumulative score after this round.
    pub total_score: u32,
    /// Phase completed this round, if any.
    pub completed_phase: Option<usize>,
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The round number (1-based).
    pub round: u32,
    /// The player who emptied their hand.
    pub went_out: PlayerId,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerRoundResult>,
}
