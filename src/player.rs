//! Player state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::phase::{LaidDown, Phase, phase};

/// Player identifier (seat index).
pub type PlayerId = u8;

/// A player's state within a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    is_computer: bool,
    /// Cards in hand, in a stable order.
    hand: Vec<Card>,
    /// Index into the phase catalog.
    phase_index: usize,
    /// Phases completed in earlier rounds.
    completed_phases: Vec<usize>,
    /// Cumulative score across rounds.
    score: u32,
    /// Groups laid down this round. Present exactly when the phase was
    /// completed this round.
    laid_down: Option<LaidDown>,
}

impl Player {
    /// Creates a player with an empty hand at the first phase.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_computer: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_computer,
            hand: Vec::new(),
            phase_index: 0,
            completed_phases: Vec::new(),
            score: 0,
            laid_down: None,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the computer plays this seat.
    #[must_use]
    pub const fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the index of the phase the player is working on.
    #[must_use]
    pub const fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Returns the phase the player is working on, or `None` once every phase
    /// is done.
    #[must_use]
    pub fn current_phase(&self) -> Option<&'static Phase> {
        phase(self.phase_index)
    }

    /// Returns the phases completed in earlier rounds.
    #[must_use]
    pub fn completed_phases(&self) -> &[usize] {
        &self.completed_phases
    }

    /// Returns the cumulative score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns whether the phase was completed this round.
    #[must_use]
    pub const fn has_completed_phase(&self) -> bool {
        self.laid_down.is_some()
    }

    /// Returns the groups laid down this round.
    #[must_use]
    pub const fn laid_down(&self) -> Option<&LaidDown> {
        self.laid_down.as_ref()
    }

    /// Returns whether `id` is in hand.
    #[must_use]
    pub fn holds(&self, id: CardId) -> bool {
        self.hand.iter().any(|card| card.id == id)
    }

    /// Returns the number of cards this player holds or has laid down.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.laid_down.as_ref().map_or(0, LaidDown::len)
    }

    pub(crate) fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn take_card(&mut self, id: CardId) -> Option<Card> {
        let position = self.hand.iter().position(|card| card.id == id)?;
        Some(self.hand.remove(position))
    }

    pub(crate) fn lay_down(&mut self, laid_down: LaidDown) {
        self.hand
            .retain(|card| !laid_down.cards().any(|placed| placed.id == card.id));
        self.laid_down = Some(laid_down);
    }

    pub(crate) const fn laid_down_mut(&mut self) -> Option<&mut LaidDown> {
        self.laid_down.as_mut()
    }

    /// Adds the round's penalty and advances past a completed phase.
    ///
    /// Returns the phase completed this round, if any.
    pub(crate) fn settle_round(&mut self, penalty: u32) -> Option<usize> {
        self.score = self.score.saturating_add(penalty);
        self.laid_down.as_ref()?;
        let completed = self.phase_index;
        self.completed_phases.push(completed);
        self.phase_index += 1;
        Some(completed)
    }

    /// Clears per-round state, keeping score and phase progress.
    pub(crate) fn clear_round(&mut self) {
        self.hand.clear();
        self.laid_down = None;
    }
}
