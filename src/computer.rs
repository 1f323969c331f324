//! Computer opponent contract.
//!
//! The engine never plays on its own. A driver asks an [`Opponent`] for the
//! next action whenever the computer's seat is up, usually after a delay it
//! schedules itself, and submits it through the same operations a human
//! player uses. Pair it with [`Game::apply_scheduled`](crate::Game::apply_scheduled)
//! so a move scheduled before a reset is dropped.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::CardId;
use crate::game::{GamePhase, GameState};
use crate::player::PlayerId;

/// Decides moves for a seat.
pub trait Opponent {
    /// Returns the next action for `me`, or `None` if `me` has nothing to do
    /// in this state.
    fn next_action(&mut self, state: &GameState, me: PlayerId) -> Option<Action>;
}

/// Draws from the deck, lays down its phase when the whole hand allows it,
/// and otherwise discards a random card.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    /// Creates an opponent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn next_action(&mut self, state: &GameState, me: PlayerId) -> Option<Action> {
        if state.phase() != GamePhase::Playing || state.current_player_id() != me {
            return None;
        }
        let player = state.player(me)?;

        if !state.has_drawn() {
            let deck_dry = state.deck().is_empty() && state.discard_pile().len() <= 1;
            return Some(if deck_dry && !state.discard_pile().is_empty() {
                Action::DrawFromDiscard
            } else {
                Action::DrawFromDeck
            });
        }

        if !player.has_completed_phase() {
            let ids: Vec<CardId> = player.hand().iter().map(|card| card.id).collect();
            if state.can_complete_phase(&ids) {
                return Some(Action::CompletePhase(ids));
            }
        }

        player
            .hand()
            .choose(&mut self.rng)
            .map(|card| Action::Discard(card.id))
    }
}
