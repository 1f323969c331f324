use crate::card::CardId;
use crate::deck::{DeckSource, deal, refill};
use crate::error::ActionError;

use super::GameState;

impl GameState {
    /// Moves to the next seat and opens its turn.
    pub(super) fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.has_drawn = false;
    }

    /// Draws the top card of the deck into the current player's hand.
    ///
    /// An empty deck is first refilled from the discard pile, keeping the top
    /// discard in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, the player already
    /// drew, or neither the deck nor the discard pile can supply a card.
    pub fn draw_from_deck(&self, source: &mut DeckSource) -> Result<Self, ActionError> {
        self.ensure_must_draw()?;

        let mut next = self.clone();
        if next.deck.is_empty() {
            let (deck, discard_pile) = refill(&next.discard_pile, next.options.reshuffle, source)
                .ok_or(ActionError::DeckExhausted)?;
            next.deck = deck;
            next.discard_pile = discard_pile;
        }

        let (drawn, remainder) = deal(core::mem::take(&mut next.deck), 1);
        next.deck = remainder;
        let card = drawn
            .into_iter()
            .next()
            .ok_or(ActionError::DeckExhausted)?;

        log::debug!(
            "player {} drew {} from the deck",
            next.current_player,
            card.id
        );
        next.current_mut().add_card(card);
        next.has_drawn = true;
        Ok(next)
    }

    /// Takes the top card of the discard pile into the current player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, the player already
    /// drew, or the discard pile is empty.
    pub fn draw_from_discard(&self) -> Result<Self, ActionError> {
        self.ensure_must_draw()?;

        let mut next = self.clone();
        let card = next
            .discard_pile
            .pop()
            .ok_or(ActionError::EmptyDiscardPile)?;

        log::debug!(
            "player {} took {} from the discard pile",
            next.current_player,
            card.id
        );
        next.current_mut().add_card(card);
        next.has_drawn = true;
        Ok(next)
    }

    /// Discards a card from the current player's hand.
    ///
    /// Emptying the hand ends the round; otherwise the turn passes to the next
    /// player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, the player has not
    /// drawn yet, or the card is not in hand.
    pub fn discard(&self, id: CardId) -> Result<Self, ActionError> {
        self.ensure_may_act()?;

        let mut next = self.clone();
        let card = next
            .current_mut()
            .take_card(id)
            .ok_or(ActionError::CardNotInHand)?;
        next.discard_pile.push(card);
        log::debug!("player {} discarded {}", next.current_player, card.id);

        if next.current_player().hand().is_empty() {
            next.end_round();
        } else {
            next.advance_turn();
        }
        Ok(next)
    }
}
