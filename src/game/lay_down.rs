use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::error::ActionError;
use crate::group::GroupKind;
use crate::phase::{can_complete_phase, organize};
use crate::player::{Player, PlayerId};

use super::GameState;

/// Resolves `ids` to cards of `player`'s hand, in hand order.
fn candidates(player: &Player, ids: &[CardId]) -> Result<Vec<Card>, ActionError> {
    for (position, id) in ids.iter().enumerate() {
        if ids[..position].contains(id) {
            return Err(ActionError::DuplicateCard);
        }
        if !player.holds(*id) {
            return Err(ActionError::CardNotInHand);
        }
    }

    Ok(player
        .hand()
        .iter()
        .filter(|card| ids.contains(&card.id))
        .copied()
        .collect())
}

/// Places `card` on a group, keeping runs in ascending order where the
/// card's value makes that possible.
fn place(group: &mut Vec<Card>, kind: GroupKind, card: Card) {
    let lowest = group.iter().filter_map(Card::value).min();
    match (kind, card.value(), lowest) {
        (GroupKind::Run, Some(value), Some(lowest)) if value < lowest => group.insert(0, card),
        _ => group.push(card),
    }
}

impl GameState {
    /// Returns whether the given cards of the current player's hand satisfy
    /// that player's phase.
    ///
    /// Side-effect free; use it to gate [`GameState::complete_phase`].
    #[must_use]
    pub fn can_complete_phase(&self, ids: &[CardId]) -> bool {
        let player = self.current_player();
        let Some(phase) = player.current_phase() else {
            return false;
        };
        candidates(player, ids).is_ok_and(|cards| can_complete_phase(&cards, &phase.requirement))
    }

    /// Lays down the current player's phase from the given hand cards.
    ///
    /// Only the cards placed into groups leave the hand. Laying down the last
    /// card in hand ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, the player has not
    /// drawn yet, already completed the phase, submitted cards not in hand or
    /// the same card twice, or the cards do not satisfy the phase.
    pub fn complete_phase(&self, ids: &[CardId]) -> Result<Self, ActionError> {
        self.ensure_may_act()?;

        let player = self.current_player();
        if player.has_completed_phase() {
            return Err(ActionError::PhaseAlreadyCompleted);
        }
        let phase = player.current_phase().ok_or(ActionError::InvalidState)?;
        let cards = candidates(player, ids)?;
        let laid_down =
            organize(&cards, &phase.requirement).ok_or(ActionError::PhaseNotSatisfied)?;

        let mut next = self.clone();
        log::debug!(
            "player {} completed phase {} with {} cards",
            next.current_player,
            phase.index + 1,
            laid_down.len()
        );
        next.current_mut().lay_down(laid_down);

        if next.current_player().hand().is_empty() {
            next.end_round();
        }
        Ok(next)
    }

    /// Adds a card from the current player's hand to a laid-down group.
    ///
    /// The group may belong to any player. Playing the last card in hand ends
    /// the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, the player has not
    /// drawn yet or has not completed their own phase, the target group does
    /// not exist, the card is not in hand, or the card does not fit the group.
    pub fn play_on_group(
        &self,
        id: CardId,
        target: PlayerId,
        kind: GroupKind,
        index: usize,
    ) -> Result<Self, ActionError> {
        self.ensure_may_act()?;

        if !self.current_player().has_completed_phase() {
            return Err(ActionError::PhaseNotCompleted);
        }
        let owner = self.player(target).ok_or(ActionError::PlayerNotFound)?;
        let group = owner
            .laid_down()
            .and_then(|laid_down| laid_down.groups(kind).get(index))
            .ok_or(ActionError::GroupNotFound)?;
        let card = self
            .current_player()
            .hand()
            .iter()
            .find(|card| card.id == id)
            .copied()
            .ok_or(ActionError::CardNotInHand)?;
        if !kind.can_extend(group, card) {
            return Err(ActionError::CannotExtend);
        }

        let mut next = self.clone();
        next.current_mut()
            .take_card(id)
            .ok_or(ActionError::CardNotInHand)?;
        let group = next.players[usize::from(target)]
            .laid_down_mut()
            .and_then(|laid_down| laid_down.groups_mut(kind).get_mut(index))
            .ok_or(ActionError::GroupNotFound)?;
        place(group, kind, card);
        log::debug!(
            "player {} played {} on player {target}'s {kind:?} group {index}",
            next.current_player,
            card.id
        );

        if next.current_player().hand().is_empty() {
            next.end_round();
        }
        Ok(next)
    }
}
