//! Game state snapshot.

use alloc::vec::Vec;

use crate::card::{Card, CardId, DECK_SIZE};
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::RoundResult;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;
/// Seat of the human player.
pub const HUMAN: PlayerId = 0;
/// Seat of the computer player.
pub const COMPUTER: PlayerId = 1;

/// Phase of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Players are taking turns.
    Playing,
    /// A player went out; waiting for the next round to be dealt.
    RoundEnd,
    /// A player finished the last phase.
    GameOver {
        /// The winning player.
        winner: PlayerId,
    },
}

/// Immutable snapshot of a match.
///
/// Every transition takes a snapshot and returns a new one; a rejected
/// transition returns an error and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GameStateData")
)]
pub struct GameState {
    pub(super) options: GameOptions,
    /// Seats, human first.
    pub(super) players: Vec<Player>,
    /// Draw deck, top at index 0.
    pub(super) deck: Vec<Card>,
    /// Discard pile, top at the end.
    pub(super) discard_pile: Vec<Card>,
    pub(super) current_player: usize,
    pub(super) phase: GamePhase,
    /// Round counter (1-based).
    pub(super) round: u32,
    /// Whether the current player drew this turn.
    pub(super) has_drawn: bool,
    /// Bumped on every match reset.
    pub(super) generation: u32,
    pub(super) history: Vec<RoundResult>,
}

impl GameState {
    /// Returns the options this match is played with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns all players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(id))
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current_player_id(&self) -> PlayerId {
        self.current_player as PlayerId
    }

    /// Returns the draw deck, top card first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile, top card last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns the phase of the match.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the round number.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns whether the current player drew this turn.
    #[must_use]
    pub const fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    /// Returns the match generation, bumped on every reset.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Returns the results of every finished round.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Returns the number of cards in play: deck, discard pile, hands and
    /// laid-down groups.
    ///
    /// Equals [`DECK_SIZE`] throughout a dealt round.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::card_count).sum::<usize>()
    }

    /// Returns whether the card count matches a full deck.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_cards() == DECK_SIZE
    }

    /// Replaces a player's hand.
    ///
    /// Intended for setting up scenarios; the card total is not checked.
    #[must_use]
    pub fn with_hand(mut self, id: PlayerId, hand: Vec<Card>) -> Self {
        if let Some(player) = self.players.get_mut(usize::from(id)) {
            player.set_hand(hand);
        }
        self
    }

    /// Replaces the draw deck (top card first).
    ///
    /// Intended for setting up scenarios; the card total is not checked.
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = deck;
        self
    }

    /// Replaces the discard pile (top card last).
    ///
    /// Intended for setting up scenarios; the card total is not checked.
    #[must_use]
    pub fn with_discard_pile(mut self, discard_pile: Vec<Card>) -> Self {
        self.discard_pile = discard_pile;
        self
    }

    /// Checks that this state describes a playable match: one player per
    /// seat, a current seat that exists, and a full deck's worth of cards
    /// with no id in two places.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidSnapshot`] otherwise.
    pub fn validate(&self) -> Result<(), ActionError> {
        let seats_ok = self.players.len() == PLAYER_COUNT
            && self
                .players
                .iter()
                .enumerate()
                .all(|(seat, player)| usize::from(player.id()) == seat);
        if !seats_ok || self.current_player >= self.players.len() {
            return Err(ActionError::InvalidSnapshot);
        }
        if self.options.validate().is_err() || !self.is_complete() {
            return Err(ActionError::InvalidSnapshot);
        }

        let mut ids: Vec<CardId> = self
            .deck
            .iter()
            .chain(&self.discard_pile)
            .map(|card| card.id)
            .collect();
        for player in &self.players {
            ids.extend(player.hand().iter().map(|card| card.id));
            if let Some(laid_down) = player.laid_down() {
                ids.extend(laid_down.cards().map(|card| card.id));
            }
        }
        ids.sort_unstable();
        if ids.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ActionError::InvalidSnapshot);
        }
        Ok(())
    }

    pub(super) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    pub(super) fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.phase == GamePhase::Playing {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Start of turn: the player has to draw.
    pub(super) fn ensure_must_draw(&self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if self.has_drawn {
            return Err(ActionError::AlreadyDrawn);
        }
        Ok(())
    }

    /// After drawing: the player may lay down, extend, or discard.
    pub(super) fn ensure_may_act(&self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if !self.has_drawn {
            return Err(ActionError::MustDrawFirst);
        }
        Ok(())
    }
}

/// Wire form of [`GameState`], checked before it becomes a state.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GameStateData {
    options: GameOptions,
    players: Vec<Player>,
    deck: Vec<Card>,
    discard_pile: Vec<Card>,
    current_player: usize,
    phase: GamePhase,
    round: u32,
    has_drawn: bool,
    generation: u32,
    history: Vec<RoundResult>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameStateData> for GameState {
    type Error = ActionError;

    fn try_from(data: GameStateData) -> Result<Self, Self::Error> {
        let state = Self {
            options: data.options,
            players: data.players,
            deck: data.deck,
            discard_pile: data.discard_pile,
            current_player: data.current_player,
            phase: data.phase,
            round: data.round,
            has_drawn: data.has_drawn,
            generation: data.generation,
            history: data.history,
        };
        state.validate()?;
        Ok(state)
    }
}
