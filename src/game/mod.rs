//! Game engine and state management.

use crate::action::Action;
use crate::card::CardId;
use crate::deck::DeckSource;
use crate::error::{ActionError, ConfigError};
use crate::group::GroupKind;
use crate::options::GameOptions;
use crate::player::PlayerId;
use crate::sync::Mutex;

mod actions;
mod lay_down;
mod round;
pub mod state;

pub use state::{COMPUTER, GamePhase, GameState, HUMAN, PLAYER_COUNT};

impl GameState {
    /// Applies an action, returning the resulting state.
    ///
    /// # Errors
    ///
    /// Returns the reason the action is illegal in this state.
    pub fn apply(&self, action: &Action, source: &mut DeckSource) -> Result<Self, ActionError> {
        match action {
            Action::DrawFromDeck => self.draw_from_deck(source),
            Action::DrawFromDiscard => self.draw_from_discard(),
            Action::Discard(id) => self.discard(*id),
            Action::CompletePhase(ids) => self.complete_phase(ids),
            Action::PlayOnGroup {
                card,
                target,
                kind,
                index,
            } => self.play_on_group(*card, *target, *kind, *index),
            Action::StartNextRound => self.start_next_round(source),
            Action::ResetMatch => Ok(self.reset_match(source)),
        }
    }

    /// Applies an action, returning this state unchanged if it is illegal.
    #[must_use]
    pub fn apply_or_unchanged(&self, action: &Action, source: &mut DeckSource) -> Self {
        self.apply(action, source).unwrap_or_else(|_| self.clone())
    }
}

/// A match in progress.
///
/// The game owns the current [`GameState`] and the [`DeckSource`] that deals
/// it. Every operation replaces the whole state at once, or leaves it alone
/// and reports why the action was rejected.
pub struct Game {
    /// Current state.
    state: Mutex<GameState>,
    /// Shuffling and card ids.
    source: Mutex<DeckSource>,
}

impl Game {
    /// Creates a new match with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use phase10::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// let _ = game;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot deal a round from one deck.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        let mut source = DeckSource::new(seed);
        let state = GameState::new(options, &mut source)?;
        log::info!("match started with {options:?}");

        Ok(Self {
            state: Mutex::new(state),
            source: Mutex::new(source),
        })
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Replaces the current state, e.g. with an earlier snapshot.
    ///
    /// The match generation never moves backwards, so moves scheduled before
    /// a reset stay stale even if a pre-reset snapshot is restored.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidSnapshot`] if `state` is not a playable
    /// match; the current state is unchanged.
    pub fn restore(&self, mut state: GameState) -> Result<(), ActionError> {
        state.validate()?;
        let mut current = self.state.lock();
        state.generation = state.generation.max(current.generation);
        *current = state;
        Ok(())
    }

    fn apply_checked(
        &self,
        action: &Action,
        check: impl FnOnce(&GameState) -> Result<(), ActionError>,
    ) -> Result<(), ActionError> {
        let mut state = self.state.lock();
        let result = check(&*state).and_then(|()| {
            let mut source = self.source.lock();
            state.apply(action, &mut source)
        });

        match result {
            Ok(next) => {
                *state = next;
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected {action:?}: {err}");
                Err(err)
            }
        }
    }

    /// Applies an action on behalf of whoever's turn it is.
    ///
    /// # Errors
    ///
    /// Returns the reason the action is illegal; the state is unchanged.
    pub fn apply(&self, action: &Action) -> Result<(), ActionError> {
        self.apply_checked(action, |_| Ok(()))
    }

    /// Applies an action on behalf of `player`.
    ///
    /// Turn actions are rejected unless it is `player`'s turn.
    ///
    /// # Errors
    ///
    /// Returns the reason the action is illegal; the state is unchanged.
    pub fn act(&self, player: PlayerId, action: &Action) -> Result<(), ActionError> {
        self.apply_checked(action, |state| ensure_turn(state, player, action))
    }

    /// Applies an action that was scheduled while the match had the given
    /// generation, e.g. a delayed computer move.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::StaleMatch`] if the match was reset since, or the
    /// reason the action is illegal; the state is unchanged.
    pub fn apply_scheduled(
        &self,
        generation: u32,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), ActionError> {
        self.apply_checked(action, |state| {
            if state.generation() != generation {
                return Err(ActionError::StaleMatch);
            }
            ensure_turn(state, player, action)
        })
    }

    /// Draws from the deck for the current player.
    ///
    /// # Errors
    ///
    /// See [`GameState::draw_from_deck`].
    pub fn draw_from_deck(&self) -> Result<(), ActionError> {
        self.apply(&Action::DrawFromDeck)
    }

    /// Draws from the discard pile for the current player.
    ///
    /// # Errors
    ///
    /// See [`GameState::draw_from_discard`].
    pub fn draw_from_discard(&self) -> Result<(), ActionError> {
        self.apply(&Action::DrawFromDiscard)
    }

    /// Discards a card for the current player.
    ///
    /// # Errors
    ///
    /// See [`GameState::discard`].
    pub fn discard(&self, id: CardId) -> Result<(), ActionError> {
        self.apply(&Action::Discard(id))
    }

    /// Lays down the current player's phase.
    ///
    /// # Errors
    ///
    /// See [`GameState::complete_phase`].
    pub fn complete_phase(&self, ids: &[CardId]) -> Result<(), ActionError> {
        self.apply(&Action::CompletePhase(ids.to_vec()))
    }

    /// Adds a card to a laid-down group.
    ///
    /// # Errors
    ///
    /// See [`GameState::play_on_group`].
    pub fn play_on_group(
        &self,
        card: CardId,
        target: PlayerId,
        kind: GroupKind,
        index: usize,
    ) -> Result<(), ActionError> {
        self.apply(&Action::PlayOnGroup {
            card,
            target,
            kind,
            index,
        })
    }

    /// Deals the next round.
    ///
    /// # Errors
    ///
    /// See [`GameState::start_next_round`].
    pub fn start_next_round(&self) -> Result<(), ActionError> {
        self.apply(&Action::StartNextRound)
    }

    /// Starts a fresh match.
    pub fn reset_match(&self) {
        let mut state = self.state.lock();
        let mut source = self.source.lock();
        *state = state.reset_match(&mut source);
    }

    /// Returns whether the given cards satisfy the current player's phase.
    #[must_use]
    pub fn can_complete_phase(&self, ids: &[CardId]) -> bool {
        self.state.lock().can_complete_phase(ids)
    }
}

fn ensure_turn(state: &GameState, player: PlayerId, action: &Action) -> Result<(), ActionError> {
    if state.player(player).is_none() {
        return Err(ActionError::PlayerNotFound);
    }
    if action.is_turn_action() && state.current_player_id() != player {
        return Err(ActionError::NotYourTurn);
    }
    Ok(())
}
