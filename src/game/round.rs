use alloc::vec::Vec;

use crate::deck::{DeckSource, deal};
use crate::error::{ActionError, ConfigError};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::{PlayerRoundResult, RoundResult};
use crate::score::hand_penalty;

use super::{COMPUTER, GamePhase, GameState, HUMAN};

impl GameState {
    /// Starts a new match: two players at the first phase, round 1 dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot deal a round from one deck.
    pub fn new(options: GameOptions, source: &mut DeckSource) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::fresh(options, 0, source))
    }

    fn fresh(options: GameOptions, generation: u32, source: &mut DeckSource) -> Self {
        let mut state = Self {
            options,
            players: alloc::vec![
                Player::new(HUMAN, "You", false),
                Player::new(COMPUTER, "Computer", true),
            ],
            deck: Vec::new(),
            discard_pile: Vec::new(),
            current_player: 0,
            phase: GamePhase::Playing,
            round: 1,
            has_drawn: false,
            generation,
            history: Vec::new(),
        };
        state.deal_round(source);
        state
    }

    /// Deals hands and the opening discard from a fresh deck and opens the
    /// first seat's turn.
    fn deal_round(&mut self, source: &mut DeckSource) {
        let mut deck = source.build_deck();
        for player in &mut self.players {
            let (hand, remainder) = deal(deck, self.options.hand_size);
            debug_assert_eq!(hand.len(), self.options.hand_size, "deck underflow");
            player.set_hand(hand);
            deck = remainder;
        }

        let (discard_pile, remainder) = deal(deck, 1);
        self.discard_pile = discard_pile;
        self.deck = remainder;
        self.current_player = 0;
        self.has_drawn = false;
        self.phase = GamePhase::Playing;
    }

    /// Scores the round after the current player went out.
    ///
    /// Every player pays for the cards left in hand, and players who completed
    /// their phase move on to the next one.
    pub(super) fn end_round(&mut self) {
        let went_out = self.current_player_id();
        let options = self.options;
        let players = self
            .players
            .iter_mut()
            .map(|player| {
                let penalty = hand_penalty(player.hand(), &options);
                let completed_phase = player.settle_round(penalty);
                PlayerRoundResult {
                    player_id: player.id(),
                    penalty,
                    total_score: player.score(),
                    completed_phase,
                }
            })
            .collect();

        self.history.push(RoundResult {
            round: self.round,
            went_out,
            players,
        });
        self.has_drawn = false;
        self.phase = self
            .match_winner()
            .map_or(GamePhase::RoundEnd, |winner| GamePhase::GameOver { winner });

        log::info!(
            "round {} ended, player {went_out} went out ({:?})",
            self.round,
            self.phase
        );
    }

    /// Returns the winner once someone has finished every phase: the lowest
    /// score among the finishers, earliest seat on ties.
    fn match_winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|player| player.current_phase().is_none())
            .min_by_key(|player| player.score())
            .map(Player::id)
    }

    /// Deals the next round, keeping scores and phase progress.
    ///
    /// # Errors
    ///
    /// Returns an error unless the previous round has ended and the match is
    /// not over.
    pub fn start_next_round(&self, source: &mut DeckSource) -> Result<Self, ActionError> {
        if self.phase != GamePhase::RoundEnd {
            return Err(ActionError::InvalidState);
        }

        let mut next = self.clone();
        for player in &mut next.players {
            player.clear_round();
        }
        next.round += 1;
        next.deal_round(source);

        log::info!("round {} dealt", next.round);
        Ok(next)
    }

    /// Starts over with a fresh match using the same options.
    ///
    /// Always legal. Scores, phase progress and history are cleared, and the
    /// generation moves on so actions scheduled against the old match can be
    /// told apart.
    #[must_use]
    pub fn reset_match(&self, source: &mut DeckSource) -> Self {
        let next = Self::fresh(self.options, self.generation.wrapping_add(1), source);
        log::info!("match reset (generation {})", next.generation);
        next
    }
}
