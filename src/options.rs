//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::deck::ReshufflePolicy;
use crate::error::ConfigError;
use crate::game::PLAYER_COUNT;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use phase10::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(10)
///     .with_wild_penalty(25)
///     .with_skip_penalty(15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// Points a wild card left in hand costs at round end.
    pub wild_penalty: u32,
    /// Points a skip card left in hand costs at round end.
    pub skip_penalty: u32,
    /// How the deck is refilled when it runs out.
    pub reshuffle: ReshufflePolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 10,
            wild_penalty: 25,
            skip_penalty: 15,
            reshuffle: ReshufflePolicy::RecycleDiscards,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use phase10::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the wild card penalty.
    ///
    /// # Example
    ///
    /// ```
    /// use phase10::GameOptions;
    ///
    /// let options = GameOptions::default().with_wild_penalty(50);
    /// assert_eq!(options.wild_penalty, 50);
    /// ```
    #[must_use]
    pub const fn with_wild_penalty(mut self, points: u32) -> Self {
        self.wild_penalty = points;
        self
    }

    /// Sets the skip card penalty.
    #[must_use]
    pub const fn with_skip_penalty(mut self, points: u32) -> Self {
        self.skip_penalty = points;
        self
    }

    /// Sets the reshuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use phase10::{GameOptions, ReshufflePolicy};
    ///
    /// let options = GameOptions::default().with_reshuffle(ReshufflePolicy::FreshDeck);
    /// assert_eq!(options.reshuffle, ReshufflePolicy::FreshDeck);
    /// ```
    #[must_use]
    pub const fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }

    /// Checks that a round can be dealt from one deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size is zero or the deck cannot cover every
    /// hand plus the opening discard.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }

        let needed = self.hand_size.saturating_mul(PLAYER_COUNT).saturating_add(1);
        if needed > DECK_SIZE {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: DECK_SIZE,
            });
        }

        Ok(())
    }
}
