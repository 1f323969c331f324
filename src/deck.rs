//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId, Color, DECK_SIZE, MAX_VALUE, MIN_VALUE, NUMBER_COPIES, SKIP_CARDS, WILD_CARDS};

/// Source of fresh decks for a match.
///
/// Owns the random number generator and the card id counter, so every deck it
/// builds is shuffled from the same seeded stream and carries ids that were
/// never issued before.
#[derive(Debug, Clone)]
pub struct DeckSource {
    rng: ChaCha8Rng,
    next_id: u32,
}

impl DeckSource {
    /// Creates a deck source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    fn issue_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Builds a full shuffled deck.
    ///
    /// Two copies of every color/value pair, followed by the wild and skip
    /// cards, each with a freshly issued id.
    pub fn build_deck(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for _ in 0..NUMBER_COPIES {
            for color in Color::ALL {
                for value in MIN_VALUE..=MAX_VALUE {
                    let id = self.issue_id();
                    cards.push(Card::number(id, color, value));
                }
            }
        }

        for _ in 0..WILD_CARDS {
            let id = self.issue_id();
            cards.push(Card::wild(id));
        }

        for _ in 0..SKIP_CARDS {
            let id = self.issue_id();
            cards.push(Card::skip(id));
        }

        self.shuffle(&mut cards);
        log::debug!("built deck of {} cards", cards.len());
        cards
    }

    /// Shuffles cards in place (Fisher-Yates).
    pub fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Splits the first `n` cards off the top of `deck`.
///
/// Returns `(dealt, remainder)` with relative order preserved. If `n` exceeds
/// the deck size, `dealt` is simply shorter.
#[must_use]
pub fn deal(deck: Vec<Card>, n: usize) -> (Vec<Card>, Vec<Card>) {
    let mut dealt = deck;
    let remainder = dealt.split_off(n.min(dealt.len()));
    (dealt, remainder)
}

/// How the deck is refilled once it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReshufflePolicy {
    /// Shuffle every discard except the top one back into the deck.
    #[default]
    RecycleDiscards,
    /// Replace the buried discards with the same number of cards from a
    /// freshly built deck.
    FreshDeck,
}

/// Refills an empty deck from the discard pile.
///
/// The top discard stays on the pile; the deck ends up holding
/// `discard_pile.len() - 1` cards. Returns `None` when the discard pile has
/// nothing to spare.
pub fn refill(
    discard_pile: &[Card],
    policy: ReshufflePolicy,
    source: &mut DeckSource,
) -> Option<(Vec<Card>, Vec<Card>)> {
    let (&top, buried) = discard_pile.split_last()?;
    if buried.is_empty() {
        return None;
    }

    let deck = match policy {
        ReshufflePolicy::RecycleDiscards => {
            let mut deck = buried.to_vec();
            source.shuffle(&mut deck);
            deck
        }
        ReshufflePolicy::FreshDeck => {
            let mut deck = source.build_deck();
            deck.truncate(buried.len());
            deck
        }
    };

    log::debug!("refilled deck with {} cards ({policy:?})", deck.len());
    Some((deck, alloc::vec![top]))
}
