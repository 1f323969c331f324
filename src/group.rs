//! Group classification and extension rules.
//!
//! All predicates are wildcard-aware: a wild card stands in for any value or
//! color. Skip cards never belong to a group.

use alloc::vec::Vec;

use crate::card::{Card, MAX_VALUE};

/// Minimum number of cards in a set.
pub const MIN_SET_LEN: usize = 2;
/// Minimum number of cards in a run.
pub const MIN_RUN_LEN: usize = 3;

/// Kind of a laid-down group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    /// Cards sharing one value.
    Set,
    /// Cards with consecutive values.
    Run,
    /// Cards sharing one color.
    Color,
}

impl GroupKind {
    /// Returns whether `cards` form a valid group of this kind.
    #[must_use]
    pub fn accepts(self, cards: &[Card]) -> bool {
        match self {
            Self::Set => is_set(cards),
            Self::Run => is_run(cards),
            Self::Color => is_same_color(cards),
        }
    }

    /// Returns whether `card` may be added to an existing group of this kind.
    #[must_use]
    pub fn can_extend(self, group: &[Card], card: Card) -> bool {
        let mut extended = Vec::with_capacity(group.len() + 1);
        extended.extend_from_slice(group);
        extended.push(card);
        self.accepts(&extended)
    }
}

/// Returns whether `cards` form a set.
///
/// At least two cards, at least one of them numbered, and every numbered card
/// shares the same value.
#[must_use]
pub fn is_set(cards: &[Card]) -> bool {
    if cards.len() < MIN_SET_LEN || cards.iter().any(Card::is_skip) {
        return false;
    }

    let mut values = cards.iter().filter_map(Card::value);
    values
        .next()
        .is_some_and(|first| values.all(|value| value == first))
}

/// Returns whether `cards` form a run.
///
/// The numbered cards must have distinct values, and the gaps between them
/// must be coverable by the wild cards present. A run never exceeds the
/// number of distinct face values.
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    if cards.len() < MIN_RUN_LEN
        || cards.len() > usize::from(MAX_VALUE)
        || cards.iter().any(Card::is_skip)
    {
        return false;
    }

    let wilds = cards.iter().filter(|card| card.is_wild()).count();
    let mut values: Vec<u8> = cards.iter().filter_map(Card::value).collect();
    if values.is_empty() {
        return false;
    }
    values.sort_unstable();

    let mut gaps = 0usize;
    for pair in values.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next == prev {
            return false;
        }
        gaps += usize::from(next - prev - 1);
    }

    gaps <= wilds
}

/// Returns whether `cards` share one color.
///
/// Wild cards take any color; at least one colored card is required. A skip
/// card rejects the group outright rather than being ignored, since skips
/// can never be laid down.
#[must_use]
pub fn is_same_color(cards: &[Card]) -> bool {
    if cards.iter().any(Card::is_skip) {
        return false;
    }

    let mut colors = cards.iter().filter_map(Card::color);
    colors
        .next()
        .is_some_and(|first| colors.all(|color| color == first))
}
