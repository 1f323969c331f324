//! Card types and deck constants.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
}

impl Color {
    /// All colors, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];
}

/// Unique identity of a card within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardId(u32);

impl CardId {
    /// Creates a card id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// What a card is, independent of its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardKind {
    /// A colored card with a face value in `MIN_VALUE..=MAX_VALUE`.
    Number {
        /// The card color.
        color: Color,
        /// The face value.
        value: u8,
    },
    /// Substitutes for any value or color.
    Wild,
    /// Has no numeric meaning and can never be laid down.
    Skip,
}

/// A card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// Identity, stable for the card's lifetime.
    pub id: CardId,
    /// Face of the card.
    pub kind: CardKind,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }

    /// Creates a numbered card.
    ///
    /// Note: This function does not validate the value. Values outside
    /// `MIN_VALUE..=MAX_VALUE` are accepted but never form a legal run.
    #[must_use]
    pub const fn number(id: CardId, color: Color, value: u8) -> Self {
        Self::new(id, CardKind::Number { color, value })
    }

    /// Creates a wild card.
    #[must_use]
    pub const fn wild(id: CardId) -> Self {
        Self::new(id, CardKind::Wild)
    }

    /// Creates a skip card.
    #[must_use]
    pub const fn skip(id: CardId) -> Self {
        Self::new(id, CardKind::Skip)
    }

    /// Returns the face value of a numbered card.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number { value, .. } => Some(value),
            CardKind::Wild | CardKind::Skip => None,
        }
    }

    /// Returns the color of a numbered card.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self.kind {
            CardKind::Number { color, .. } => Some(color),
            CardKind::Wild | CardKind::Skip => None,
        }
    }

    /// Returns whether this is a wild card.
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild)
    }

    /// Returns whether this is a skip card.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self.kind, CardKind::Skip)
    }
}

/// Lowest face value.
pub const MIN_VALUE: u8 = 1;
/// Highest face value.
pub const MAX_VALUE: u8 = 12;
/// Copies of each color/value pair in a deck.
pub const NUMBER_COPIES: usize = 2;
/// Wild cards per deck.
pub const WILD_CARDS: usize = 8;
/// Skip cards per deck.
pub const SKIP_CARDS: usize = 4;
/// Number of cards per deck.
pub const DECK_SIZE: usize =
    NUMBER_COPIES * Color::ALL.len() * MAX_VALUE as usize + WILD_CARDS + SKIP_CARDS;
