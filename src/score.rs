//! Remaining-hand scoring.

use crate::card::{Card, CardKind};
use crate::options::GameOptions;

/// Points a single card costs when left in hand at round end.
#[must_use]
pub fn card_penalty(card: &Card, options: &GameOptions) -> u32 {
    match card.kind {
        CardKind::Number { value, .. } => u32::from(value),
        CardKind::Wild => options.wild_penalty,
        CardKind::Skip => options.skip_penalty,
    }
}

/// Points a whole hand costs at round end.
#[must_use]
pub fn hand_penalty(cards: &[Card], options: &GameOptions) -> u32 {
    cards
        .iter()
        .map(|card| card_penalty(card, options))
        .fold(0, u32::saturating_add)
}
