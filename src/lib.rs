//! A Phase 10 style rummy rule engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] snapshot whose transitions (draw,
//! discard, lay down a phase, extend a group, next round) each return a new
//! state, and a [`Game`] type that owns the current state for a single match.
//! Grouping rules live in [`group`] and phase matching in [`phase`].
//!
//! # Example
//!
//! ```no_run
//! use phase10::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42).unwrap();
//! game.draw_from_deck().unwrap();
//! let state = game.snapshot();
//! let card = state.current_player().hand()[0].id;
//! game.discard(card).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod computer;
pub mod deck;
pub mod error;
pub mod game;
pub mod group;
pub mod options;
pub mod phase;
pub mod player;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use action::Action;
pub use card::{Card, CardId, CardKind, Color, DECK_SIZE};
pub use computer::{Opponent, RandomOpponent};
pub use deck::{DeckSource, ReshufflePolicy};
pub use error::{ActionError, ConfigError};
pub use game::{COMPUTER, Game, GamePhase, GameState, HUMAN, PLAYER_COUNT};
pub use group::{GroupKind, is_run, is_same_color, is_set};
pub use options::GameOptions;
pub use phase::{LaidDown, PHASES, Phase, Requirement, can_complete_phase, organize};
pub use player::{Player, PlayerId};
pub use result::{PlayerRoundResult, RoundResult};
