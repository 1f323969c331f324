//! Property tests: card conservation and turn bookkeeping under arbitrary
//! action sequences.

use std::collections::HashSet;

use phase10::{
    Action, COMPUTER, CardId, DeckSource, Game, GameOptions, GamePhase, GameState, GroupKind, HUMAN,
    Opponent, PLAYER_COUNT, RandomOpponent, ReshufflePolicy,
};
use proptest::prelude::*;

fn all_card_ids(state: &GameState) -> Vec<CardId> {
    let mut ids: Vec<CardId> = state
        .deck()
        .iter()
        .chain(state.discard_pile())
        .map(|card| card.id)
        .collect();
    for player in state.players() {
        ids.extend(player.hand().iter().map(|card| card.id));
        if let Some(laid_down) = player.laid_down() {
            ids.extend(laid_down.cards().map(|card| card.id));
        }
    }
    ids
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.is_complete(), "cards lost or created: {}", state.total_cards());

    let ids = all_card_ids(state);
    let unique: HashSet<CardId> = ids.iter().copied().collect();
    prop_assert_eq!(unique.len(), ids.len(), "a card is in two places");

    prop_assert!(usize::from(state.current_player_id()) < PLAYER_COUNT);
    if state.phase() != GamePhase::Playing {
        prop_assert!(!state.has_drawn());
    }
    for player in state.players() {
        prop_assert!(player.phase_index() <= 10);
        prop_assert_eq!(player.completed_phases().len(), player.phase_index());
    }
    Ok(())
}

/// Maps a selector onto an action that is plausible in `state`.
fn pick_action(state: &GameState, selector: u8, pick: usize) -> Action {
    let hand = state.current_player().hand();
    let card = if hand.is_empty() {
        CardId::new(u32::MAX)
    } else {
        hand[pick % hand.len()].id
    };

    match selector % 7 {
        0 => Action::DrawFromDeck,
        1 => Action::DrawFromDiscard,
        2 => Action::Discard(card),
        3 => Action::CompletePhase(hand.iter().map(|card| card.id).collect()),
        4 => Action::PlayOnGroup {
            card,
            target: (pick % PLAYER_COUNT) as u8,
            kind: [GroupKind::Set, GroupKind::Run, GroupKind::Color][pick % 3],
            index: pick % 2,
        },
        5 => Action::StartNextRound,
        _ => Action::Discard(CardId::new(u32::MAX)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever is attempted, legal or not, the state stays consistent.
    #[test]
    fn prop_random_actions_keep_the_deck_whole(
        seed in any::<u64>(),
        fresh_deck in any::<bool>(),
        steps in prop::collection::vec((any::<u8>(), any::<usize>()), 1..300),
    ) {
        let policy = if fresh_deck {
            ReshufflePolicy::FreshDeck
        } else {
            ReshufflePolicy::RecycleDiscards
        };
        let mut source = DeckSource::new(seed);
        let mut state =
            GameState::new(GameOptions::default().with_reshuffle(policy), &mut source).unwrap();
        check_invariants(&state)?;

        for (selector, pick) in steps {
            let action = pick_action(&state, selector, pick);
            match state.apply(&action, &mut source) {
                Ok(next) => state = next,
                Err(_) => {
                    let retried = state.apply_or_unchanged(&action, &mut source);
                    prop_assert_eq!(&retried, &state);
                }
            }
            check_invariants(&state)?;
        }
    }

    /// Scores never go down and phases never go back within a match.
    #[test]
    fn prop_progress_is_monotonic(
        seed in any::<u64>(),
        steps in prop::collection::vec((any::<u8>(), any::<usize>()), 1..300),
    ) {
        let mut source = DeckSource::new(seed);
        let mut state = GameState::new(GameOptions::default(), &mut source).unwrap();

        for (selector, pick) in steps {
            let action = pick_action(&state, selector, pick);
            let next = state.apply_or_unchanged(&action, &mut source);
            for (before, after) in state.players().iter().zip(next.players()) {
                prop_assert!(after.score() >= before.score());
                prop_assert!(after.phase_index() >= before.phase_index());
            }
            state = next;
        }
    }
}

#[test]
fn two_random_opponents_play_without_illegal_moves() {
    let game = Game::new(GameOptions::default(), 77).unwrap();
    let mut seats = [RandomOpponent::new(1), RandomOpponent::new(2)];

    for _ in 0..2000 {
        let state = game.snapshot();
        match state.phase() {
            GamePhase::GameOver { .. } => break,
            GamePhase::RoundEnd => {
                game.start_next_round().unwrap();
                continue;
            }
            GamePhase::Playing => {}
        }

        let me = state.current_player_id();
        let action = seats[usize::from(me)]
            .next_action(&state, me)
            .expect("current seat always has a move");
        game.apply_scheduled(state.generation(), me, &action)
            .unwrap();

        let next = game.snapshot();
        assert!(next.is_complete());
        assert!(next.deck().len() + next.discard_pile().len() > 0);
    }

    let other = if game.snapshot().current_player_id() == HUMAN {
        COMPUTER
    } else {
        HUMAN
    };
    let state = game.snapshot();
    if state.phase() == GamePhase::Playing {
        assert_eq!(seats[usize::from(other)].next_action(&state, other), None);
    }
}
