//! Snapshot serialization.
#![cfg(feature = "serde")]

use phase10::{ActionError, DeckSource, Game, GameOptions, GameState, ReshufflePolicy};

#[test]
fn snapshot_survives_json_mid_round() {
    let mut source = DeckSource::new(31);
    let options = GameOptions::default().with_reshuffle(ReshufflePolicy::FreshDeck);
    let state = GameState::new(options, &mut source).unwrap();
    let state = state.draw_from_deck(&mut source).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    let card = restored.current_player().hand()[0].id;
    let next = restored.discard(card).unwrap();
    assert_eq!(next.top_discard().map(|card| card.id), Some(card));
}

#[test]
fn options_read_from_json() {
    let options: GameOptions = serde_json::from_str(
        r#"{"hand_size":7,"wild_penalty":50,"skip_penalty":10,"reshuffle":"RecycleDiscards"}"#,
    )
    .unwrap();

    assert_eq!(
        options,
        GameOptions::default()
            .with_hand_size(7)
            .with_wild_penalty(50)
            .with_skip_penalty(10)
    );
    assert!(options.validate().is_ok());
}

#[test]
fn corrupt_snapshots_are_refused() {
    let game = Game::new(GameOptions::default(), 35).unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();

    let mut bad_seat = json.clone();
    bad_seat["current_player"] = serde_json::json!(5);
    assert!(serde_json::from_value::<GameState>(bad_seat).is_err());

    let mut one_player = json.clone();
    one_player["players"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<GameState>(one_player).is_err());

    let mut short_deck = json.clone();
    short_deck["deck"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<GameState>(short_deck).is_err());

    let restored: GameState = serde_json::from_value(json).unwrap();
    game.restore(restored).unwrap();
    game.draw_from_deck().unwrap();
    assert!(game.snapshot().has_drawn());
}

#[test]
fn restore_refuses_a_state_with_lost_cards() {
    let game = Game::new(GameOptions::default(), 36).unwrap();
    let before = game.snapshot();
    let broken = before.clone().with_hand(1, Vec::new());

    assert_eq!(game.restore(broken), Err(ActionError::InvalidSnapshot));
    assert_eq!(game.snapshot(), before);
    game.draw_from_deck().unwrap();
}
