//! Turn-by-turn rules scenarios.
//!
//! These tests drive complete games through the public API with stacked
//! decks, so every card position is known in advance.

mod common;

use common::{filler, fingerprint, init_logging, stacked_deck, stacked_faces};
use hanabi_engine::{Action, Card, Color, Deck, ErrorKind, Game, HanabiError, PlayerId};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Test initial state for every supported player count.
#[test]
fn test_initial_state_per_player_count() {
    init_logging();

    for (players, hand_size) in [(2, 5), (3, 5), (4, 4), (5, 4)] {
        let game = Game::new(players, Deck::new(1).unwrap()).unwrap();

        assert_eq!(game.turn(), 0);
        assert_eq!(game.current_player(), P0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.life(), 3);
        assert_eq!(game.hint_budget(), 8);
        assert_eq!(game.countdown(), players + 1);
        assert_eq!(game.deck_remaining(), 50 - players * hand_size);

        // Hands are dealt in draw order, one player at a time
        for player in PlayerId::all(players) {
            let indexes: Vec<u8> = game.hand(player).unwrap().iter().map(Card::index).collect();
            let first = (player.index() * hand_size) as u8;
            let expected: Vec<u8> = (first..first + hand_size as u8).collect();
            assert_eq!(indexes, expected);
        }

        for (_, run) in game.board().iter() {
            assert!(run.is_empty());
        }
        assert!(game.discard().is_empty());
        assert!(game.hint_history().is_empty());
    }
}

/// Test that invalid player counts are rejected.
#[test]
fn test_invalid_player_count() {
    for players in [0, 1, 6] {
        let err = Game::new(players, Deck::new(1).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

/// Test a valid discard: hand refilled, turn passes, pile grows.
#[test]
fn test_discard() {
    init_logging();
    let mut game = Game::new(2, Deck::new(1).unwrap()).unwrap();
    let card = game.hand(P0).unwrap()[2];

    assert_eq!(game.submit_action(Action::Discard(card)), Ok(None));

    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player(), P1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.life(), 3);
    assert_eq!(game.hint_budget(), 8);

    let hand = game.hand(P0).unwrap();
    assert!(!hand.contains(&card));
    assert_eq!(hand.len(), 5);
    assert_eq!(hand[4].index(), 10);
    assert_eq!(game.discard().iter().copied().collect::<Vec<_>>(), vec![card]);
    assert_eq!(game.deck_remaining(), 39);
}

/// Test that a card held by someone else cannot be played or discarded.
#[test]
fn test_ownership_is_checked_first() {
    init_logging();
    // Player 1 holds a playable red 1
    let mut faces = filler(5);
    faces.push((1, Color::Red));
    faces.extend(filler(10));
    let mut game = Game::new(2, stacked_faces(&faces)).unwrap();

    let foreign = game.hand(P1).unwrap()[0];
    let before = fingerprint(&game);

    for action in [Action::Play(foreign), Action::Discard(foreign)] {
        let err = game.submit_action(action).unwrap_err();
        assert_eq!(
            err,
            HanabiError::CardNotInHand {
                card: foreign,
                player: P0
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(fingerprint(&game), before);
    }
}

/// Test playing a card that extends its color.
#[test]
fn test_successful_play() {
    init_logging();
    let mut faces = vec![(1, Color::Yellow)];
    faces.extend(filler(15));
    let mut game = Game::new(2, stacked_faces(&faces)).unwrap();
    let one = game.hand(P0).unwrap()[0];

    assert_eq!(game.submit_action(Action::Play(one)), Ok(None));

    assert_eq!(game.score(), 1);
    assert_eq!(game.life(), 3);
    assert_eq!(game.hint_budget(), 8);
    assert_eq!(game.board().run(Color::Yellow), &[one]);
    assert!(game.discard().is_empty());
    assert!(!game.hand(P0).unwrap().contains(&one));
    assert_eq!(game.hand(P0).unwrap().len(), 5);
}

/// Test that only failed plays cost a life, and a life total of zero does not end the game.
#[test]
fn test_life_only_lost_on_misplay() {
    init_logging();
    // Player 0: G1, then three misplays (B3, R4, Y5), then a discard
    let faces = [
        (1, Color::Green),
        (3, Color::Blue),
        (4, Color::Red),
        (5, Color::Yellow),
        (2, Color::White),
    ];
    let mut all = faces.to_vec();
    all.extend(filler(15));
    let mut game = Game::new(2, stacked_faces(&all)).unwrap();
    let p0_cards: Vec<Card> = game.hand(P0).unwrap().to_vec();

    let pass = |game: &mut Game| {
        let card = game.hand(P1).unwrap()[0];
        game.submit_action(Action::Discard(card)).unwrap();
    };

    // Successful play
    game.submit_action(Action::Play(p0_cards[0])).unwrap();
    assert_eq!(game.life(), 3);
    pass(&mut game);
    assert_eq!(game.life(), 3);

    // Misplays
    for (i, card) in p0_cards[1..4].iter().enumerate() {
        game.submit_action(Action::Play(*card)).unwrap();
        assert_eq!(game.life(), 2 - i as u8);
        assert_eq!(game.discard().back(), Some(card));
        pass(&mut game);
    }
    assert_eq!(game.life(), 0);
    assert_eq!(game.score(), 1);

    // Still playable
    assert_eq!(game.submit_action(Action::Discard(p0_cards[4])), Ok(None));
    assert_eq!(game.life(), 0);
}

/// Test hint budget spending and the zero-budget rejection.
#[test]
fn test_hint_budget_runs_out() {
    init_logging();
    let mut game = Game::new(3, Deck::new(7).unwrap()).unwrap();

    for expected in (0..8).rev() {
        let target = PlayerId::for_turn(game.turn() + 1, 3);
        let hint = game.color_hint(target, Color::Blue).unwrap();
        game.submit_action(hint).unwrap();
        assert_eq!(game.hint_budget(), expected);
    }

    let target = PlayerId::for_turn(game.turn() + 1, 3);
    let hint = game.value_hint(target, 1).unwrap();
    let before = fingerprint(&game);
    assert_eq!(game.submit_action(hint), Err(HanabiError::NoHintLeft));
    assert_eq!(fingerprint(&game), before);
}

/// Test hint targets: self and unknown seats are rejected.
#[test]
fn test_invalid_hint_targets() {
    init_logging();
    let mut game = Game::new(2, Deck::new(3).unwrap()).unwrap();
    let before = fingerprint(&game);

    for target in [P0, PlayerId::new(2), PlayerId::new(255)] {
        let err = game
            .submit_action(Action::hint_color(target, Color::Red, &[]))
            .unwrap_err();
        assert_eq!(err, HanabiError::InvalidHintTarget { giver: P0, target });
        assert_eq!(fingerprint(&game), before);
    }
}

/// Test exhaustiveness: exactly the matching cards, in any order.
#[test]
fn test_hint_must_be_exhaustive() {
    init_logging();
    // Player 1 holds red cards with indexes 2 and 5 among non-red ones
    let deck = stacked_deck(&[
        (1, Color::Blue, 10),
        (1, Color::Blue, 11),
        (1, Color::Blue, 12),
        (1, Color::Blue, 13),
        (1, Color::Blue, 14),
        (3, Color::Red, 2),
        (3, Color::Green, 3),
        (4, Color::Red, 5),
        (4, Color::White, 6),
        (3, Color::Yellow, 7),
        (2, Color::White, 20),
    ]);
    let game = Game::new(2, deck).unwrap();

    let partial: [&[u8]; 4] = [&[2], &[2, 5, 7], &[], &[5, 7]];
    for declared in partial {
        let mut trial = game.clone();
        let err = trial
            .submit_action(Action::hint_color(P1, Color::Red, declared))
            .unwrap_err();
        assert_eq!(
            err,
            HanabiError::HintMismatch {
                declared: {
                    let mut d = declared.to_vec();
                    d.sort_unstable();
                    d
                },
                expected: vec![2, 5],
            }
        );
        assert_eq!(fingerprint(&trial), fingerprint(&game));
    }

    for declared in [[2u8, 5], [5, 2]] {
        let mut trial = game.clone();
        let action = Action::hint_color(P1, Color::Red, &declared);
        assert_eq!(trial.submit_action(action.clone()), Ok(None));
        assert_eq!(trial.hint_budget(), 7);
        assert_eq!(trial.turn(), 1);

        let record = trial.hint_history().front().unwrap();
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 0);
        assert_eq!(record.giver, P0);
    }
}

/// Test value hints, including a hint that names no card.
#[test]
fn test_value_hints() {
    init_logging();
    let deck = stacked_deck(&[
        (1, Color::Blue, 10),
        (1, Color::Blue, 11),
        (1, Color::Blue, 12),
        (1, Color::Blue, 13),
        (1, Color::Blue, 14),
        (3, Color::Red, 2),
        (3, Color::Green, 3),
        (4, Color::Red, 5),
        (4, Color::White, 6),
        (3, Color::Yellow, 7),
        (2, Color::White, 20),
    ]);
    let mut game = Game::new(2, deck).unwrap();

    // Nothing matches 5, so the empty list is the exhaustive answer
    assert_eq!(game.submit_action(Action::hint_value(P1, 5, &[])), Ok(None));

    // Player 1 now hints player 0's 1s
    let ones = Action::hint_value(P0, 1, &[14, 10, 12, 11, 13]);
    assert_eq!(game.submit_action(ones), Ok(None));

    // Hands are unchanged by hints
    assert_eq!(game.hand(P0).unwrap().len(), 5);
    assert_eq!(game.deck_remaining(), 1);
    assert_eq!(game.hint_budget(), 6);
    assert_eq!(game.hint_history().len(), 2);
    assert_eq!(game.hint_history()[1].turn, 1);

    let err = game
        .submit_action(Action::hint_value(P1, 3, &[2, 3]))
        .unwrap_err();
    assert!(matches!(err, HanabiError::HintMismatch { .. }));
}

/// Test the countdown once the deck is empty from the start.
///
/// Every action counts down, so `player_count + 1` actions are played and
/// the last one returns the score without advancing the turn.
#[test]
fn test_end_game_with_empty_deck() {
    init_logging();

    for (players, hand_size) in [(2usize, 5usize), (3, 5), (4, 4), (5, 4)] {
        let mut faces = vec![(1, Color::Red)];
        faces.extend(filler(players * hand_size - 1));
        let mut game = Game::new(players, stacked_faces(&faces)).unwrap();
        assert_eq!(game.deck_remaining(), 0);

        let one = game.hand(P0).unwrap()[0];
        assert_eq!(game.submit_action(Action::Play(one)), Ok(None));

        let mut calls = 1;
        let final_score = loop {
            let player = game.current_player();
            let card = game.hand(player).unwrap()[0];
            calls += 1;
            if let Some(score) = game.submit_action(Action::Discard(card)).unwrap() {
                break score;
            }
        };

        assert_eq!(final_score, 1);
        assert_eq!(calls, players + 1);
        assert_eq!(game.turn(), players as u32);
        assert_eq!(game.score(), 1);
        assert_eq!(game.life(), 3);
        assert_eq!(game.hint_budget(), 8);
        assert!(game.is_finished());

        // The last player to act played twice
        let last = game.current_player();
        assert_eq!(game.hand(last).unwrap().len(), hand_size - 2);
        for other in last.others(players) {
            assert_eq!(game.hand(other).unwrap().len(), hand_size - 1);
        }
    }
}

/// Test that the action drawing the last card starts the final round.
#[test]
fn test_end_game_after_last_draw() {
    init_logging();
    // 12 cards: 10 dealt, 2 left in the deck
    let mut faces = filler(10);
    faces.push((1, Color::Green));
    faces.push((2, Color::White));
    let mut game = Game::new(2, stacked_faces(&faces)).unwrap();

    let discard_first = |game: &mut Game| {
        let player = game.current_player();
        let card = game.hand(player).unwrap()[0];
        game.submit_action(Action::Discard(card))
    };

    // Draws the green 1
    assert_eq!(discard_first(&mut game), Ok(None));
    assert_eq!(game.countdown(), 3);

    // Empties the deck
    assert_eq!(discard_first(&mut game), Ok(None));
    assert_eq!(game.deck_remaining(), 0);
    assert_eq!(game.countdown(), 2);

    // Player 0 plays the green 1 it drew
    let green = Card::new(1, Color::Green, 10).unwrap();
    assert_eq!(game.submit_action(Action::Play(green)), Ok(None));
    assert_eq!(game.countdown(), 1);

    // Last action returns the score
    assert_eq!(discard_first(&mut game), Ok(Some(1)));
    assert_eq!(game.turn(), 3);
    assert!(game.is_finished());
}

/// Test that a finished game rejects everything and stays unchanged.
#[test]
fn test_finished_game_rejects_actions() {
    init_logging();
    let mut game = Game::new(2, stacked_faces(&filler(10))).unwrap();
    loop {
        let card = game.hand(game.current_player()).unwrap()[0];
        if game.submit_action(Action::Discard(card)).unwrap().is_some() {
            break;
        }
    }

    let before = fingerprint(&game);
    let card = game.hand(game.current_player()).unwrap()[0];
    let attempts = [
        Action::Discard(card),
        Action::Play(card),
        Action::hint_value(P1, 2, &[]),
    ];
    for action in attempts {
        let err = game.submit_action(action).unwrap_err();
        assert_eq!(err, HanabiError::GameFinished);
        assert_eq!(err.kind(), ErrorKind::IllegalState);
    }
    assert_eq!(fingerprint(&game), before);
    assert!(game.legal_actions().is_empty());
}

/// Test replaying the same actions on the same seed gives the same game.
#[test]
fn test_deterministic_replay() {
    init_logging();
    let play = |seed: u64| {
        let mut game = Game::new(3, Deck::new(seed).unwrap()).unwrap();
        let mut log = Vec::new();
        loop {
            // Always the first legal action: play the oldest card
            let action = game.legal_actions()[0].clone();
            log.push(action.clone());
            if let Some(score) = game.submit_action(action).unwrap() {
                return (score, log, game.to_string());
            }
        }
    };

    assert_eq!(play(17), play(17));
}
