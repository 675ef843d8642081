//! Lifecycle tests for the game aggregate: joins, removals, deals, turn pointer.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{Card, Game, Phase, Suit, DECK_SIZE, HAND_SIZE};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

const ALICE: i64 = 101;
const BOB: i64 = 202;
const CAROL: i64 = 303;

fn game_with(players: &[i64]) -> Game {
    let mut game = Game::new(-1001);
    for p in players {
        game.add_player(*p).unwrap();
    }
    game
}

fn total_cards(game: &Game) -> usize {
    game.players().iter().map(|p| game.hand_len(*p)).sum::<usize>() + game.deck_len()
}

#[test]
fn new_game_is_empty_and_unstarted() {
    let game = Game::new(42);
    assert_eq!(game.chat_id(), 42);
    assert!(game.players().is_empty());
    assert!(!game.is_started());
    assert_eq!(game.phase(), Phase::Empty);
    assert_eq!(game.trump(), None);
    assert_eq!(game.deck_len(), 0);
    assert_eq!(game.current_turn(), None);
    assert!(game.table().is_empty());
    assert!(game.history().is_empty());
}

#[test]
fn add_player_keeps_join_order_and_creates_empty_hand() {
    let game = game_with(&[BOB, ALICE, CAROL]);
    assert_eq!(game.players(), &[BOB, ALICE, CAROL]);
    assert!(game.hand(ALICE).is_empty());
    assert_eq!(game.current_turn(), Some(BOB));
}

#[test]
fn duplicate_join_is_rejected_without_side_effects() {
    let mut game = game_with(&[ALICE]);
    let err = game.add_player(ALICE).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::PlayerAlreadyJoined, _)
    ));
    assert_eq!(game.players(), &[ALICE]);
}

#[test]
fn join_after_deal_is_rejected() {
    let mut game = game_with(&[ALICE, BOB]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(7));

    let err = game.add_player(CAROL).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyStarted, _)
    ));
    assert_eq!(game.players().len(), 2);
    assert!(game.hand(CAROL).is_empty());
}

#[test]
fn remove_unknown_player_is_a_failure_without_side_effects() {
    let mut game = game_with(&[ALICE, BOB]);
    let err = game.remove_player(CAROL).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    assert_eq!(game.players(), &[ALICE, BOB]);
}

#[test]
fn remove_player_discards_hand_mid_game() {
    let mut game = game_with(&[ALICE, BOB]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(game.hand_len(BOB), HAND_SIZE);

    game.remove_player(BOB).unwrap();
    assert_eq!(game.players(), &[ALICE]);
    assert!(game.hand(BOB).is_empty());
    // Removal is idempotent in effect: the second attempt fails.
    assert!(game.remove_player(BOB).is_err());
}

#[test]
fn deal_scenario_two_players() {
    let mut game = game_with(&[ALICE, BOB]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(2024));

    assert_eq!(game.hand_len(ALICE), 6);
    assert_eq!(game.hand_len(BOB), 6);
    assert_eq!(game.deck_len(), DECK_SIZE - 12);
    assert!(game.is_started());
    assert_eq!(game.phase(), Phase::Dealt);
    assert_eq!(game.current_turn(), Some(ALICE));

    let trump = game.trump().expect("trump is set after a deal");
    assert!(Suit::ALL.contains(&trump));
}

#[test]
fn deal_conserves_all_36_cards_without_duplicates() {
    let mut game = game_with(&[ALICE, BOB, CAROL]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(total_cards(&game), DECK_SIZE);

    let mut seen: HashSet<Card> = HashSet::new();
    for p in game.players() {
        for card in game.hand(*p) {
            assert!(seen.insert(*card), "duplicate card {card}");
        }
    }
    assert_eq!(seen.len(), 18);
}

#[test]
fn deal_round_robin_takes_from_the_deck_tail() {
    let mut reference = crate::domain::build_deck();
    crate::domain::shuffle(&mut reference, &mut ChaCha8Rng::seed_from_u64(99));

    let mut game = game_with(&[ALICE, BOB]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(99));

    // First card popped goes to the first player, second to the next.
    let n = reference.len();
    assert_eq!(game.hand(ALICE)[0], reference[n - 1]);
    assert_eq!(game.hand(BOB)[0], reference[n - 2]);
    assert_eq!(game.hand(ALICE)[1], reference[n - 3]);

    // Trump is read from the last card before dealing starts, so that card
    // is the first one handed out.
    assert_eq!(game.trump(), Some(reference[n - 1].suit));
    assert_eq!(game.deck(), &reference[..n - 12]);
}

#[test]
fn deal_with_seed_is_reproducible() {
    let mut a = game_with(&[ALICE, BOB]);
    let mut b = game_with(&[ALICE, BOB]);
    a.deal_with(&mut ChaCha8Rng::seed_from_u64(5));
    b.deal_with(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(a.hand(ALICE), b.hand(ALICE));
    assert_eq!(a.hand(BOB), b.hand(BOB));
    assert_eq!(a.trump(), b.trump());
}

#[test]
fn deck_runs_out_mid_round_for_large_tables() {
    // 7 players want 42 cards; only 36 exist.
    let players: Vec<i64> = (1..=7).collect();
    let mut game = game_with(&players);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(8));

    assert_eq!(game.deck_len(), 0);
    assert_eq!(total_cards(&game), DECK_SIZE);
    // 5 full rounds (35 cards) and one card of the sixth round.
    assert_eq!(game.hand_len(1), 6);
    for p in 2..=7 {
        assert_eq!(game.hand_len(p), 5, "player {p}");
    }
    // Trump is still derived before dealing exhausts the deck.
    assert!(game.trump().is_some());
}

#[test]
fn deal_without_players_still_starts_game() {
    let mut game = Game::new(1);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(1));
    assert!(game.is_started());
    assert_eq!(game.deck_len(), DECK_SIZE);
    assert_eq!(game.current_turn(), None);
}

#[test]
fn redeal_resets_hands_and_turn_but_keeps_players() {
    let mut game = game_with(&[ALICE, BOB, CAROL]);
    game.deal_with(&mut ChaCha8Rng::seed_from_u64(1));
    game.remove_player(ALICE).unwrap();
    assert_eq!(game.current_turn(), Some(BOB));

    game.deal_with(&mut ChaCha8Rng::seed_from_u64(2));
    assert_eq!(game.players(), &[BOB, CAROL]);
    assert_eq!(game.hand_len(BOB), HAND_SIZE);
    assert_eq!(game.hand_len(CAROL), HAND_SIZE);
    assert_eq!(game.turn_index(), 0);
    assert!(game.table().is_empty());
    assert!(game.history().is_empty());
    assert_eq!(total_cards(&game), DECK_SIZE);
    // Still closed for joins after a re-deal.
    assert!(game.add_player(ALICE).is_err());
}

#[test]
fn two_unseeded_deals_differ() {
    let mut game = game_with(&[ALICE, BOB]);
    game.deal();
    let first: Vec<Card> = game.hand(ALICE).to_vec();
    let mut differed = false;
    for _ in 0..8 {
        game.deal();
        assert_eq!(total_cards(&game), DECK_SIZE);
        if game.hand(ALICE) != first.as_slice() {
            differed = true;
            break;
        }
    }
    assert!(differed, "eight consecutive deals produced the same hand");
}

mod turn_pointer {
    use super::*;

    fn game_at_turn(players: &[i64], turn: usize) -> Game {
        let mut game = game_with(players);
        game.deal_with(&mut ChaCha8Rng::seed_from_u64(0));
        for _ in 0..turn {
            game.advance_turn();
        }
        assert_eq!(game.turn_index(), turn);
        game
    }

    #[test]
    fn advance_turn_walks_join_order_and_wraps() {
        let mut game = game_with(&[ALICE, BOB, CAROL]);
        assert_eq!(game.advance_turn(), Some(BOB));
        assert_eq!(game.advance_turn(), Some(CAROL));
        assert_eq!(game.advance_turn(), Some(ALICE));
    }

    #[test]
    fn advance_turn_without_players_is_none() {
        let mut game = Game::new(5);
        assert_eq!(game.advance_turn(), None);
        assert_eq!(game.turn_index(), 0);
    }

    #[test]
    fn deal_resets_turn_to_first_player() {
        let mut game = game_at_turn(&[ALICE, BOB, CAROL], 2);
        game.deal_with(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(game.current_turn(), Some(ALICE));
    }

    #[test]
    fn removing_current_player_passes_turn_to_next() {
        let mut game = game_at_turn(&[ALICE, BOB, CAROL], 1);
        game.remove_player(BOB).unwrap();
        assert_eq!(game.current_turn(), Some(CAROL));
    }

    #[test]
    fn removing_current_last_player_wraps_to_first() {
        let mut game = game_at_turn(&[ALICE, BOB, CAROL], 2);
        game.remove_player(CAROL).unwrap();
        assert_eq!(game.current_turn(), Some(ALICE));
        assert_eq!(game.turn_index(), 0);
    }

    #[test]
    fn removing_earlier_player_keeps_turn_on_same_player() {
        let mut game = game_at_turn(&[ALICE, BOB, CAROL], 2);
        game.remove_player(ALICE).unwrap();
        assert_eq!(game.current_turn(), Some(CAROL));
        assert_eq!(game.turn_index(), 1);
    }

    #[test]
    fn removing_later_player_keeps_turn() {
        let mut game = game_at_turn(&[ALICE, BOB, CAROL], 0);
        game.remove_player(CAROL).unwrap();
        assert_eq!(game.current_turn(), Some(ALICE));
        assert_eq!(game.turn_index(), 0);
    }

    #[test]
    fn removing_everyone_leaves_no_turn() {
        let mut game = game_at_turn(&[ALICE, BOB], 1);
        game.remove_player(ALICE).unwrap();
        game.remove_player(BOB).unwrap();
        assert_eq!(game.current_turn(), None);
        assert_eq!(game.turn_index(), 0);
    }

    #[test]
    fn pointer_stays_in_bounds_through_any_removal_order() {
        for turn in 0..3 {
            for order in [
                [ALICE, BOB, CAROL],
                [CAROL, BOB, ALICE],
                [BOB, CAROL, ALICE],
                [BOB, ALICE, CAROL],
            ] {
                let mut game = game_at_turn(&[ALICE, BOB, CAROL], turn);
                for p in order {
                    game.remove_player(p).unwrap();
                    if !game.players().is_empty() {
                        assert!(game.turn_index() < game.players().len());
                        assert!(game.current_turn().is_some());
                    }
                }
            }
        }
    }
}
