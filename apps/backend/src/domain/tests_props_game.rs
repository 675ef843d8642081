//! Property tests for deck construction and dealing.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::test_gens;
use crate::domain::{build_deck, compare_strength, shuffle, Card, Game, DECK_SIZE, HAND_SIZE};

fn sorted_by_text(cards: &[Card]) -> Vec<String> {
    let mut v: Vec<String> = cards.iter().map(Card::to_string).collect();
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, failure_persistence: None, ..ProptestConfig::default() })]

    /// Shuffle is a permutation: the multiset of cards is unchanged.
    #[test]
    fn prop_shuffle_preserves_cards(seed in any::<u64>()) {
        let original = build_deck();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(sorted_by_text(&original), sorted_by_text(&shuffled));
    }

    /// After any deal, cards in hands plus cards in the deck are the full 36.
    #[test]
    fn prop_deal_conserves_cards(
        players in test_gens::player_ids(1, 8),
        seed in any::<u64>(),
    ) {
        let mut game = Game::new(0);
        for p in &players {
            game.add_player(*p).unwrap();
        }
        game.deal_with(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut all: Vec<Card> = game.deck().to_vec();
        for p in &players {
            all.extend_from_slice(game.hand(*p));
        }
        prop_assert_eq!(all.len(), DECK_SIZE);

        let unique: HashSet<Card> = all.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE, "a card was dealt twice");

        for p in &players {
            prop_assert!(game.hand_len(*p) <= HAND_SIZE);
        }
    }

    /// Joins are closed once dealt, whoever asks.
    #[test]
    fn prop_join_after_deal_fails(
        players in test_gens::player_ids(0, 6),
        late in any::<i64>(),
        seed in any::<u64>(),
    ) {
        let mut game = Game::new(0);
        for p in &players {
            game.add_player(*p).unwrap();
        }
        game.deal_with(&mut ChaCha8Rng::seed_from_u64(seed));
        let before = game.players().to_vec();

        prop_assert!(game.add_player(late).is_err());
        prop_assert_eq!(game.players(), before.as_slice());
    }

    /// Strength comparison is antisymmetric.
    #[test]
    fn prop_compare_strength_antisymmetric(
        a in test_gens::card(),
        b in test_gens::card(),
        trump in test_gens::suit(),
    ) {
        let ab = compare_strength(a, b, trump);
        let ba = compare_strength(b, a, trump);
        prop_assert_eq!(ab.map(|o| o.reverse()), ba);
    }
}
