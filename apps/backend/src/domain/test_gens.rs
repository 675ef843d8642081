// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, PlayerId, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ORDERED.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card { rank, suit })
}

/// Generate `min..=max` distinct player ids in join order.
pub fn player_ids(min: usize, max: usize) -> impl Strategy<Value = Vec<PlayerId>> {
    prop::collection::hash_set(any::<PlayerId>(), min..=max)
        .prop_map(|set| set.into_iter().collect())
}
