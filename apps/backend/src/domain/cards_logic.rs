//! Card strength comparison relative to a trump suit.
//!
//! This only states which pairs of cards are comparable and how; deciding
//! whether a play is legal belongs to trick rules, which this crate does not model.

use std::cmp::Ordering;

use super::cards_types::{Card, Suit};

/// Compare the strength of two cards given the trump suit.
///
/// - same suit: ordered by rank
/// - exactly one trump: the trump card is greater
/// - different non-trump suits: `None` (not comparable)
pub fn compare_strength(a: Card, b: Card, trump: Suit) -> Option<Ordering> {
    if a.suit == b.suit {
        return Some(a.rank.cmp(&b.rank));
    }
    match (a.suit == trump, b.suit == trump) {
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        _ => None,
    }
}
