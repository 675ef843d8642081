//! Deck construction, shuffling and trump derivation for the 36-card deck.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const DECK_SIZE: usize = 36;

/// Generate the full 36-card deck in canonical order: rank outer, suit inner.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ORDERED {
        for suit in Suit::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Uniform in-place Fisher-Yates shuffle driven by the caller's RNG.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Trump is the suit of the last element of the deck.
/// The card stays in the deck.
pub fn derive_trump(deck: &[Card]) -> Result<Suit, DomainError> {
    deck.last().map(|card| card.suit).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::EmptyDeck,
            "Cannot derive trump from an empty deck",
        )
    })
}
