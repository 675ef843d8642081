//! Card text format: rank label followed by one suit glyph (e.g. "10♠", "Q♦").
//!
//! External consumers parse this string back into (rank, suit), so `Display`
//! and `FromStr` must stay exact inverses.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let suit_ch = s.chars().next_back().ok_or_else(parse_err)?;
        let suit = Suit::from_glyph(suit_ch).ok_or_else(parse_err)?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];
        let rank = Rank::from_label(rank_part).ok_or_else(parse_err)?;

        Ok(Card { rank, suit })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Suit::from_glyph), chars.next()) {
            (Some(suit), None) => Ok(suit),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "A♠", "10♥") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
