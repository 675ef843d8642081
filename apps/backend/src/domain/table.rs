//! Table layout: attack cards in contention, each optionally covered.
//!
//! These are structural only. Nothing in the domain places or beats cards;
//! a deal simply clears the table and its history.

use serde::{Deserialize, Serialize};

use crate::domain::Card;

/// One attack card on the table and the defense card covering it, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSlot {
    pub attack: Card,
    pub defense: Option<Card>,
}

impl TableSlot {
    pub const fn open(attack: Card) -> Self {
        Self {
            attack,
            defense: None,
        }
    }

    pub const fn is_covered(&self) -> bool {
        self.defense.is_some()
    }
}

/// Past table states, oldest first.
pub type TableHistory = Vec<Vec<TableSlot>>;
