//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod snapshot;
pub mod table;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_game;

// Re-exports for ergonomics
pub use cards_logic::compare_strength;
pub use cards_types::{Card, Rank, Suit};
pub use deck::{build_deck, derive_trump, shuffle, DECK_SIZE};
pub use game::{ChatId, Game, Phase, PlayerId, HAND_SIZE};
pub use snapshot::{player_view, snapshot, GameSnapshot, PlayerView};
pub use table::TableSlot;
