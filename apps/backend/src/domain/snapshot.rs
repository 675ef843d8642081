//! Public snapshot API for observing game state without exposing hands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::{Game, Phase, PlayerId};
use crate::domain::table::TableSlot;
use crate::domain::{Card, Suit};

/// Read-only view of a game that is safe to show to anyone in the chat.
///
/// Hands appear only as counts keyed by the stringified player id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerId>,
    pub hands_count: BTreeMap<String, usize>,
    pub trump: Option<Suit>,
    pub deck_count: usize,
    pub started: bool,
    pub table: Vec<TableSlot>,
    pub turn_user: Option<PlayerId>,
}

/// Snapshot plus the requesting player's own hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub user_id: PlayerId,
    pub phase: Phase,
    pub hand: Vec<Card>,
    pub game: GameSnapshot,
}

/// Produce the public snapshot of a game.
pub fn snapshot(game: &Game) -> GameSnapshot {
    let hands_count = game
        .players()
        .iter()
        .map(|p| (p.to_string(), game.hand_len(*p)))
        .collect();

    GameSnapshot {
        players: game.players().to_vec(),
        hands_count,
        trump: game.trump(),
        deck_count: game.deck_len(),
        started: game.is_started(),
        table: game.table().to_vec(),
        turn_user: game.current_turn(),
    }
}

/// Produce the view a single player may see: the public snapshot and their hand.
pub fn player_view(game: &Game, player: PlayerId) -> PlayerView {
    PlayerView {
        user_id: player,
        phase: game.phase(),
        hand: game.hand(player).to_vec(),
        game: snapshot(game),
    }
}
