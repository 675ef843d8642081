//! Per-chat game aggregate: player registry, hands, deck, trump, table and turn.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::deck::{build_deck, derive_trump, shuffle};
use crate::domain::table::{TableHistory, TableSlot};
use crate::domain::{Card, Suit};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Chat identifier a session is keyed by. Group chats have negative ids.
pub type ChatId = i64;

/// Messaging-platform user identifier.
pub type PlayerId = i64;

/// Cards each player receives on a deal, deck permitting.
pub const HAND_SIZE: usize = 6;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// No deal has happened yet; joins are open.
    Empty,
    /// Hands are dealt. Further deals stay in this phase.
    Dealt,
}

/// State of one chat's game.
///
/// Invariants:
/// - `players` has no duplicates and `hands` has exactly one entry per player
/// - once `started`, joins are rejected
/// - `turn_index < players.len()` whenever `players` is non-empty
#[derive(Debug, Clone)]
pub struct Game {
    chat_id: ChatId,
    players: Vec<PlayerId>,
    hands: HashMap<PlayerId, Vec<Card>>,
    deck: Vec<Card>,
    trump: Option<Suit>,
    started: bool,
    table: Vec<TableSlot>,
    turn_index: usize,
    history: TableHistory,
}

impl Game {
    pub fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            players: Vec::new(),
            hands: HashMap::new(),
            deck: Vec::new(),
            trump: None,
            started: false,
            table: Vec::new(),
            turn_index: 0,
            history: Vec::new(),
        }
    }

    /// Register a player with an empty hand.
    ///
    /// Rejected once the game has started, or if the player already joined.
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), DomainError> {
        if self.started {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                format!("Chat {} already dealt; joins are closed", self.chat_id),
            ));
        }
        if self.players.contains(&player) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerAlreadyJoined,
                format!("Player {player} already joined chat {}", self.chat_id),
            ));
        }
        self.players.push(player);
        self.hands.insert(player, Vec::new());
        Ok(())
    }

    /// Drop a player and their hand. Allowed at any phase.
    ///
    /// The turn pointer keeps pointing at the same player when someone seated
    /// before them leaves. If the player whose turn it was leaves, the turn
    /// passes to the next player in join order, wrapping to the first.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<(), DomainError> {
        let Some(idx) = self.players.iter().position(|p| *p == player) else {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player} is not in chat {}", self.chat_id),
            ));
        };

        self.players.remove(idx);
        self.hands.remove(&player);

        if idx < self.turn_index {
            self.turn_index -= 1;
        }
        if self.turn_index >= self.players.len() {
            self.turn_index = 0;
        }
        Ok(())
    }

    /// Shuffle a fresh deck and deal with the thread-local RNG.
    pub fn deal(&mut self) {
        self.deal_with(&mut rand::rng());
    }

    /// Shuffle a fresh deck with `rng`, take trump from its last card and
    /// deal one card at a time round-robin from the end of the deck until
    /// every hand holds [`HAND_SIZE`] cards or the deck runs out. The trump
    /// card is not set aside; it is the first card dealt.
    ///
    /// Resets turn, table and history; keeps the player list.
    pub fn deal_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);
        // A freshly built deck is never empty.
        self.trump = derive_trump(&deck).ok();

        for player in &self.players {
            self.hands.insert(*player, Vec::with_capacity(HAND_SIZE));
        }

        'rounds: for _ in 0..HAND_SIZE {
            for player in &self.players {
                let Some(card) = deck.pop() else {
                    break 'rounds;
                };
                self.hands.entry(*player).or_default().push(card);
            }
        }

        self.deck = deck;
        self.started = true;
        self.turn_index = 0;
        self.table.clear();
        self.history.clear();
    }

    /// Pass the turn to the next player in join order, wrapping to the first.
    ///
    /// Purely positional: no play is checked.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        if self.players.is_empty() {
            self.turn_index = 0;
            return None;
        }
        self.turn_index = (self.turn_index + 1) % self.players.len();
        self.current_turn()
    }

    /// The player's current cards; empty for unknown players.
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        self.hands.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn hand_len(&self, player: PlayerId) -> usize {
        self.hand(player).len()
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn contains_player(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Undealt cards; the last element is the next card dealt.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        if self.started {
            Phase::Dealt
        } else {
            Phase::Empty
        }
    }

    pub fn table(&self) -> &[TableSlot] {
        &self.table
    }

    pub fn history(&self) -> &TableHistory {
        &self.history
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Player whose turn it is, or `None` when nobody has joined.
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.players.get(self.turn_index).copied()
    }
}
