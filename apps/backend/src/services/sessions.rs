//! In-memory session directory: one serialized `Game` per chat.
//!
//! The directory maps chat ids to sessions. Creation is atomic per key, so
//! concurrent first requests for a chat all land on the same session. Each
//! session guards its game with its own mutex; handle operations hold that
//! lock for their whole duration, which makes every operation observable as
//! all-or-nothing. Different chats never contend on a session lock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::{
    player_view, snapshot, Card, ChatId, Game, GameSnapshot, PlayerId, PlayerView,
};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Sessions untouched for this long are dropped by the idle sweep.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

struct SessionSlot {
    game: Mutex<Game>,
    last_active: Mutex<Instant>,
}

impl SessionSlot {
    fn new(chat_id: ChatId) -> Self {
        Self {
            game: Mutex::new(Game::new(chat_id)),
            last_active: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_active.lock() = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_active.lock())
    }
}

/// Shared handle to one chat's session.
///
/// Cloning is cheap. A handle obtained before the session was removed keeps
/// working on the detached game; the next `get_or_create` for that chat
/// starts a fresh one.
#[derive(Clone)]
pub struct SessionHandle {
    chat_id: ChatId,
    slot: Arc<SessionSlot>,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    fn with_game<T>(&self, op: impl FnOnce(&mut Game) -> T) -> T {
        let mut game = self.slot.game.lock();
        self.slot.touch();
        op(&mut game)
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn add_player(&self, user_id: PlayerId) -> Result<(), DomainError> {
        let chat_id = self.chat_id;
        let result = self.with_game(|game| game.add_player(user_id));
        match &result {
            Ok(()) => info!(chat_id, user_id, "Player joined"),
            Err(e) => debug!(chat_id, user_id, error = %e, "Join rejected"),
        }
        result
    }

    pub fn remove_player(&self, user_id: PlayerId) -> Result<(), DomainError> {
        let chat_id = self.chat_id;
        let result = self.with_game(|game| game.remove_player(user_id));
        match &result {
            Ok(()) => info!(chat_id, user_id, "Player left"),
            Err(e) => debug!(chat_id, user_id, error = %e, "Leave rejected"),
        }
        result
    }

    /// Shuffle and deal with the thread-local RNG. Returns the projection
    /// taken under the same lock as the deal.
    pub fn deal(&self) -> GameSnapshot {
        self.deal_with(&mut rand::rng())
    }

    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSnapshot {
        let chat_id = self.chat_id;
        let snap = self.with_game(|game| {
            game.deal_with(rng);
            snapshot(game)
        });
        info!(
            chat_id,
            players = snap.players.len(),
            deck_count = snap.deck_count,
            trump = ?snap.trump,
            "Dealt"
        );
        snap
    }

    pub fn advance_turn(&self) -> Option<PlayerId> {
        let chat_id = self.chat_id;
        let next = self.with_game(Game::advance_turn);
        debug!(chat_id, turn_user = ?next, "Turn advanced");
        next
    }

    /// Copy of the player's hand; empty for non-members.
    pub fn hand(&self, user_id: PlayerId) -> Vec<Card> {
        self.with_game(|game| game.hand(user_id).to_vec())
    }

    /// Public projection of the game. Never contains hand contents.
    pub fn project(&self) -> GameSnapshot {
        self.with_game(|game| snapshot(game))
    }

    /// The player's own hand plus the public projection.
    pub fn player_view(&self, user_id: PlayerId) -> Result<PlayerView, DomainError> {
        self.with_game(|game| {
            if !game.contains_player(user_id) {
                return Err(DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {user_id} is not in chat {}", game.chat_id()),
                ));
            }
            Ok(player_view(game, user_id))
        })
    }

    /// Run a read-only closure against the game under the session lock.
    pub fn read<T>(&self, op: impl FnOnce(&Game) -> T) -> T {
        self.with_game(|game| op(game))
    }
}

/// Concurrent map from chat id to session.
pub struct SessionDirectory {
    sessions: DashMap<ChatId, Arc<SessionSlot>>,
    idle_ttl: Duration,
}

impl std::fmt::Debug for SessionDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDirectory")
            .field("sessions", &self.sessions.len())
            .field("idle_ttl", &self.idle_ttl)
            .finish()
    }
}

impl Default for SessionDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL)
    }
}

impl SessionDirectory {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Return the session for `chat_id`, creating an empty one if absent.
    ///
    /// Concurrent callers with the same id always receive the same session.
    /// The lookup counts as activity: it is stamped while the shard lock is
    /// held, so an idle sweep cannot drop a session between lookup and use.
    pub fn get_or_create(&self, chat_id: ChatId) -> SessionHandle {
        let entry = self.sessions.entry(chat_id).or_insert_with(|| {
            info!(chat_id, "Session created");
            Arc::new(SessionSlot::new(chat_id))
        });
        entry.touch();
        let slot = Arc::clone(entry.value());
        drop(entry);
        SessionHandle { chat_id, slot }
    }

    #[cfg(test)]
    fn backdate(&self, chat_id: ChatId, by: Duration) {
        if let Some(slot) = self.sessions.get(&chat_id) {
            let mut stamp = slot.last_active.lock();
            let earlier = stamp.checked_sub(by).unwrap_or(*stamp);
            *stamp = earlier;
        }
    }

    /// Existing session only; never creates.
    pub fn get(&self, chat_id: ChatId) -> Option<SessionHandle> {
        self.sessions
            .get(&chat_id)
            .map(|entry| SessionHandle {
                chat_id,
                slot: entry.value().clone(),
            })
    }

    pub fn remove(&self, chat_id: ChatId) -> Result<(), DomainError> {
        match self.sessions.remove(&chat_id) {
            Some(_) => {
                info!(chat_id, "Session removed");
                Ok(())
            }
            None => Err(DomainError::not_found(
                NotFoundKind::Session,
                format!("No session for chat {chat_id}"),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle for at least the configured TTL as of `now`.
    /// Returns the evicted chat ids.
    pub fn evict_idle(&self, now: Instant) -> Vec<ChatId> {
        let ttl = self.idle_ttl;
        let mut evicted = Vec::new();
        self.sessions.retain(|chat_id, slot| {
            let keep = slot.idle_for(now) < ttl;
            if !keep {
                evicted.push(*chat_id);
            }
            keep
        });
        for chat_id in &evicted {
            info!(chat_id, "Session evicted after idle timeout");
        }
        evicted
    }
}

/// Run [`SessionDirectory::evict_idle`] every `every` until the task is aborted.
pub fn spawn_idle_sweeper(
    directory: Arc<SessionDirectory>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = directory.evict_idle(Instant::now());
            if !evicted.is_empty() {
                debug!(
                    evicted = evicted.len(),
                    remaining = directory.len(),
                    "Idle sweep finished"
                );
            }
        }
    })
}
