//! In-memory registry of running game sessions.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex, RwLock};
use uuid::Uuid;

use crate::domain::value_objects::GameMode;
use crate::errors::GameError;

use super::session::{GameEvent, GameSession};

/// Buffered events per subscriber before slow listeners start lagging
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A session event tagged with its origin, as seen by subscribers
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub session_id: Uuid,
    pub user_id: i64,
    pub event: GameEvent,
}

struct Entry {
    user_id: i64,
    mode: GameMode,
    session: Arc<Mutex<GameSession>>,
}

/// Sessions keyed by id, each behind its own lock
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    events: broadcast::Sender<SessionEvent>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            sessions: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Listen to events from every session
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Store a session, replacing the player's previous session of the same mode
    pub async fn insert(&self, session: GameSession) -> Uuid {
        let id = session.id();
        let entry = Entry {
            user_id: session.user_id(),
            mode: session.mode(),
            session: Arc::new(Mutex::new(session)),
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|previous, existing| {
            let replaced = existing.user_id == entry.user_id && existing.mode == entry.mode;
            if replaced {
                tracing::debug!(user_id = entry.user_id, session_id = %previous, "Game session replaced");
            }
            !replaced
        });
        sessions.insert(id, entry);
        id
    }

    /// Fetch a session owned by `user_id`; other players' sessions do not exist
    pub async fn get(
        &self,
        user_id: i64,
        session_id: Uuid,
    ) -> Result<Arc<Mutex<GameSession>>, GameError> {
        let sessions = self.sessions.read().await;
        match sessions.get(&session_id) {
            Some(entry) if entry.user_id == user_id => Ok(entry.session.clone()),
            _ => Err(GameError::SessionNotFound),
        }
    }

    pub async fn remove(&self, user_id: i64, session_id: Uuid) -> Result<(), GameError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&session_id) {
            Some(entry) if entry.user_id == user_id => {
                sessions.remove(&session_id);
                Ok(())
            }
            _ => Err(GameError::SessionNotFound),
        }
    }

    /// Drop every session of a player; returns how many were removed
    pub async fn remove_for_user(&self, user_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.user_id != user_id);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Forward events to subscribers; no subscriber is not an error
    pub fn publish(&self, session_id: Uuid, user_id: i64, events: &[GameEvent]) {
        for event in events {
            let _ = self.events.send(SessionEvent {
                session_id,
                user_id,
                event: event.clone(),
            });
        }
    }
}
