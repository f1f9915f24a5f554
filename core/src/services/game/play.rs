//! Game play orchestration: sessions, word verification and free building.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;
use wc_shared::validation::not_blank;

use crate::domain::entities::morpheme::Morpheme;
use crate::domain::entities::word::Word;
use crate::domain::value_objects::GameMode;
use crate::errors::{AuthError, DomainResult, GameError};
use crate::repositories::{MorphemeRepository, UserRepository, WordRepository};
use crate::services::player::PlayerService;

use super::rules::{free_build_points, validate_definition, MAIN_GRID_SIZE};
use super::service::GameService;
use super::session::{ConstructedWord, GameEvent, GameSession};
use super::store::{SessionEvent, SessionStore};

/// Snapshot of a session returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub mode: GameMode,
    pub available_morphemes: Vec<Morpheme>,
    pub selected_morphemes: Vec<Morpheme>,
    /// The selection spelled out
    pub current_text: String,
    pub constructed_words: Vec<ConstructedWord>,
    pub score: i64,
    /// Events produced by the call that returned this view
    pub events: Vec<GameEvent>,
}

/// Result of checking the selection against the dictionary
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOutcome {
    pub valid: bool,
    pub text: String,
    pub word: Option<Word>,
    pub session: SessionView,
}

/// Result of an accepted free-build submission
#[derive(Debug, Clone, Serialize)]
pub struct FreeBuildOutcome {
    pub text: String,
    pub points: i64,
    pub session: SessionView,
}

/// Coordinates player sessions with the catalog and score persistence
pub struct GamePlay<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    user_repository: Arc<U>,
    game_service: Arc<GameService<M, W>>,
    player_service: Arc<PlayerService<U, W>>,
    store: SessionStore,
}

impl<U, M, W> GamePlay<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        game_service: Arc<GameService<M, W>>,
        player_service: Arc<PlayerService<U, W>>,
    ) -> Self {
        Self {
            user_repository,
            game_service,
            player_service,
            store: SessionStore::new(),
        }
    }

    /// Listen to events from every running session
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.store.subscribe()
    }

    pub async fn active_sessions(&self) -> usize {
        self.store.len().await
    }

    /// Open a session for a player
    ///
    /// The main game offers the first nine morphemes; free build offers all.
    pub async fn start_session(&self, user_id: i64, mode: GameMode) -> DomainResult<SessionView> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !user.is_player() {
            return Err(GameError::NotAPlayer.into());
        }
        if !mode.is_available() {
            return Err(GameError::ModeNotAvailable {
                mode: mode.to_string(),
            }
            .into());
        }

        let mut morphemes = self.game_service.available_morphemes().await?;
        if mode == GameMode::MainGame {
            morphemes.truncate(MAIN_GRID_SIZE);
        }

        let mut session = GameSession::new(user.id, mode, morphemes, user.score);
        let view = Self::view(&mut session);
        self.store.insert(session).await;

        tracing::info!(user_id, session_id = %view.id, mode = %mode, "Game session started");
        Ok(view)
    }

    pub async fn session(&self, user_id: i64, session_id: Uuid) -> DomainResult<SessionView> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;
        Ok(self.finish(&mut session))
    }

    pub async fn toggle(
        &self,
        user_id: i64,
        session_id: Uuid,
        morpheme_id: i64,
    ) -> DomainResult<SessionView> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;

        let morpheme = session
            .find_available(morpheme_id)
            .cloned()
            .ok_or(GameError::MorphemeNotAvailable { id: morpheme_id })?;
        session.toggle_morpheme(&morpheme)?;

        Ok(self.finish(&mut session))
    }

    pub async fn clear(&self, user_id: i64, session_id: Uuid) -> DomainResult<SessionView> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;
        session.clear_selection();
        Ok(self.finish(&mut session))
    }

    /// Start a new round: selection cleared, words and score kept
    pub async fn new_round(&self, user_id: i64, session_id: Uuid) -> DomainResult<SessionView> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;
        session.reset_for_new_round();
        Ok(self.finish(&mut session))
    }

    pub async fn end(&self, user_id: i64, session_id: Uuid) -> DomainResult<()> {
        self.store.remove(user_id, session_id).await?;
        tracing::info!(user_id, session_id = %session_id, "Game session ended");
        Ok(())
    }

    /// Close every session of a player, e.g. when the account is deleted
    pub async fn end_sessions_for(&self, user_id: i64) -> usize {
        let removed = self.store.remove_for_user(user_id).await;
        if removed > 0 {
            tracing::info!(user_id, removed, "Ended player sessions");
        }
        removed
    }

    /// Check the selection against the dictionary (main game)
    ///
    /// A match is recorded for the player and its points are added to the
    /// stored score. The selection is cleared whatever the outcome.
    pub async fn verify_word(&self, user_id: i64, session_id: Uuid) -> DomainResult<VerifyOutcome> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;

        if session.mode() != GameMode::MainGame {
            return Err(GameError::WrongMode {
                mode: session.mode().to_string(),
            }
            .into());
        }

        let selected = session.selected_morphemes();
        if selected.is_empty() {
            return Err(GameError::EmptySelection.into());
        }

        let text = GameService::<M, W>::construct_word_text(&selected);
        let ids = GameService::<M, W>::extract_morpheme_ids(&selected);
        let word = self.game_service.validate_word(&text, &ids).await?;

        // The found-word insert is idempotent and a failed score update returns
        // before the selection is cleared, so verifying again completes the award.
        if let Some(word) = &word {
            let first_time = self.game_service.record_player_word(user_id, word.id).await?;
            self.player_service.add_score(user_id, word.points).await?;
            session.record_constructed_word(word);
            tracing::info!(
                user_id,
                word = %word.text,
                points = word.points,
                first_time,
                "Word verified"
            );
        } else {
            tracing::debug!(user_id, text = %text, "Word rejected");
        }
        session.clear_selection();

        Ok(VerifyOutcome {
            valid: word.is_some(),
            text,
            word,
            session: self.finish(&mut session),
        })
    }

    /// Accept any combination backed by a matching definition (free build)
    ///
    /// On rejection the selection is kept so the player can retry.
    pub async fn submit_free_build(
        &self,
        user_id: i64,
        session_id: Uuid,
        definition: &str,
    ) -> DomainResult<FreeBuildOutcome> {
        let handle = self.store.get(user_id, session_id).await?;
        let mut session = handle.lock().await;

        if session.mode() != GameMode::FreeBuild {
            return Err(GameError::WrongMode {
                mode: session.mode().to_string(),
            }
            .into());
        }

        let selected = session.selected_morphemes();
        if selected.is_empty() {
            return Err(GameError::EmptySelection.into());
        }
        if !not_blank(definition) {
            return Err(GameError::DefinitionRequired.into());
        }
        validate_definition(definition, &selected)?;

        let text = GameService::<M, W>::construct_word_text(&selected);
        let points = free_build_points(selected.len());

        self.player_service.add_score(user_id, points).await?;
        session.record_free_build(text.clone(), points);
        session.clear_selection();
        tracing::info!(user_id, word = %text, points, "Free-build word accepted");

        Ok(FreeBuildOutcome {
            text,
            points,
            session: self.finish(&mut session),
        })
    }

    /// Drain, publish and snapshot
    fn finish(&self, session: &mut GameSession) -> SessionView {
        let view = Self::view(session);
        self.store.publish(view.id, session.user_id(), &view.events);
        view
    }

    fn view(session: &mut GameSession) -> SessionView {
        SessionView {
            id: session.id(),
            mode: session.mode(),
            available_morphemes: session.available_morphemes().to_vec(),
            selected_morphemes: session.selected_morphemes(),
            current_text: session.current_text(),
            constructed_words: session.constructed_words(),
            score: session.score(),
            events: session.drain_events(),
        }
    }
}
