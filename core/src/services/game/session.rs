//! Per-player game session state.
//!
//! A session owns the morphemes offered to the player, the ordered
//! selection, the words built so far and the running score. Every mutation
//! appends a [`GameEvent`] to a buffer the caller drains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::morpheme::Morpheme;
use crate::domain::entities::word::Word;
use crate::domain::value_objects::GameMode;
use crate::errors::GameError;

/// State change notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    MorphemeSelected { morpheme_id: i64 },
    MorphemeDeselected { morpheme_id: i64 },
    SelectionCleared,
    WordConstructed { text: String, points: i64 },
    ScoreUpdated { score: i64 },
    RoundReset,
}

/// A word the player built during the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructedWord {
    pub text: String,
    pub points: i64,
    /// Dictionary id; `None` for free-build creations
    pub word_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    user_id: i64,
    mode: GameMode,
    available: Vec<Morpheme>,
    selected: Vec<Morpheme>,
    constructed: Vec<ConstructedWord>,
    score: i64,
    events: Vec<GameEvent>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Start a session with the player's stored score
    pub fn new(user_id: i64, mode: GameMode, available: Vec<Morpheme>, score: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            mode,
            available,
            selected: Vec::new(),
            constructed: Vec::new(),
            score,
            events: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn available_morphemes(&self) -> &[Morpheme] {
        &self.available
    }

    pub fn find_available(&self, morpheme_id: i64) -> Option<&Morpheme> {
        self.available.iter().find(|m| m.id == morpheme_id)
    }

    /// Select a morpheme, or deselect it if already selected
    ///
    /// Returns whether the morpheme is selected afterwards.
    pub fn toggle_morpheme(&mut self, morpheme: &Morpheme) -> Result<bool, GameError> {
        if self.find_available(morpheme.id).is_none() {
            return Err(GameError::MorphemeNotAvailable { id: morpheme.id });
        }

        if let Some(index) = self.selected.iter().position(|m| m == morpheme) {
            self.selected.remove(index);
            self.events.push(GameEvent::MorphemeDeselected {
                morpheme_id: morpheme.id,
            });
            Ok(false)
        } else {
            self.selected.push(morpheme.clone());
            self.events.push(GameEvent::MorphemeSelected {
                morpheme_id: morpheme.id,
            });
            Ok(true)
        }
    }

    pub fn is_selected(&self, morpheme: &Morpheme) -> bool {
        self.selected.contains(morpheme)
    }

    pub fn selected_morphemes(&self) -> Vec<Morpheme> {
        self.selected.clone()
    }

    pub fn constructed_words(&self) -> Vec<ConstructedWord> {
        self.constructed.clone()
    }

    /// The selection spelled out
    pub fn current_text(&self) -> String {
        self.selected.iter().map(|m| m.text.as_str()).collect()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.events.push(GameEvent::SelectionCleared);
    }

    /// Record a dictionary word and add its points
    pub fn record_constructed_word(&mut self, word: &Word) {
        self.constructed.push(ConstructedWord {
            text: word.text.clone(),
            points: word.points,
            word_id: Some(word.id),
        });
        self.score += word.points;
        self.events.push(GameEvent::WordConstructed {
            text: word.text.clone(),
            points: word.points,
        });
    }

    /// Record a free-build creation and award its points
    pub fn record_free_build(&mut self, text: String, points: i64) {
        self.constructed.push(ConstructedWord {
            text,
            points,
            word_id: None,
        });
        self.update_score(self.score + points);
    }

    /// Set the score; only a real change is reported
    pub fn update_score(&mut self, new_score: i64) {
        let old_score = std::mem::replace(&mut self.score, new_score);
        if old_score != new_score {
            self.events.push(GameEvent::ScoreUpdated { score: new_score });
        }
    }

    pub fn reset_for_new_round(&mut self) {
        self.clear_selection();
        self.events.push(GameEvent::RoundReset);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
