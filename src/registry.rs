//! Process-wide map from conversation identities to their sessions.

use crate::ai::Difficulty;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::games::GameKind;
use crate::render::{PromptKey, RenderableState, SummaryStats};
use crate::session::GameSession;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Opaque identity of one external conversation.
pub type ChatId = i64;

type SessionEntry = Arc<tokio::sync::Mutex<GameSession>>;

/// Keyed session store with per-identity serialization.
///
/// The outer lock guards only the map's shape and is never held
/// across an await. Each entry carries its own async lock, so one
/// conversation's move, machine reply delay included, never blocks
/// another conversation.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    kind: GameKind,
    config: EngineConfig,
    sessions: Arc<Mutex<HashMap<ChatId, SessionEntry>>>,
}

impl SessionRegistry {
    /// Creates a registry serving the given rule set with default
    /// configuration.
    #[instrument]
    pub fn new(kind: GameKind) -> Self {
        Self::with_config(kind, EngineConfig::default())
    }

    /// Creates a registry with an explicit configuration.
    #[instrument(skip(config))]
    pub fn with_config(kind: GameKind, config: EngineConfig) -> Self {
        info!(?kind, "Creating session registry");
        Self {
            kind,
            config,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts a fresh session for the identity, replacing any session
    /// it already had, and renders the difficulty menu.
    #[instrument(skip(self))]
    pub fn start_session(&self, chat: ChatId) -> RenderableState {
        let session = GameSession::new(self.kind, &self.config);
        let state = session.render(PromptKey::ChooseDifficulty);
        let mut sessions = self.sessions.lock().unwrap();
        let replaced = sessions
            .insert(chat, Arc::new(tokio::sync::Mutex::new(session)))
            .is_some();
        info!(chat, replaced, count = sessions.len(), "Session started");
        state
    }

    /// Picks a difficulty for the identity's session and starts a
    /// round with it.
    #[instrument(skip(self))]
    pub async fn select_difficulty(
        &self,
        chat: ChatId,
        choice: Difficulty,
    ) -> Result<RenderableState, EngineError> {
        let entry = self.entry(chat)?;
        let mut session = entry.lock().await;
        session.select_difficulty(choice)
    }

    /// Applies a human move and resolves the machine's reply before
    /// returning.
    #[instrument(skip(self))]
    pub async fn apply_move(
        &self,
        chat: ChatId,
        pos: usize,
    ) -> Result<RenderableState, EngineError> {
        let entry = self.entry(chat)?;
        let mut session = entry.lock().await;
        session.apply_move(pos).await
    }

    /// Starts a rematch for the identity's finished round.
    #[instrument(skip(self))]
    pub async fn play_again(&self, chat: ChatId) -> Result<RenderableState, EngineError> {
        let entry = self.entry(chat)?;
        let mut session = entry.lock().await;
        session.play_again()
    }

    /// Removes the identity's session and reports its final score.
    ///
    /// Waits for any in-flight operation on the session to finish, and
    /// leaves the map alone when the entry was already replaced by a
    /// newer start request.
    #[instrument(skip(self))]
    pub async fn quit_session(&self, chat: ChatId) -> Result<SummaryStats, EngineError> {
        let entry = self.entry(chat)?;
        let session = entry.lock().await;
        let stats = session.stats();
        let mut sessions = self.sessions.lock().unwrap();
        if sessions
            .get(&chat)
            .is_some_and(|current| Arc::ptr_eq(current, &entry))
        {
            sessions.remove(&chat);
        }
        info!(
            chat,
            human_wins = stats.human_wins,
            machine_wins = stats.machine_wins,
            "Session quit"
        );
        Ok(stats)
    }

    /// Checks whether the identity has a live session.
    #[instrument(skip(self))]
    pub fn has_session(&self, chat: ChatId) -> bool {
        self.sessions.lock().unwrap().contains_key(&chat)
    }

    /// Number of live sessions.
    #[instrument(skip(self))]
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Clones the identity's entry so the outer lock drops before any
    /// await.
    fn entry(&self, chat: ChatId) -> Result<SessionEntry, EngineError> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(&chat) {
            Some(entry) => Ok(Arc::clone(entry)),
            None => {
                debug!(chat, "No session for identity");
                Err(EngineError::NoSession)
            }
        }
    }
}
