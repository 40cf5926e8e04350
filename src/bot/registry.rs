//! Per-chat auto-check task registry
//!
//! Tracks the running background loops and their cancellation tokens.
//! Transport-agnostic: works with any chat identifier type.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Rejected auto-check state transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutoCheckError {
    /// A loop is already registered for this chat
    #[error("auto check already running")]
    AlreadyRunning,
    /// No loop is registered for this chat
    #[error("auto check is not running")]
    NotRunning,
}

/// Registry of running auto-check loops, at most one per chat.
///
/// Generic over the chat ID type to support different transports:
/// - Telegram: `i64` (chat id)
/// - Web: `String` (session token)
pub struct AutoCheckRegistry<Id: Hash + Eq + Clone + Send + Sync + std::fmt::Debug + 'static> {
    tasks: RwLock<HashMap<Id, CancellationToken>>,
}

impl<Id: Hash + Eq + Clone + Send + Sync + std::fmt::Debug + 'static> Default
    for AutoCheckRegistry<Id>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Hash + Eq + Clone + Send + Sync + std::fmt::Debug + 'static> AutoCheckRegistry<Id> {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Start a background loop for a chat.
    ///
    /// `work` receives a fresh cancellation token and is spawned onto the
    /// runtime. The check-and-insert happens under one write lock, so two
    /// racing start requests cannot both spawn.
    ///
    /// # Errors
    ///
    /// Returns `AutoCheckError::AlreadyRunning` if a loop is already
    /// registered for this chat; nothing is spawned in that case.
    pub async fn start<F, Fut>(&self, id: Id, work: F) -> Result<(), AutoCheckError>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&id) {
            return Err(AutoCheckError::AlreadyRunning);
        }

        let token = CancellationToken::new();
        tasks.insert(id.clone(), token.clone());
        tokio::spawn(work(token));

        info!(chat_id = ?id, "Auto check started");
        Ok(())
    }

    /// Stop the loop registered for a chat.
    ///
    /// The mapping entry is removed and the cancellation signal issued
    /// together; the loop observes the signal at its next suspension point.
    ///
    /// # Errors
    ///
    /// Returns `AutoCheckError::NotRunning` if no loop is registered for
    /// this chat; the registry is left unchanged.
    pub async fn stop(&self, id: &Id) -> Result<(), AutoCheckError> {
        let mut tasks = self.tasks.write().await;
        let Some(token) = tasks.remove(id) else {
            return Err(AutoCheckError::NotRunning);
        };
        token.cancel();

        info!(chat_id = ?id, "Auto check stopped");
        Ok(())
    }

    /// Check whether a loop is registered for a chat.
    pub async fn is_running(&self, id: &Id) -> bool {
        let tasks = self.tasks.read().await;
        tasks.contains_key(id)
    }

    /// Get the number of registered loops.
    pub async fn len(&self) -> usize {
        let tasks = self.tasks.read().await;
        tasks.len()
    }

    /// Check if no loops are registered.
    pub async fn is_empty(&self) -> bool {
        let tasks = self.tasks.read().await;
        tasks.is_empty()
    }
}

/// Type alias for Telegram-based auto-check registry
pub type TelegramAutoCheckRegistry = AutoCheckRegistry<i64>;
