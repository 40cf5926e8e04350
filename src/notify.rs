//! Outbound chat messaging
//!
//! Narrow seam between the availability logic and the chat transport, so the
//! polling loop can be exercised without a live bot.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use thiserror::Error;

/// Errors that can occur while sending an outbound chat message
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The chat transport rejected or failed the send
    #[error("send error: {0}")]
    Send(String),
}

/// Outbound message sink bound to the chat transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a free-text message to the given chat.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the transport fails the send.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError>;
}

/// Notifier that delivers messages through the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    /// Wrap a bot handle.
    #[must_use]
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| NotifyError::Send(e.to_string()))?;
        Ok(())
    }
}
