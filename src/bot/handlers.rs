//! General command and callback handlers

use crate::api::TicketsProber;
use crate::bot::autocheck::{self, CallbackAck};
use crate::bot::registry::TelegramAutoCheckRegistry;
use crate::bot::views;
use crate::config::Settings;
use crate::notify::{Notifier, TelegramNotifier};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;

/// Supported commands for the bot
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Show the ticket checker menu
    #[command(description = "Show the ticket checker menu.")]
    Start,
    /// Check bot health
    #[command(description = "Check bot health.")]
    Healthcheck,
}

/// Start handler: sends the persistent menu with buttons.
///
/// # Errors
///
/// Returns an error if the menu message cannot be sent.
pub async fn start(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, views::MENU_TITLE)
        .reply_markup(views::ticket_menu_keyboard())
        .await?;
    info!("Sent start menu to chat {}", msg.chat.id);
    Ok(())
}

/// Healthcheck handler
///
/// # Errors
///
/// Returns an error if the healthcheck response cannot be sent.
pub async fn healthcheck(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, "OK").await?;
    Ok(())
}

/// Handle button presses from the ticket menu.
///
/// The menu stays in place; every recognized press is answered with a toast
/// or alert so the button leaves its loading state.
///
/// # Errors
///
/// Returns an error if Telegram API calls fail.
pub async fn handle_menu_callback(
    bot: Bot,
    q: CallbackQuery,
    prober: Arc<dyn TicketsProber>,
    registry: Arc<TelegramAutoCheckRegistry>,
    settings: Arc<Settings>,
) -> Result<()> {
    let Some(action) = q.data.as_deref() else {
        return Ok(());
    };
    let chat_id = q
        .message
        .as_ref()
        .map(|msg| msg.chat().id)
        .ok_or_else(|| anyhow!("Callback message missing chat id"))?;

    info!("Chat {chat_id} clicked button: {action}");

    let ack = match action {
        views::CALLBACK_MANUAL_CHECK => {
            let notifier = TelegramNotifier::new(bot.clone());
            autocheck::manual_check(prober.as_ref(), &notifier, chat_id.0).await
        }
        views::CALLBACK_START_AUTO => {
            let loop_prober = prober.clone();
            let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone()));
            let interval = settings.check_interval();

            match registry
                .start(chat_id.0, move |token| {
                    autocheck::auto_check_loop(loop_prober, notifier, chat_id.0, interval, token)
                })
                .await
            {
                Ok(()) => CallbackAck::toast(views::ACK_AUTO_STARTED),
                Err(_) => CallbackAck::alert(views::ACK_AUTO_ALREADY_RUNNING),
            }
        }
        views::CALLBACK_STOP_AUTO => match registry.stop(&chat_id.0).await {
            Ok(()) => CallbackAck::toast(views::ACK_AUTO_STOPPED),
            Err(_) => CallbackAck::alert(views::ACK_AUTO_NOT_RUNNING),
        },
        _ => return Ok(()),
    };

    bot.answer_callback_query(q.id.clone())
        .text(ack.text)
        .show_alert(ack.show_alert)
        .await?;

    Ok(())
}
