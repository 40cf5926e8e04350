//! Availability polling: the per-chat background loop and the one-shot check

use crate::api::TicketsProber;
use crate::bot::views;
use crate::notify::Notifier;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Short answer shown for a button press, either as a transient toast or a
/// blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackAck {
    /// Text shown to the user
    pub text: String,
    /// Show as a blocking alert instead of a transient toast
    pub show_alert: bool,
}

impl CallbackAck {
    /// Transient acknowledgement.
    #[must_use]
    pub fn toast(text: &str) -> Self {
        Self {
            text: text.to_string(),
            show_alert: false,
        }
    }

    /// Blocking acknowledgement.
    #[must_use]
    pub fn alert(text: &str) -> Self {
        Self {
            text: text.to_string(),
            show_alert: true,
        }
    }
}

/// Run the recurring availability check for one chat until cancelled.
///
/// A message is sent on every tick that reports a positive count; errors and
/// zero counts are logged only, so transient API failures never spam the
/// chat. Send failures are logged and the loop carries on; only cancellation
/// ends it.
pub async fn auto_check_loop(
    prober: Arc<dyn TicketsProber>,
    notifier: Arc<dyn Notifier>,
    chat_id: i64,
    interval: Duration,
    token: CancellationToken,
) {
    loop {
        if token.is_cancelled() {
            break;
        }

        match prober.check_availability().await {
            Err(e) => error!("Auto-check error in chat {chat_id}: {e}"),
            Ok(0) => info!("Auto-check: No tickets for chat {chat_id}"),
            Ok(count) => {
                match notifier
                    .send_text(chat_id, &views::tickets_available(count))
                    .await
                {
                    Ok(()) => info!("Auto-check found tickets for chat {chat_id}"),
                    Err(e) => error!("Auto-check failed to notify chat {chat_id}: {e}"),
                }
            }
        }

        tokio::select! {
            () = token.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
    }

    info!("Auto check for chat {chat_id} cancelled.");
}

/// Run a single on-demand check and report the outcome.
///
/// A positive count produces both an outbound message and the returned
/// acknowledgement; errors and zero counts produce only the acknowledgement.
pub async fn manual_check(
    prober: &dyn TicketsProber,
    notifier: &dyn Notifier,
    chat_id: i64,
) -> CallbackAck {
    match prober.check_availability().await {
        Err(e) => {
            error!("Manual check error in chat {chat_id}: {e}");
            CallbackAck::alert(views::ACK_FETCH_ERROR)
        }
        Ok(0) => CallbackAck::toast(views::ACK_NO_TICKETS),
        Ok(count) => {
            if let Err(e) = notifier
                .send_text(chat_id, &views::tickets_available(count))
                .await
            {
                error!("Manual check failed to notify chat {chat_id}: {e}");
            }
            CallbackAck::toast(views::ACK_TICKETS_FOUND)
        }
    }
}
