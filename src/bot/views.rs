//! View layer for UI components (keyboards, messages)

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Callback token for a one-shot availability check.
pub const CALLBACK_MANUAL_CHECK: &str = "manual_check";
/// Callback token for enabling the recurring check.
pub const CALLBACK_START_AUTO: &str = "start_auto";
/// Callback token for disabling the recurring check.
pub const CALLBACK_STOP_AUTO: &str = "stop_auto";

/// Title shown above the persistent menu.
pub const MENU_TITLE: &str = "Ticket Checker Menu:";

/// Alert shown when the availability fetch fails.
pub const ACK_FETCH_ERROR: &str = "Error fetching data.";
/// Toast shown when a manual check finds tickets.
pub const ACK_TICKETS_FOUND: &str = "Tickets found!";
/// Toast shown when a manual check finds nothing.
pub const ACK_NO_TICKETS: &str = "No tickets available.";
/// Toast shown when the recurring check starts.
pub const ACK_AUTO_STARTED: &str = "Started auto check.";
/// Alert shown when a start request finds a loop already registered.
pub const ACK_AUTO_ALREADY_RUNNING: &str = "Auto check already running.";
/// Toast shown when the recurring check stops.
pub const ACK_AUTO_STOPPED: &str = "Stopped auto check.";
/// Alert shown when a stop request finds no loop registered.
pub const ACK_AUTO_NOT_RUNNING: &str = "Auto check is not running.";

/// Get the persistent ticket menu keyboard
#[must_use]
pub fn ticket_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "Manual Check",
            CALLBACK_MANUAL_CHECK,
        )],
        vec![InlineKeyboardButton::callback(
            "Start Auto Check",
            CALLBACK_START_AUTO,
        )],
        vec![InlineKeyboardButton::callback(
            "Stop Auto Check",
            CALLBACK_STOP_AUTO,
        )],
    ])
}

/// Availability announcement sent to a chat.
#[must_use]
pub fn tickets_available(count: u64) -> String {
    format!("Tickets are available! ({count} available)")
}
