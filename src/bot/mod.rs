//! Telegram bot implementation

/// Availability polling loop and one-shot check
pub mod autocheck;
/// General command and callback handlers
pub mod handlers;
/// Per-chat auto-check task registry
pub mod registry;
/// View layer for UI components (keyboards, messages)
pub mod views;
