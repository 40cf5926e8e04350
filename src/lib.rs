#![deny(missing_docs)]
//! Ticket Checker Bot - Rust implementation
//!
//! A Telegram bot that watches a ticketing vendor's availability endpoint
//! and notifies chats about purchasable tickets, either on demand or via a
//! per-chat recurring background check.

/// Vendor availability API client
pub mod api;
/// Telegram bot implementation
pub mod bot;
/// Configuration management
pub mod config;
/// Liveness endpoint for hosted deployments
pub mod health;
/// Outbound chat messaging
pub mod notify;
