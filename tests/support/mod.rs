//! Shared test doubles: a scripted prober and a recording notifier.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use ticket_checker_rs::api::{FetchError, TicketsProber};
use ticket_checker_rs::notify::{Notifier, NotifyError};

/// One scripted prober outcome.
#[derive(Debug, Clone)]
pub enum Scripted {
    Count(u64),
    TransportError,
}

/// Prober that replays a fixed script, then keeps returning a fallback.
pub struct ScriptedProber {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Scripted,
    calls: AtomicUsize,
}

impl ScriptedProber {
    /// Replay `script` in order; once exhausted, report zero availability.
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Scripted::Count(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Report the same outcome on every call.
    pub fn always(outcome: Scripted) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of availability checks performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketsProber for ScriptedProber {
    async fn check_availability(&self) -> Result<u64, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match next {
            Scripted::Count(n) => Ok(n),
            Scripted::TransportError => {
                Err(FetchError::Transport("connection refused".to_string()))
            }
        }
    }
}

/// Notifier that records every outbound message instead of sending it.
pub struct RecordingNotifier {
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Messages recorded so far, as (chat id, text) pairs.
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().expect("sent lock").clone()
    }

    /// Number of messages recorded so far.
    pub fn count(&self) -> usize {
        self.sent.lock().expect("sent lock").len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
