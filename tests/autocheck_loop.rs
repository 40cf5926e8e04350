//! Behavior of the recurring availability loop.

mod support;

use std::sync::Arc;
use std::time::Duration;
use support::{wait_until, RecordingNotifier, Scripted, ScriptedProber};
use ticket_checker_rs::bot::autocheck::auto_check_loop;
use ticket_checker_rs::bot::registry::TelegramAutoCheckRegistry;
use tokio_util::sync::CancellationToken;

const TICK: Duration = Duration::from_millis(10);

#[tokio::test]
async fn zero_count_sends_nothing() {
    let prober = Arc::new(ScriptedProber::always(Scripted::Count(0)));
    let notifier = Arc::new(RecordingNotifier::new());
    let token = CancellationToken::new();

    tokio::spawn(auto_check_loop(
        prober.clone(),
        notifier.clone(),
        10,
        TICK,
        token.clone(),
    ));

    assert!(wait_until(|| prober.calls() >= 3, Duration::from_secs(2)).await);
    token.cancel();

    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn repeated_positive_counts_notify_every_tick() {
    // Two ticks with tickets, then the fallback reports zero availability
    let prober = Arc::new(ScriptedProber::new(vec![
        Scripted::Count(5),
        Scripted::Count(5),
    ]));
    let notifier = Arc::new(RecordingNotifier::new());
    let token = CancellationToken::new();

    tokio::spawn(auto_check_loop(
        prober.clone(),
        notifier.clone(),
        11,
        TICK,
        token.clone(),
    ));

    assert!(wait_until(|| notifier.count() == 2, Duration::from_secs(2)).await);
    assert!(wait_until(|| prober.calls() >= 4, Duration::from_secs(2)).await);
    token.cancel();

    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    for (chat_id, text) in sent {
        assert_eq!(chat_id, 11);
        assert_eq!(text, "Tickets are available! (5 available)");
    }
}

#[tokio::test]
async fn fetch_error_is_swallowed_and_loop_continues() {
    let prober = Arc::new(ScriptedProber::new(vec![
        Scripted::TransportError,
        Scripted::Count(3),
    ]));
    let notifier = Arc::new(RecordingNotifier::new());
    let token = CancellationToken::new();

    tokio::spawn(auto_check_loop(
        prober.clone(),
        notifier.clone(),
        12,
        TICK,
        token.clone(),
    ));

    // The error tick sends nothing; the following successful tick notifies
    assert!(wait_until(|| notifier.count() == 1, Duration::from_secs(2)).await);
    token.cancel();

    assert!(prober.calls() >= 2);
    let sent = notifier.sent();
    assert_eq!(sent[0], (12, "Tickets are available! (3 available)".to_string()));
}

#[tokio::test]
async fn cancellation_stops_notifications() {
    let registry = TelegramAutoCheckRegistry::new();
    let prober = Arc::new(ScriptedProber::always(Scripted::Count(9)));
    let notifier = Arc::new(RecordingNotifier::new());

    let loop_prober = prober.clone();
    let loop_notifier = notifier.clone();
    registry
        .start(13, move |token| {
            auto_check_loop(loop_prober, loop_notifier, 13, TICK, token)
        })
        .await
        .expect("start accepted");

    assert!(wait_until(|| notifier.count() >= 1, Duration::from_secs(2)).await);
    registry.stop(&13).await.expect("stop accepted");

    // Let any in-flight tick drain, then require quiescence even though the
    // prober would keep reporting tickets
    tokio::time::sleep(Duration::from_millis(50)).await;
    let settled = notifier.count();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(notifier.count(), settled);
    assert!(!registry.is_running(&13).await);
}
