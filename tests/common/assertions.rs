//! Custom test assertions for integration tests

use mail_fetcher::FetchEvent;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::broadcast;

use super::fixtures::Call;

/// Assert that every recorded address equals `expected`
pub fn assert_all_same(recorded: &Mutex<Vec<usize>>, expected: usize, what: &str) {
    let recorded = recorded.lock().unwrap();
    assert!(!recorded.is_empty(), "no {what} was recorded");
    for (i, seen) in recorded.iter().enumerate() {
        assert_eq!(
            *seen, expected,
            "{what} #{i} was not the instance passed to invoke"
        );
    }
}

/// Assert that `calls` contains none of `forbidden`
pub fn assert_never_called(calls: &[Call], forbidden: &[Call]) {
    for call in forbidden {
        assert!(
            !calls.contains(call),
            "{call:?} should not have been called, got {calls:?}"
        );
    }
}

/// Collect events until `count` have arrived or `timeout` elapses
pub async fn collect_events(
    rx: &mut broadcast::Receiver<FetchEvent>,
    count: usize,
    timeout: Duration,
) -> Vec<FetchEvent> {
    let mut events = Vec::with_capacity(count);
    let _ = tokio::time::timeout(timeout, async {
        while events.len() < count {
            match rx.recv().await {
                Ok(event) => events.push(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
    .await;
    events
}
