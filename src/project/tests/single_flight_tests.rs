//! Tests for the single-flight registry.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::project::services::SingleFlight;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn concurrent_calls_share_one_operation() {
    let flights: SingleFlight<&str, usize, String> = SingleFlight::new();
    let calls = AtomicUsize::new(0);
    let operation = || async {
        tokio::task::yield_now().await;
        Ok(calls.fetch_add(1, Ordering::SeqCst) + 1)
    };

    let (first, second, third) = tokio::join!(
        flights.run("user", operation),
        flights.run("user", operation),
        flights.run("user", operation),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!((first, second, third), (Ok(1), Ok(1), Ok(1)));
    assert!(!flights.is_in_flight(&"user"));
}

#[rstest]
#[tokio::test]
async fn different_keys_run_independently() {
    let flights: SingleFlight<&str, &str, String> = SingleFlight::new();

    let (left, right) = tokio::join!(
        flights.run("a", || async { Ok("left") }),
        flights.run("b", || async { Ok("right") }),
    );

    assert_eq!(left, Ok("left"));
    assert_eq!(right, Ok("right"));
}

#[rstest]
#[tokio::test]
async fn key_is_released_after_failure() {
    let flights: SingleFlight<u8, u8, String> = SingleFlight::new();

    let failed = flights.run(1, || async { Err("boom".to_owned()) }).await;
    let retried = flights.run(1, || async { Ok(7) }).await;

    assert_eq!(failed, Err("boom".to_owned()));
    assert_eq!(retried, Ok(7));
}
