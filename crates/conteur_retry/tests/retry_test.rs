//! Retry wrapper behavior against stub operations.

use conteur_error::{
    ConteurError, ConteurResult, ProviderError, ProviderErrorKind, ValidationError,
    ValidationErrorKind,
};
use conteur_retry::{RetryPolicy, with_retry};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

fn overloaded() -> ConteurError {
    ProviderError::new(ProviderErrorKind::Api {
        status: 529,
        body: "overloaded_error".to_string(),
    })
    .into()
}

fn unauthorized() -> ConteurError {
    ProviderError::new(ProviderErrorKind::Api {
        status: 401,
        body: "invalid x-api-key".to_string(),
    })
    .into()
}

#[tokio::test(start_paused = true)]
async fn test_succeeds_after_transient_failures() {
    let calls = AtomicUsize::new(0);
    let policy = RetryPolicy::new(3, Duration::from_millis(100));

    let result: ConteurResult<&str> = with_retry(&policy, || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move { if n < 2 { Err(overloaded()) } else { Ok("histoire") } }
    })
    .await;

    assert_eq!(result.unwrap(), "histoire");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_exhausts_exactly_max_attempts() {
    let calls = AtomicUsize::new(0);
    let policy = RetryPolicy::new(4, Duration::from_millis(50));

    let result: ConteurResult<()> = with_retry(&policy, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(overloaded()) }
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(err.provider().and_then(|p| p.kind.status()), Some(529));
}

#[tokio::test(start_paused = true)]
async fn test_waits_are_non_decreasing() {
    let stamps = Mutex::new(Vec::new());
    let policy = RetryPolicy::new(4, Duration::from_millis(1000));

    let _: ConteurResult<()> = with_retry(&policy, || {
        stamps.lock().unwrap().push(Instant::now());
        async { Err(overloaded()) }
    })
    .await;

    let stamps = stamps.into_inner().unwrap();
    assert_eq!(stamps.len(), 4);
    let waits: Vec<Duration> = stamps.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(waits.windows(2).all(|w| w[0] <= w[1]), "{waits:?}");
    assert!(waits[0] >= Duration::from_millis(1000));
    assert!(waits[2] >= Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_client_error_fails_without_waiting() {
    let calls = AtomicUsize::new(0);
    let policy = RetryPolicy::new(3, Duration::from_secs(10));
    let started = Instant::now();

    let result: ConteurResult<()> = with_retry(&policy, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(unauthorized()) }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_validation_error_is_not_retried() {
    let calls = AtomicUsize::new(0);

    let result: ConteurResult<()> = with_retry(&RetryPolicy::default(), || {
        calls.fetch_add(1, Ordering::SeqCst);
        async {
            Err(ValidationError::new(ValidationErrorKind::MissingField("style".into())).into())
        }
    })
    .await;

    assert!(result.unwrap_err().is_validation());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
