//! Behavior-driven tests for cancellation of the word fetch
//!
//! These tests verify HOW `generate_words` resolves when the caller's
//! context fires before the endpoint answers.

use randword_core::{
    CancelReason, CancellationToken, FetchContext, FetchError, FetchErrorKind, StubHttpClient,
    WordClient,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const SLOW_REMOTE: Duration = Duration::from_secs(5);

fn slow_client(stub: &StubHttpClient, ctx: FetchContext) -> WordClient {
    let mut client = WordClient::with_context(ctx);
    client.set_quantity(3).expect("valid quantity");
    client
        .initialize_with(Arc::new(stub.clone()))
        .expect("first initialization");
    client
}

// =============================================================================
// Cancellation: deadline expiry
// =============================================================================

#[tokio::test]
async fn when_deadline_passes_before_reply_caller_returns_within_deadline() {
    // Given: A remote that takes seconds and a 50ms deadline
    let stub = StubHttpClient::responding(200, r#"["late"]"#).with_delay(SLOW_REMOTE);
    let ctx = FetchContext::background().with_timeout(Duration::from_millis(50));
    let client = slow_client(&stub, ctx);

    // When: The caller generates words
    let started = Instant::now();
    let result = client.generate_words().await;
    let elapsed = started.elapsed();

    // Then: The deadline error arrives long before the remote would answer
    assert_eq!(
        result,
        Err(FetchError::Cancelled(CancelReason::DeadlineExceeded))
    );
    assert!(
        elapsed < Duration::from_secs(1),
        "should return near the deadline, took {elapsed:?}"
    );
}

#[tokio::test]
async fn when_deadline_is_generous_fetch_result_wins() {
    // Given: A fast remote and a long deadline
    let stub = StubHttpClient::responding(200, r#"["quick","reply"]"#)
        .with_delay(Duration::from_millis(10));
    let ctx = FetchContext::background().with_timeout(Duration::from_secs(5));
    let client = slow_client(&stub, ctx);

    // When: The caller generates words
    let words = client.generate_words().await.expect("fetch beats deadline");

    // Then: The fetch outcome is delivered
    assert_eq!(words, vec!["quick", "reply"]);
}

// =============================================================================
// Cancellation: explicit cancel
// =============================================================================

#[tokio::test]
async fn when_caller_cancels_token_fetch_returns_canceled() {
    // Given: A slow remote and a token held by the caller
    let stub = StubHttpClient::responding(200, r#"["late"]"#).with_delay(SLOW_REMOTE);
    let token = CancellationToken::new();
    let client = slow_client(&stub, FetchContext::with_token(token.clone()));

    // When: The token is cancelled mid-flight
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        token.cancel();
    });
    let started = Instant::now();
    let error = client.generate_words().await.expect_err("cancelled");
    canceller.await.expect("canceller joins");

    // Then: The caller sees a cancellation error promptly
    assert_eq!(error.kind(), FetchErrorKind::Cancelled);
    assert_eq!(error.cancel_reason(), Some(CancelReason::Canceled));
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn cancelled_fetch_aborts_the_in_flight_request() {
    // Given: A slow remote and a short deadline
    let stub = StubHttpClient::responding(200, r#"["late"]"#)
        .with_delay(Duration::from_millis(300));
    let ctx = FetchContext::background().with_timeout(Duration::from_millis(20));
    let client = slow_client(&stub, ctx);

    // When: The deadline fires and we wait past the remote's own delay
    let error = client.generate_words().await.expect_err("deadline");
    tokio::time::sleep(Duration::from_millis(500)).await;

    // Then: The request was started but never ran to completion
    assert_eq!(error.cancel_reason(), Some(CancelReason::DeadlineExceeded));
    assert_eq!(stub.requests().len(), 1);
    assert_eq!(stub.completed(), 0, "in-flight request should be dropped");
}

#[tokio::test]
async fn cancelling_one_context_does_not_affect_another_client() {
    // Given: Two clients sharing a parent token through child contexts
    let parent = CancellationToken::new();
    let stub = StubHttpClient::responding(200, r#"["ok"]"#);
    let cancelled = slow_client(&stub, FetchContext::with_token(parent.child_token()));
    let untouched = slow_client(&stub, FetchContext::background());

    // When: The parent is cancelled
    parent.cancel();

    // Then: Only the client tied to it stops
    assert_eq!(
        cancelled.generate_words().await,
        Err(FetchError::Cancelled(CancelReason::Canceled))
    );
    assert_eq!(
        untouched.generate_words().await.expect("independent context"),
        vec!["ok"]
    );
}

#[tokio::test]
async fn exactly_one_outcome_per_call_under_racing_deadlines() {
    // Given: Deadlines straddling the remote's latency
    for deadline_ms in [1u64, 5, 10, 15, 20, 40] {
        let stub = StubHttpClient::responding(200, r#"["a","b"]"#)
            .with_delay(Duration::from_millis(10));
        let ctx = FetchContext::background().with_timeout(Duration::from_millis(deadline_ms));
        let client = slow_client(&stub, ctx);

        // When: The race resolves
        let result = client.generate_words().await;

        // Then: Either the full word list or a deadline error, never a mix
        match result {
            Ok(words) => assert_eq!(words, vec!["a", "b"]),
            Err(error) => assert_eq!(
                error,
                FetchError::Cancelled(CancelReason::DeadlineExceeded),
                "deadline {deadline_ms}ms"
            ),
        }
    }
}
