//! Best-effort cleanup around a benchmark run
//!
//! Each run is bracketed by a bulk delete so it starts and ends from an empty
//! collection. The call is bounded by a timeout; dropping the timed-out
//! future cancels the in-flight request, so nothing leaks past the bound.
//!
//! The result is returned to the caller rather than swallowed here: ignoring
//! a cleanup failure is a decision the call site makes visibly.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::client::{ApiClient, ClientError};

/// Reserved bulk-delete endpoint. Not a benchmarkable [`crate::Action`].
pub const CLEANUP_ENDPOINT: &str = "drizzleDeleteAll";

/// Whether cleanup runs before or after the benchmarked batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupPhase {
    Before,
    After,
}

impl std::fmt::Display for CleanupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupPhase::Before => f.write_str("before"),
            CleanupPhase::After => f.write_str("after"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("cleanup timed out (limit {limit:?})")]
    TimedOut { limit: Duration },

    #[error("cleanup request failed: {0}")]
    Client(#[from] ClientError),
}

/// Invoke the bulk-delete endpoint, bounded by `limit`.
///
/// Returns the elapsed time on success. Never panics and never takes longer
/// than roughly `limit` to settle.
pub async fn run_cleanup(
    client: &ApiClient,
    phase: CleanupPhase,
    limit: Duration,
) -> Result<Duration, CleanupError> {
    tracing::info!(%phase, endpoint = CLEANUP_ENDPOINT, "cleanup starting");
    let start = Instant::now();

    match tokio::time::timeout(limit, client.trigger(CLEANUP_ENDPOINT)).await {
        Ok(Ok(())) => {
            let elapsed = start.elapsed();
            tracing::info!(%phase, elapsed_ms = elapsed.as_millis() as u64, "cleanup completed");
            Ok(elapsed)
        }
        Ok(Err(err)) => Err(CleanupError::Client(err)),
        Err(_) => Err(CleanupError::TimedOut { limit }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn cleanup_hits_the_reserved_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/todos/drizzleDeleteAll"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let result = run_cleanup(&client, CleanupPhase::Before, Duration::from_secs(30)).await;
        assert!(result.is_ok());
        server.verify().await;
    }

    #[tokio::test]
    async fn slow_cleanup_times_out_and_returns() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": true }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let start = Instant::now();
        let result = run_cleanup(&client, CleanupPhase::After, Duration::from_millis(50)).await;

        assert!(matches!(result, Err(CleanupError::TimedOut { .. })));
        // Settled at the bound, not at the server's pace
        assert!(start.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn failed_cleanup_is_an_inspectable_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let result = run_cleanup(&client, CleanupPhase::Before, Duration::from_secs(30)).await;
        assert!(matches!(result, Err(CleanupError::Client(_))));
    }
}
