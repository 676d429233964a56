//! Single-request timer and concurrent load runner
//!
//! One batch = `concurrency` simultaneous requests against one action. A
//! batch settles fully before the next action starts, so the results table
//! has a single writer and batches never interleave.

use std::time::Instant;

use futures::future::join_all;

use crate::action::{Action, Stack};
use crate::client::ApiClient;
use crate::config::RunConfig;
use crate::stats::{ActionSummary, RequestOutcome, RunContext};

/// Issue one timed request against an action endpoint.
///
/// Infallible by contract: network errors and non-2xx statuses become a
/// failed outcome carrying the elapsed time, they are never raised. The
/// clock stops only after the response body has been consumed.
pub async fn run_single_request(client: &ApiClient, action: Action) -> RequestOutcome {
    let start = Instant::now();
    let result = client.trigger(action.wire_name()).await;
    let duration = start.elapsed();

    if let Err(err) = &result {
        tracing::debug!(action = %action, error = %err, "request failed");
    }

    RequestOutcome {
        duration,
        succeeded: result.is_ok(),
    }
}

/// Drives concurrent batches of requests and records their summaries.
pub struct LoadRunner {
    client: ApiClient,
    concurrency: usize,
}

impl LoadRunner {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            client: ApiClient::new(&config.base_url),
            concurrency: config.concurrency,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run one batch: launch `concurrency` requests at once, wait for every
    /// one to settle, aggregate the successes, and record the summary in the
    /// context (overwriting any prior entry for this action).
    ///
    /// Fire-and-collect, not fail-fast: a failed request never aborts its
    /// siblings or the batch.
    pub async fn run_action(&self, ctx: &mut RunContext, action: Action) -> ActionSummary {
        let batch_start = Instant::now();

        let requests = (0..self.concurrency).map(|_| run_single_request(&self.client, action));
        let outcomes: Vec<RequestOutcome> = join_all(requests).await;

        let summary = ActionSummary::from_outcomes(&outcomes, batch_start.elapsed());

        tracing::info!(
            action = %action,
            users = summary.requested,
            succeeded = summary.succeeded,
            failed = summary.failed(),
            avg_ms = summary.stats.map(|s| s.avg_ms),
            min_ms = summary.stats.map(|s| s.min_ms),
            max_ms = summary.stats.map(|s| s.max_ms),
            total_ms = summary.batch_duration.as_secs_f64() * 1000.0,
            "batch settled"
        );

        ctx.record(action, summary.clone());
        summary
    }

    /// Run every action of both stacks sequentially, CMS group first, into a
    /// fresh context. Batch N+1 does not start until batch N has settled.
    pub async fn run_all(&self) -> RunContext {
        let mut ctx = RunContext::new(self.concurrency);

        for stack in [Stack::Cms, Stack::Orm] {
            for &action in stack.actions() {
                self.run_action(&mut ctx, action).await;
            }
        }

        ctx
    }
}
