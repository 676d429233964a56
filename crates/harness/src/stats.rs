//! Timing outcomes and aggregate statistics
//!
//! One [`RequestOutcome`] per request, one [`ActionSummary`] per batch, and a
//! [`RunContext`] holding the per-run results table. Aggregates over an empty
//! success set are represented as `None`, never as NaN.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::action::Action;

/// Result of one timed request.
///
/// Failures are values, not errors: a failed request still carries the time
/// it took, it is just excluded from success statistics.
#[derive(Debug, Clone, Copy)]
pub struct RequestOutcome {
    pub duration: Duration,
    pub succeeded: bool,
}

/// min/avg/max latency over the successful requests of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingStats {
    pub min_ms: f64,
    pub avg_ms: f64,
    pub max_ms: f64,
}

impl TimingStats {
    /// Aggregate a set of successful-request durations.
    ///
    /// Returns `None` for an empty set; callers must surface "no data"
    /// instead of inventing numbers.
    pub fn from_durations(durations: &[Duration]) -> Option<TimingStats> {
        if durations.is_empty() {
            return None;
        }

        let millis: Vec<f64> = durations.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        let sum: f64 = millis.iter().sum();
        let min = millis.iter().copied().fold(f64::INFINITY, f64::min);
        let max = millis.iter().copied().fold(0.0, f64::max);

        Some(TimingStats {
            min_ms: min,
            avg_ms: sum / millis.len() as f64,
            max_ms: max,
        })
    }
}

/// Aggregated result of one action's batch.
#[derive(Debug, Clone, Serialize)]
pub struct ActionSummary {
    /// Number of requests launched (the configured concurrency).
    pub requested: usize,
    /// Number that completed with a 2xx status.
    pub succeeded: usize,
    /// Latency stats over the successful subset; `None` if none succeeded.
    pub stats: Option<TimingStats>,
    /// Wall-clock duration of the whole batch, first launch to last settle.
    #[serde(serialize_with = "as_millis")]
    pub batch_duration: Duration,
}

impl ActionSummary {
    /// Build a summary from the settled outcomes of one batch.
    pub fn from_outcomes(outcomes: &[RequestOutcome], batch_duration: Duration) -> ActionSummary {
        let successes: Vec<Duration> = outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.duration)
            .collect();

        ActionSummary {
            requested: outcomes.len(),
            succeeded: successes.len(),
            stats: TimingStats::from_durations(&successes),
            batch_duration,
        }
    }

    pub fn failed(&self) -> usize {
        self.requested - self.succeeded
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Per-run results table, created at run start and read by the reporter.
///
/// Batches run one action at a time, so there is a single writer; the map
/// only needs insert-or-overwrite by action.
#[derive(Debug, Clone, Serialize)]
pub struct RunContext {
    /// Requests launched per action.
    pub concurrency: usize,
    /// Settled summaries keyed by action, in action order.
    pub results: BTreeMap<Action, ActionSummary>,
}

impl RunContext {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency,
            results: BTreeMap::new(),
        }
    }

    /// Record a batch summary, overwriting any prior entry for the action.
    pub fn record(&mut self, action: Action, summary: ActionSummary) {
        self.results.insert(action, summary);
    }

    pub fn summary(&self, action: Action) -> Option<&ActionSummary> {
        self.results.get(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stats_over_known_durations() {
        let durations = [ms(10), ms(20), ms(30), ms(40), ms(50)];
        let stats = TimingStats::from_durations(&durations).unwrap();
        assert_eq!(stats.min_ms, 10.0);
        assert_eq!(stats.avg_ms, 30.0);
        assert_eq!(stats.max_ms, 50.0);
    }

    #[test]
    fn stats_invariant_min_avg_max() {
        let durations = [ms(3), ms(7), ms(7), ms(100)];
        let stats = TimingStats::from_durations(&durations).unwrap();
        assert!(stats.min_ms <= stats.avg_ms);
        assert!(stats.avg_ms <= stats.max_ms);
    }

    #[test]
    fn stats_over_empty_set_are_absent() {
        assert_eq!(TimingStats::from_durations(&[]), None);
    }

    #[test]
    fn summary_excludes_failures_from_stats() {
        let outcomes = [
            RequestOutcome { duration: ms(10), succeeded: true },
            RequestOutcome { duration: ms(500), succeeded: false },
            RequestOutcome { duration: ms(20), succeeded: true },
            RequestOutcome { duration: ms(700), succeeded: false },
            RequestOutcome { duration: ms(30), succeeded: true },
        ];
        let summary = ActionSummary::from_outcomes(&outcomes, ms(40));

        assert_eq!(summary.requested, 5);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.failed(), 2);
        let stats = summary.stats.unwrap();
        assert_eq!(stats.min_ms, 10.0);
        assert_eq!(stats.avg_ms, 20.0);
        assert_eq!(stats.max_ms, 30.0);
    }

    #[test]
    fn summary_with_no_successes_has_no_stats() {
        let outcomes = [
            RequestOutcome { duration: ms(5), succeeded: false },
            RequestOutcome { duration: ms(6), succeeded: false },
        ];
        let summary = ActionSummary::from_outcomes(&outcomes, ms(7));
        assert_eq!(summary.succeeded, 0);
        assert!(summary.stats.is_none());
    }

    #[test]
    fn record_overwrites_prior_entry() {
        let mut ctx = RunContext::new(5);
        let first = ActionSummary::from_outcomes(
            &[RequestOutcome { duration: ms(10), succeeded: true }],
            ms(10),
        );
        let second = ActionSummary::from_outcomes(
            &[RequestOutcome { duration: ms(90), succeeded: true }],
            ms(90),
        );
        ctx.record(Action::CreateTodo, first);
        ctx.record(Action::CreateTodo, second);

        let stats = ctx.summary(Action::CreateTodo).unwrap().stats.unwrap();
        assert_eq!(stats.avg_ms, 90.0);
    }

    #[test]
    fn context_serializes_with_wire_name_keys() {
        let mut ctx = RunContext::new(1);
        ctx.record(
            Action::DrizzleBatchInsert,
            ActionSummary::from_outcomes(
                &[RequestOutcome { duration: ms(12), succeeded: true }],
                ms(12),
            ),
        );

        let json = serde_json::to_value(&ctx).unwrap();
        assert!(json["results"]["drizzleBatchInsert"]["stats"]["avg_ms"].is_number());
    }
}
