//! # todobench harness
//!
//! Concurrent load harness for the todo playground API. The API exposes a
//! fixed set of write actions under `POST /api/todos/{action}`, half backed
//! by a headless CMS and half by a direct ORM; this crate measures which
//! write path is faster under concurrent load.
//!
//! A run proceeds as: cleanup (bounded, best-effort) → one batch of N
//! concurrent requests per action, batches strictly sequential → comparison
//! report → cleanup again. Per-request failures are values, not errors: a
//! failed request is counted and excluded from latency stats, and a batch
//! where nothing succeeded reports "no data" rather than a NaN.
//!
//! ## Example
//!
//! ```no_run
//! use todobench_harness::{render_comparison, LoadRunner, RunConfig};
//!
//! # async fn run() {
//! let config = RunConfig::new("http://localhost:3002").with_concurrency(5);
//! let runner = LoadRunner::new(&config);
//! let ctx = runner.run_all().await;
//! println!("{}", render_comparison(&ctx));
//! # }
//! ```

pub mod action;
pub mod cleanup;
pub mod client;
pub mod config;
pub mod report;
pub mod runner;
pub mod stats;

pub use action::{Action, Stack};
pub use cleanup::{run_cleanup, CleanupError, CleanupPhase, CLEANUP_ENDPOINT};
pub use client::{ApiClient, ClientError};
pub use config::RunConfig;
pub use report::{faster_stack, group_mean, render_comparison};
pub use runner::{run_single_request, LoadRunner};
pub use stats::{ActionSummary, RequestOutcome, RunContext, TimingStats};
