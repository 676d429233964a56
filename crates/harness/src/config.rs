//! Run configuration

use std::time::Duration;

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base URL of the playground API.
    pub base_url: String,
    /// Concurrent requests per action batch. Must be at least 1; the CLI
    /// enforces this at parse time.
    pub concurrency: usize,
    /// Upper bound on each cleanup call.
    pub cleanup_timeout: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3002".to_string(),
            concurrency: 5,
            cleanup_timeout: Duration::from_secs(30),
        }
    }
}

impl RunConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_cleanup_timeout(mut self, timeout: Duration) -> Self {
        self.cleanup_timeout = timeout;
        self
    }
}
