//! Generic waiting loop for server-side long-running jobs.
//!
//! The upstream offers no push channel; completion is observed by
//! re-asking. The loop owns scheduling only: what "done" means is
//! supplied by the operation family through the poll closure, because
//! every job family reports progress in a different vocabulary.
//!
//! Timeout is an outcome, not an error: a job that outlives the caller's
//! patience is still running upstream, and the caller may poll again
//! later with the same task id.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::backoff::Backoff;
use crate::error::RpcError;

/// Scheduling knobs for one wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay before the second observation. Doubles each attempt.
    pub initial_interval: Duration,
    /// Upper bound for the doubling interval.
    pub max_interval: Duration,
    /// Total budget measured from the start of the wait.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(2),
            max_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(300),
        }
    }
}

impl PollConfig {
    fn schedule(&self) -> Backoff {
        Backoff::Exponential {
            base: self.initial_interval,
            factor: 2.0,
            max: self.max_interval,
            jitter: false,
        }
    }
}

/// What one observation said about the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollProgress<T> {
    /// The upstream has not acknowledged the job yet.
    Pending,
    InProgress,
    Completed(T),
    Failed(String),
}

/// How a wait ended. `TimedOut` and `Cancelled` say nothing about the
/// job itself; it may still finish upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Completed(T),
    Failed(String),
    TimedOut,
    Cancelled,
}

impl<T> PollOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PollOutcome<U> {
        match self {
            Self::Completed(value) => PollOutcome::Completed(f(value)),
            Self::Failed(reason) => PollOutcome::Failed(reason),
            Self::TimedOut => PollOutcome::TimedOut,
            Self::Cancelled => PollOutcome::Cancelled,
        }
    }
}

/// Polls until the job reaches a terminal state or the budget runs out.
pub async fn wait<T, F, Fut>(config: &PollConfig, poll: F) -> Result<PollOutcome<T>, RpcError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollProgress<T>, RpcError>>,
{
    wait_observed(config, poll, |_, _: &PollProgress<T>| {}).await
}

/// [`wait`] with a per-tick observer, called after every observation
/// with the 0-based attempt number.
pub async fn wait_observed<T, F, Fut, G>(
    config: &PollConfig,
    mut poll: F,
    mut on_tick: G,
) -> Result<PollOutcome<T>, RpcError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollProgress<T>, RpcError>>,
    G: FnMut(u32, &PollProgress<T>),
{
    // The deadline is absolute: sleeps never push it back.
    let deadline = Instant::now() + config.timeout;
    let schedule = config.schedule();
    let mut attempt: u32 = 0;

    loop {
        let progress = poll().await?;
        on_tick(attempt, &progress);

        match progress {
            PollProgress::Completed(value) => return Ok(PollOutcome::Completed(value)),
            PollProgress::Failed(reason) => return Ok(PollOutcome::Failed(reason)),
            PollProgress::Pending | PollProgress::InProgress => {}
        }

        let now = Instant::now();
        if now >= deadline {
            debug!(attempts = attempt + 1, "wait budget exhausted");
            return Ok(PollOutcome::TimedOut);
        }

        // Clamp the sleep so the deadline is honored even mid-interval.
        let sleep_for = schedule.delay(attempt).min(deadline - now);
        if !sleep_for.is_zero() {
            tokio::time::sleep(sleep_for).await;
        }
        attempt = attempt.saturating_add(1);
    }
}

/// [`wait`] that can be abandoned. When `cancel` resolves first the wait
/// returns `Cancelled` without another observation call; the remote job
/// is left untouched.
pub async fn wait_with_cancel<T, F, Fut, C>(
    config: &PollConfig,
    poll: F,
    cancel: C,
) -> Result<PollOutcome<T>, RpcError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollProgress<T>, RpcError>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        outcome = wait(config, poll) => outcome,
        _ = cancel => Ok(PollOutcome::Cancelled),
    }
}
