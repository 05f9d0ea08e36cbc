//! Retry schedule for transient HTTP status codes.
//!
//! Delays double from the configured initial delay (1s, 2s, 4s, ...) with no
//! jitter, so every retry waits strictly longer than the one before until the
//! `MAX_RETRY_DELAY` cap.

use common::HttpStatusCode;

use std::time::Duration;

use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use reqwest::Response;
use reqwest::header::RETRY_AFTER;

const BACKOFF_MULTIPLIER: f64 = 2.0;
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(120);

/// How many times, and how far apart, a logical call is re-sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// A fresh schedule for one logical call.
    pub fn schedule(&self) -> RetrySchedule {
        let backoff = ExponentialBackoff {
            current_interval: self.initial_delay,
            initial_interval: self.initial_delay,
            randomization_factor: 0.0,
            multiplier: BACKOFF_MULTIPLIER,
            max_interval: MAX_RETRY_DELAY,
            max_elapsed_time: None,
            ..Default::default()
        };

        RetrySchedule {
            backoff,
            remaining: self.max_retries,
            previous: Duration::ZERO,
        }
    }

    /// Every delay the policy would wait, in order.
    pub fn delays(&self) -> Vec<Duration> {
        let mut schedule = self.schedule();
        std::iter::from_fn(|| schedule.next_delay(None)).collect()
    }
}

/// Per-call retry state: remaining attempts and the next backoff interval.
pub struct RetrySchedule {
    backoff: ExponentialBackoff,
    remaining: u32,
    previous: Duration,
}

impl RetrySchedule {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Delay before the next attempt, or `None` once retries are exhausted.
    ///
    /// A `Retry-After` hint longer than the computed backoff wins, capped at
    /// `MAX_RETRY_DELAY`. A delay never drops below the one before it, so a
    /// long hint holds later waits at least that long.
    pub fn next_delay(&mut self, retry_after: Option<Duration>) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }

        let computed = self.backoff.next_backoff()?;
        self.remaining -= 1;

        let hinted = match retry_after {
            Some(hint) => computed.max(hint.min(MAX_RETRY_DELAY)),
            None => computed,
        };
        let delay = hinted.max(self.previous);
        self.previous = delay;

        Some(delay)
    }
}

/// Whether a response status is one of the transient codes worth re-sending.
pub fn should_retry(response: &Response) -> bool {
    HttpStatusCode(response.status().as_u16()).is_transient()
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
pub fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_retry_after)
}

pub(crate) fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
