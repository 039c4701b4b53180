//! Retry policies for HTTP requests.
//!
//! Only the order list GET is retried ([`RetryPolicy::Idempotent`]); the
//! tracking PUT ships with [`RetryPolicy::None`] because a failed submit is
//! resubmitted by the seller, never automatically.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt — the tracking update PUT. The draft is preserved on
    /// failure and resubmission is a manual action.
    #[default]
    None,
    /// Retry transport failures and 502/503/504, back off on 429 — the
    /// order list GET.
    Idempotent,
    /// Caller-provided retry behavior.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Concrete retry settings, or `None` for single-attempt requests.
    pub(crate) fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(config) => Some(config.clone()),
        }
    }
}

/// Settings for retried requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Ceiling for the doubling delay.
    pub max_delay: Duration,
    /// Spread delays ±25% so synchronized clients don't retry in lockstep.
    pub jitter: bool,
    /// Whether 429 responses are retried after backing off.
    pub retry_on_rate_limit: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            jitter: true,
            retry_on_rate_limit: false,
        }
    }
}

impl RetryConfig {
    /// The config behind [`RetryPolicy::Idempotent`].
    pub fn idempotent() -> Self {
        Self {
            retry_on_rate_limit: true,
            ..Self::default()
        }
    }

    /// Whether a response status is worth another attempt.
    pub fn should_retry_status(&self, status: u16) -> bool {
        match status {
            502 | 503 | 504 => true,
            429 => self.retry_on_rate_limit,
            _ => false,
        }
    }

    /// Backoff before retry `attempt` (0-indexed): doubling from
    /// `base_delay`, capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let mut delay = self.base_delay;
        for _ in 0..attempt {
            delay = (delay * 2).min(self.max_delay);
        }

        if self.jitter {
            let spread = (rand::random::<f64>() - 0.5) * 0.5;
            delay.mul_f64(1.0 + spread).min(self.max_delay)
        } else {
            delay
        }
    }
}
