//! HTTP client layer — `StorefrontHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use crate::error::HttpError;
pub use client::StorefrontHttp;
pub use retry::{RetryConfig, RetryPolicy};
