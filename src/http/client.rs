//! Low-level HTTP client — `StorefrontHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Internal to the SDK — `StorefrontClient`
//! wraps this.

use crate::domain::order::wire::{OrdersResponse, TrackingUpdateRequest, TrackingUpdateResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::OrderId;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Storefront REST API.
pub struct StorefrontHttp {
    base_url: String,
    client: Client,
    /// Seller bearer credential. Injected explicitly at construction or via
    /// `set_bearer_token` — never read from ambient storage.
    bearer_token: Arc<RwLock<Option<String>>>,
}

impl StorefrontHttp {
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            bearer_token: Arc::new(RwLock::new(bearer_token)),
        }
    }

    /// Replace the bearer credential.
    pub(crate) async fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer_token.write().await = token;
    }

    /// Check if a bearer credential is set.
    pub(crate) async fn has_bearer_token(&self) -> bool {
        self.bearer_token.read().await.is_some()
    }

    // ── Seller orders ────────────────────────────────────────────────────

    pub async fn get_seller_orders(&self) -> Result<OrdersResponse, HttpError> {
        let url = format!("{}/seller/orders", self.base_url);
        self.send(reqwest::Method::GET, &url, None::<&()>, RetryPolicy::Idempotent)
            .await
    }

    // ── Tracking numbers ─────────────────────────────────────────────────

    pub async fn put_tracking_number(
        &self,
        order_id: &OrderId,
        request: &TrackingUpdateRequest,
    ) -> Result<TrackingUpdateResponse, HttpError> {
        let url = format!("{}/orders/{}/trackingnumber", self.base_url, order_id);
        self.send(reqwest::Method::PUT, &url, Some(request), RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Issue a request under a retry policy. Retries stop at the policy's
    /// budget; the final attempt's error is returned as-is.
    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        policy: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = policy.config() else {
            return self.dispatch(&method, url, body).await;
        };

        let mut attempt = 0;
        loop {
            let err = match self.dispatch(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            if attempt >= config.max_retries || !is_transient(&err, &config) {
                return Err(err);
            }

            // Honor an explicit server backoff hint before our own delay.
            if let HttpError::RateLimited {
                retry_after_ms: Some(ms),
            } = &err
            {
                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    /// One attempt: inject the bearer header, send, map the response.
    async fn dispatch<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.bearer_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(HttpError::from_status(status.as_u16(), body_text));
        }

        Ok(resp.json::<T>().await?)
    }
}

/// Whether an attempt failed in a way another attempt could fix.
fn is_transient(err: &HttpError, config: &RetryConfig) -> bool {
    match err {
        HttpError::ServerError { status, .. } => config.should_retry_status(*status),
        HttpError::RateLimited { .. } => config.retry_on_rate_limit,
        HttpError::Timeout => true,
        HttpError::Reqwest(e) => {
            #[cfg(not(target_arch = "wasm32"))]
            let retryable = e.is_connect() || e.is_timeout() || e.is_request();
            #[cfg(target_arch = "wasm32")]
            let retryable = e.is_timeout() || e.is_request();
            retryable
        }
        _ => false,
    }
}

impl Clone for StorefrontHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            bearer_token: self.bearer_token.clone(),
        }
    }
}
