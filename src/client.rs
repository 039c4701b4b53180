//! High-level client — `StorefrontClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared configuration, and accessor methods.

use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::http::StorefrontHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the Storefront seller SDK.
///
/// Provides nested sub-client accessors per domain: `client.orders()`.
/// The bearer credential is injected explicitly — at construction via the
/// builder or later via [`set_bearer_token`](StorefrontClient::set_bearer_token);
/// the SDK never reads it from ambient storage.
pub struct StorefrontClient {
    pub(crate) http: StorefrontHttp,
    uploads_url: String,
}

impl StorefrontClient {
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    /// Base URL product image paths are resolved against.
    pub fn uploads_url(&self) -> &str {
        &self.uploads_url
    }

    /// Replace the seller bearer credential.
    pub async fn set_bearer_token(&self, token: Option<String>) {
        self.http.set_bearer_token(token).await;
    }

    /// Whether a bearer credential is currently set.
    pub async fn has_bearer_token(&self) -> bool {
        self.http.has_bearer_token().await
    }
}

impl Clone for StorefrontClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            uploads_url: self.uploads_url.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StorefrontClientBuilder {
    base_url: String,
    uploads_url: Option<String>,
    bearer_token: Option<String>,
}

impl Default for StorefrontClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            uploads_url: None,
            bearer_token: None,
        }
    }
}

impl StorefrontClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Override the uploads base URL. Defaults to `{base_url}/uploads`.
    pub fn uploads_url(mut self, url: &str) -> Self {
        self.uploads_url = Some(url.to_string());
        self
    }

    /// Pre-set the seller bearer credential on construction.
    pub fn bearer_token(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<StorefrontClient, SdkError> {
        let uploads_url = self
            .uploads_url
            .unwrap_or_else(|| format!("{}/uploads", self.base_url.trim_end_matches('/')));

        Ok(StorefrontClient {
            http: StorefrontHttp::new(&self.base_url, self.bearer_token),
            uploads_url,
        })
    }
}
