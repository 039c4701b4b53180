//! # Storefront Seller SDK
//!
//! A Rust SDK for the Storefront seller console: list a merchant's active
//! orders and attach or amend a shipment tracking number per order.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, order domain model, draft state machine
//!    (always available, WASM-safe)
//! 2. **HTTP API** — `StorefrontHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `StorefrontClient` with nested sub-clients
//! 4. **View-Model** — `OrderConsole`: load phase, tracking drafts,
//!    notification queue, teardown-safe async reconciliation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_seller_sdk::prelude::*;
//!
//! let client = StorefrontClient::builder()
//!     .base_url("https://api.storefront.example")
//!     .bearer_token("seller-token")
//!     .build()?;
//!
//! let mut console = OrderConsole::new(client.uploads_url());
//! console.load(&client).await;
//! for row in console.rows() {
//!     println!("{}: {}", row.order.id, row.tracking_value);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers used across the SDK.
pub mod shared;

/// Order domain (vertical slice): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Notification queue — the collaborator boundary for toasts.
pub mod notify;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StorefrontClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: View-Model ──────────────────────────────────────────────────────

/// `OrderConsole` — seller order list + tracking draft view-model.
pub mod console;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{OrderId, ProductId};

    // Domain types — order
    pub use crate::domain::order::{
        Buyer, Order, OrderStatus, Product, TrackingConfirmation, UNSET_TRACKING,
    };

    // Draft state machine
    pub use crate::domain::order::state::{TrackingDraft, TrackingDrafts};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_UPLOADS_URL};

    // Notifications
    pub use crate::notify::{Notification, NotificationKind};

    // View-model
    pub use crate::console::{LoadPhase, OrderConsole, OrderRow};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OrdersClient, StorefrontClient, StorefrontClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
