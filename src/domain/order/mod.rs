//! Order domain — seller orders, line items, tracking drafts.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{join_url, OrderId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::ValidationError;
pub use state::{TrackingDraft, TrackingDrafts};

/// Placeholder the backend stores when no tracking number has been assigned.
///
/// Normalized to `None` during wire → domain conversion; never shown to the
/// seller.
pub const UNSET_TRACKING: &str = "xxxxxxx";

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Order lifecycle status.
///
/// `Completed` orders are dropped from the seller console; every other value
/// counts as active. Statuses this SDK version doesn't know about are kept as
/// `Other` so they classify as active rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Packing,
    Shipping,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Packing => "Packing",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Completed => "Completed",
            OrderStatus::Other(s) => s,
        }
    }

    /// Whether the order is still active (shown in the console).
    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Completed)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => OrderStatus::Pending,
            "Packing" => OrderStatus::Packing,
            "Shipping" => OrderStatus::Shipping,
            "Completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Relative path under the uploads base URL.
    pub image_path: String,
}

impl Product {
    /// Resolve the product image against an uploads base URL.
    pub fn image_url(&self, uploads_base: &str) -> String {
        join_url(uploads_base, &self.image_path)
    }
}

// ─── Buyer ───────────────────────────────────────────────────────────────────

/// Denormalized buyer snapshot attached to an order at fetch time.
///
/// Read-only; never independently fetched or mutated by this SDK.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Buyer {
    pub name: String,
    pub phone_number: String,
    pub address: String,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A validated, domain-level seller order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub products: Vec<Product>,
    pub total_price: Decimal,
    /// Shipping carrier label, e.g. `"JNE"`.
    pub shipping_by: String,
    pub status: OrderStatus,
    /// Committed tracking number. `None` when the backend holds the unset
    /// sentinel or an empty string.
    pub tracking: Option<String>,
    pub buyer: Option<Buyer>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// The committed tracking number as shown in an empty draft field.
    pub fn tracking_display(&self) -> &str {
        self.tracking.as_deref().unwrap_or("")
    }

    /// Formatted total for the payment summary.
    pub fn total_display(&self) -> String {
        crate::shared::fmt::display(&self.total_price)
    }
}

// ─── TrackingConfirmation ────────────────────────────────────────────────────

/// Server acknowledgement of a tracking update.
///
/// `message` is user-displayable and forwarded to the notification queue
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfirmation {
    pub message: String,
}

/// Drop completed orders, preserving the relative order of the rest.
///
/// A classification filter, not a sort.
pub fn filter_active(orders: Vec<Order>) -> Vec<Order> {
    orders.into_iter().filter(|o| o.status.is_active()).collect()
}
