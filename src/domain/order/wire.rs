//! Wire types for seller order responses (REST).

use crate::shared::{OrderId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Success body of `GET /seller/orders`.
///
/// `orders` may be absent entirely when a seller has no records; that
/// deserializes to an empty list and is a valid, non-error outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

/// A single order as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
    pub shippingby: String,
    pub status: String,
    /// Raw stored value; the backend uses a placeholder string for "unset".
    #[serde(rename = "trackingNumber")]
    pub tracking_number: Option<String>,
    pub user: Option<UserRecord>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A line item as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Denormalized buyer snapshot embedded in an order.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub address: String,
}

/// Body of `PUT /orders/{id}/trackingnumber`.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingUpdateRequest {
    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,
}

/// Success body of `PUT /orders/{id}/trackingnumber`.
///
/// `message` is shown to the seller verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingUpdateResponse {
    pub message: String,
}
