//! Conversions: order wire types → domain types (TryFrom + validation).

use super::wire;
use super::{Buyer, Order, OrderStatus, Product, TrackingConfirmation, UNSET_TRACKING};
use thiserror::Error;

/// Wire → domain validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("order {0} has a negative total price")]
    NegativeTotal(String),
}

/// Normalize the stored tracking value: sentinel and empty both mean unset.
fn normalize_tracking(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.is_empty() && t != UNSET_TRACKING)
}

impl From<wire::ProductRecord> for Product {
    fn from(record: wire::ProductRecord) -> Self {
        Product {
            id: record.product_id,
            name: record.name,
            image_path: record.image_url,
        }
    }
}

impl From<wire::UserRecord> for Buyer {
    fn from(record: wire::UserRecord) -> Self {
        Buyer {
            name: record.name,
            phone_number: record.phone_number,
            address: record.address,
        }
    }
}

impl TryFrom<wire::OrderRecord> for Order {
    type Error = ValidationError;

    fn try_from(record: wire::OrderRecord) -> Result<Self, Self::Error> {
        if record.total_price.is_sign_negative() {
            return Err(ValidationError::NegativeTotal(record.id.to_string()));
        }

        Ok(Order {
            id: record.id,
            products: record.products.into_iter().map(Product::from).collect(),
            total_price: record.total_price,
            shipping_by: record.shippingby,
            status: OrderStatus::from(record.status),
            tracking: normalize_tracking(record.tracking_number),
            buyer: record.user.map(Buyer::from),
            created_at: record.created_at,
        })
    }
}

impl From<wire::TrackingUpdateResponse> for TrackingConfirmation {
    fn from(resp: wire::TrackingUpdateResponse) -> Self {
        TrackingConfirmation {
            message: resp.message,
        }
    }
}
