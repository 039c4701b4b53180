//! Orders sub-client — active-order list, tracking updates.

use crate::client::StorefrontClient;
use crate::domain::order::wire::TrackingUpdateRequest;
use crate::domain::order::{filter_active, Order, TrackingConfirmation};
use crate::error::{HttpError, SdkError};
use crate::shared::OrderId;

pub struct Orders<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Orders<'a> {
    /// Fetch the seller's active (non-completed) orders.
    ///
    /// Issues exactly one `GET /seller/orders`. Completed orders are dropped
    /// client-side with relative order preserved. An empty list and a 404
    /// from this endpoint are both the benign "no orders" outcome, never an
    /// error.
    pub async fn active(&self) -> Result<Vec<Order>, SdkError> {
        let resp = match self.client.http.get_seller_orders().await {
            Ok(resp) => resp,
            Err(HttpError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut orders = Vec::with_capacity(resp.orders.len());
        for record in resp.orders {
            orders.push(Order::try_from(record).map_err(|e| SdkError::Validation(e.to_string()))?);
        }
        Ok(filter_active(orders))
    }

    /// Commit a tracking number for one order.
    ///
    /// Issues exactly one `PUT /orders/{id}/trackingnumber` carrying the
    /// draft text; no automatic retry. The returned confirmation message is
    /// user-displayable.
    pub async fn update_tracking(
        &self,
        order_id: &OrderId,
        tracking_number: &str,
    ) -> Result<TrackingConfirmation, SdkError> {
        let request = TrackingUpdateRequest {
            tracking_number: tracking_number.to_string(),
        };
        let resp = self
            .client
            .http
            .put_tracking_number(order_id, &request)
            .await?;
        tracing::info!(order = %order_id, "tracking number updated");
        Ok(resp.into())
    }
}
