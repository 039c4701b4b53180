//! Seller order console view-model — app-owned, SDK-provided update logic.
//!
//! `OrderConsole` owns everything one console activation needs: the load
//! phase, the fetched active-order list, the per-order tracking drafts, and
//! the notification queue. All mutation is synchronous; the two network
//! boundaries are bracketed by `begin_*`/`finish_*` pairs so the await can
//! happen without borrowing the console.
//!
//! Every ticket is stamped with the console's epoch. [`reset`](OrderConsole::reset)
//! bumps it, so a fetch or submit that resolves after teardown is discarded
//! instead of mutating state that no longer belongs to a live view.

use crate::domain::order::state::TrackingDrafts;
use crate::domain::order::{Order, Product, TrackingConfirmation};
use crate::error::SdkError;
use crate::notify::Notification;
use crate::shared::OrderId;

/// Generic failure text for the list fetch; the specific error is logged,
/// not shown.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch orders. Please try again later.";

/// Generic failure text for a tracking submit.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to update tracking number.";

/// Affordance text when the resolved list is empty.
pub const NO_ORDERS_MESSAGE: &str = "No orders available at the moment.";

// ─── LoadPhase ───────────────────────────────────────────────────────────────

/// Lifecycle of the one-shot order list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Not activated yet; `begin_load` is permitted.
    Idle,
    /// Fetch outstanding; the host shows a loading indicator.
    Loading,
    /// Fetch resolved (success or failure); the host shows the list or the
    /// "no orders" affordance.
    Ready,
}

// ─── Tickets ─────────────────────────────────────────────────────────────────

/// Proof that a list fetch was started on a live console.
#[derive(Debug)]
pub struct LoadTicket {
    epoch: u64,
}

/// Proof that a submit was started for one order, carrying the text to send.
#[derive(Debug)]
pub struct SubmitTicket {
    epoch: u64,
    order_id: OrderId,
    text: String,
}

impl SubmitTicket {
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// The draft text captured at `begin_submit` time.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ─── OrderRow ────────────────────────────────────────────────────────────────

/// Rendering contract for one order: domain data plus derived affordances.
#[derive(Debug)]
pub struct OrderRow<'a> {
    pub order: &'a Order,
    /// Value the tracking input shows: draft, else committed number, else "".
    pub tracking_value: &'a str,
    /// Submit button visible — there is a submittable draft and no request
    /// in flight for this order.
    pub show_submit: bool,
    /// A submission is outstanding for this order.
    pub submitting: bool,
}

// ─── OrderConsole ────────────────────────────────────────────────────────────

/// State for one activation of the seller order console.
///
/// The app owns an instance per activation and calls the update methods; no
/// state is shared across instances.
#[derive(Debug)]
pub struct OrderConsole {
    epoch: u64,
    phase: LoadPhase,
    orders: Vec<Order>,
    drafts: TrackingDrafts,
    notifications: Vec<Notification>,
    uploads_url: String,
}

impl OrderConsole {
    pub fn new(uploads_url: impl Into<String>) -> Self {
        Self {
            epoch: 0,
            phase: LoadPhase::Idle,
            orders: Vec::new(),
            drafts: TrackingDrafts::new(),
            notifications: Vec::new(),
            uploads_url: uploads_url.into(),
        }
    }

    // ── Read side ────────────────────────────────────────────────────────

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The fetch resolved and there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.phase == LoadPhase::Ready && self.orders.is_empty()
    }

    /// "No orders" affordance text, when it should be shown.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_ORDERS_MESSAGE)
    }

    /// Active orders in the server's order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Per-order render data in display order.
    pub fn rows(&self) -> Vec<OrderRow<'_>> {
        self.orders
            .iter()
            .map(|order| OrderRow {
                order,
                tracking_value: self.drafts.display_value(order),
                show_submit: self.drafts.can_submit(&order.id),
                submitting: self.drafts.is_submitting(&order.id),
            })
            .collect()
    }

    /// Resolve a product image against the configured uploads base.
    pub fn image_url(&self, product: &Product) -> String {
        product.image_url(&self.uploads_url)
    }

    pub fn is_dirty(&self, order_id: &OrderId) -> bool {
        self.drafts.is_dirty(order_id)
    }

    /// Drain pending notifications for presentation.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Edits ────────────────────────────────────────────────────────────

    /// Record a keystroke in an order's tracking field.
    pub fn set_draft(&mut self, order_id: &OrderId, text: impl Into<String>) {
        self.drafts.set_draft(order_id, text);
    }

    // ── Fetch lifecycle ──────────────────────────────────────────────────

    /// Start the one-shot list fetch. Returns `None` unless the console is
    /// `Idle`, so re-renders cannot re-issue the request.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.phase != LoadPhase::Idle {
            return None;
        }
        self.phase = LoadPhase::Loading;
        Some(LoadTicket { epoch: self.epoch })
    }

    /// Apply the fetch outcome. A ticket from a previous epoch (the view was
    /// torn down while the request was in flight) is discarded.
    ///
    /// On failure the list stays empty, the loading indicator clears, and
    /// one generic error notification is queued — never a crash, never a
    /// stuck loading state.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Order>, SdkError>) {
        if ticket.epoch != self.epoch {
            tracing::warn!("discarding order fetch that resolved after reset");
            return;
        }

        self.phase = LoadPhase::Ready;
        match result {
            Ok(orders) => {
                self.orders = orders;
            }
            Err(e) => {
                tracing::warn!(error = %e, "order fetch failed");
                self.orders = Vec::new();
                self.notifications
                    .push(Notification::error(FETCH_FAILED_MESSAGE));
            }
        }
    }

    // ── Submit lifecycle ─────────────────────────────────────────────────

    /// Start a submit for one order. Returns `None` when there is nothing
    /// submittable — no draft, an empty draft, or a request already in
    /// flight for this order (double-submit is refused).
    pub fn begin_submit(&mut self, order_id: &OrderId) -> Option<SubmitTicket> {
        let text = self.drafts.begin_submit(order_id)?;
        Some(SubmitTicket {
            epoch: self.epoch,
            order_id: order_id.clone(),
            text,
        })
    }

    /// Apply a submit outcome. Stale-epoch tickets are discarded.
    ///
    /// Success commits the submitted text as the display value, clears the
    /// dirty flag, and queues the server's message. Failure restores the
    /// draft exactly (manual retry stays possible) and queues a generic
    /// error. Either way, a draft the seller re-edited during the flight is
    /// left untouched.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<TrackingConfirmation, SdkError>,
    ) {
        if ticket.epoch != self.epoch {
            tracing::warn!(order = %ticket.order_id, "discarding tracking submit that resolved after reset");
            return;
        }

        match result {
            Ok(confirmation) => {
                self.drafts.commit(&ticket.order_id);
                self.notifications
                    .push(Notification::success(confirmation.message));
            }
            Err(e) => {
                tracing::warn!(order = %ticket.order_id, error = %e, "tracking submit failed");
                self.drafts.rollback(&ticket.order_id);
                self.notifications
                    .push(Notification::error(SUBMIT_FAILED_MESSAGE));
            }
        }
    }

    // ── Teardown ─────────────────────────────────────────────────────────

    /// Tear the activation down: drop orders, drafts and notifications and
    /// invalidate every outstanding ticket. The console returns to `Idle`
    /// and may be activated again.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = LoadPhase::Idle;
        self.orders.clear();
        self.drafts.clear();
        self.notifications.clear();
    }

    // ── Async drivers ────────────────────────────────────────────────────

    /// Fetch the order list once and apply the outcome.
    ///
    /// Convenience for hosts that don't manage their own tasks; others call
    /// `begin_load`/`finish_load` around their own spawn.
    #[cfg(feature = "http")]
    pub async fn load(&mut self, client: &crate::client::StorefrontClient) {
        let Some(ticket) = self.begin_load() else {
            return;
        };
        let result = client.orders().active().await;
        self.finish_load(ticket, result);
    }

    /// Submit the current draft for one order and apply the outcome.
    #[cfg(feature = "http")]
    pub async fn submit_tracking(
        &mut self,
        client: &crate::client::StorefrontClient,
        order_id: &OrderId,
    ) {
        let Some(ticket) = self.begin_submit(order_id) else {
            return;
        };
        let result = client
            .orders()
            .update_tracking(ticket.order_id(), ticket.text())
            .await;
        self.finish_submit(ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderStatus, UNSET_TRACKING};
    use crate::error::HttpError;
    use crate::notify::NotificationKind;
    use rust_decimal::Decimal;

    fn order(id: &str, tracking: Option<&str>) -> Order {
        Order {
            id: OrderId::from(id),
            products: vec![],
            total_price: Decimal::from(150000),
            shipping_by: "JNE".to_string(),
            status: OrderStatus::Packing,
            tracking: tracking.map(|t| t.to_string()),
            buyer: None,
            created_at: None,
        }
    }

    fn ready_console(orders: Vec<Order>) -> OrderConsole {
        let mut console = OrderConsole::new("https://api.example/uploads");
        let ticket = console.begin_load().unwrap();
        console.finish_load(ticket, Ok(orders));
        console
    }

    fn confirmation(message: &str) -> TrackingConfirmation {
        TrackingConfirmation {
            message: message.to_string(),
        }
    }

    fn server_error() -> SdkError {
        SdkError::Http(HttpError::ServerError {
            status: 500,
            body: "boom".to_string(),
        })
    }

    #[test]
    fn test_load_is_issued_once_per_activation() {
        let mut console = OrderConsole::new("u");
        assert_eq!(console.phase(), LoadPhase::Idle);
        let ticket = console.begin_load().unwrap();
        assert!(console.is_loading());
        // A re-render cannot start a second fetch.
        assert!(console.begin_load().is_none());
        console.finish_load(ticket, Ok(vec![order("a1", None)]));
        assert_eq!(console.phase(), LoadPhase::Ready);
        assert!(console.begin_load().is_none());
    }

    #[test]
    fn test_empty_fetch_shows_no_orders_without_error() {
        let mut console = ready_console(vec![]);
        assert!(console.is_empty());
        assert_eq!(console.empty_message(), Some(NO_ORDERS_MESSAGE));
        assert!(console.take_notifications().is_empty());
    }

    #[test]
    fn test_failed_fetch_clears_loading_and_notifies_once() {
        let mut console = OrderConsole::new("u");
        let ticket = console.begin_load().unwrap();
        console.finish_load(ticket, Err(server_error()));
        assert!(!console.is_loading());
        assert!(console.orders().is_empty());
        let notes = console.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, FETCH_FAILED_MESSAGE);
        // Drained — not shown twice.
        assert!(console.take_notifications().is_empty());
    }

    #[test]
    fn test_sentinel_order_full_scenario() {
        // Order A1 holds the unset placeholder: field empty, submit hidden.
        let mut console = ready_console(vec![order("A1", None)]);
        {
            let rows = console.rows();
            assert_eq!(rows[0].tracking_value, "");
            assert!(!rows[0].show_submit);
        }

        // Seller types a tracking number: dirty, submit visible.
        let id = OrderId::from("A1");
        console.set_draft(&id, "TRK123");
        {
            let rows = console.rows();
            assert_eq!(rows[0].tracking_value, "TRK123");
            assert!(rows[0].show_submit);
        }

        // Submission succeeds with "Updated".
        let ticket = console.begin_submit(&id).unwrap();
        assert_eq!(ticket.text(), "TRK123");
        console.finish_submit(ticket, Ok(confirmation("Updated")));

        let rows = console.rows();
        assert_eq!(rows[0].tracking_value, "TRK123");
        assert!(!rows[0].show_submit);
        assert!(!console.is_dirty(&id));
        let notes = console.take_notifications();
        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert_eq!(notes[0].message, "Updated");
    }

    #[test]
    fn test_failed_submit_preserves_draft_for_retry() {
        let mut console = ready_console(vec![order("A1", None)]);
        let id = OrderId::from("A1");
        console.set_draft(&id, "TRK123");

        let ticket = console.begin_submit(&id).unwrap();
        console.finish_submit(ticket, Err(server_error()));

        assert!(console.is_dirty(&id));
        let rows = console.rows();
        assert_eq!(rows[0].tracking_value, "TRK123");
        assert!(rows[0].show_submit);
        let notes = console.take_notifications();
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, SUBMIT_FAILED_MESSAGE);
        // Manual retry is possible.
        assert!(console.begin_submit(&id).is_some());
    }

    #[test]
    fn test_submit_affordance_hidden_while_in_flight() {
        let mut console = ready_console(vec![order("A1", None)]);
        let id = OrderId::from("A1");
        console.set_draft(&id, "TRK123");
        let _ticket = console.begin_submit(&id).unwrap();
        let rows = console.rows();
        assert!(!rows[0].show_submit);
        assert!(rows[0].submitting);
        assert!(console.begin_submit(&id).is_none());
    }

    #[test]
    fn test_concurrent_submits_for_different_orders() {
        let mut console = ready_console(vec![order("A1", None), order("B2", None)]);
        let a = OrderId::from("A1");
        let b = OrderId::from("B2");
        console.set_draft(&a, "AAA");
        console.set_draft(&b, "BBB");

        let ta = console.begin_submit(&a).unwrap();
        let tb = console.begin_submit(&b).unwrap();
        console.finish_submit(tb, Ok(confirmation("Updated B")));
        console.finish_submit(ta, Err(server_error()));

        assert!(!console.is_dirty(&b));
        assert!(console.is_dirty(&a));
        let messages: Vec<_> = console
            .take_notifications()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, ["Updated B", SUBMIT_FAILED_MESSAGE]);
    }

    #[test]
    fn test_stale_fetch_after_reset_is_discarded() {
        let mut console = OrderConsole::new("u");
        let ticket = console.begin_load().unwrap();
        console.reset();
        console.finish_load(ticket, Ok(vec![order("A1", None)]));
        assert_eq!(console.phase(), LoadPhase::Idle);
        assert!(console.orders().is_empty());
    }

    #[test]
    fn test_stale_submit_after_reset_is_discarded() {
        let mut console = ready_console(vec![order("A1", None)]);
        let id = OrderId::from("A1");
        console.set_draft(&id, "TRK123");
        let ticket = console.begin_submit(&id).unwrap();
        console.reset();
        console.finish_submit(ticket, Ok(confirmation("Updated")));
        assert!(console.take_notifications().is_empty());
        assert!(!console.is_dirty(&id));
    }

    #[test]
    fn test_reset_allows_reactivation() {
        let mut console = ready_console(vec![order("A1", None)]);
        console.reset();
        assert_eq!(console.phase(), LoadPhase::Idle);
        let ticket = console.begin_load().unwrap();
        console.finish_load(ticket, Ok(vec![order("B2", None)]));
        assert_eq!(console.orders().len(), 1);
        assert_eq!(console.orders()[0].id.as_str(), "B2");
    }

    #[test]
    fn test_display_prefers_stored_tracking_until_edited() {
        let console = ready_console(vec![order("A1", Some("TRK999"))]);
        let rows = console.rows();
        assert_eq!(rows[0].tracking_value, "TRK999");
        assert!(!rows[0].show_submit);
    }

    #[test]
    fn test_unset_sentinel_never_reaches_rows() {
        // Conversion normalizes the placeholder before the console sees it;
        // a raw order built with it would still display via the draft store.
        assert_eq!(UNSET_TRACKING, "xxxxxxx");
        let console = ready_console(vec![order("A1", None)]);
        assert_eq!(console.rows()[0].tracking_value, "");
    }
}
