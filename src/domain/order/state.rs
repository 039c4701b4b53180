//! Tracking draft state containers — app-owned, SDK-provided update logic.

use super::Order;
use crate::shared::OrderId;
use std::collections::HashMap;

/// Per-order draft lifecycle for a tracking-number edit.
///
/// One state machine instead of parallel draft/dirty maps: dirtiness is
/// derived from the variant, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingDraft {
    /// No local edit; the field shows the order's committed tracking number.
    Clean,
    /// The seller has typed `text`; submittable when non-empty.
    Editing(String),
    /// `text` is in flight; the submit affordance is hidden until resolution.
    Submitting(String),
    /// The server accepted `text`; the field keeps showing it so a stale
    /// order record doesn't revert the edit.
    Committed(String),
}

impl TrackingDraft {
    /// Dirty ⇔ a non-empty draft exists that has not been submitted.
    pub fn is_dirty(&self) -> bool {
        matches!(self, TrackingDraft::Editing(text) if !text.is_empty())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, TrackingDraft::Submitting(_))
    }
}

/// In-progress tracking-number edits keyed by order id.
///
/// The app owns instances of this type and calls SDK-provided update methods.
/// Pure and synchronous; entries are created lazily on first edit and live
/// until [`clear`](TrackingDrafts::clear).
#[derive(Debug, Clone, Default)]
pub struct TrackingDrafts {
    drafts: HashMap<OrderId, TrackingDraft>,
}

impl TrackingDrafts {
    pub fn new() -> Self {
        Self {
            drafts: HashMap::new(),
        }
    }

    /// Current draft state for an order; `Clean` for unseen ids.
    pub fn state(&self, order_id: &OrderId) -> &TrackingDraft {
        self.drafts.get(order_id).unwrap_or(&TrackingDraft::Clean)
    }

    /// Store `text` verbatim as the draft for an order.
    ///
    /// No format validation — any non-empty string is submittable. Typing
    /// over an in-flight or committed entry returns it to `Editing`, and the
    /// newer text wins over whatever the outstanding request resolves to.
    pub fn set_draft(&mut self, order_id: &OrderId, text: impl Into<String>) {
        self.drafts
            .insert(order_id.clone(), TrackingDraft::Editing(text.into()));
    }

    /// The value the tracking field shows for an order: the draft if one
    /// exists, else the order's committed number, else empty.
    pub fn display_value<'a>(&'a self, order: &'a Order) -> &'a str {
        match self.state(&order.id) {
            TrackingDraft::Editing(text)
            | TrackingDraft::Submitting(text)
            | TrackingDraft::Committed(text) => text,
            TrackingDraft::Clean => order.tracking_display(),
        }
    }

    pub fn is_dirty(&self, order_id: &OrderId) -> bool {
        self.state(order_id).is_dirty()
    }

    pub fn is_submitting(&self, order_id: &OrderId) -> bool {
        self.state(order_id).is_submitting()
    }

    /// Whether the submit affordance is shown: dirty and not already in
    /// flight for this order.
    pub fn can_submit(&self, order_id: &OrderId) -> bool {
        self.is_dirty(order_id)
    }

    /// Move a submittable draft into `Submitting`, returning the text to
    /// send. `None` when there is nothing to submit — empty draft, no draft,
    /// or a submission already outstanding for this order.
    pub fn begin_submit(&mut self, order_id: &OrderId) -> Option<String> {
        match self.drafts.get(order_id) {
            Some(TrackingDraft::Editing(text)) if !text.is_empty() => {
                let text = text.clone();
                self.drafts
                    .insert(order_id.clone(), TrackingDraft::Submitting(text.clone()));
                Some(text)
            }
            _ => None,
        }
    }

    /// Record a successful submission: the in-flight text becomes the
    /// committed display value and the order is no longer dirty.
    ///
    /// If the seller resumed typing while the request was outstanding, the
    /// newer draft is left untouched.
    pub fn commit(&mut self, order_id: &OrderId) {
        if let Some(entry) = self.drafts.get_mut(order_id) {
            if let TrackingDraft::Submitting(text) = entry {
                let text = std::mem::take(text);
                *entry = TrackingDraft::Committed(text);
            }
        }
    }

    /// Record a failed submission: the draft and dirty flag return to their
    /// pre-submit state so the seller can retry manually.
    pub fn rollback(&mut self, order_id: &OrderId) {
        if let Some(entry) = self.drafts.get_mut(order_id) {
            if let TrackingDraft::Submitting(text) = entry {
                let text = std::mem::take(text);
                *entry = TrackingDraft::Editing(text);
            }
        }
    }

    /// Drop every draft (view teardown).
    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use rust_decimal::Decimal;

    fn order(id: &str, tracking: Option<&str>) -> Order {
        Order {
            id: OrderId::from(id),
            products: vec![],
            total_price: Decimal::from(50000),
            shipping_by: "JNE".to_string(),
            status: OrderStatus::Packing,
            tracking: tracking.map(|t| t.to_string()),
            buyer: None,
            created_at: None,
        }
    }

    #[test]
    fn test_unseen_order_is_clean() {
        let drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        assert_eq!(drafts.state(&id), &TrackingDraft::Clean);
        assert!(!drafts.is_dirty(&id));
        assert!(!drafts.can_submit(&id));
    }

    #[test]
    fn test_display_falls_back_to_committed_tracking() {
        let drafts = TrackingDrafts::new();
        assert_eq!(drafts.display_value(&order("a1", Some("TRK999"))), "TRK999");
        assert_eq!(drafts.display_value(&order("a2", None)), "");
    }

    #[test]
    fn test_set_draft_marks_dirty() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        assert!(drafts.is_dirty(&id));
        assert!(drafts.can_submit(&id));
        assert_eq!(drafts.display_value(&order("a1", None)), "TRK123");
    }

    #[test]
    fn test_empty_draft_is_not_dirty() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        drafts.set_draft(&id, "");
        assert!(!drafts.is_dirty(&id));
        assert!(!drafts.can_submit(&id));
        assert_eq!(drafts.begin_submit(&id), None);
    }

    #[test]
    fn test_begin_submit_hides_affordance() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        assert_eq!(drafts.begin_submit(&id), Some("TRK123".to_string()));
        assert!(drafts.is_submitting(&id));
        assert!(!drafts.can_submit(&id));
        // A second submit for the same order is refused while in flight.
        assert_eq!(drafts.begin_submit(&id), None);
    }

    #[test]
    fn test_commit_keeps_submitted_text_and_clears_dirty() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        drafts.begin_submit(&id).unwrap();
        drafts.commit(&id);
        assert!(!drafts.is_dirty(&id));
        // Field keeps the submitted text even though the order record still
        // holds the stale committed value.
        assert_eq!(drafts.display_value(&order("a1", Some("OLD"))), "TRK123");
    }

    #[test]
    fn test_rollback_restores_draft_for_retry() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        drafts.begin_submit(&id).unwrap();
        drafts.rollback(&id);
        assert_eq!(drafts.state(&id), &TrackingDraft::Editing("TRK123".to_string()));
        assert!(drafts.is_dirty(&id));
        assert_eq!(drafts.begin_submit(&id), Some("TRK123".to_string()));
    }

    #[test]
    fn test_typing_during_flight_wins_over_resolution() {
        let mut drafts = TrackingDrafts::new();
        let id = OrderId::from("a1");
        drafts.set_draft(&id, "TRK123");
        drafts.begin_submit(&id).unwrap();
        drafts.set_draft(&id, "TRK124");
        drafts.commit(&id);
        assert_eq!(drafts.state(&id), &TrackingDraft::Editing("TRK124".to_string()));
        assert!(drafts.is_dirty(&id));
    }

    #[test]
    fn test_submissions_for_different_orders_are_independent() {
        let mut drafts = TrackingDrafts::new();
        let a = OrderId::from("a1");
        let b = OrderId::from("b2");
        drafts.set_draft(&a, "AAA");
        drafts.set_draft(&b, "BBB");
        drafts.begin_submit(&a).unwrap();
        assert!(drafts.can_submit(&b));
        drafts.begin_submit(&b).unwrap();
        drafts.commit(&a);
        drafts.rollback(&b);
        assert!(!drafts.is_dirty(&a));
        assert_eq!(drafts.state(&b), &TrackingDraft::Editing("BBB".to_string()));
    }

    #[test]
    fn test_clear_drops_all_entries() {
        let mut drafts = TrackingDrafts::new();
        drafts.set_draft(&OrderId::from("a1"), "TRK123");
        drafts.clear();
        assert!(drafts.is_empty());
        assert!(!drafts.is_dirty(&OrderId::from("a1")));
    }
}
